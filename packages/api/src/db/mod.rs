//! # Database module — PostgreSQL connection pool
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens a pool with up
//! to 5 connections, and caches it for all subsequent callers. Everything
//! here is compiled only with the `server` feature, so client builds never
//! pull in SQLx.

mod pool;

pub use pool::get_pool;
