//! Database models and their client-safe projections.

mod task;
#[cfg(feature = "server")]
mod user;

pub use task::TaskInfo;
#[cfg(feature = "server")]
pub use task::Task;
#[cfg(feature = "server")]
pub use user::User;
