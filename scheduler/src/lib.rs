pub mod config;
pub mod error;
pub mod loader;
pub mod scheduler;

pub use config::Config;
pub use error::{LoadError, MetricsError, ProcessError};
pub use scheduler::{Process, ProcessTable, Schedule, Scheduler};
