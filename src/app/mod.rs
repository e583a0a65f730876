pub mod calc;
pub mod config;
pub mod format;
pub mod keep_alive;
pub mod logger;
pub mod schedule;

pub use config::Config;
pub use schedule::Scheduler;
