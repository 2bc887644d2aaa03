//! CLI command implementations.

mod config;
mod doctor;
mod interactive;
mod resolve;
mod summarize;

pub use config::run_config;
pub use doctor::run_doctor;
pub use interactive::run_interactive;
pub use resolve::run_resolve;
pub use summarize::run_summarize;
