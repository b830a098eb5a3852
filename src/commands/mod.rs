pub mod check;
pub mod config;

pub use check::CheckCommand;
pub use config::{ConfigCommand, ConfigFormat};
