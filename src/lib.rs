pub mod cli;
pub mod config;
pub mod console;
pub mod content;
pub mod tui;

pub use cli::{Cli, Commands, ConfigAction, ContentAction};
pub use config::AppConfig;
pub use console::{Console, VerbosityLevel, console, init_console};
pub use content::PortfolioContent;
