// Zoo Excursion - Core Library
// Exposes all modules for use in the CLI and tests

pub mod entities;
pub mod catalog;
pub mod console;
pub mod session;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use entities::{Animal, Enclosure, Gender};
pub use catalog::{AnimalTemplate, Catalog, CatalogConfig, EnclosureTemplate};
pub use console::{Console, Key, ScriptedConsole, TerminalConsole};
pub use session::{parse_selection, Session, SessionState};
pub use config::AppConfig;
pub use error::{CatalogError, SessionError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
