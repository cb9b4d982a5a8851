pub mod loader;

pub use loader::{LoadedLog, load_log, session_name};
