//! The configuration-loading side: parsing sources into a map and reading
//! effective values back out

pub mod interner;
pub mod parser;
pub mod store;

pub use interner::KeyInterner;
pub use parser::{parse_session, parse_xresources, ParsedEntry};
pub use store::{LoadSummary, Settings, SettingsLoader};
