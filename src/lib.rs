pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod loader;
pub mod pressing;
pub mod scorer;
pub mod timeline;
pub mod transitions;
// cmd and reports are binary modules, declared in main.rs.

pub use error::{MmResult, MomentumError};
