//! Error types

mod config;
mod link;
mod menu;

pub use config::*;
pub use link::*;
pub use menu::*;
