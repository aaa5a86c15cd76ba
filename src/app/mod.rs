//! Application state and command handling

pub mod command;
pub mod state;

pub use state::App;
