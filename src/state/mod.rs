//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that composes the dashboard panels
//! - Per-panel state (clock, weather, countdown)
//! - Tick scheduling and navigation types
//! - State error handling

pub mod clock;
pub mod countdown;
mod error;
mod navigation;
pub mod ticker;
pub mod weather;

pub use error::StateError;
pub use navigation::{Mode, Panel};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
