//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: weather lookups run on the networking thread
//! - Terminal events: key presses and the render tick

pub mod network;
pub mod terminal;
