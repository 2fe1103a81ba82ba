//! End-of-countdown notifications.
//!
//! An expired countdown raises an [`Alert`] that the UI draws as an overlay
//! until dismissed, and rings a [`Chime`]. Neither blocks the event loop.

use std::io::{self, Write};

/// Notification waiting to be acknowledged by the user.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    TimeUp,
}

/// Audible cue played when an alert is raised.
///
pub trait Chime: Send {
    fn play(&self) -> io::Result<()>;
}

/// Rings the terminal bell.
///
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// Chime that makes no sound.
///
pub struct Silent;

impl Chime for Silent {
    fn play(&self) -> io::Result<()> {
        Ok(())
    }
}
