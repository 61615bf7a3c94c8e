//! Discord bot integration.
//!
//! Event handlers turn gateway events into experience grants and commands; replies
//! are plain text built in [`reply`].

pub mod command;
pub mod handler;
pub mod reply;
pub mod start;
