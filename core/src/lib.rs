//! Game-state engine for a single-player mine-detection puzzle.
//!
//! [`GameSession`] is the entry point for a presentation layer: it owns a [`Board`], runs the
//! not-started → in-progress → won/lost state machine, accumulates elapsed time from
//! [`GameSession::tick`] and notifies subscribers with [`GameEvent`]s.

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use event::{GameEvent, GameObserver, SubscriptionId};
pub use generator::*;
pub use layout::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod event;
mod generator;
mod layout;
mod session;
mod types;
