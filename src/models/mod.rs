//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod checkin_rule;
pub mod event;

pub use checkin_rule::*;
pub use event::*;
