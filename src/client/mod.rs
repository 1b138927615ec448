//! Client Module
//!
//! Client-side typing logic that any UI embedding can drive: the trigger
//! controller that decides *when* to request suggestions, and the local
//! emoji overlay shown *until* the server response lands.
//!
//! Nothing in this module performs I/O; the embedding owns the HTTP call
//! and the clock.

/// Debounce/immediate trigger state machine
pub mod trigger;

/// Zero-latency emoji overlay and response merging
pub mod overlay;

pub use trigger::{TriggerController, DEFAULT_PAUSE};
