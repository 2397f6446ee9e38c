//! The interactive tracking session.
//!
//! [`tracker::Tracker`] owns the recording state, pose and event log; everything that needs
//! a real UI or video pipeline is reached through [`host::Host`].

/// Host services the session depends on.
pub mod host;
/// Tunable parameter table and current values.
pub mod settings;
/// Recording state machine, input handling and per-frame drawing.
pub mod tracker;
