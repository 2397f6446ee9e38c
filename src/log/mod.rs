//! Pose log records and the buffered cache file they are written to.

/// Buffered append-only cache file.
pub mod event_log;
/// One `frame,x,y,w,h,angle` line.
pub mod record;
