//! Rectangle outline generation and stamping into frame buffers.

/// Point stamping over a strided pixel buffer.
pub mod composite;
/// Local-space outline bands.
pub mod outline;
