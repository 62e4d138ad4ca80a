//! Core type aliases used throughout the crate.

/// Player identifier assigned at registration (1-based in practice, but the
/// engine treats it as opaque).
pub type PlayerId = u8;
