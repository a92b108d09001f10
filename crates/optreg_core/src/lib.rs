//! Typed, name-addressable options registry for viewer configuration.

/// Schema, value codec, options store, and name resolution.
pub mod options;
