//! The bytestream module provides the sequential byte source and sink used by
//! the transform pipeline.
//!
//! The wire format of this preprocessor is byte aligned (a four byte row
//! header followed by whole bytes of transform output), so the stream layer
//! works in bytes rather than bits.
//!
//! - bytereader: buffered reads from any I/O source supporting the read() call.
//! - bytewriter: buffered writes with a guaranteed flush before the stream ends.
//!
pub mod bytereader;
pub mod bytewriter;
