//! The pipeline module composes the reversible transform stages over one
//! block of bytes and owns the wire format.
//!
//! Preprocessing happens in the following steps:
//! - Burrows-Wheeler Transform: sort the circular rotations of the block to
//!   cluster repeated contexts, keeping the row of the unrotated block.
//! - Move To Front transform: turn the clustered bytes into mostly small
//!   rank values.
//!
//! Reversal is the exact inverse, stage by stage:
//! - MTF transform: convert ranks back into the bytes they stood for.
//! - BWT reversal: restore the original block from the transform column.
//!
//! The wire format per block is a four byte big-endian row number followed by
//! the Move-To-Front coded transform column. Block length is implicit: the
//! record ends where the stream does. An empty input produces an empty
//! output, with no row header.
//!
pub mod decode;
pub mod encode;
