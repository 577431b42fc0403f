//! The transform module holds the reversible stages of the preprocessor.
//!
//! Each stage operates on one in-memory block of bytes and owns whatever
//! scratch space it needs for the length of the call. Nothing carries over
//! between calls, so blocks can be processed back to back (or by independent
//! drivers) without interference.
//!
//! - suffix_sort: order the circular rotations of a block.
//! - bwt: the Burrows-Wheeler transform and its inverse.
//! - mtf: the Move-To-Front transform and its inverse.
//!
pub mod bwt;
pub mod mtf;
pub mod suffix_sort;
