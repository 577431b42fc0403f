//! A block-sorting compression preprocessor.
//!
//! Rearranges a block of bytes with the Burrows-Wheeler transform and then
//! the Move-To-Front coder so that a later entropy stage sees long runs of
//! small values. Neither stage compresses anything by itself; both are
//! exactly reversible, and decoding restores the original bytes bit for bit.
//!
//! Basic usage to prepare a file:
//!
//! `$> bwprep -z test.txt`
//!
//! This writes test.txt.bwp and removes the original file.
//! `bwprep -d test.txt.bwp` restores it.
//!
pub mod bytestream;
pub mod pipeline;
pub mod tools;
pub mod transform;

#[cfg(test)]
mod tests;
