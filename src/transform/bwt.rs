//! The Burrows-Wheeler transform and its inverse.
//!
//! Encoding sorts the circular rotations of the block and keeps two things:
//! the row where the unrotated block ended up, and the byte that circularly
//! precedes each sorted rotation. That column clusters repeated contexts, and
//! together with the row number it determines the block exactly.
//!

use crate::tools::freq_count::freqs;
use crate::transform::suffix_sort::sort_rotations;
use log::error;
use std::io::{Error, ErrorKind};

/// Transform one block. Returns the row of the unrotated block in sorted
/// rotation order, plus the column of predecessor bytes. An empty block
/// produces `(0, vec![])`.
pub fn bwt_encode(block: &[u8]) -> (u32, Vec<u8>) {
    let n = block.len();
    let order = sort_rotations(block);

    let mut first = 0_u32;
    let mut bwt = vec![0_u8; n];
    for (row, &start) in order.iter().enumerate() {
        if start == 0 {
            first = row as u32;
        }
        // The byte circularly preceding the first byte of this rotation.
        bwt[row] = block[(start as usize + n - 1) % n];
    }
    (first, bwt)
}

/// Invert the transform. `first` must name a row of `t`; a malformed pair is
/// rejected before any reconstruction begins. An empty `t` with row 0 decodes
/// to the empty block.
pub fn bwt_decode(first: u32, t: &[u8]) -> Result<Vec<u8>, Error> {
    let n = t.len();
    if n == 0 && first == 0 {
        return Ok(Vec::new());
    }
    if first as usize >= n {
        error!("Row {} is out of range for a {} byte transform.", first, n);
        return Err(Error::new(ErrorKind::InvalidInput, "invalid transform row"));
    }

    // Convert the frequency count into each byte value's starting offset
    // among the sorted rotations.
    let freq = freqs(t);
    let mut count = [0_u32; 256];
    for s in 0..255 {
        count[s + 1] = count[s] + freq[s];
    }

    // Stable scatter pass: sorted row i left-rotates into row next[i].
    // Rotations sharing a leading byte keep their relative order, which is
    // what makes the walk below visit every row exactly once.
    let mut next = vec![0_u32; n];
    for (i, &s) in t.iter().enumerate() {
        next[count[s as usize] as usize] = i as u32;
        count[s as usize] += 1;
    }

    // Walk the inverse permutation from the original block's row, emitting
    // the block in forward order.
    let mut block = vec![0_u8; n];
    let mut row = next[first as usize] as usize;
    for out in block.iter_mut() {
        *out = t[row];
        row = next[row] as usize;
    }
    Ok(block)
}
