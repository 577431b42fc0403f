//! The Move-To-Front transform and its inverse.
//!
//! Each byte is replaced by its rank in a symbol order list that moves the
//! byte to the front afterwards. Recently seen bytes therefore encode as
//! small values, which is exactly what the clustered output of the
//! Burrows-Wheeler stage wants. One output byte per input byte, both ways.
//!

/// The symbol order list at the start of every pass: all 256 byte values in
/// ascending order.
fn radix_list() -> [u8; 256] {
    let mut list = [0_u8; 256];
    for (s, slot) in list.iter_mut().enumerate() {
        *slot = s as u8;
    }
    list
}

/// Encode data with the Move To Front transform.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut list = radix_list();
    let mut out = Vec::with_capacity(data.len());

    for &byte in data {
        // The list always holds all 256 values, so this scan always stops.
        let mut idx = 0;
        while list[idx] != byte {
            idx += 1;
        }
        out.push(idx as u8);

        // Shift everything in front of the byte back one slot and move the
        // byte itself to the front.
        list.copy_within(0..idx, 1);
        list[0] = byte;
    }
    out
}

/// Decode Move To Front ranks back into bytes, replaying the same list
/// mutation the encoder performed.
pub fn mtf_decode(data: &[u8]) -> Vec<u8> {
    let mut list = radix_list();
    let mut out = Vec::with_capacity(data.len());

    for &rank in data {
        let idx = rank as usize;
        let byte = list[idx];
        out.push(byte);

        list.copy_within(0..idx, 1);
        list[0] = byte;
    }
    out
}
