// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::bc1::decode_color_block;
use super::Block;

/// Explicit 4-bit alpha followed by an opaque colour block.
#[inline]
pub fn decode_bc2_block(data: &[u8], outbuf: &mut Block) {
    decode_color_block(&data[8..], outbuf, true);

    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);
    let alpha = u64::from_le_bytes(raw);

    for (i, texel) in outbuf.iter_mut().enumerate() {
        texel[3] = ((alpha >> (i * 4)) & 0xf) as u8 * 17;
    }
}
