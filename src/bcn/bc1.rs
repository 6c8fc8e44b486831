// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::color::rgb565;
use super::Block;

/// Decodes the 8 byte colour half shared by BC1, BC2 and BC3.
///
/// When `only_opaque` is set the block always uses the four colour palette, otherwise
/// `color0 <= color1` selects three colours plus transparent black.
pub fn decode_color_block(data: &[u8], outbuf: &mut Block, only_opaque: bool) {
    let color0 = u16::from_le_bytes([data[0], data[1]]);
    let color1 = u16::from_le_bytes([data[2], data[3]]);
    let [r0, g0, b0] = rgb565(color0).map(u16::from);
    let [r1, g1, b1] = rgb565(color1).map(u16::from);

    let mut palette = [
        [r0 as u8, g0 as u8, b0 as u8, 0xff],
        [r1 as u8, g1 as u8, b1 as u8, 0xff],
        [0; 4],
        [0; 4],
    ];

    if color0 > color1 || only_opaque {
        palette[2] = [
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            0xff,
        ];
        palette[3] = [
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            0xff,
        ];
    } else {
        palette[2] = [
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            0xff,
        ];
    }

    let indices = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    for (i, texel) in outbuf.iter_mut().enumerate() {
        *texel = palette[((indices >> (i * 2)) & 0x3) as usize];
    }
}

#[inline]
pub fn decode_bc1_block(data: &[u8], outbuf: &mut Block) {
    decode_color_block(data, outbuf, false);
}
