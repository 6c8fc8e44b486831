// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::bc1::decode_color_block;
use super::Block;

/// Builds the eight entry palette of an interpolated single-channel block.
fn unsigned_palette(a0: u8, a1: u8) -> [u8; 8] {
    let (a0, a1) = (a0 as u32, a1 as u32);
    let mut palette = [a0 as u8, a1 as u8, 0, 0, 0, 0, 0, 0xff];

    if a0 > a1 {
        for i in 1..7 {
            palette[i as usize + 1] = (((7 - i) * a0 + i * a1) / 7) as u8;
        }
    } else {
        for i in 1..5 {
            palette[i as usize + 1] = (((5 - i) * a0 + i * a1) / 5) as u8;
        }
    }

    palette
}

/// Same as [unsigned_palette] for signed endpoints. The result is biased by 128 so that -1.0 maps
/// close to 0 and 1.0 to 255.
fn signed_palette(a0: u8, a1: u8) -> [u8; 8] {
    let a0 = (a0 as i8).max(-127) as i32;
    let a1 = (a1 as i8).max(-127) as i32;
    let mut palette = [a0, a1, 0, 0, 0, 0, -127, 127];

    if a0 > a1 {
        for i in 1..7 {
            palette[i as usize + 1] = ((7 - i) * a0 + i * a1) / 7;
        }
    } else {
        for i in 1..5 {
            palette[i as usize + 1] = ((5 - i) * a0 + i * a1) / 5;
        }
    }

    palette.map(|value| (value + 128) as u8)
}

/// Decodes an 8 byte interpolated single-channel block into its 16 values.
pub fn decode_channel_block(data: &[u8], signed: bool) -> [u8; 16] {
    let palette = if signed {
        signed_palette(data[0], data[1])
    } else {
        unsigned_palette(data[0], data[1])
    };

    let mut raw = [0u8; 8];
    raw[..6].copy_from_slice(&data[2..8]);
    let indices = u64::from_le_bytes(raw);

    let mut values = [0u8; 16];
    for (i, value) in values.iter_mut().enumerate() {
        *value = palette[((indices >> (i * 3)) & 0x7) as usize];
    }
    values
}

/// Decodes an interpolated alpha block into the alpha of every texel.
#[inline]
pub fn decode_bc3_alpha(data: &[u8], outbuf: &mut Block) {
    let values = decode_channel_block(data, false);
    for (texel, value) in outbuf.iter_mut().zip(values) {
        texel[3] = value;
    }
}

/// Interpolated alpha followed by an opaque colour block.
#[inline]
pub fn decode_bc3_block(data: &[u8], outbuf: &mut Block) {
    decode_color_block(&data[8..], outbuf, true);
    decode_bc3_alpha(data, outbuf);
}
