// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::bc3::decode_channel_block;
use super::Block;

/// Two interpolated channels into red and green.
#[inline]
pub fn decode_bc5_block(data: &[u8], signed: bool, outbuf: &mut Block) {
    let red = decode_channel_block(data, signed);
    let green = decode_channel_block(&data[8..], signed);

    for (i, texel) in outbuf.iter_mut().enumerate() {
        *texel = [red[i], green[i], 0, 0xff];
    }
}
