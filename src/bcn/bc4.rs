// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::bc3::decode_channel_block;
use super::Block;

/// A single interpolated channel, shown as grey.
#[inline]
pub fn decode_bc4_block(data: &[u8], signed: bool, outbuf: &mut Block) {
    let values = decode_channel_block(data, signed);
    for (texel, value) in outbuf.iter_mut().zip(values) {
        *texel = [value, value, value, 0xff];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_output() {
        let data = [0x40, 0x20, 0, 0, 0, 0, 0, 0];
        let mut block = [[0u8; 4]; 16];
        decode_bc4_block(&data, false, &mut block);

        assert!(block.iter().all(|texel| *texel == [0x40, 0x40, 0x40, 0xff]));
    }

    #[test]
    fn signed_zero_is_mid_grey() {
        let data = [0x00, 0x00, 0, 0, 0, 0, 0, 0];
        let mut block = [[0u8; 4]; 16];
        decode_bc4_block(&data, true, &mut block);

        assert_eq!(block[5], [128, 128, 128, 0xff]);
    }
}
