// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use half::f16;

use super::bitreader::BitReader;
use super::color::interpolate;
use super::consts::{ANCHORS_2, PARTITIONS_2, WEIGHTS_3, WEIGHTS_4};
use super::Block;
use crate::pixel::float_to_unorm8;

/// Endpoint precision per mode: base endpoint, then red, green and blue deltas.
const ENDPOINT_BITS: [[i32; 14]; 4] = [
    [10, 7, 11, 11, 11, 9, 8, 8, 8, 6, 10, 11, 12, 16],
    [5, 6, 5, 4, 4, 5, 6, 5, 5, 6, 10, 9, 8, 4],
    [5, 6, 4, 5, 4, 5, 5, 6, 5, 6, 10, 9, 8, 4],
    [5, 6, 4, 4, 5, 5, 5, 5, 6, 6, 10, 9, 8, 4],
];

#[inline]
fn extend_sign(value: i32, bits: i32) -> i32 {
    (value << (32 - bits)) >> (32 - bits)
}

#[inline]
fn transform_inverse(value: i32, base: i32, bits: i32, signed: bool) -> i32 {
    let value = (value + base) & ((1 << bits) - 1);
    if signed {
        extend_sign(value, bits)
    } else {
        value
    }
}

fn unquantize(value: i32, bits: i32, signed: bool) -> i32 {
    if !signed {
        if bits >= 15 {
            value
        } else if value == 0 {
            0
        } else if value == (1 << bits) - 1 {
            0xffff
        } else {
            ((value << 16) + 0x8000) >> bits
        }
    } else if bits >= 16 {
        value
    } else {
        let magnitude = value.abs();
        let unquantized = if magnitude == 0 {
            0
        } else if magnitude >= (1 << (bits - 1)) - 1 {
            0x7fff
        } else {
            ((magnitude << 15) + 0x4000) >> (bits - 1)
        };

        if value < 0 {
            -unquantized
        } else {
            unquantized
        }
    }
}

/// Scales an interpolated value back down into the bits of a half float.
fn finish_unquantize(value: i32, signed: bool) -> u16 {
    if signed {
        let value = if value < 0 {
            -((-value * 31) >> 5)
        } else {
            (value * 31) >> 5
        };

        if value < 0 {
            0x8000 | (-value) as u16
        } else {
            value as u16
        }
    } else {
        ((value * 31) >> 6) as u16
    }
}

/// Endpoints of up to two subsets, indexed as `[endpoint][channel]`.
type Endpoints = [[i32; 3]; 4];

/// Reads the mode-specific endpoint bit soup. Returns the normalized mode number (0-13) and the
/// partition, or _None_ for reserved modes.
fn read_endpoints(bits: &mut BitReader, e: &mut Endpoints) -> Option<(usize, usize)> {
    const R: usize = 0;
    const G: usize = 1;
    const B: usize = 2;

    let mut mode = bits.read(2);
    if mode > 1 {
        mode |= bits.read(3) << 2;
    }

    // (endpoint, channel, bit count, shift) in stream order
    macro_rules! put {
        ($endpoint:expr, $channel:expr, $count:expr, $shift:expr) => {
            e[$endpoint][$channel] |= (bits.read($count) << $shift) as i32
        };
    }

    let mode = match mode {
        0 => {
            put!(2, G, 1, 4);
            put!(2, B, 1, 4);
            put!(3, B, 1, 4);
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            put!(1, R, 5, 0);
            put!(3, G, 1, 4);
            put!(2, G, 4, 0);
            put!(1, G, 5, 0);
            put!(3, B, 1, 0);
            put!(3, G, 4, 0);
            put!(1, B, 5, 0);
            put!(3, B, 1, 1);
            put!(2, B, 4, 0);
            put!(2, R, 5, 0);
            put!(3, B, 1, 2);
            put!(3, R, 5, 0);
            put!(3, B, 1, 3);
            0
        }
        1 => {
            put!(2, G, 1, 5);
            put!(3, G, 1, 4);
            put!(3, G, 1, 5);
            put!(0, R, 7, 0);
            put!(3, B, 1, 0);
            put!(3, B, 1, 1);
            put!(2, B, 1, 4);
            put!(0, G, 7, 0);
            put!(2, B, 1, 5);
            put!(3, B, 1, 2);
            put!(2, G, 1, 4);
            put!(0, B, 7, 0);
            put!(3, B, 1, 3);
            put!(3, B, 1, 5);
            put!(3, B, 1, 4);
            put!(1, R, 6, 0);
            put!(2, G, 4, 0);
            put!(1, G, 6, 0);
            put!(3, G, 4, 0);
            put!(1, B, 6, 0);
            put!(2, B, 4, 0);
            put!(2, R, 6, 0);
            put!(3, R, 6, 0);
            1
        }
        2 => {
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            put!(1, R, 5, 0);
            put!(0, R, 1, 10);
            put!(2, G, 4, 0);
            put!(1, G, 4, 0);
            put!(0, G, 1, 10);
            put!(3, B, 1, 0);
            put!(3, G, 4, 0);
            put!(1, B, 4, 0);
            put!(0, B, 1, 10);
            put!(3, B, 1, 1);
            put!(2, B, 4, 0);
            put!(2, R, 5, 0);
            put!(3, B, 1, 2);
            put!(3, R, 5, 0);
            put!(3, B, 1, 3);
            2
        }
        6 => {
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            put!(1, R, 4, 0);
            put!(0, R, 1, 10);
            put!(3, G, 1, 4);
            put!(2, G, 4, 0);
            put!(1, G, 5, 0);
            put!(0, G, 1, 10);
            put!(3, G, 4, 0);
            put!(1, B, 4, 0);
            put!(0, B, 1, 10);
            put!(3, B, 1, 1);
            put!(2, B, 4, 0);
            put!(2, R, 4, 0);
            put!(3, B, 1, 0);
            put!(3, B, 1, 2);
            put!(3, R, 4, 0);
            put!(2, G, 1, 4);
            put!(3, B, 1, 3);
            3
        }
        10 => {
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            put!(1, R, 4, 0);
            put!(0, R, 1, 10);
            put!(2, B, 1, 4);
            put!(2, G, 4, 0);
            put!(1, G, 4, 0);
            put!(0, G, 1, 10);
            put!(3, B, 1, 0);
            put!(3, G, 4, 0);
            put!(1, B, 5, 0);
            put!(0, B, 1, 10);
            put!(2, B, 4, 0);
            put!(2, R, 4, 0);
            put!(3, B, 1, 1);
            put!(3, B, 1, 2);
            put!(3, R, 4, 0);
            put!(3, B, 1, 4);
            put!(3, B, 1, 3);
            4
        }
        14 => {
            put!(0, R, 9, 0);
            put!(2, B, 1, 4);
            put!(0, G, 9, 0);
            put!(2, G, 1, 4);
            put!(0, B, 9, 0);
            put!(3, B, 1, 4);
            put!(1, R, 5, 0);
            put!(3, G, 1, 4);
            put!(2, G, 4, 0);
            put!(1, G, 5, 0);
            put!(3, B, 1, 0);
            put!(3, G, 4, 0);
            put!(1, B, 5, 0);
            put!(3, B, 1, 1);
            put!(2, B, 4, 0);
            put!(2, R, 5, 0);
            put!(3, B, 1, 2);
            put!(3, R, 5, 0);
            put!(3, B, 1, 3);
            5
        }
        18 => {
            put!(0, R, 8, 0);
            put!(3, G, 1, 4);
            put!(2, B, 1, 4);
            put!(0, G, 8, 0);
            put!(3, B, 1, 2);
            put!(2, G, 1, 4);
            put!(0, B, 8, 0);
            put!(3, B, 1, 3);
            put!(3, B, 1, 4);
            put!(1, R, 6, 0);
            put!(2, G, 4, 0);
            put!(1, G, 5, 0);
            put!(3, B, 1, 0);
            put!(3, G, 4, 0);
            put!(1, B, 5, 0);
            put!(3, B, 1, 1);
            put!(2, B, 4, 0);
            put!(2, R, 6, 0);
            put!(3, R, 6, 0);
            6
        }
        22 => {
            put!(0, R, 8, 0);
            put!(3, B, 1, 0);
            put!(2, B, 1, 4);
            put!(0, G, 8, 0);
            put!(2, G, 1, 5);
            put!(2, G, 1, 4);
            put!(0, B, 8, 0);
            put!(3, G, 1, 5);
            put!(3, B, 1, 4);
            put!(1, R, 5, 0);
            put!(3, G, 1, 4);
            put!(2, G, 4, 0);
            put!(1, G, 6, 0);
            put!(3, G, 4, 0);
            put!(1, B, 5, 0);
            put!(3, B, 1, 1);
            put!(2, B, 4, 0);
            put!(2, R, 5, 0);
            put!(3, B, 1, 2);
            put!(3, R, 5, 0);
            put!(3, B, 1, 3);
            7
        }
        26 => {
            put!(0, R, 8, 0);
            put!(3, B, 1, 1);
            put!(2, B, 1, 4);
            put!(0, G, 8, 0);
            put!(2, B, 1, 5);
            put!(2, G, 1, 4);
            put!(0, B, 8, 0);
            put!(3, B, 1, 5);
            put!(3, B, 1, 4);
            put!(1, R, 5, 0);
            put!(3, G, 1, 4);
            put!(2, G, 4, 0);
            put!(1, G, 5, 0);
            put!(3, B, 1, 0);
            put!(3, G, 4, 0);
            put!(1, B, 6, 0);
            put!(2, B, 4, 0);
            put!(2, R, 5, 0);
            put!(3, B, 1, 2);
            put!(3, R, 5, 0);
            put!(3, B, 1, 3);
            8
        }
        30 => {
            put!(0, R, 6, 0);
            put!(3, G, 1, 4);
            put!(3, B, 1, 0);
            put!(3, B, 1, 1);
            put!(2, B, 1, 4);
            put!(0, G, 6, 0);
            put!(2, G, 1, 5);
            put!(2, B, 1, 5);
            put!(3, B, 1, 2);
            put!(2, G, 1, 4);
            put!(0, B, 6, 0);
            put!(3, G, 1, 5);
            put!(3, B, 1, 3);
            put!(3, B, 1, 5);
            put!(3, B, 1, 4);
            put!(1, R, 6, 0);
            put!(2, G, 4, 0);
            put!(1, G, 6, 0);
            put!(3, G, 4, 0);
            put!(1, B, 6, 0);
            put!(2, B, 4, 0);
            put!(2, R, 6, 0);
            put!(3, R, 6, 0);
            9
        }
        3 => {
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            put!(1, R, 10, 0);
            put!(1, G, 10, 0);
            put!(1, B, 10, 0);
            10
        }
        7 => {
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            put!(1, R, 9, 0);
            put!(0, R, 1, 10);
            put!(1, G, 9, 0);
            put!(0, G, 1, 10);
            put!(1, B, 9, 0);
            put!(0, B, 1, 10);
            11
        }
        11 | 15 => {
            // the high bits of the base endpoint are stored reversed
            let (delta_bits, high_bits) = if mode == 11 { (8, 2) } else { (4, 6) };
            put!(0, R, 10, 0);
            put!(0, G, 10, 0);
            put!(0, B, 10, 0);
            for channel in [R, G, B] {
                put!(1, channel, delta_bits, 0);
                e[0][channel] |= (bits.read_reversed(high_bits) << 10) as i32;
            }
            if mode == 11 {
                12
            } else {
                13
            }
        }
        _ => return None,
    };

    let partition = if mode < 10 { bits.read(5) as usize } else { 0 };
    Some((mode, partition))
}

/// Decodes a block into half float bits, three per texel.
fn decode_bc6_half(data: &[u8], signed: bool) -> Option<[[u16; 3]; 16]> {
    let mut bits = BitReader::new(data);
    let mut e: Endpoints = [[0; 3]; 4];
    let (mode, partition) = read_endpoints(&mut bits, &mut e)?;

    let one_subset = mode >= 10;
    let endpoint_count = if one_subset { 2 } else { 4 };
    let base_bits = ENDPOINT_BITS[0][mode];

    if signed {
        for channel in 0..3 {
            e[0][channel] = extend_sign(e[0][channel], base_bits);
        }
    }

    // modes 9 and 10 store absolute endpoints instead of deltas
    let transformed = mode != 9 && mode != 10;

    if transformed || signed {
        for endpoint in e.iter_mut().take(endpoint_count).skip(1) {
            for (channel, value) in endpoint.iter_mut().enumerate() {
                *value = extend_sign(*value, ENDPOINT_BITS[channel + 1][mode]);
            }
        }
    }

    if transformed {
        let base = e[0];
        for endpoint in e.iter_mut().take(endpoint_count).skip(1) {
            for (channel, value) in endpoint.iter_mut().enumerate() {
                *value = transform_inverse(*value, base[channel], base_bits, signed);
            }
        }
    }

    for endpoint in e.iter_mut().take(endpoint_count) {
        for value in endpoint.iter_mut() {
            *value = unquantize(*value, base_bits, signed);
        }
    }

    let (weights, index_bits): (&[u32], u32) = if one_subset {
        (&WEIGHTS_4, 4)
    } else {
        (&WEIGHTS_3, 3)
    };

    let mut texels = [[0u16; 3]; 16];
    for (i, texel) in texels.iter_mut().enumerate() {
        let (subset, is_anchor) = if one_subset {
            (0, i == 0)
        } else {
            (
                ((PARTITIONS_2[partition] >> i) & 1) as usize,
                i == 0 || i == ANCHORS_2[partition] as usize,
            )
        };

        let index = bits.read(if is_anchor { index_bits - 1 } else { index_bits }) as usize;
        let weight = weights[index];
        let (low, high) = (e[subset * 2], e[subset * 2 + 1]);

        for channel in 0..3 {
            texel[channel] =
                finish_unquantize(interpolate(low[channel], high[channel], weight), signed);
        }
    }

    Some(texels)
}

/// High dynamic range colour, clamped into 0..1 since the output is 8-bit.
pub fn decode_bc6_block(data: &[u8], signed: bool, outbuf: &mut Block) {
    let Some(texels) = decode_bc6_half(data, signed) else {
        // reserved modes decode to black
        outbuf.fill([0, 0, 0, 0xff]);
        return;
    };

    for (out, texel) in outbuf.iter_mut().zip(texels) {
        let [r, g, b] = texel.map(|bits| float_to_unorm8(f16::from_bits(bits).to_f32()));
        *out = [r, g, b, 0xff];
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Mode 3 (raw 10 bit endpoints, one subset) with the given endpoints and every index zero.
    fn mode3_block(e0: [u32; 3], e1: [u32; 3]) -> [u8; 16] {
        let mut value: u128 = 0b00011;
        let mut position = 5;
        for endpoint in [e0, e1] {
            for channel in endpoint {
                value |= (channel as u128) << position;
                position += 10;
            }
        }
        value.to_le_bytes()
    }

    #[test]
    fn unsigned_unquantize_edges() {
        assert_eq!(unquantize(0, 10, false), 0);
        assert_eq!(unquantize(0x3ff, 10, false), 0xffff);
        assert_eq!(unquantize(0x200, 10, false), 0x8020);
    }

    #[test]
    fn signed_helpers() {
        assert_eq!(extend_sign(0x3ff, 10), -1);
        assert_eq!(extend_sign(0x1ff, 10), 0x1ff);
        assert_eq!(transform_inverse(0x3ff, 1, 10, false), 0);
        assert_eq!(finish_unquantize(-32, true), 0x8000 | 31);
    }

    #[test]
    fn mode3_white() {
        // 0x3ff unquantizes to the largest finite value, which clamps to 1.0
        let block = mode3_block([0x3ff; 3], [0; 3]);
        let mut out = [[0u8; 4]; 16];
        decode_bc6_block(&block, false, &mut out);

        assert!(out.iter().all(|texel| *texel == [0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn mode3_black() {
        let block = mode3_block([0; 3], [0x3ff; 3]);
        let mut out = [[0u8; 4]; 16];
        decode_bc6_block(&block, false, &mut out);

        assert!(out.iter().all(|texel| *texel == [0, 0, 0, 0xff]));
    }

    #[test]
    fn mode3_half_values() {
        // 0x1ef unquantizes to 0x3c00, which is 1.0 as a half float
        let half = decode_bc6_half(&mode3_block([0x1ef; 3], [0; 3]), false).unwrap();
        let value = f16::from_bits(half[0][0]).to_f32();

        assert!((0.9..=1.0).contains(&value), "{value}");
    }

    #[test]
    fn reserved_mode() {
        // mode bits 10011 are reserved
        let block = [0b0001_0011, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut out = [[1u8; 4]; 16];
        decode_bc6_block(&block, false, &mut out);

        assert!(out.iter().all(|texel| *texel == [0, 0, 0, 0xff]));
    }

    #[test]
    fn signed_negative_clamps_to_black() {
        // sign bit set on every channel of the first endpoint
        let block = mode3_block([0x3ff; 3], [0x3ff; 3]);
        let mut out = [[0u8; 4]; 16];
        decode_bc6_block(&block, true, &mut out);

        assert!(out.iter().all(|texel| *texel == [0, 0, 0, 0xff]));
    }

    /// Reads a block written out as hex.
    fn from_hex(text: &str) -> [u8; 16] {
        let mut block = [0u8; 16];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&text[i * 2..i * 2 + 2], 16).unwrap();
        }
        block
    }

    // one block per mode header, with the expected half float bits
    #[rstest]
    #[case::mode_00_unsigned(
        "20ba8f83a9ae698c4b712c19b596f4d9",
        false,
        "37ce617a170537fe6141172837fe6141172838a9624918e2385e60d0176e376961f216bc38a9624918e238df61dd18e237ce617a1705382e6109174b38ec61c318e238b6622f18e237096263167638ec61c318e238d261f718e238d261f718e2"
    )]
    #[case::mode_00_signed(
        "843b87440d2abac3cffca0bec3a2a4a7",
        true,
        "73674183d4e37378407dd46873933ee6d3ab73a53de1d33173933ee6d3ab73813ffad42b73674183d4e373aa40afd1b3736f4100d4a57378407dd468749e3f75d190749e3f75d19073933ee6d3ab71b54335d1fb7323415ed1c674244012d1a1"
    )]
    #[case::mode_01_unsigned(
        "0daf00bee49a785b9068aaa4f3a25c97",
        false,
        "597d028b59ca029655cb62d0014b606b60a2029655cb62d0597d028b59ca13dc055452d405523f5c676a09341f7c6df4597d028b59ca3cba03b156ea597d028b59ca07e82a1c6bc62f1b043d558d217b04c854302f1b043d558d3cba03b156ea"
    )]
    #[case::mode_01_signed(
        "65771e6ea26b580f809a3ba9b4077939",
        true,
        "6cbe77203595697978141a9c6cbe772035956d490f51c1a262927a169e5566f5a506915160f7d69c1c7560f7d69c1c756a4a8979aabf734840e8ef6866f5a506915165d77922835c5df8ef6833586cbe772035955f4d7b0ab94e7003762c508e"
    )]
    #[case::mode_00010_unsigned(
        "828250ebc225c32340c5db858a26c917",
        false,
        "3f1a66a816bb3fad667616ce3f7f66a416c03f6966ba16b93f3d66c7169d3ee4667916eb3f1a66a816bb3f97668c16c73fc2666116d43ef6668816dc3ef6668816dc3ef6668816dc3f97668c16c73fd8664b16db3fad667616ce3f3d66c7169d"
    )]
    #[case::mode_00010_signed(
        "e2cbc2d26772791348f223dc1f28c34e",
        true,
        "49902f2a794649f92efe797a4a0c2e5179464a0c2ef179114a0c2ed779194b042e8f7a004b042e8f7a004a0c2e5179464a0c2e5179464a9b2ebb79cc4a672ed179b24a0c2e6b793d4a0c2ebd79224a0c2ed779194a2d2ee9799449f92efe797a"
    )]
    #[case::mode_00110_unsigned(
        "a657a01c7758999aa00de21052fa1759",
        false,
        "2a79136775202a5e13ec75632a74137d752b2a6713c1754d2a791329755e2a70139375362a70139375362a74137d752b2a41137775532a2b1396754f2a2b1396754f2a6213d775582a791329755e2a6e1339755c2a58135775582a6e1339755c"
    )]
    #[case::mode_00110_signed(
        "068cf7db1062b6afb110cbf12068ed81",
        true,
        "0bc0828feee50bd38307eeed0b2d81bdef6d0ab781ffef390bed83b1eefb0bb88256eee00baf821eeedc0adf81e9ef4a0baf821eeedc0bdc8340eef20bdc8340eef20ba78179efa40be48378eef60bc982c8eee90baf821eeedc0bd38307eeed"
    )]
    #[case::mode_01010_unsigned(
        "0ab52f4f9d3f515270102082bcd29870",
        false,
        "57b324c8672457c024a96735577f248c6746573724b8664b57ce2489674857ce2489674857b3246b67fd575a24a266c557ba24b9672c57d5247a6750574924ae668857a2247667c057ce2489674857b324c8672457a2247667c0574924ae6688"
    )]
    #[case::mode_01010_signed(
        "8a5435d179eaa5e606737de21064ca6e",
        true,
        "51de4ad81cd251cc4ac61dba51da4ad41d1051eb4ae51c2751cc4ac61dba51eb4ae51c2751e24adc1c9851eb4ae51c2751e24adc1c9851d14acb1d8251da4ad41d1052624b771d1151d14acb1d8252984b661d35528b4b6a1d2d52564b7c1d09"
    )]
    #[case::mode_01110_unsigned(
        "0eafe7d4aefd4fb0f5a7ff6bea157abd",
        false,
        "5a0f702657cb5885700357cb5885700357cb5a6f702f57cb5be0717f58b15b29723659715d626ffd571c5ed16e8f559d5b29723659715b297236597159bb73a55af15d626ffd571c5885700357cb5a6f702f57cb5885700357cb5944701457cb"
    )]
    #[case::mode_01110_signed(
        "eef16767f888a58750dcbf32d9063e34",
        true,
        "b72e66f51c02b65f61f7183db4315fc914d5b4315fc914d5b72e66f51c02b71c66241afdb76469801f30b9c3655b1d8ab9c3655b1d8ab6fa648218f2b6fa648218f2b7766a522036b65f61f7183db31a5eb21322b8ac64441bd6b70b655319f7"
    )]
    #[case::mode_10010_unsigned(
        "d25ef9cb590005680ff2dc3686b03d95",
        false,
        "455577186be5221a783f6998221a783f6998221a783f699866b576016e13116a78ca6881776675766f2a76056fe46e1a776675766f2a455577186be573a370fb6ec969d67576719666b576016e136e9a7348703976056fe46e1a76056fe46e1a"
    )]
    #[case::mode_10010_signed(
        "129e93ba3a8d2f6fa94defe6337b14a6",
        true,
        "9a3324a159c20a2f2b3e66e605502bf165819a3324a159c2a4cc22ef58e90b242b1c672c08472b84665a936325b85a4e9a3324a159c20b242b1c672c05502bf1658196cb252d5a08936325b85a4e08472b84665a05502bf16581a164237b592f"
    )]
    #[case::mode_10110_unsigned(
        "b6e6321a03b641b02eb5b3a58e86ece9",
        false,
        "19ea312a448a19ea33d2448a19ea33d2448a19ea320c448a1c2b2a4e46de1d7627ec485e16d9341b40b5182431b94235196f2f5743b4158e367e3f36182431b942351d7627ec485e19ea3693448a19ea33d2448a19ea32ef448a19ea3776448a"
    )]
    #[case::mode_10110_signed(
        "76e310c89b0623bfecf8d355b5e0dc5f",
        true,
        "1aa420749b9c1196312a9d000ee816b09ba30f971ae99f2e0d780dc69429171926fe9c271196312a9d000d780dc6942910f4235ca644135c2de59cba15532a439c6d0cca098d909e0d780dc694290c1c05548d140e0c37b49d8c171926fe9c27"
    )]
    #[case::mode_11010_unsigned(
        "3a8b1aef6c8d31bb65fe1babd8cf29da",
        false,
        "2d1f1b8c38852c3c1abb393325ee15124239280d1512456625ee151242392c3c1abb393330c31ee835b828bb1512466c296a151247722c3c1abb393331a61fba350a275e1512446125ee15124239275e1512446130c31ee835b830c31ee835b8"
    )]
    #[case::mode_11010_signed(
        "ba0caaebc900a7232dcc2cc643675de8",
        true,
        "5f774e978847606b4fae893b5e684d61873858e945159e275c804b3385505f774e97884758a4425ca16c5a08504990b65f774e9788475a4e53028d71592f47cf9ae25a9455bc8a2c592f47cf9ae258a4425ca16c5a08504990b659754a88979d"
    )]
    #[case::mode_11110_unsigned(
        "9ed35f71a3e791548b3f4fcf789d9d87",
        false,
        "4ad6545a6135521a45ac5caa5f2e2b3e547e4ad6545a61356c0f0979550937387bff6d7865b81e08506858a4387558942a881c8468144ad6545a61355f2e2b3e547e5f2e2b3e547e1a9821266cb67bff04d850683dc26ec86961521a45ac5caa"
    )]
    #[case::mode_11110_signed(
        "5e63a3b7eb216abf25940563f2e48a9c",
        true,
        "56571f2e5a3766b019306a9002c93dd106a947b0bff0725035a52b2b398518d3c3353e00c781c9edad880164c4d723d818d3c3353e00c781c9edad88b013c84b936018d3c3353e0098a4c6a806c898a4c6a806c80164c4d723d818d3c3353e00"
    )]
    #[case::mode_00011_unsigned(
        "43e17e4275b1195d81faf67e6c1e979d",
        false,
        "5e451eb2518e501e1b9c532a4c5f1aca539743a118e2549553721c5652c943a118e25495454b193f546551c81bf952f9490a1a1053f853721c5652c9454b193f54655c9b1e5551be51c81bf952f94e741b3f535a476019b354284e741b3f535a"
    )]
    #[case::mode_00011_signed(
        "437de71809d7ef29631bee009fcdd7a7",
        true,
        "8975670919669f8535aa960db494068ac359897567091966c19e96a1df64c19e96a1df64857370032207857370032207c5a19f9be805ab8e1abdaff0bc9a8b68d49bb897826ecbfaa3882cb09eaebc9a8b68d49ba3882cb09eaeb0910f84bab9"
    )]
    #[case::mode_00111_unsigned(
        "071207f4a7b42cc5495be3b1a083cc77",
        false,
        "49211f5279c449211f5279c44d54550c766b49b0267c7952489118287a374f266c5474f8474f080a7b384d54550c766b46bf00e07baa4cc54de276dd489118287a374b823dc477df4de35c3675f94de35c3675f94af3369a78514af3369a7851"
    )]
    #[case::mode_00111_signed(
        "073bcc19ba69413059f751bd5b6466ef",
        true,
        "32c08c4cd885313b8c37d7cb2dce8c07d62820e08b52cffb37b28c92dae1313b8c37d7cb244d8b81d19e27588bacd31227588bacd312313b8c37d7cb32c08c4cd8852f548c1cd6e22f548c1cd6e22f548c1cd6e220e08b52cffb22658b67d0b5"
    )]
    #[case::mode_01011_unsigned(
        "0b455d1788fe93679a650a19640c6ddb",
        false,
        "6d42142e288c6ce1136749176d42142e288c6d2613f4321f6cc5132c52a96db9152500596ce1136749176da314f608016d59145d20e46d2613f4321f6c9712ce61fa6db9152500596c80129f69a26d2613f4321f6cae12fd5a526c80129f69a2"
    )]
    #[case::mode_01011_signed(
        "6b33919ac60d6206ed6e5c10c6d06aa9",
        true,
        "e4eaac14717ce73bab9071dfe73bab9071dfe4eaac14717ce69eabb371c5e493ac27716ee325ac787131e36bac69713ce4eaac14717ce69eabb371c5e325ac787131e6e4aba371d1e613abd271aee4eaac14717ce5bbabe5719fe613abd271ae"
    )]
    #[case::mode_01111_unsigned(
        "cf6bff28467aed27fac14f23efa74710",
        false,
        "16f0354610fd16ed354410fd16f1354710fd16ee354510fd16ed354410fd16f0354610fd16f0354610fd16f1354610fd16ed354410fd16ee354410fd16ef354610fd16ef354510fd16ef354610fd16f0354610fd16f1354710fd16f1354710fd"
    )]
    #[case::mode_01111_signed(
        "2fb69c606c4344c42ea23683cc5787c2",
        true,
        "5ea24310195a5ea3430f195d5ea3430f195d5ea1431019595ea24310195b5ea2430f195c5ea2430f195c5ea14310195a5ea1431119585ea1431119585ea24310195a5ea24310195b5ea24310195a5ea14310195a5ea3430f195d5ea143111958"
    )]
    fn known_blocks(#[case] block: &str, #[case] signed: bool, #[case] expected: &str) {
        let texels = decode_bc6_half(&from_hex(block), signed).unwrap();
        let halves: String = texels
            .iter()
            .flatten()
            .map(|value| format!("{value:04x}"))
            .collect();

        assert_eq!(halves, expected);
    }
}
