// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use super::bitreader::BitReader;
use super::color::interpolate;
use super::consts::{ANCHORS_2, ANCHORS_3, PARTITIONS_2, PARTITIONS_3, WEIGHTS_2, WEIGHTS_3, WEIGHTS_4};
use super::Block;

#[derive(Clone, Copy, PartialEq)]
enum PBits {
    None,
    /// One bit per endpoint.
    Unique,
    /// One bit per subset, shared by both of its endpoints.
    Shared,
}

struct ModeInfo {
    subsets: usize,
    partition_bits: u32,
    rotation_bits: u32,
    index_selection_bits: u32,
    color_bits: u32,
    alpha_bits: u32,
    pbits: PBits,
    index_bits: u32,
    secondary_index_bits: u32,
}

#[rustfmt::skip]
const MODES: [ModeInfo; 8] = [
    ModeInfo { subsets: 3, partition_bits: 4, rotation_bits: 0, index_selection_bits: 0, color_bits: 4, alpha_bits: 0, pbits: PBits::Unique, index_bits: 3, secondary_index_bits: 0 },
    ModeInfo { subsets: 2, partition_bits: 6, rotation_bits: 0, index_selection_bits: 0, color_bits: 6, alpha_bits: 0, pbits: PBits::Shared, index_bits: 3, secondary_index_bits: 0 },
    ModeInfo { subsets: 3, partition_bits: 6, rotation_bits: 0, index_selection_bits: 0, color_bits: 5, alpha_bits: 0, pbits: PBits::None, index_bits: 2, secondary_index_bits: 0 },
    ModeInfo { subsets: 2, partition_bits: 6, rotation_bits: 0, index_selection_bits: 0, color_bits: 7, alpha_bits: 0, pbits: PBits::Unique, index_bits: 2, secondary_index_bits: 0 },
    ModeInfo { subsets: 1, partition_bits: 0, rotation_bits: 2, index_selection_bits: 1, color_bits: 5, alpha_bits: 6, pbits: PBits::None, index_bits: 2, secondary_index_bits: 3 },
    ModeInfo { subsets: 1, partition_bits: 0, rotation_bits: 2, index_selection_bits: 0, color_bits: 7, alpha_bits: 8, pbits: PBits::None, index_bits: 2, secondary_index_bits: 2 },
    ModeInfo { subsets: 1, partition_bits: 0, rotation_bits: 0, index_selection_bits: 0, color_bits: 7, alpha_bits: 7, pbits: PBits::Unique, index_bits: 4, secondary_index_bits: 0 },
    ModeInfo { subsets: 2, partition_bits: 6, rotation_bits: 0, index_selection_bits: 0, color_bits: 5, alpha_bits: 5, pbits: PBits::Unique, index_bits: 2, secondary_index_bits: 0 },
];

fn weights(index_bits: u32) -> &'static [u32] {
    match index_bits {
        2 => &WEIGHTS_2,
        3 => &WEIGHTS_3,
        _ => &WEIGHTS_4,
    }
}

/// Expands a `bits` wide value to 8 bits by replicating its top bits.
#[inline]
fn expand(value: u32, bits: u32) -> u8 {
    let value = value << (8 - bits);
    (value | (value >> bits)) as u8
}

fn subset_of(mode: &ModeInfo, partition: usize, texel: usize) -> usize {
    match mode.subsets {
        2 => ((PARTITIONS_2[partition] >> texel) & 1) as usize,
        3 => ((PARTITIONS_3[partition] >> (texel * 2)) & 3) as usize,
        _ => 0,
    }
}

/// Anchor texels store their index with one bit less.
fn is_anchor(mode: &ModeInfo, partition: usize, texel: usize) -> bool {
    texel == 0
        || match mode.subsets {
            2 => ANCHORS_2[partition] as usize == texel,
            3 => ANCHORS_3[partition].contains(&(texel as u8)),
            _ => false,
        }
}

pub fn decode_bc7_block(data: &[u8], outbuf: &mut Block) {
    let mut bits = BitReader::new(data);

    // the mode is the number of leading zero bits
    let mut mode_number = 0;
    while mode_number < 8 && bits.read_bit() == 0 {
        mode_number += 1;
    }

    let Some(mode) = MODES.get(mode_number) else {
        outbuf.fill([0; 4]);
        return;
    };

    let partition = bits.read(mode.partition_bits) as usize;
    let rotation = bits.read(mode.rotation_bits);
    let index_selection = bits.read(mode.index_selection_bits);

    let endpoint_count = mode.subsets * 2;
    let mut endpoints = [[0u32; 4]; 6];

    for channel in 0..3 {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            endpoint[channel] = bits.read(mode.color_bits);
        }
    }
    for endpoint in endpoints.iter_mut().take(endpoint_count) {
        endpoint[3] = bits.read(mode.alpha_bits);
    }

    let pbit_count = if mode.pbits == PBits::None { 0 } else { 1 };
    match mode.pbits {
        PBits::None => {}
        PBits::Unique => {
            for endpoint in endpoints.iter_mut().take(endpoint_count) {
                let pbit = bits.read_bit();
                for value in endpoint.iter_mut() {
                    *value = (*value << 1) | pbit;
                }
            }
        }
        PBits::Shared => {
            for subset in endpoints.chunks_exact_mut(2).take(mode.subsets) {
                let pbit = bits.read_bit();
                for value in subset.iter_mut().flatten() {
                    *value = (*value << 1) | pbit;
                }
            }
        }
    }

    let mut colors = [[0i32; 4]; 6];
    for (color, endpoint) in colors.iter_mut().zip(endpoints).take(endpoint_count) {
        for channel in 0..3 {
            color[channel] = expand(endpoint[channel], mode.color_bits + pbit_count) as i32;
        }
        color[3] = if mode.alpha_bits == 0 {
            0xff
        } else {
            expand(endpoint[3], mode.alpha_bits + pbit_count) as i32
        };
    }

    let mut indices = [0u32; 16];
    for (texel, index) in indices.iter_mut().enumerate() {
        let count = if is_anchor(mode, partition, texel) {
            mode.index_bits - 1
        } else {
            mode.index_bits
        };
        *index = bits.read(count);
    }

    let mut secondary_indices = [0u32; 16];
    if mode.secondary_index_bits > 0 {
        for (texel, index) in secondary_indices.iter_mut().enumerate() {
            let count = if texel == 0 {
                mode.secondary_index_bits - 1
            } else {
                mode.secondary_index_bits
            };
            *index = bits.read(count);
        }
    }

    let primary_weights = weights(mode.index_bits);
    let secondary_weights = weights(mode.secondary_index_bits);

    for (texel, out) in outbuf.iter_mut().enumerate() {
        let subset = subset_of(mode, partition, texel);
        let (low, high) = (colors[subset * 2], colors[subset * 2 + 1]);

        let color_weight;
        let alpha_weight;
        if mode.secondary_index_bits == 0 {
            color_weight = primary_weights[indices[texel] as usize];
            alpha_weight = color_weight;
        } else if index_selection == 0 {
            color_weight = primary_weights[indices[texel] as usize];
            alpha_weight = secondary_weights[secondary_indices[texel] as usize];
        } else {
            color_weight = secondary_weights[secondary_indices[texel] as usize];
            alpha_weight = primary_weights[indices[texel] as usize];
        }

        let mut rgba = [0u8; 4];
        for channel in 0..3 {
            rgba[channel] = interpolate(low[channel], high[channel], color_weight) as u8;
        }
        rgba[3] = interpolate(low[3], high[3], alpha_weight) as u8;

        match rotation {
            1 => rgba.swap(3, 0),
            2 => rgba.swap(3, 1),
            3 => rgba.swap(3, 2),
            _ => {}
        }

        *out = rgba;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Packs `(value, bit count)` pairs least-significant first.
    fn pack(fields: &[(u128, u32)]) -> [u8; 16] {
        let mut value = 0u128;
        let mut position = 0;
        for &(field, count) in fields {
            value |= field << position;
            position += count;
        }
        value.to_le_bytes()
    }

    #[test]
    fn reserved_mode() {
        let mut block = [[0xffu8; 4]; 16];
        decode_bc7_block(&[0; 16], &mut block);

        assert!(block.iter().all(|texel| *texel == [0, 0, 0, 0]));
    }

    #[test]
    fn mode6_solid() {
        // mode 6: 7 bit colour and alpha with a unique p-bit per endpoint
        let mut fields = vec![(1 << 6, 7)];
        for _ in 0..3 {
            fields.push((0x7f, 7));
            fields.push((0, 7));
        }
        fields.push((0x7f, 7));
        fields.push((0x7f, 7));
        fields.push((1, 1));
        fields.push((0, 1));

        let mut block = [[0u8; 4]; 16];
        decode_bc7_block(&pack(&fields), &mut block);

        // index zero everywhere selects the first endpoint
        assert!(block.iter().all(|texel| *texel == [0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn mode5_rotation() {
        // mode 5 with rotation 1 swaps red and alpha
        let mut fields = vec![(1 << 5, 6), (1, 2)];
        for _ in 0..3 {
            fields.push((0x7f, 7));
            fields.push((0x7f, 7));
        }
        fields.push((0x00, 8));
        fields.push((0x00, 8));

        let mut block = [[0u8; 4]; 16];
        decode_bc7_block(&pack(&fields), &mut block);

        assert!(block.iter().all(|texel| *texel == [0, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn anchors() {
        let mode = &MODES[1];
        assert!(is_anchor(mode, 0, 0));
        assert!(is_anchor(mode, 0, 15));
        assert!(!is_anchor(mode, 0, 3));

        let mode = &MODES[0];
        assert!(is_anchor(mode, 0, 3));
        assert!(is_anchor(mode, 0, 15));
    }

    #[test]
    fn partition_subsets() {
        // the first two subset partition splits the block into left and right halves
        let mode = &MODES[1];
        assert_eq!(subset_of(mode, 0, 0), 0);
        assert_eq!(subset_of(mode, 0, 2), 1);
        assert_eq!(subset_of(mode, 0, 7), 1);
    }

    fn from_hex(text: &str) -> [u8; 16] {
        let mut block = [0u8; 16];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&text[i * 2..i * 2 + 2], 16).unwrap();
        }
        block
    }

    // one block per mode, with the expected RGBA bytes
    #[rstest]
    #[case::mode0(
        "85258699b88fa33e66be0510ed2db2d1",
        "ce4a5affce4a5affce4a5aff9d6d86ffcb61a8ff39b5e1ff39b5e1ff26b426ffc97d88ffc8956bff2ba52bff2ba52bffcc49c5ffc7ae4eff21c221ff26b426ff"
    )]
    #[case::mode1(
        "629f602886bc4a8dd67a594f6357f422",
        "5d4c45ff2b995bff1d91a4ff284878ff3b8054ff1ab263ff7e1a36ff1f829bff0acb6aff5d4c45ff6e333dff1d91a4ff0acb6aff2b995bff7e1a36ff6e333dff"
    )]
    #[case::mode2(
        "cc135c29bac00c4f535a14ae6ea97526",
        "5d269fff7145aaff8465c5ff8465c5ff7145aaff7145aaff4fab1bff556d2fff5d269fff8463b5ff556d2fff5a3142ff8463b5ff4a0894ff8465c5ff8c4abdff"
    )]
    #[case::mode3(
        "08868b2f0debe098076f221ec7c7637a",
        "b0407bff5f1d45ff9c2675ff35e779ff8a0e6eff5f1d45ff9c2675ff35e779ffb0407bff5f1d45ff8a0e6eff5f1d45ffb0407bff35e779ff8a0e6eff5f1d45ff"
    )]
    #[case::mode4(
        "100744f1c6ad4f8a2baacf4dc6442f36",
        "26635be426635be1133938eb398c7be926635be626635be6398c7be1001018e926635be626635bdf26635be8398c7beb26635be226635be626635be8001018e1"
    )]
    #[case::mode5(
        "e05a3f7af3eb5e763d00726cf9086a21",
        "cd9e9792fd3670bbcd9e5d92b5d15d7eb5d1977eb5d1707eb5d1977eb5d1977ecd9e7092e56970a7fd3670bbb5d1847ee56984a7cd9e9792fd3670bbe56997a7"
    )]
    #[case::mode6(
        "c08e88b65ae0eb7efdb2ebb8704c2a0d",
        "3e616ff24557f1fd3c6635ed425cb7f8425cb7f84458e3fc405f8af4425cb7f83a6816ea3f607df3435ac5f93d6350ef415da9f73c6635ed4359d2fa3a6816ea"
    )]
    #[case::mode7(
        "8050724a34a23d643d34a140f0e64874",
        "4d6d866d65396d2f7120611059547a4e10f308004d6d866d7120611059547a4e51d3eb513cdea13625e9521b4d6d866d25e9521b25e9521b10f3080051d3eb51"
    )]
    fn known_blocks(#[case] block: &str, #[case] expected: &str) {
        let mut texels = [[0u8; 4]; 16];
        decode_bc7_block(&from_hex(block), &mut texels);
        let rgba: String = texels
            .iter()
            .flatten()
            .map(|value| format!("{value:02x}"))
            .collect();

        assert_eq!(rgba, expected);
    }
}
