// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

mod bc1;
mod bc2;
mod bc3;
mod bc4;
mod bc5;
mod bc6;
mod bc7;
mod bitreader;
mod color;
mod consts;

pub use bc1::decode_bc1_block;
pub use bc2::decode_bc2_block;
pub use bc3::decode_bc3_block;
pub use bc4::decode_bc4_block;
pub use bc5::decode_bc5_block;
pub use bc6::decode_bc6_block;
pub use bc7::decode_bc7_block;

use crate::swizzle::read_texel;
use crate::texture::{FormatVariant, Image, TextureRecord};

/// The 16 texels of a 4x4 block in row-major order, as RGBA.
pub type Block = [[u8; 4]; 16];

const BLOCK_DIMENSION: u32 = 4;

/// Decodes every `N` byte block of the base level into an image padded up to whole blocks.
/// Blocks that fall outside of the data are decoded from zeroes.
fn decode_blocks<const N: usize>(
    texture: &TextureRecord,
    decode_block: impl Fn(&[u8], &mut Block),
) -> Image {
    debug_assert_eq!(
        texture.format.bytes_per_texel(),
        Some(N),
        "{} blocks are not {N} bytes",
        texture.format
    );

    let swizzle = texture.swizzle(N);
    let width_in_blocks = texture.width_in_texels();
    let height_in_blocks = texture.height_in_texels();
    let mut image = Image::new(
        width_in_blocks * BLOCK_DIMENSION,
        height_in_blocks * BLOCK_DIMENSION,
    );

    let mut block = [[0u8; 4]; 16];
    for block_y in 0..height_in_blocks {
        for block_x in 0..width_in_blocks {
            let data = read_texel::<N>(&texture.data, swizzle.offset(block_x, block_y));
            decode_block(&data, &mut block);

            for (i, texel) in block.iter().enumerate() {
                let x = block_x * BLOCK_DIMENSION + i as u32 % BLOCK_DIMENSION;
                let y = block_y * BLOCK_DIMENSION + i as u32 / BLOCK_DIMENSION;
                image.set_pixel(x, y, *texel);
            }
        }
    }

    image
}

/// Opaque colour, or three colours plus transparent black.
pub fn decode_bc1(texture: &TextureRecord) -> Image {
    decode_blocks::<8>(texture, decode_bc1_block)
}

pub fn decode_bc2(texture: &TextureRecord) -> Image {
    decode_blocks::<16>(texture, decode_bc2_block)
}

pub fn decode_bc3(texture: &TextureRecord) -> Image {
    decode_blocks::<16>(texture, decode_bc3_block)
}

/// Greyscale. Snorm textures are biased so that zero lands on 128.
pub fn decode_bc4(texture: &TextureRecord) -> Image {
    let signed = texture.variant == FormatVariant::Snorm;
    decode_blocks::<8>(texture, |data, block| decode_bc4_block(data, signed, block))
}

/// Red and green, with blue zeroed out.
pub fn decode_bc5(texture: &TextureRecord) -> Image {
    let signed = texture.variant == FormatVariant::Snorm;
    decode_blocks::<16>(texture, |data, block| decode_bc5_block(data, signed, block))
}

/// HDR colour clamped down to 8 bits. The `Float` variant is the signed encoding.
pub fn decode_bc6(texture: &TextureRecord) -> Image {
    let signed = texture.variant == FormatVariant::Float;
    decode_blocks::<16>(texture, |data, block| decode_bc6_block(data, signed, block))
}

pub fn decode_bc7(texture: &TextureRecord) -> Image {
    decode_blocks::<16>(texture, decode_bc7_block)
}
