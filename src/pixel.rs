// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::debug;

use crate::depth::{has_depth_sized_texels, DEPTH_TEXEL_BYTES};
use crate::swizzle::read_texel;
use crate::texture::{Image, TextureRecord};

/// Walks every pixel of the base level, reading `N` bytes at each swizzled offset.
fn decode_pixels<const N: usize>(
    texture: &TextureRecord,
    bytes_per_texel: usize,
    convert: impl Fn([u8; N]) -> [u8; 4],
) -> Image {
    debug_assert!(
        bytes_per_texel == DEPTH_TEXEL_BYTES
            || texture
                .format
                .bytes_per_texel()
                .map_or(true, |size| size == bytes_per_texel),
        "{} texels are not {bytes_per_texel} bytes",
        texture.format
    );

    let swizzle = texture.swizzle(bytes_per_texel);
    let mut image = Image::new(texture.width, texture.height);

    for y in 0..texture.height {
        for x in 0..texture.width {
            let texel = read_texel::<N>(&texture.data, swizzle.offset(x, y));
            image.set_pixel(x, y, convert(texel));
        }
    }

    image
}

/// Converts a float in 0..1 to a byte. NaN and infinities become zero, everything else is clamped.
pub(crate) fn float_to_unorm8(value: f32) -> u8 {
    let value = if value.is_finite() { value } else { 0.0 };
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Expands a 5 bit value to 8 bits by replicating the top bits into the bottom.
#[inline]
pub(crate) fn expand5(value: u16) -> u8 {
    let value = (value & 0x1f) as u8;
    (value << 3) | (value >> 2)
}

/// Expands a 6 bit value to 8 bits by replicating the top bits into the bottom.
#[inline]
pub(crate) fn expand6(value: u16) -> u8 {
    let value = (value & 0x3f) as u8;
    (value << 2) | (value >> 4)
}

/// 16-bit 5:6:5 colour, with the top five bits landing in red.
pub fn decode_r5g6b5(texture: &TextureRecord) -> Image {
    decode_pixels::<2>(texture, 2, |texel| {
        let value = u16::from_le_bytes(texel);
        [
            expand5(value >> 11),
            expand6(value >> 5),
            expand5(value),
            0xff,
        ]
    })
}

/// Two 8-bit channels into red and green.
pub fn decode_r8g8(texture: &TextureRecord) -> Image {
    decode_pixels::<2>(texture, 2, |[r, g]| [r, g, 0, 0xff])
}

/// 16-bit single channel. Only the high byte is kept, and it lands in the third (blue) slot.
pub fn decode_r16(texture: &TextureRecord) -> Image {
    decode_pixels::<2>(texture, 2, |[_, high]| [0, 0, high, 0xff])
}

/// 8-bit BGRA, swapped into RGBA.
pub fn decode_r8g8b8a8(texture: &TextureRecord) -> Image {
    decode_pixels::<4>(texture, 4, |[b, g, r, a]| [r, g, b, a])
}

/// Packed 11:11:10 fields, each truncated down to eight bits.
pub fn decode_r11g11b10(texture: &TextureRecord) -> Image {
    decode_pixels::<4>(texture, 4, |texel| {
        let value = u32::from_le_bytes(texel);
        let low = (value & 0x7ff) as u16;
        let middle = ((value >> 11) & 0x7ff) as u16;
        let high = ((value >> 22) & 0x3ff) as u16;
        [(high >> 2) as u8, (middle >> 3) as u8, (low >> 3) as u8, 0xff]
    })
}

/// 32-bit float single channel, replicated into grey.
///
/// Some textures declared this way are really 64-bit depth/stencil surfaces with the float in the
/// first half of each texel, which is guessed from the size of the base level.
pub fn decode_r32(texture: &TextureRecord) -> Image {
    let bytes_per_texel = if has_depth_sized_texels(texture) {
        debug!(
            name = texture.name.as_str(),
            "Reading 32-bit float texture with {DEPTH_TEXEL_BYTES} byte texels"
        );
        DEPTH_TEXEL_BYTES
    } else {
        4
    };

    decode_float_grey(texture, bytes_per_texel)
}

/// Reads the float in the first four bytes of each texel as a greyscale value with full alpha.
pub(crate) fn decode_float_grey(texture: &TextureRecord, bytes_per_texel: usize) -> Image {
    decode_pixels::<4>(texture, bytes_per_texel, |texel| {
        let value = float_to_unorm8(f32::from_le_bytes(texel));
        [value, value, value, 0xff]
    })
}
