// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::debug;

use crate::pixel::decode_float_grey;
use crate::texture::{Image, TextureRecord};

/// Texel size of a 64-bit depth/stencil surface, where the first 32 bits are a float.
pub const DEPTH_TEXEL_BYTES: usize = 8;

/// How far the estimated texel size may stray from [DEPTH_TEXEL_BYTES].
///
/// This is a soft heuristic based on the size of the base mip level, not a real format check.
pub const TEXEL_SIZE_TOLERANCE: f32 = 0.5;

/// Whether the base level looks like it holds 8 bytes per pixel.
pub fn has_depth_sized_texels(texture: &TextureRecord) -> bool {
    texture
        .estimated_bytes_per_pixel()
        .is_some_and(|estimate| {
            (estimate - DEPTH_TEXEL_BYTES as f32).abs() <= TEXEL_SIZE_TOLERANCE
        })
}

/// Tries to decode a texture with an unrecognized format as a float mask stored in a depth/stencil
/// surface. Returns _None_ when the texture doesn't look like one.
pub fn decode_depth_float(texture: &TextureRecord) -> Option<Image> {
    if texture.width == 0 || texture.height == 0 || texture.data.len() < DEPTH_TEXEL_BYTES {
        return None;
    }

    if !has_depth_sized_texels(texture) {
        return None;
    }

    debug!(
        name = texture.name.as_str(),
        format = %texture.format,
        "Decoding unknown format as a depth float surface"
    );

    Some(decode_float_grey(texture, DEPTH_TEXEL_BYTES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureFormat;

    fn depth_texture(mip_offsets: Vec<u64>) -> TextureRecord {
        let mut data = Vec::new();
        for _ in 0..64 {
            data.extend_from_slice(&0.5f32.to_le_bytes());
            data.extend_from_slice(&[0xff; 4]);
        }
        TextureRecord::new("mask", 8, 8, TextureFormat::Unknown(0x2a), data)
            .with_mip_offsets(mip_offsets)
    }

    #[test]
    fn accepts_eight_byte_texels() {
        let image = decode_depth_float(&depth_texture(vec![0, 512])).unwrap();

        assert_eq!(image.width, 8);
        assert_eq!(image.height, 8);
        assert_eq!(image.pixel(7, 7), [127, 127, 127, 0xff]);
    }

    #[test]
    fn tolerance_boundary() {
        // 8.5 bytes per pixel is still accepted
        assert!(decode_depth_float(&depth_texture(vec![0, 544])).is_some());
        // 7.5 too
        assert!(decode_depth_float(&depth_texture(vec![0, 480])).is_some());
        // but not 8.75 or 7.25
        assert!(decode_depth_float(&depth_texture(vec![0, 560])).is_none());
        assert!(decode_depth_float(&depth_texture(vec![0, 464])).is_none());
    }

    #[test]
    fn rejects_four_byte_texels() {
        assert!(decode_depth_float(&depth_texture(vec![0, 256])).is_none());
    }

    #[test]
    fn single_mip_uses_data_length() {
        // 512 bytes for 64 pixels
        assert!(decode_depth_float(&depth_texture(vec![0])).is_some());
    }

    #[test]
    fn nan_becomes_black() {
        let mut data = Vec::new();
        for _ in 0..16 {
            data.extend_from_slice(&f32::NAN.to_le_bytes());
            data.extend_from_slice(&[0; 4]);
        }
        let texture = TextureRecord::new("nan", 4, 4, TextureFormat::Unknown(0x2a), data);
        let image = decode_depth_float(&texture).unwrap();

        assert!(image.rgba.chunks(4).all(|pixel| pixel == [0, 0, 0, 0xff]));
    }

    #[test]
    fn too_little_data() {
        let texture = TextureRecord::new("tiny", 1, 1, TextureFormat::Unknown(0x2a), vec![0; 4]);
        assert!(decode_depth_float(&texture).is_none());
    }
}
