// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::{debug, warn};

use crate::bcn;
use crate::channel::remap_channels;
use crate::depth::decode_depth_float;
use crate::error::DecodeError;
use crate::pixel;
use crate::texture::{Image, TextureFormat, TextureRecord};

/// Decodes the base level of `texture` into an RGBA8 image of its nominal size, with the texture's
/// channel mapping applied.
///
/// Formats without a dedicated decoder are checked against the depth-float heuristic before giving
/// up with [DecodeError::UnsupportedFormat].
pub fn decode(texture: &TextureRecord) -> Result<Image, DecodeError> {
    if texture.width == 0 || texture.height == 0 {
        warn!(
            name = texture.name.as_str(),
            width = texture.width,
            height = texture.height,
            "Texture has a zero dimension"
        );
        return Err(DecodeError::MalformedData {
            reason: "texture has a zero dimension",
        });
    }

    if texture.data.is_empty() {
        warn!(name = texture.name.as_str(), "Texture has no data");
        return Err(DecodeError::MalformedData {
            reason: "texture has no data",
        });
    }

    debug!(
        name = texture.name.as_str(),
        format = %texture.format,
        variant = ?texture.variant,
        width = texture.width,
        height = texture.height,
        "Decoding texture"
    );

    let mut image = match texture.format {
        TextureFormat::R5G6B5 => pixel::decode_r5g6b5(texture),
        TextureFormat::R8G8 => pixel::decode_r8g8(texture),
        TextureFormat::R16 => pixel::decode_r16(texture),
        TextureFormat::R8G8B8A8 => pixel::decode_r8g8b8a8(texture),
        TextureFormat::R11G11B10 => pixel::decode_r11g11b10(texture),
        TextureFormat::R32 => pixel::decode_r32(texture),
        TextureFormat::BC1 => bcn::decode_bc1(texture),
        TextureFormat::BC2 => bcn::decode_bc2(texture),
        TextureFormat::BC3 => bcn::decode_bc3(texture),
        TextureFormat::BC4 => bcn::decode_bc4(texture),
        TextureFormat::BC5 => bcn::decode_bc5(texture),
        TextureFormat::BC6 => bcn::decode_bc6(texture),
        TextureFormat::BC7 => bcn::decode_bc7(texture),
        TextureFormat::Unknown(_) => match decode_depth_float(texture) {
            Some(image) => image,
            None => {
                warn!(
                    name = texture.name.as_str(),
                    format = %texture.format,
                    "Unsupported texture format"
                );
                return Err(DecodeError::UnsupportedFormat {
                    format: texture.format,
                    variant: texture.variant,
                });
            }
        },
    };

    // block formats decode whole 4x4 blocks
    if image.width > texture.width || image.height > texture.height {
        image = image.cropped(texture.width, texture.height);
    }

    remap_channels(&mut image.rgba, texture.channel_types);

    Ok(image)
}

/// Decodes one texture out of a container's list.
///
/// The texture named `preferred_name` (compared case-insensitively) is tried first, otherwise the
/// first one. If that fails, the first texture in order that does decode is returned instead.
pub fn decode_preferred(
    textures: &[TextureRecord],
    preferred_name: Option<&str>,
) -> Result<Image, DecodeError> {
    let preferred = preferred_name
        .and_then(|name| {
            textures
                .iter()
                .position(|texture| texture.name.eq_ignore_ascii_case(name))
        })
        .unwrap_or(0);

    let Some(chosen) = textures.get(preferred) else {
        return Err(DecodeError::NoTextures);
    };

    let error = match decode(chosen) {
        Ok(image) => return Ok(image),
        Err(error) => error,
    };

    for (index, texture) in textures.iter().enumerate() {
        if index == preferred {
            continue;
        }

        if let Ok(image) = decode(texture) {
            debug!(
                name = texture.name.as_str(),
                "Falling back to the next decodable texture"
            );
            return Ok(image);
        }
    }

    Err(error)
}
