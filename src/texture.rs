// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use crate::swizzle::{block_height_for, BlockLinearSwizzle};
use crate::ByteBuffer;

/// The pixel layout of a texture, taken from the high byte of the container's format word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    R5G6B5,
    R8G8,
    R16,
    R8G8B8A8,
    R11G11B10,
    R32,
    BC1,
    BC2,
    BC3,
    BC4,
    BC5,
    BC6,
    BC7,
    /// Any format type we don't have a dedicated decoder for.
    Unknown(u8),
}

impl TextureFormat {
    /// Splits a raw 32-bit format word into its type and variant.
    pub fn from_raw(format: u32) -> (TextureFormat, FormatVariant) {
        (
            TextureFormat::from(((format >> 8) & 0xff) as u8),
            FormatVariant::from((format & 0xff) as u8),
        )
    }

    /// Whether this format stores 4x4 texel blocks instead of single pixels.
    pub fn is_block_compressed(&self) -> bool {
        matches!(
            self,
            TextureFormat::BC1
                | TextureFormat::BC2
                | TextureFormat::BC3
                | TextureFormat::BC4
                | TextureFormat::BC5
                | TextureFormat::BC6
                | TextureFormat::BC7
        )
    }

    /// Size of one texel (or one compressed block) in bytes. Unknown formats return _None_.
    pub fn bytes_per_texel(&self) -> Option<usize> {
        match self {
            TextureFormat::R5G6B5 | TextureFormat::R8G8 | TextureFormat::R16 => Some(2),
            TextureFormat::R8G8B8A8 | TextureFormat::R11G11B10 | TextureFormat::R32 => Some(4),
            TextureFormat::BC1 | TextureFormat::BC4 => Some(8),
            TextureFormat::BC2
            | TextureFormat::BC3
            | TextureFormat::BC5
            | TextureFormat::BC6
            | TextureFormat::BC7 => Some(16),
            TextureFormat::Unknown(_) => None,
        }
    }
}

impl From<u8> for TextureFormat {
    fn from(value: u8) -> Self {
        match value {
            0x07 => TextureFormat::R5G6B5,
            0x09 => TextureFormat::R8G8,
            0x0a => TextureFormat::R16,
            0x0b => TextureFormat::R8G8B8A8,
            0x0f => TextureFormat::R11G11B10,
            0x14 => TextureFormat::R32,
            0x1a => TextureFormat::BC1,
            0x1b => TextureFormat::BC2,
            0x1c => TextureFormat::BC3,
            0x1d => TextureFormat::BC4,
            0x1e => TextureFormat::BC5,
            0x1f => TextureFormat::BC6,
            0x20 => TextureFormat::BC7,
            other => TextureFormat::Unknown(other),
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TextureFormat::Unknown(value) => write!(f, "unknown (0x{value:02x})"),
            known => write!(f, "{known:?}"),
        }
    }
}

/// How the components of a format are interpreted, taken from the low byte of the format word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    Unorm,
    Snorm,
    Uint,
    Sint,
    Float,
    Srgb,
    UFloat,
    Unknown(u8),
}

impl From<u8> for FormatVariant {
    fn from(value: u8) -> Self {
        match value {
            1 => FormatVariant::Unorm,
            2 => FormatVariant::Snorm,
            3 => FormatVariant::Uint,
            4 => FormatVariant::Sint,
            5 => FormatVariant::Float,
            6 => FormatVariant::Srgb,
            10 => FormatVariant::UFloat,
            other => FormatVariant::Unknown(other),
        }
    }
}

/// Where an output channel gets its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    Zero,
    One,
    Red,
    Green,
    Blue,
    Alpha,
}

impl ChannelType {
    /// The mapping that leaves every channel where it is.
    pub const IDENTITY: [ChannelType; 4] = [
        ChannelType::Red,
        ChannelType::Green,
        ChannelType::Blue,
        ChannelType::Alpha,
    ];

    /// Converts the raw byte stored in the container. Unknown values return _None_.
    pub fn from_raw(value: u8) -> Option<ChannelType> {
        match value {
            0 => Some(ChannelType::Zero),
            1 => Some(ChannelType::One),
            2 => Some(ChannelType::Red),
            3 => Some(ChannelType::Green),
            4 => Some(ChannelType::Blue),
            5 => Some(ChannelType::Alpha),
            _ => None,
        }
    }
}

/// A single texture as handed over by the container parser. It is never modified while decoding.
#[derive(Debug, Clone)]
pub struct TextureRecord {
    /// Name of the texture inside of its container.
    pub name: String,
    /// Width of the texture in pixels.
    pub width: u32,
    /// Height of the texture in pixels.
    pub height: u32,
    /// Pixel layout.
    pub format: TextureFormat,
    /// Component interpretation.
    pub variant: FormatVariant,
    /// Source for each of the R, G, B and A output channels.
    pub channel_types: [ChannelType; 4],
    /// Number of mip levels stored in `data`.
    pub mipmap_count: u32,
    /// Byte offsets of each mip level, relative to the start of `data`.
    pub mip_offsets: Vec<u64>,
    /// Number of GOBs stacked vertically per block. Zero means it's derived from the height.
    pub block_height: u32,
    /// Tiled texture data for every mip level.
    pub data: ByteBuffer,
}

impl TextureRecord {
    /// Creates a single-mip texture with an identity channel mapping.
    pub fn new(name: &str, width: u32, height: u32, format: TextureFormat, data: ByteBuffer) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            format,
            variant: FormatVariant::Unorm,
            channel_types: ChannelType::IDENTITY,
            mipmap_count: 1,
            mip_offsets: vec![0],
            block_height: 0,
            data,
        }
    }

    pub fn with_variant(mut self, variant: FormatVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_channel_types(mut self, channel_types: [ChannelType; 4]) -> Self {
        self.channel_types = channel_types;
        self
    }

    pub fn with_mip_offsets(mut self, mip_offsets: Vec<u64>) -> Self {
        self.mipmap_count = mip_offsets.len() as u32;
        self.mip_offsets = mip_offsets;
        self
    }

    pub fn with_block_height(mut self, block_height: u32) -> Self {
        self.block_height = block_height;
        self
    }

    /// Width in addressable units: pixels, or 4x4 blocks for block-compressed formats.
    pub fn width_in_texels(&self) -> u32 {
        if self.format.is_block_compressed() {
            self.width.div_ceil(4)
        } else {
            self.width
        }
    }

    /// Height in addressable units: pixels, or 4x4 blocks for block-compressed formats.
    pub fn height_in_texels(&self) -> u32 {
        if self.format.is_block_compressed() {
            self.height.div_ceil(4)
        } else {
            self.height
        }
    }

    /// The block height used for addressing, never taller than the texture itself. Declared heights
    /// that aren't a power of two are rounded up to one.
    pub fn block_height(&self) -> u32 {
        let cap = block_height_for(self.height_in_texels());
        match self.block_height {
            0 => cap,
            declared => declared.min(cap).next_power_of_two(),
        }
    }

    /// The size of the base mip level in bytes, as far as the container tells us.
    pub fn base_level_size(&self) -> usize {
        match self.mip_offsets.get(1) {
            Some(&next) if self.mipmap_count > 1 && next > 0 => next as usize,
            _ => self.data.len(),
        }
    }

    /// Rough guess of how many bytes each pixel of the base level takes up.
    pub fn estimated_bytes_per_pixel(&self) -> Option<f32> {
        let pixel_count = self.width as u64 * self.height as u64;
        if pixel_count == 0 {
            return None;
        }

        Some(self.base_level_size() as f32 / pixel_count as f32)
    }

    /// An addressor for the declared format.
    pub(crate) fn swizzle(&self, bytes_per_texel: usize) -> BlockLinearSwizzle {
        BlockLinearSwizzle::new(self.width_in_texels(), bytes_per_texel, self.block_height())
    }
}

/// A decoded image, always RGBA8 in (R, G, B, A) byte order with tightly packed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Raw RGBA data
    pub rgba: ByteBuffer,
}

impl Image {
    /// Creates a fully transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Returns the RGBA value at `x`, `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside of the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside of a {}x{} image",
            self.width,
            self.height
        );

        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut pixel = [0u8; 4];
        pixel.copy_from_slice(&self.rgba[offset..offset + 4]);
        pixel
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, value: [u8; 4]) {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[offset..offset + 4].copy_from_slice(&value);
    }

    /// Copies the top-left `width` x `height` region into a new image. Dimensions larger than the
    /// image are clamped, nothing is ever resampled.
    pub fn cropped(&self, width: u32, height: u32) -> Image {
        let width = width.min(self.width);
        let height = height.min(self.height);
        let row_size = width as usize * 4;
        let stride = self.width as usize * 4;

        let mut rgba = Vec::with_capacity(row_size * height as usize);
        for row in self.rgba.chunks_exact(stride).take(height as usize) {
            rgba.extend_from_slice(&row[..row_size]);
        }

        Image { width, height, rgba }
    }
}
