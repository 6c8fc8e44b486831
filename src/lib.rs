// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

extern crate core;

/// Represents a continuous block of memory which is not owned, and comes either from an in-memory location or from a file.
pub type ByteSpan<'a> = &'a [u8];

/// Represents a continuous block of memory which is owned.
pub type ByteBuffer = Vec<u8>;

/// Errors reported by the decode pipeline.
pub mod error;

/// Texture records, format tags and the decoded image type.
pub mod texture;

/// The block-linear address translator used by the GPU.
pub mod swizzle;

/// Decoders for uncompressed pixel layouts.
pub mod pixel;

/// Decoders for block-compressed (BCn) formats.
pub mod bcn;

/// Fallback decoding for float masks stored in depth/stencil surfaces.
pub mod depth;

/// Per-texture channel remapping.
pub mod channel;

/// Format dispatch, cropping and the public decode entry points.
pub mod decoder;

/// Reading archive hash tables (SAHT).
#[cfg(feature = "archive_hash")]
pub mod saht;

pub use channel::apply_channel_mapping;
pub use decoder::{decode, decode_preferred};
pub use error::DecodeError;
pub use texture::{ChannelType, FormatVariant, Image, TextureFormat, TextureRecord};
