// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

use crate::texture::{FormatVariant, TextureFormat};

/// Why a texture could not be turned into an [Image](crate::Image).
///
/// Every failure is local to one texture, so callers are free to move on to the next one in the same container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No decoder exists for this format, and the depth-float heuristic didn't recognize it either.
    #[error("unsupported texture format {format} ({variant:?})")]
    UnsupportedFormat {
        /// The format type the texture declared.
        format: TextureFormat,
        /// The format variant the texture declared.
        variant: FormatVariant,
    },
    /// The texture can't be decoded at all, such as having a zero dimension or no data.
    #[error("malformed texture data: {reason}")]
    MalformedData {
        /// A short description of what was wrong.
        reason: &'static str,
    },
    /// There were no textures to choose from.
    #[error("no textures to decode")]
    NoTextures,
}
