// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

/// Width of a GOB in bytes.
pub const GOB_WIDTH_IN_BYTES: usize = 64;

/// Height of a GOB in rows.
pub const GOB_HEIGHT_IN_ROWS: usize = 8;

/// Size of a GOB in bytes.
pub const GOB_SIZE_IN_BYTES: usize = GOB_WIDTH_IN_BYTES * GOB_HEIGHT_IN_ROWS;

/// The tallest GOB stack we derive on our own.
pub const MAX_BLOCK_HEIGHT: u32 = 16;

/// Picks the block height for a surface that is `height_in_texels` tall: the smallest power of two
/// that covers the surface's height in GOBs, clamped to 1..=16.
pub fn block_height_for(height_in_texels: u32) -> u32 {
    let height_in_gobs = height_in_texels.div_ceil(GOB_HEIGHT_IN_ROWS as u32);
    height_in_gobs
        .max(1)
        .next_power_of_two()
        .min(MAX_BLOCK_HEIGHT)
}

/// Translates texel coordinates into byte offsets of the block-linear layout.
///
/// Texels are grouped into 64 byte x 8 row GOBs, and `block_height` GOBs are stacked vertically
/// before continuing with the next column. Inside a GOB the x and y bits are interleaved in the
/// order the hardware expects.
///
/// For block-compressed formats the coordinates are block coordinates and `bytes_per_texel` is the
/// size of a compressed block.
#[derive(Debug, Clone, Copy)]
pub struct BlockLinearSwizzle {
    bpp_shift: u32,
    bh_shift: u32,
    bh_mask: usize,
    x_shift: u32,
    gob_stride: usize,
}

impl BlockLinearSwizzle {
    /// `bytes_per_texel` and `block_height` have to be powers of two.
    pub fn new(width_in_texels: u32, bytes_per_texel: usize, block_height: u32) -> Self {
        debug_assert!(bytes_per_texel.is_power_of_two());
        debug_assert!(block_height.is_power_of_two());

        let block_height = block_height.max(1) as usize;
        let rows_per_block = block_height * GOB_HEIGHT_IN_ROWS;
        let width_in_gobs =
            (width_in_texels as usize * bytes_per_texel).div_ceil(GOB_WIDTH_IN_BYTES);

        Self {
            bpp_shift: bytes_per_texel.trailing_zeros(),
            bh_shift: rows_per_block.trailing_zeros(),
            bh_mask: rows_per_block - 1,
            x_shift: (GOB_SIZE_IN_BYTES * block_height).trailing_zeros(),
            gob_stride: GOB_SIZE_IN_BYTES * block_height * width_in_gobs,
        }
    }

    /// Returns the byte offset of the texel at `x`, `y`. The offset is not bounds checked.
    pub fn offset(&self, x: u32, y: u32) -> usize {
        let x = (x as usize) << self.bpp_shift;
        let y = y as usize;

        let mut position = (y >> self.bh_shift) * self.gob_stride;
        position += (x >> 6) << self.x_shift;
        position += ((y & self.bh_mask) >> 3) << 9;
        position += ((x & 0x3f) >> 5) << 8;
        position += ((y & 0x07) >> 1) << 6;
        position += ((x & 0x1f) >> 4) << 5;
        position += (y & 0x01) << 4;
        position += x & 0x0f;

        position
    }

    /// Size in bytes of a surface that is `height_in_texels` tall, padded to whole blocks.
    pub fn surface_size(&self, height_in_texels: u32) -> usize {
        let rows_per_block = self.bh_mask + 1;
        (height_in_texels as usize).div_ceil(rows_per_block) * self.gob_stride
    }
}

/// Reads `N` bytes at `offset`, or zeroes if any of them are out of range.
#[inline]
pub(crate) fn read_texel<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut texel = [0u8; N];
    if let Some(bytes) = offset
        .checked_add(N)
        .and_then(|end| data.get(offset..end))
    {
        texel.copy_from_slice(bytes);
    }
    texel
}
