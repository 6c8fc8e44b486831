// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

/// Reads bits least-significant first out of a single 128-bit block.
pub struct BitReader {
    bits: u128,
    bit_pos: u32,
}

impl BitReader {
    #[inline]
    pub fn new(block: &[u8]) -> BitReader {
        let mut raw = [0u8; 16];
        let len = block.len().min(16);
        raw[..len].copy_from_slice(&block[..len]);

        BitReader {
            bits: u128::from_le_bytes(raw),
            bit_pos: 0,
        }
    }

    /// Reads `num_bits` (at most 32) bits. Reading past the end of the block yields zeroes.
    #[inline]
    pub fn read(&mut self, num_bits: u32) -> u32 {
        debug_assert!(num_bits <= 32);

        if num_bits == 0 || self.bit_pos >= 128 {
            self.bit_pos += num_bits;
            return 0;
        }

        let mask = (1u128 << num_bits) - 1;
        let value = (self.bits >> self.bit_pos) & mask;
        self.bit_pos += num_bits;
        value as u32
    }

    #[inline]
    pub fn read_bit(&mut self) -> u32 {
        self.read(1)
    }

    /// Reads `num_bits` bits, with the first bit read ending up as the most significant one.
    #[inline]
    pub fn read_reversed(&mut self, num_bits: u32) -> u32 {
        let bits = self.read(num_bits);
        (0..num_bits).fold(0, |result, i| (result << 1) | ((bits >> i) & 1))
    }
}
