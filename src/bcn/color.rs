// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::pixel::{expand5, expand6};

/// Expands a 5:6:5 endpoint into 8-bit red, green and blue.
#[inline]
pub fn rgb565(value: u16) -> [u8; 3] {
    [expand5(value >> 11), expand6(value >> 5), expand5(value)]
}

/// Blends two endpoints with a 6-bit weight, as used by BC6 and BC7.
#[inline]
pub fn interpolate(a: i32, b: i32, weight: u32) -> i32 {
    let weight = weight as i32;
    (a * (64 - weight) + b * weight + 32) >> 6
}
