// SPDX-FileCopyrightText: 2025 Joshua Goins <josh@redstrate.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::texture::{ChannelType, Image};

/// Rearranges the channels of `image` in place. `ch0` through `ch3` pick the source of the red,
/// green, blue and alpha channels respectively.
///
/// Every selector reads the pixel as it was before remapping, so swaps like `[Blue, Green, Red, Alpha]`
/// work as expected. The identity mapping leaves the image untouched.
///
/// # Example
///
/// ```
/// # use nxtex::{apply_channel_mapping, ChannelType, Image};
/// let mut image = Image { width: 1, height: 1, rgba: vec![10, 20, 30, 40] };
/// apply_channel_mapping(&mut image, ChannelType::Blue, ChannelType::Green, ChannelType::Red, ChannelType::One);
/// assert_eq!(image.rgba, [30, 20, 10, 0xff]);
/// ```
pub fn apply_channel_mapping(
    image: &mut Image,
    ch0: ChannelType,
    ch1: ChannelType,
    ch2: ChannelType,
    ch3: ChannelType,
) {
    remap_channels(&mut image.rgba, [ch0, ch1, ch2, ch3]);
}

/// Same as [apply_channel_mapping], but over a raw RGBA buffer. Trailing bytes that don't form a
/// whole pixel are left alone.
pub fn remap_channels(rgba: &mut [u8], mapping: [ChannelType; 4]) {
    if mapping == ChannelType::IDENTITY {
        return;
    }

    for pixel in rgba.chunks_exact_mut(4) {
        let [r, g, b, a] = [pixel[0], pixel[1], pixel[2], pixel[3]];

        for (slot, channel) in pixel.iter_mut().zip(mapping) {
            *slot = match channel {
                ChannelType::Zero => 0,
                ChannelType::One => 0xff,
                ChannelType::Red => r,
                ChannelType::Green => g,
                ChannelType::Blue => b,
                ChannelType::Alpha => a,
            };
        }
    }
}
