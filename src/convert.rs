/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Conversions between the RGB and 256-color palette representations.
//!
//! The 256-color palette is fully determined by its index layout, so instead
//! of a lookup table the palette entries are computed:
//! - `0..=15`: the 16 legacy system colors.
//! - `16..=231`: a 6x6x6 color cube with channel levels `0, 95, 135, 175, 215,
//!   255`.
//! - `232..=255`: a 24-step grayscale ramp `8, 18, .. 238`.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use crate::{Ansi256Color, RgbColor};

/// Channel intensities of the 6x6x6 color cube (palette indices 16..=231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB values of the 16 legacy system colors (palette indices 0..=15). These
/// are the xterm defaults; terminals are free to theme them.
#[rustfmt::skip]
const SYSTEM_COLORS: [(u8, u8, u8); 16] = [
    (0, 0, 0),       (128, 0, 0),     (0, 128, 0),     (128, 128, 0),
    (0, 0, 128),     (128, 0, 128),   (0, 128, 128),   (192, 192, 192),
    (128, 128, 128), (255, 0, 0),     (0, 255, 0),     (255, 255, 0),
    (0, 0, 255),     (255, 0, 255),   (0, 255, 255),   (255, 255, 255),
];

/// Returns the index of the color in the 256-color ANSI palette that best
/// approximates the given RGB color.
///
/// Pure grays snap to the grayscale ramp (with the near-black and near-white
/// endpoints mapping to the cube corners 16 and 231); everything else snaps
/// each channel to the nearest cube level.
pub fn convert_rgb_into_ansi256(arg: RgbColor) -> Ansi256Color {
    let RgbColor { red, green, blue } = arg;

    if red == green && green == blue {
        let gray = red;
        if gray < 8 {
            return Ansi256Color { index: 16 };
        }
        if gray > 248 {
            return Ansi256Color { index: 231 };
        }
        let steps = (u16::from(gray) - 8 + 5) / 10;
        let index = (232 + steps).min(255);
        return Ansi256Color { index: index as u8 };
    }

    let index = 16
        + 36 * nearest_cube_level(red)
        + 6 * nearest_cube_level(green)
        + nearest_cube_level(blue);
    Ansi256Color { index: index as u8 }
}

/// Returns the RGB value of the given 256-color palette index.
pub fn convert_ansi256_into_rgb(index: u8) -> RgbColor {
    match index {
        0..=15 => {
            let (red, green, blue) = SYSTEM_COLORS[index as usize];
            RgbColor { red, green, blue }
        }
        16..=231 => {
            let cube = index - 16;
            RgbColor {
                red: CUBE_LEVELS[(cube / 36) as usize],
                green: CUBE_LEVELS[((cube % 36) / 6) as usize],
                blue: CUBE_LEVELS[(cube % 6) as usize],
            }
        }
        232..=255 => {
            let gray = 8 + 10 * (index - 232);
            RgbColor {
                red: gray,
                green: gray,
                blue: gray,
            }
        }
    }
}

/// Position (0..=5) of the cube level nearest to the given channel intensity.
fn nearest_cube_level(channel: u8) -> u16 {
    let mut best = 0;
    for (position, level) in CUBE_LEVELS.iter().enumerate() {
        let distance = i16::from(channel).abs_diff(i16::from(*level));
        let best_distance = i16::from(channel).abs_diff(i16::from(CUBE_LEVELS[best]));
        if distance < best_distance {
            best = position;
        }
    }
    best as u16
}

pub mod color_utils {
    /// Gamma-corrected luminance of an RGB triple, as a byte.
    ///
    /// See <https://en.wikipedia.org/wiki/Grayscale#Converting_color_to_grayscale>
    pub fn convert_grayscale(color: (u8, u8, u8)) -> u8 {
        const SCALE: f64 = 256.0;

        // Changing SRGB to Linear for gamma correction.
        let red = srgb_to_linear(f64::from(color.0) / SCALE);
        let green = srgb_to_linear(f64::from(color.1) / SCALE);
        let blue = srgb_to_linear(f64::from(color.2) / SCALE);

        // Converting to grayscale.
        let gray_linear = red * 0.299 + green * 0.587 + blue * 0.114;

        // Gamma correction.
        let gray_srgb = linear_to_srgb(gray_linear);

        (gray_srgb * SCALE) as u8
    }

    pub fn linear_to_srgb(intensity: f64) -> f64 {
        if intensity <= 0.003_130_8 {
            12.92 * intensity
        } else {
            1.055 * intensity.powf(1.0 / 2.4) - 0.055
        }
    }

    pub fn srgb_to_linear(intensity: f64) -> f64 {
        if intensity < 0.04045 {
            intensity / 12.92
        } else {
            ((intensity + 0.055) / 1.055).powf(2.4)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(RgbColor{red: 0, green: 0, blue: 0}, 16; "black hits cube corner")]
    #[test_case(RgbColor{red: 255, green: 255, blue: 255}, 231; "white hits cube corner")]
    #[test_case(RgbColor{red: 255, green: 128, blue: 0}, 208)]
    #[test_case(RgbColor{red: 175, green: 215, blue: 135}, 150)]
    #[test_case(RgbColor{red: 95, green: 0, blue: 255}, 57)]
    #[test_case(RgbColor{red: 134, green: 134, blue: 134}, 245; "gray snaps to ramp")]
    #[test_case(RgbColor{red: 128, green: 128, blue: 128}, 244)]
    #[test_case(RgbColor{red: 1, green: 1, blue: 1}, 16; "near black")]
    #[test_case(RgbColor{red: 250, green: 250, blue: 250}, 231; "near white")]
    fn test_convert_rgb_into_ansi256(rgb: RgbColor, index: u8) {
        assert_eq!(convert_rgb_into_ansi256(rgb), Ansi256Color { index });
    }

    #[test_case(1, RgbColor{red: 128, green: 0, blue: 0}; "system red")]
    #[test_case(42, RgbColor{red: 0, green: 215, blue: 135}; "cube entry")]
    #[test_case(150, RgbColor{red: 175, green: 215, blue: 135})]
    #[test_case(232, RgbColor{red: 8, green: 8, blue: 8}; "ramp start")]
    #[test_case(255, RgbColor{red: 238, green: 238, blue: 238}; "ramp end")]
    fn test_convert_ansi256_into_rgb(index: u8, rgb: RgbColor) {
        assert_eq!(convert_ansi256_into_rgb(index), rgb);
    }

    /// Cube entries survive a round trip through RGB exactly, since their
    /// channel values are cube levels.
    #[test]
    fn cube_entries_round_trip() {
        for index in [16u8, 57, 150, 196, 231] {
            let rgb = convert_ansi256_into_rgb(index);
            assert_eq!(convert_rgb_into_ansi256(rgb).index, index);
        }
    }

    #[test]
    fn grayscale_of_equal_channels_is_stable() {
        // Equal channels pass through luminance almost unchanged (within
        // floating point rounding of the gamma round trip).
        let gray = color_utils::convert_grayscale((128, 128, 128));
        assert!((127..=128).contains(&gray), "got {gray}");
        // Luminance favors green over red over blue.
        let green = color_utils::convert_grayscale((0, 200, 0));
        let red = color_utils::convert_grayscale((200, 0, 0));
        let blue = color_utils::convert_grayscale((0, 0, 200));
        assert!(green > red && red > blue);
    }
}
