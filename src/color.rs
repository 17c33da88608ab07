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

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use crate::{TransformColor,
            convert::{convert_ansi256_into_rgb, convert_rgb_into_ansi256},
            hex_color_parser::parse_hex_color};

/// A terminal color in one of the two representations modern terminals accept:
/// an 8-bit palette index or a 24-bit truecolor triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Ansi256(u8),
}

mod color_impl {
    use super::*;

    impl TransformColor for Color {
        fn as_rgb(&self) -> RgbColor {
            match self {
                Color::Rgb(r, g, b) => RgbColor {
                    red: *r,
                    green: *g,
                    blue: *b,
                },
                Color::Ansi256(index) => Ansi256Color { index: *index }.as_rgb(),
            }
        }

        fn as_ansi256(&self) -> Ansi256Color {
            match self {
                Color::Rgb(red, green, blue) => convert_rgb_into_ansi256(RgbColor {
                    red: *red,
                    green: *green,
                    blue: *blue,
                }),
                Color::Ansi256(index) => Ansi256Color { index: *index },
            }
        }

        fn as_grayscale(&self) -> Ansi256Color { self.as_rgb().as_grayscale() }
    }

    impl From<RgbColor> for Color {
        fn from(color: RgbColor) -> Self {
            Color::Rgb(color.red, color.green, color.blue)
        }
    }

    impl From<Ansi256Color> for Color {
        fn from(color: Ansi256Color) -> Self { Color::Ansi256(color.index) }
    }

    impl From<(u8, u8, u8)> for Color {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Color::Rgb(red, green, blue)
        }
    }
}

/// Represents a color in RGB (24-bit truecolor) format.
///
/// This is the most precise color representation supported by modern terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

mod rgb_color_impl {
    use super::*;
    use crate::convert::color_utils;

    impl RgbColor {
        #[must_use]
        pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
            Self { red, green, blue }
        }

        /// Parse a `#RRGGBB` hex color string, eg `#FF0000` for red.
        ///
        /// # Errors
        ///
        /// Returns [`InvalidHexColor`](crate::ParseColorError::InvalidHexColor) if the
        /// input is not a valid hex color.
        pub fn try_from_hex_color(input: &str) -> Result<Self, crate::ParseColorError> {
            match parse_hex_color(input) {
                Ok((_, color)) => Ok(color),
                Err(_) => Err(crate::ParseColorError::InvalidHexColor {
                    input: input.to_string(),
                }),
            }
        }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            Self::from_u8(red, green, blue)
        }
    }

    impl TransformColor for RgbColor {
        fn as_rgb(&self) -> RgbColor { *self }

        fn as_ansi256(&self) -> Ansi256Color { convert_rgb_into_ansi256(*self) }

        fn as_grayscale(&self) -> Ansi256Color {
            let gray =
                color_utils::convert_grayscale((self.red, self.green, self.blue));
            RgbColor {
                red: gray,
                green: gray,
                blue: gray,
            }
            .as_ansi256()
        }
    }
}

/// Represents a color as an index into the 256-color ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi256Color {
    pub index: u8,
}

mod ansi256_color_impl {
    use super::*;

    impl Ansi256Color {
        #[must_use]
        pub const fn new(index: u8) -> Self { Self { index } }
    }

    impl From<u8> for Ansi256Color {
        fn from(index: u8) -> Self { Self { index } }
    }

    impl TransformColor for Ansi256Color {
        fn as_rgb(&self) -> RgbColor { convert_ansi256_into_rgb(self.index) }

        fn as_ansi256(&self) -> Ansi256Color { *self }

        fn as_grayscale(&self) -> Ansi256Color { self.as_rgb().as_grayscale() }
    }
}
