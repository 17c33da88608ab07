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

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::{Ansi256Color, Color};

/// The fixed set of named colors. Each name maps to a distinct entry of the
/// 256-color palette; the mapping is immutable and lookups are just a `match`.
///
/// Names round-trip as snake_case strings (`"intense_red"` parses to
/// [`NamedColor::IntenseRed`] and displays back the same way), which is what
/// the palette file format uses.
///
/// The first sixteen names follow the xterm system colors: `0..=7` are the
/// normal intensities (7 is the light gray traditionally labeled "white"),
/// `8..=15` the intense ones. `white` maps to 15 rather than 7 so that
/// `light_gray`, `gray`, and `white` stay three distinct colors; `orange`,
/// `purple`, and `intense_white` have no slot in the system range and live in
/// the color cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter,
         EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    Gray,
    IntenseRed,
    IntenseGreen,
    IntenseYellow,
    IntenseBlue,
    IntenseMagenta,
    IntenseCyan,
    White,
    IntenseWhite,
    Orange,
    Purple,
}

mod named_color_impl {
    use super::*;

    impl NamedColor {
        /// The palette entry this name maps to.
        #[rustfmt::skip]
        #[must_use]
        pub const fn as_ansi256(self) -> Ansi256Color {
            let index = match self {
                NamedColor::Black          => 0,
                NamedColor::Red            => 1,
                NamedColor::Green          => 2,
                NamedColor::Yellow         => 3,
                NamedColor::Blue           => 4,
                NamedColor::Magenta        => 5,
                NamedColor::Cyan           => 6,
                NamedColor::LightGray      => 7,
                NamedColor::Gray           => 8,
                NamedColor::IntenseRed     => 9,
                NamedColor::IntenseGreen   => 10,
                NamedColor::IntenseYellow  => 11,
                NamedColor::IntenseBlue    => 12,
                NamedColor::IntenseMagenta => 13,
                NamedColor::IntenseCyan    => 14,
                NamedColor::White          => 15,
                NamedColor::IntenseWhite   => 231,
                NamedColor::Orange         => 214,
                NamedColor::Purple         => 93,
            };
            Ansi256Color::new(index)
        }
    }

    impl From<NamedColor> for Ansi256Color {
        fn from(named: NamedColor) -> Self { named.as_ansi256() }
    }

    impl From<NamedColor> for Color {
        fn from(named: NamedColor) -> Self {
            Color::Ansi256(named.as_ansi256().index)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    /// Every named color maps to its own palette entry.
    #[test]
    fn all_names_map_to_distinct_indices() {
        let indices: HashSet<u8> =
            NamedColor::iter().map(|it| it.as_ansi256().index).collect();
        assert_eq!(indices.len(), NamedColor::COUNT);
    }

    #[test]
    fn names_round_trip_as_strings() {
        for named in NamedColor::iter() {
            let rendered = named.to_string();
            let parsed: NamedColor = rendered.parse().unwrap();
            assert_eq!(parsed, named);
        }
    }

    #[test]
    fn snake_case_spelling() {
        assert_eq!(NamedColor::IntenseRed.to_string(), "intense_red");
        assert_eq!(NamedColor::LightGray.to_string(), "light_gray");
        assert_eq!("orange".parse::<NamedColor>().unwrap(), NamedColor::Orange);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("blurple".parse::<NamedColor>().is_err());
    }

    #[test]
    fn named_color_converts_into_color() {
        assert_eq!(Color::from(NamedColor::Red), Color::Ansi256(1));
        assert_eq!(Color::from(NamedColor::Orange), Color::Ansi256(214));
    }
}
