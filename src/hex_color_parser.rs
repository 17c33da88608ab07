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

//! This module contains a parser that parses a hex color string into a
//! [RgbColor] struct. The hex color string can be in the following format:
//! `#RRGGBB`, eg: `#FF0000` for red.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use crate::RgbColor;

/// The input was not a color the crate understands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("invalid hex color (expected #RRGGBB): {input:?}")]
    InvalidHexColor { input: String },
}

/// Parse function that generates an [RgbColor] struct from a valid hex color
/// string. Trailing input is left unconsumed and returned in the remainder.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// One `RR` segment: exactly two hex digits.
fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |it: &str| u8::from_str_radix(it, 16),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let result = parse_hex_color(&input);

        let Ok((remainder, color)) = result else {
            panic!();
        };
        assert_eq!(remainder, "🔅");
        assert_eq!(color, RgbColor::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_invalid_color() {
        let result = parse_hex_color("🔅#2F14DF");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_short_segment() {
        assert!(parse_hex_color("#ff00").is_err());
    }

    #[test]
    fn parse_is_case_insensitive() {
        let (_, lower) = parse_hex_color("#a0b1c2").unwrap();
        let (_, upper) = parse_hex_color("#A0B1C2").unwrap();
        assert_eq!(lower, upper);
    }
}
