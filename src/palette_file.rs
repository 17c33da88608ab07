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

//! Load and save [`ColorPalette<String>`] values as a simple line-oriented
//! file format:
//!
//! ```text
//! ; lines starting with ';' are comments
//! heading = #ff0000
//! detail = light_gray
//! ```
//!
//! Values are either `#RRGGBB` hex colors or [named
//! colors](crate::NamedColor). The format stores foreground colors only;
//! layers and attribute flags are call-site concerns.

use std::{fs, path::Path};

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::take_while1,
          combinator::{all_consuming, map, map_res}};

use crate::{Color, ColorPalette, NamedColor, SetColor, TransformColor,
            hex_color_parser::parse_hex_color};

/// A palette file could not be read or understood.
#[derive(Debug, thiserror::Error)]
pub enum ParsePaletteError {
    #[error("could not read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid palette entry: {content:?}")]
    InvalidEntry { line: usize, content: String },
}

/// Parse palette file content. Blank lines and `;` comments are skipped;
/// every other line must be a `key = value` entry.
///
/// # Errors
///
/// Returns [`ParsePaletteError::InvalidEntry`] naming the first offending
/// line.
pub fn parse_palette_str(input: &str) -> Result<ColorPalette<String>, ParsePaletteError> {
    let mut palette = ColorPalette::new();
    for (index, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let entry = line.split_once('=').and_then(|(key, value)| {
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() {
                return None;
            }
            let (_, color) = all_consuming(parse_color_value).parse(value).ok()?;
            Some((key.to_string(), SetColor::fg(color)))
        });
        match entry {
            Some((key, color)) => {
                palette.insert(key, color);
            }
            None => {
                return Err(ParsePaletteError::InvalidEntry {
                    line: index + 1,
                    content: raw_line.to_string(),
                });
            }
        }
    }
    tracing::debug!(entries = palette.len(), "parsed palette");
    Ok(palette)
}

/// Read and parse a palette file.
///
/// # Errors
///
/// Returns [`ParsePaletteError::Io`] if the file cannot be read, or
/// [`ParsePaletteError::InvalidEntry`] if its content does not parse.
pub fn load_palette_file(
    path: impl AsRef<Path>,
) -> Result<ColorPalette<String>, ParsePaletteError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading palette file");
    let content = fs::read_to_string(path)?;
    parse_palette_str(&content)
}

/// Serialize a palette back to file content. Entries are written as hex
/// colors (the canonical form), sorted by key so output is deterministic.
/// Placeholder entries are skipped since they carry no color.
#[must_use]
pub fn palette_to_string(palette: &ColorPalette<String>) -> String {
    let mut entries: Vec<(&String, &SetColor)> = palette.iter().collect();
    entries.sort_by_key(|(key, _)| key.as_str());

    let mut acc = String::new();
    for (key, set_color) in entries {
        let Some(format) = set_color.format() else {
            continue;
        };
        let rgb = format.color.as_rgb();
        acc.push_str(&format!(
            "{key} = #{:02x}{:02x}{:02x}\n",
            rgb.red, rgb.green, rgb.blue
        ));
    }
    acc
}

/// A palette color value: `#RRGGBB` hex or a color name.
fn parse_color_value(input: &str) -> IResult<&str, Color> {
    alt((
        map(parse_hex_color, Color::from),
        map_res(
            take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
            |it: &str| it.parse::<NamedColor>().map(Color::from),
        ),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::RgbColor;

    #[test]
    fn parses_hex_and_named_entries() {
        let palette = parse_palette_str(
            "; program colors\n\
             heading = #ff0000\n\
             \n\
             detail = light_gray\n",
        )
        .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(
            palette.set(&"heading".to_string()).unwrap(),
            SetColor::fg(RgbColor::from_u8(255, 0, 0))
        );
        assert_eq!(
            palette.set(&"detail".to_string()).unwrap(),
            SetColor::fg(NamedColor::LightGray)
        );
    }

    #[test]
    fn reports_offending_line() {
        let result = parse_palette_str("good = #00ff00\nbad = #notacolor\n");
        match result {
            Err(ParsePaletteError::InvalidEntry { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "bad = #notacolor");
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn rejects_entry_without_separator() {
        assert!(parse_palette_str("just a line\n").is_err());
    }

    #[test]
    fn rejects_trailing_garbage_after_color() {
        assert!(parse_palette_str("key = #ff0000 extra\n").is_err());
    }

    #[test]
    fn serializes_sorted_hex_entries() {
        let palette = parse_palette_str("b = #010203\na = intense_red\n").unwrap();
        let rendered = palette_to_string(&palette);
        // intense_red is palette entry 9, whose xterm RGB is (255, 0, 0).
        assert_eq!(rendered, "a = #ff0000\nb = #010203\n");
    }

    #[test]
    fn round_trips_through_serialization() {
        let source = "a = #ff0000\nb = #010203\n";
        let palette = parse_palette_str(source).unwrap();
        assert_eq!(palette_to_string(&palette), source);
    }
}
