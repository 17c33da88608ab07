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

use std::fmt::{Display, Formatter, Result, Write};

use crate::{Color, ColorSupport, FormatFlag, Layer, Sequence, SgrCode,
            TransformColor, global_color_support};

/// Builds the escape sequence that changes the given layer to the given color.
///
/// This is a pure function: the produced bytes depend only on the inputs, not
/// on the terminal the process happens to be attached to. `Ansi256` colors
/// render as `ESC[38;5;{n}m` / `ESC[48;5;{n}m`, `Rgb` colors as
/// `ESC[38;2;{r};{g};{b}m` / `ESC[48;2;{r};{g};{b}m`.
pub fn make_color_sequence(color: Color, layer: Layer) -> Sequence {
    let code = match (layer, color) {
        (Layer::Foreground, Color::Ansi256(index)) => SgrCode::ForegroundAnsi256(index),
        (Layer::Background, Color::Ansi256(index)) => SgrCode::BackgroundAnsi256(index),
        (Layer::Foreground, Color::Rgb(r, g, b)) => SgrCode::ForegroundRGB(r, g, b),
        (Layer::Background, Color::Rgb(r, g, b)) => SgrCode::BackgroundRGB(r, g, b),
    };
    let mut acc = Sequence::new();
    let _ = write!(acc, "{code}");
    acc
}

/// A complete formatting request: a color, the layer it applies to, and any
/// attribute flags. This is a plain value; it is constructed per request and
/// turned into an escape sequence on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorFormat {
    pub color: Color,
    pub layer: Layer,
    pub flags: FormatFlag,
}

mod color_format_impl {
    use super::*;

    impl ColorFormat {
        #[must_use]
        pub fn new(color: impl Into<Color>, layer: Layer, flags: FormatFlag) -> Self {
            Self {
                color: color.into(),
                layer,
                flags,
            }
        }

        /// The full escape sequence for this format: the color sequence
        /// followed by the flag sequences (see [`FormatFlag`] for the flag
        /// emission order). Pure and deterministic; the color renders in its
        /// own representation regardless of terminal capability.
        #[must_use]
        pub fn to_sequence(&self) -> Sequence {
            let mut acc = make_color_sequence(self.color, self.layer);
            let _ = write!(acc, "{}", self.flags);
            acc
        }
    }
}

/// An inline color changer. Stream it into any output to switch color and
/// formatting from that point on; it renders nothing visible itself.
///
/// Unlike [`ColorFormat::to_sequence`], the [Display] impl adapts the color to
/// the detected terminal capability (see
/// [`global_color_support`]): truecolor passes through, 256-color terminals
/// get the quantized palette index, grayscale terminals get the ramp
/// approximation, and when color is unsupported nothing is written at all.
///
/// ```rust
/// use r3bl_term_color::{NamedColor, SetColor, SgrCode};
///
/// let error_style = SetColor::fg(NamedColor::Red);
/// println!("{error_style}something went wrong{}", SgrCode::Reset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetColor {
    format: Option<ColorFormat>,
}

mod set_color_impl {
    use super::*;

    impl SetColor {
        #[must_use]
        pub fn new(color: impl Into<Color>, layer: Layer, flags: FormatFlag) -> Self {
            Self {
                format: Some(ColorFormat::new(color, layer, flags)),
            }
        }

        /// Foreground (text) color with no extra formatting.
        #[must_use]
        pub fn fg(color: impl Into<Color>) -> Self {
            Self::new(color, Layer::Foreground, FormatFlag::NONE)
        }

        /// Background color with no extra formatting.
        #[must_use]
        pub fn bg(color: impl Into<Color>) -> Self {
            Self::new(color, Layer::Background, FormatFlag::NONE)
        }

        /// A `SetColor` that renders as nothing. Useful in ternary-style
        /// expressions and for disabling color output wholesale (see
        /// [`ColorPalette`](crate::ColorPalette)).
        #[must_use]
        pub const fn placeholder() -> Self { Self { format: None } }

        #[must_use]
        pub fn is_placeholder(&self) -> bool { self.format.is_none() }

        #[must_use]
        pub fn format(&self) -> Option<ColorFormat> { self.format }

        #[must_use]
        pub fn flags(&self) -> FormatFlag {
            match self.format {
                Some(format) => format.flags,
                None => FormatFlag::NONE,
            }
        }

        /// Replace the attribute flags.
        #[must_use]
        pub fn with_flags(mut self, flags: FormatFlag) -> Self {
            if let Some(format) = &mut self.format {
                format.flags = flags;
            }
            self
        }

        /// Union the given flags into the current set.
        #[must_use]
        pub fn add_flags(mut self, flags: FormatFlag) -> Self {
            if let Some(format) = &mut self.format {
                format.flags = format.flags.merge(flags);
            }
            self
        }

        /// Clear the given flags from the current set.
        #[must_use]
        pub fn remove_flags(mut self, flags: FormatFlag) -> Self {
            if let Some(format) = &mut self.format {
                format.flags = format.flags.difference(flags);
            }
            self
        }

        /// The exact escape sequence for this value, ignoring terminal
        /// capability (the placeholder yields an empty sequence). Pure and
        /// deterministic.
        #[must_use]
        pub fn to_sequence(&self) -> Sequence {
            match self.format {
                Some(format) => format.to_sequence(),
                None => Sequence::new(),
            }
        }
    }

    fn fmt_color(
        color: Color,
        layer: Layer,
        support: ColorSupport,
        f: &mut Formatter<'_>,
    ) -> Result {
        match support {
            ColorSupport::Ansi256 => {
                let index = color.as_ansi256().index;
                write!(f, "{}", make_color_sequence(Color::Ansi256(index), layer))
            }
            ColorSupport::Grayscale => {
                let index = color.as_grayscale().index;
                write!(f, "{}", make_color_sequence(Color::Ansi256(index), layer))
            }
            _ => write!(f, "{}", make_color_sequence(color, layer)),
        }
    }

    impl Display for SetColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let Some(format) = self.format else {
                return Ok(());
            };
            let support = global_color_support::detect();
            if support == ColorSupport::NoColor {
                return Ok(());
            }
            fmt_color(format.color, format.layer, support, f)?;
            write!(f, "{}", format.flags)
        }
    }
}

/// Foreground color changer, the common case.
#[must_use]
pub fn text_color(color: impl Into<Color>) -> SetColor { SetColor::fg(color) }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{Ansi256Color, NamedColor, RgbColor, global_color_support};

    #[test]
    fn make_color_sequence_is_deterministic() {
        let one = make_color_sequence(Color::Ansi256(196), Layer::Foreground);
        let two = make_color_sequence(Color::Ansi256(196), Layer::Foreground);
        assert_eq!(one, two);
        assert_eq!(one.as_ref(), "\x1b[38;5;196m");
    }

    #[test]
    fn make_color_sequence_layers() {
        assert_eq!(
            make_color_sequence(Color::Ansi256(4), Layer::Background).as_ref(),
            "\x1b[48;5;4m"
        );
        assert_eq!(
            make_color_sequence(Color::Rgb(1, 2, 3), Layer::Foreground).as_ref(),
            "\x1b[38;2;1;2;3m"
        );
        assert_eq!(
            make_color_sequence(Color::Rgb(1, 2, 3), Layer::Background).as_ref(),
            "\x1b[48;2;1;2;3m"
        );
    }

    #[test]
    fn color_format_appends_flags() {
        let format = ColorFormat::new(
            Ansi256Color::new(1),
            Layer::Foreground,
            FormatFlag::BOLD,
        );
        assert_eq!(format.to_sequence().as_ref(), "\x1b[38;5;1m\x1b[1m");
    }

    /// "Red foreground, bold" is stable and distinct from "red foreground".
    #[test]
    fn bold_red_differs_from_plain_red() {
        let plain = ColorFormat::new(NamedColor::Red, Layer::Foreground, FormatFlag::NONE);
        let bold = ColorFormat::new(NamedColor::Red, Layer::Foreground, FormatFlag::BOLD);
        assert_eq!(plain.to_sequence(), plain.to_sequence());
        assert_eq!(bold.to_sequence(), bold.to_sequence());
        assert_ne!(plain.to_sequence(), bold.to_sequence());
    }

    #[test]
    fn placeholder_renders_nothing() {
        let placeholder = SetColor::placeholder();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.to_string(), "");
        assert!(placeholder.to_sequence().is_empty());
    }

    #[test]
    fn flag_builders() {
        let style = SetColor::fg(Ansi256Color::new(2))
            .add_flags(FormatFlag::BOLD | FormatFlag::UNDERLINE)
            .remove_flags(FormatFlag::UNDERLINE);
        assert_eq!(style.flags(), FormatFlag::BOLD);
        assert_eq!(
            style.with_flags(FormatFlag::INVERT).flags(),
            FormatFlag::INVERT
        );
    }

    #[serial]
    #[test]
    fn display_passes_rgb_through_in_truecolor_mode() {
        global_color_support::set_override(ColorSupport::Truecolor);
        let style = SetColor::fg(RgbColor::from_u8(1, 2, 3));
        assert_eq!(style.to_string(), "\x1b[38;2;1;2;3m");
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn display_quantizes_rgb_in_ansi256_mode() {
        global_color_support::set_override(ColorSupport::Ansi256);
        let style = SetColor::fg(RgbColor::from_u8(95, 0, 255));
        assert_eq!(style.to_string(), "\x1b[38;5;57m");
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn display_grayscales_in_grayscale_mode() {
        global_color_support::set_override(ColorSupport::Grayscale);
        let style = SetColor::bg(RgbColor::from_u8(0, 128, 255));
        assert_eq!(style.to_string(), "\x1b[48;5;245m");
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn display_is_silent_when_color_is_unsupported() {
        global_color_support::set_override(ColorSupport::NoColor);
        let style = SetColor::fg(NamedColor::Red).add_flags(FormatFlag::BOLD);
        assert_eq!(style.to_string(), "");
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn display_appends_flags_after_color() {
        global_color_support::set_override(ColorSupport::Truecolor);
        let style = SetColor::new(
            Ansi256Color::new(196),
            Layer::Foreground,
            FormatFlag::BOLD | FormatFlag::UNDERLINE,
        );
        assert_eq!(style.to_string(), "\x1b[38;5;196m\x1b[1m\x1b[4m");
        global_color_support::clear_override();
    }

    /// Reset followed by a format is equivalent to applying the format
    /// directly: the format's own bytes are unchanged by what came before.
    #[test]
    fn reset_then_format_equals_format() {
        let format =
            ColorFormat::new(NamedColor::Red, Layer::Foreground, FormatFlag::BOLD);
        let direct = format.to_sequence().to_string();
        let after_reset = format!("{}{}", SgrCode::Reset, format.to_sequence());
        assert_eq!(after_reset, format!("\x1b[0m{direct}"));
    }
}
