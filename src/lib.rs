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

//! # r3bl_term_color
//!
//! Style terminal output with ANSI escape sequences: 256-color (8-bit) and
//! truecolor (24-bit) colors for foreground or background, attribute flags
//! (bold, underline, invert, and their per-attribute resets), named color
//! constants, keyed color palettes, and aligned message headers. Everything
//! is a plain value that renders its escape sequence via [`Display`], so
//! styling composes with ordinary `print!` / `write!` calls and needs no
//! special writer.
//!
//! The crate adapts to what the attached terminal can do: truecolor passes
//! through, 256-color terminals get quantized palette indices, grayscale
//! terminals get ramp approximations, and when color is unsupported (not a
//! tty, `NO_COLOR`, `TERM=dumb`) styling renders as nothing. See
//! [`global_color_support`] to override detection.
//!
//! ## Change colors inline
//!
//! ```rust
//! use r3bl_term_color::{FormatFlag, NamedColor, SetColor, SgrCode};
//!
//! let heading = SetColor::fg(NamedColor::Red).add_flags(FormatFlag::BOLD);
//! println!("{heading}Attention{}", SgrCode::Reset);
//! ```
//!
//! ## Build sequences deterministically
//!
//! [`ColorFormat::to_sequence`] and [`make_color_sequence`] are pure: the
//! bytes depend only on the inputs, never on the terminal.
//!
//! ```rust
//! use r3bl_term_color::{Color, ColorFormat, FormatFlag, Layer};
//!
//! let format = ColorFormat::new(
//!     Color::Ansi256(196),
//!     Layer::Foreground,
//!     FormatFlag::BOLD,
//! );
//! assert_eq!(format.to_sequence().as_ref(), "\x1b[38;5;196m\x1b[1m");
//! ```
//!
//! ## Keep colors consistent with a palette
//!
//! ```rust
//! use r3bl_term_color::{ColorPalette, NamedColor, SetColor, SgrCode, warn};
//!
//! // Message headers come with a ready-made palette.
//! println!("{}disk is nearly full", warn());
//!
//! // Or key your own palette by any type you like.
//! let palette: ColorPalette<&str> = [
//!     ("added", SetColor::fg(NamedColor::Green)),
//!     ("removed", SetColor::fg(NamedColor::Red)),
//! ]
//! .into_iter()
//! .collect();
//! if let Ok(style) = palette.set(&"added") {
//!     println!("{style}+ new line{}", SgrCode::Reset);
//! }
//! ```

// Attach.
mod ansi_escape_codes;
mod color;
mod color_palette;
mod control_sequence;
mod convert;
mod detect_color_support;
mod format_flag;
mod hex_color_parser;
mod layer;
mod line_character;
mod message;
mod named_color;
mod palette_file;
mod sequence;
mod set_color;
mod transform_color;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_palette::*;
pub use control_sequence::*;
pub use convert::*;
pub use detect_color_support::*;
pub use format_flag::*;
pub use hex_color_parser::*;
pub use layer::*;
pub use line_character::*;
pub use message::*;
pub use named_color::*;
pub use palette_file::*;
pub use sequence::*;
pub use set_color::*;
pub use transform_color::*;
