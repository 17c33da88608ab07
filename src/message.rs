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

//! Colored, width-aligned message headers for CLI programs:
//!
//! ```rust
//! use r3bl_term_color::{error, info};
//!
//! println!("{}all good", info());
//! eprintln!("{}something broke", error());
//! ```
//!
//! Each header prints its colored `[TAG]` followed by enough spaces to reach
//! a minimum width (8 by default), so message bodies line up regardless of
//! tag length.

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumIter;

use crate::{ColorPalette, ColorSupport, FormatFlag, NamedColor, SetColor, SgrCode,
            global_color_support};

/// The kinds of messages a program prints, doubling as the key type for the
/// message color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MessageType {
    Info,
    Log,
    Debug,
    Msg,
    Warn,
    Error,
    Critical,
}

mod message_type_impl {
    use super::*;

    impl MessageType {
        /// The `[TAG]` text this type prints. `Critical` shares the error
        /// tag; the bold intense red styling is what sets it apart.
        #[rustfmt::skip]
        #[must_use]
        pub const fn tag(self) -> &'static str {
            match self {
                MessageType::Info     => "[INFO]",
                MessageType::Log      => "[LOG]",
                MessageType::Debug    => "[DEBUG]",
                MessageType::Msg      => "[MSG]",
                MessageType::Warn     => "[WARN]",
                MessageType::Error    => "[ERROR]",
                MessageType::Critical => "[ERROR]",
            }
        }

        #[rustfmt::skip]
        #[must_use]
        pub fn default_style(self) -> SetColor {
            match self {
                MessageType::Info     => SetColor::fg(NamedColor::LightGray),
                MessageType::Log      => SetColor::fg(NamedColor::White),
                MessageType::Debug    => SetColor::fg(NamedColor::Magenta),
                MessageType::Msg      => SetColor::fg(NamedColor::Green),
                MessageType::Warn     => SetColor::fg(NamedColor::Orange),
                MessageType::Error    => SetColor::fg(NamedColor::Red),
                MessageType::Critical => SetColor::fg(NamedColor::IntenseRed)
                                             .add_flags(FormatFlag::BOLD),
            }
        }
    }
}

/// The palette used to print each type of message, pre-filled with the
/// default styles. Swap entries or deactivate it to restyle or silence
/// message colors program-wide.
#[must_use]
pub fn default_message_palette() -> ColorPalette<MessageType> {
    use strum::IntoEnumIterator;
    MessageType::iter()
        .map(|it| (it, it.default_style()))
        .collect()
}

/// Minimum header width, in characters, including the tag itself.
pub const DEFAULT_HEADER_WIDTH: usize = 8;

/// A streamable message header: colored `[TAG]`, reset, then space padding up
/// to the minimum width. When color output is unavailable (or the style is
/// the placeholder) only the tag and padding are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    message_type: MessageType,
    style: SetColor,
    min_width: usize,
}

mod message_header_impl {
    use super::*;

    impl MessageHeader {
        #[must_use]
        pub fn new(message_type: MessageType) -> Self {
            Self {
                message_type,
                style: message_type.default_style(),
                min_width: DEFAULT_HEADER_WIDTH,
            }
        }

        /// Replace the default style, eg with an entry from a custom
        /// [`ColorPalette<MessageType>`].
        #[must_use]
        pub fn with_style(mut self, style: SetColor) -> Self {
            self.style = style;
            self
        }

        #[must_use]
        pub fn with_min_width(mut self, min_width: usize) -> Self {
            self.min_width = min_width;
            self
        }
    }

    impl Display for MessageHeader {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let tag = self.message_type.tag();
            let color_available =
                global_color_support::detect() != ColorSupport::NoColor;
            if color_available && !self.style.is_placeholder() {
                write!(f, "{}{tag}{}", self.style, SgrCode::Reset)?;
            } else {
                write!(f, "{tag}")?;
            }
            for _ in tag.len()..self.min_width {
                write!(f, " ")?;
            }
            Ok(())
        }
    }
}

/// Prints `[INFO]` in light gray.
#[must_use]
pub fn info() -> MessageHeader { MessageHeader::new(MessageType::Info) }

/// Prints `[LOG]` in white.
#[must_use]
pub fn log() -> MessageHeader { MessageHeader::new(MessageType::Log) }

/// Prints `[DEBUG]` in magenta.
#[must_use]
pub fn debug() -> MessageHeader { MessageHeader::new(MessageType::Debug) }

/// Prints `[MSG]` in green.
#[must_use]
pub fn msg() -> MessageHeader { MessageHeader::new(MessageType::Msg) }

/// Prints `[WARN]` in orange.
#[must_use]
pub fn warn() -> MessageHeader { MessageHeader::new(MessageType::Warn) }

/// Prints `[ERROR]` in red.
#[must_use]
pub fn error() -> MessageHeader { MessageHeader::new(MessageType::Error) }

/// Prints `[ERROR]` in bold intense red.
#[must_use]
pub fn critical() -> MessageHeader { MessageHeader::new(MessageType::Critical) }
