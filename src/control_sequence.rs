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

//! Terminal control sequences beyond text styling: cursor movement, screen
//! buffer switching, scrolling, and text modification. Like [SgrCode], every
//! variant renders its full escape sequence via [Display], so it can be
//! streamed inline:
//!
//! ```rust
//! use r3bl_term_color::ControlSequence;
//!
//! print!("{}", ControlSequence::CursorPosition { row: 1, col: 1 });
//! ```
//!
//! More info:
//! - <https://vt100.net/docs/vt100-ug/chapter3.html>
//! - <https://learn.microsoft.com/en-us/windows/console/console-virtual-terminal-sequences>
//!
//! [SgrCode]: crate::SgrCode

use std::fmt::{Display, Formatter, Result};

use crate::ansi_escape_codes::sgr_code_impl::CSI;

const ESC: &str = "\x1b";

/// One terminal control command. Counts are clamped by nothing; `0` is sent
/// as-is and most terminals treat it as `1`. Rows and columns are 1-based,
/// with origin at the top left, per VT100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSequence {
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    /// Beginning of the line `n` rows down.
    CursorNextLine(u16),
    /// Beginning of the line `n` rows up.
    CursorPreviousLine(u16),
    CursorPosition { row: u16, col: u16 },
    /// ESC 7 (DECSC).
    SaveCursor,
    /// ESC 8 (DECRC).
    RestoreCursor,
    ScrollUp(u16),
    ScrollDown(u16),
    /// Switch to the alternate screen buffer. Pair with
    /// [`ControlSequence::LeaveAlternateScreen`] before the program exits.
    EnterAlternateScreen,
    LeaveAlternateScreen,
    /// Insert blank characters at the cursor, shifting the rest of the line
    /// right (ICH).
    InsertChar(u16),
    /// Delete characters at the cursor, shifting the rest of the line left
    /// (DCH).
    DeleteChar(u16),
    /// Overwrite characters at the cursor with blanks, no shifting (ECH).
    EraseChar(u16),
    InsertLine(u16),
    DeleteLine(u16),
    ShowCursor,
    HideCursor,
    EnableCursorBlink,
    DisableCursorBlink,
    /// ESC ( 0 - switch to the DEC line-drawing character set. See
    /// [`LineCharacter`](crate::LineCharacter).
    SelectDecGraphics,
    /// ESC ( B - switch back to ASCII.
    SelectAscii,
    /// DSR: asks the terminal to report the cursor position on stdin as
    /// `ESC[{row};{col}R`. This crate only emits the request; reading the
    /// response is the caller's business.
    RequestCursorPosition,
    /// DA: asks the terminal to report its device attributes on stdin.
    RequestDeviceAttributes,
}

mod control_sequence_impl {
    use super::*;

    impl Display for ControlSequence {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                ControlSequence::CursorUp(n)           => write!(f, "{CSI}{n}A"),
                ControlSequence::CursorDown(n)         => write!(f, "{CSI}{n}B"),
                ControlSequence::CursorForward(n)      => write!(f, "{CSI}{n}C"),
                ControlSequence::CursorBack(n)         => write!(f, "{CSI}{n}D"),
                ControlSequence::CursorNextLine(n)     => write!(f, "{CSI}{n}E"),
                ControlSequence::CursorPreviousLine(n) => write!(f, "{CSI}{n}F"),
                ControlSequence::CursorPosition { row, col }
                                                       => write!(f, "{CSI}{row};{col}H"),
                ControlSequence::SaveCursor            => write!(f, "{ESC}7"),
                ControlSequence::RestoreCursor         => write!(f, "{ESC}8"),
                ControlSequence::ScrollUp(n)           => write!(f, "{CSI}{n}S"),
                ControlSequence::ScrollDown(n)         => write!(f, "{CSI}{n}T"),
                ControlSequence::EnterAlternateScreen  => write!(f, "{CSI}?1049h"),
                ControlSequence::LeaveAlternateScreen  => write!(f, "{CSI}?1049l"),
                ControlSequence::InsertChar(n)         => write!(f, "{CSI}{n}@"),
                ControlSequence::DeleteChar(n)         => write!(f, "{CSI}{n}P"),
                ControlSequence::EraseChar(n)          => write!(f, "{CSI}{n}X"),
                ControlSequence::InsertLine(n)         => write!(f, "{CSI}{n}L"),
                ControlSequence::DeleteLine(n)         => write!(f, "{CSI}{n}M"),
                ControlSequence::ShowCursor            => write!(f, "{CSI}?25h"),
                ControlSequence::HideCursor            => write!(f, "{CSI}?25l"),
                ControlSequence::EnableCursorBlink     => write!(f, "{CSI}?12h"),
                ControlSequence::DisableCursorBlink    => write!(f, "{CSI}?12l"),
                ControlSequence::SelectDecGraphics     => write!(f, "{ESC}(0"),
                ControlSequence::SelectAscii           => write!(f, "{ESC}(B"),
                ControlSequence::RequestCursorPosition => write!(f, "{CSI}6n"),
                ControlSequence::RequestDeviceAttributes => write!(f, "{CSI}0c"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cursor_movement() {
        assert_eq!(ControlSequence::CursorUp(1).to_string(), "\x1b[1A");
        assert_eq!(ControlSequence::CursorDown(3).to_string(), "\x1b[3B");
        assert_eq!(ControlSequence::CursorForward(12).to_string(), "\x1b[12C");
        assert_eq!(ControlSequence::CursorBack(2).to_string(), "\x1b[2D");
        assert_eq!(ControlSequence::CursorNextLine(1).to_string(), "\x1b[1E");
        assert_eq!(ControlSequence::CursorPreviousLine(1).to_string(), "\x1b[1F");
    }

    #[test]
    fn cursor_position_is_row_then_col() {
        assert_eq!(
            ControlSequence::CursorPosition { row: 5, col: 20 }.to_string(),
            "\x1b[5;20H"
        );
    }

    #[test]
    fn save_and_restore_cursor() {
        assert_eq!(ControlSequence::SaveCursor.to_string(), "\x1b7");
        assert_eq!(ControlSequence::RestoreCursor.to_string(), "\x1b8");
    }

    #[test]
    fn alternate_screen_buffer() {
        assert_eq!(
            ControlSequence::EnterAlternateScreen.to_string(),
            "\x1b[?1049h"
        );
        assert_eq!(
            ControlSequence::LeaveAlternateScreen.to_string(),
            "\x1b[?1049l"
        );
    }

    #[test]
    fn cursor_visibility_and_blink() {
        assert_eq!(ControlSequence::ShowCursor.to_string(), "\x1b[?25h");
        assert_eq!(ControlSequence::HideCursor.to_string(), "\x1b[?25l");
        assert_eq!(ControlSequence::EnableCursorBlink.to_string(), "\x1b[?12h");
        assert_eq!(ControlSequence::DisableCursorBlink.to_string(), "\x1b[?12l");
    }

    #[test]
    fn text_modification() {
        assert_eq!(ControlSequence::InsertChar(4).to_string(), "\x1b[4@");
        assert_eq!(ControlSequence::DeleteChar(4).to_string(), "\x1b[4P");
        assert_eq!(ControlSequence::EraseChar(4).to_string(), "\x1b[4X");
        assert_eq!(ControlSequence::InsertLine(2).to_string(), "\x1b[2L");
        assert_eq!(ControlSequence::DeleteLine(2).to_string(), "\x1b[2M");
    }

    #[test]
    fn charset_selection() {
        assert_eq!(ControlSequence::SelectDecGraphics.to_string(), "\x1b(0");
        assert_eq!(ControlSequence::SelectAscii.to_string(), "\x1b(B");
    }

    #[test]
    fn queries() {
        assert_eq!(
            ControlSequence::RequestCursorPosition.to_string(),
            "\x1b[6n"
        );
        assert_eq!(
            ControlSequence::RequestDeviceAttributes.to_string(),
            "\x1b[0c"
        );
    }
}
