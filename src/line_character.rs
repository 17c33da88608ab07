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

use std::fmt::{Display, Formatter, Result};

/// The DEC line-drawing characters with friendlier names. These bytes only
/// render as box-drawing glyphs after switching the terminal to the DEC
/// graphics character set; in ASCII mode they are ordinary lowercase letters.
///
/// ```rust
/// use r3bl_term_color::{ControlSequence, LineCharacter};
///
/// print!(
///     "{}{}{}{}{}",
///     ControlSequence::SelectDecGraphics,
///     LineCharacter::CornerTopLeft,
///     LineCharacter::LineHorizontal,
///     LineCharacter::CornerTopRight,
///     ControlSequence::SelectAscii,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCharacter {
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    Junction4Way,
    Junction3WayLeft,
    Junction3WayRight,
    Junction3WayTop,
    Junction3WayBottom,
    LineHorizontal,
    LineVertical,
}

mod line_character_impl {
    use super::*;

    impl LineCharacter {
        /// The byte sent to the terminal while the DEC graphics charset is
        /// active.
        #[rustfmt::skip]
        #[must_use]
        pub const fn byte(self) -> u8 {
            match self {
                LineCharacter::CornerBottomRight  => 0x6a,
                LineCharacter::CornerTopRight     => 0x6b,
                LineCharacter::CornerTopLeft      => 0x6c,
                LineCharacter::CornerBottomLeft   => 0x6d,
                LineCharacter::Junction4Way       => 0x6e,
                LineCharacter::LineHorizontal     => 0x71,
                LineCharacter::Junction3WayLeft   => 0x74,
                LineCharacter::Junction3WayRight  => 0x75,
                LineCharacter::Junction3WayBottom => 0x76,
                LineCharacter::Junction3WayTop    => 0x77,
                LineCharacter::LineVertical       => 0x78,
            }
        }
    }

    impl Display for LineCharacter {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.byte() as char)
        }
    }
}
