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

use bitflags::bitflags;

use crate::SgrCode;

bitflags! {
    /// Text attribute flags that can accompany a color change. Flags are
    /// independent and combinable with bitwise union:
    ///
    /// ```rust
    /// use r3bl_term_color::FormatFlag;
    ///
    /// let flags = FormatFlag::BOLD | FormatFlag::UNDERLINE;
    /// assert!(flags.contains(FormatFlag::BOLD));
    /// assert!(!flags.contains(FormatFlag::INVERT));
    /// ```
    ///
    /// Each set flag has a reset counterpart that clears just that attribute
    /// (rendered as SGR 22/24/27), so a single value can express "make this
    /// bold and stop underlining".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlag: u8 {
        const BOLD            = 1 << 0;
        const RESET_BOLD      = 1 << 1;
        const INVERT          = 1 << 2;
        const RESET_INVERT    = 1 << 3;
        const UNDERLINE       = 1 << 4;
        const RESET_UNDERLINE = 1 << 5;
    }
}

mod format_flag_impl {
    use super::*;

    impl FormatFlag {
        /// No special formatting.
        pub const NONE: Self = Self::empty();

        /// Bitwise union of two flag sets. Same as `self | other`.
        #[must_use]
        pub const fn merge(self, other: Self) -> Self { self.union(other) }
    }

    /// Writes the SGR sequence of every contained flag, in the fixed order
    /// bold, reset-bold, underline, reset-underline, invert, reset-invert.
    /// When a flag and its reset counterpart are both present, the reset is
    /// written last and therefore wins.
    impl Display for FormatFlag {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if self.contains(FormatFlag::BOLD) {
                write!(f, "{}", SgrCode::Bold)?;
            }
            if self.contains(FormatFlag::RESET_BOLD) {
                write!(f, "{}", SgrCode::ResetBold)?;
            }
            if self.contains(FormatFlag::UNDERLINE) {
                write!(f, "{}", SgrCode::Underline)?;
            }
            if self.contains(FormatFlag::RESET_UNDERLINE) {
                write!(f, "{}", SgrCode::ResetUnderline)?;
            }
            if self.contains(FormatFlag::INVERT) {
                write!(f, "{}", SgrCode::Invert)?;
            }
            if self.contains(FormatFlag::RESET_INVERT) {
                write!(f, "{}", SgrCode::ResetInvert)?;
            }
            Ok(())
        }
    }
}
