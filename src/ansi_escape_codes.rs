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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

/// One SGR (Select Graphic Rendition) command. Each variant renders the full
/// `ESC [ ... m` byte string via [Display], so a variant can be streamed
/// directly into any output as an inline manipulator:
///
/// ```rust
/// use r3bl_term_color::SgrCode;
///
/// assert_eq!(
///     format!("{}important{}", SgrCode::Bold, SgrCode::ResetBold),
///     "\x1b[1mimportant\x1b[22m"
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Overline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hidden,
    Strikethrough,
    /// SGR 22 clears both bold and dim; there is no narrower code.
    ResetBold,
    ResetUnderline,
    ResetInvert,
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                      => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                   => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline                => write!(f, "{CSI}4{SGR}"),
                SgrCode::SlowBlink                => write!(f, "{CSI}5{SGR}"),
                SgrCode::RapidBlink               => write!(f, "{CSI}6{SGR}"),
                SgrCode::Invert                   => write!(f, "{CSI}7{SGR}"),
                SgrCode::Hidden                   => write!(f, "{CSI}8{SGR}"),
                SgrCode::Strikethrough            => write!(f, "{CSI}9{SGR}"),
                SgrCode::ResetBold                => write!(f, "{CSI}22{SGR}"),
                SgrCode::ResetUnderline           => write!(f, "{CSI}24{SGR}"),
                SgrCode::ResetInvert              => write!(f, "{CSI}27{SGR}"),
                SgrCode::Overline                 => write!(f, "{CSI}53{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}
