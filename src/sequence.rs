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

use smallstr::SmallString;

pub mod sizing {
    use super::*;

    /// Longest common sequence is a truecolor background
    /// (`ESC [ 48 ; 2 ; rrr ; ggg ; bbb m` = 19 bytes). Sequences that stay
    /// under this size live on the stack; anything larger spills to the heap.
    pub const MAX_INLINE_SEQUENCE_SIZE: usize = 32;
    pub type InlineSequenceStorage = SmallString<[u8; MAX_INLINE_SEQUENCE_SIZE]>;
}

/// An owned ANSI escape sequence. This is just a string with inline (stack
/// allocated) storage, so building one per formatting request stays cheap.
///
/// It can be streamed into any output via [Display], or inspected as a `&str`
/// via [`AsRef<str>`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    inner: sizing::InlineSequenceStorage,
}

mod sequence_impl {
    use super::*;

    impl Sequence {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.inner.is_empty() }

        pub fn push_str(&mut self, text: &str) { self.inner.push_str(text); }
    }

    impl AsRef<str> for Sequence {
        fn as_ref(&self) -> &str { self.inner.as_str() }
    }

    impl From<&str> for Sequence {
        fn from(text: &str) -> Self {
            Self {
                inner: sizing::InlineSequenceStorage::from_str(text),
            }
        }
    }

    impl From<String> for Sequence {
        fn from(text: String) -> Self {
            Self {
                inner: sizing::InlineSequenceStorage::from_string(text),
            }
        }
    }

    /// Writing into an in-memory buffer cannot fail.
    impl Write for Sequence {
        fn write_str(&mut self, text: &str) -> Result {
            self.inner.push_str(text);
            Ok(())
        }
    }

    impl Display for Sequence {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(self.inner.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_sequence_renders_nothing() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn write_macro_accumulates() {
        let mut seq = Sequence::new();
        let _ = write!(seq, "\x1b[{}m", 1);
        let _ = write!(seq, "\x1b[{}m", 22);
        assert_eq!(seq.as_ref(), "\x1b[1m\x1b[22m");
    }

    #[test]
    fn from_str_round_trips() {
        let seq = Sequence::from("\x1b[0m");
        assert_eq!(seq.to_string(), "\x1b[0m");
    }
}
