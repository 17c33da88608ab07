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

use std::{collections::HashMap, hash::Hash};

use crate::SetColor;

/// A keyed color map, for applying consistent colors throughout a program:
/// map your own key type (an enum, a string, whatever identifies a styling
/// role) to a [SetColor] once, then look styles up by key at print time.
///
/// ```rust
/// use r3bl_term_color::{ColorPalette, NamedColor, SetColor, SgrCode};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Role {
///     Heading,
///     Detail,
/// }
///
/// let palette: ColorPalette<Role> = [
///     (Role::Heading, SetColor::fg(NamedColor::Red)),
///     (Role::Detail, SetColor::fg(NamedColor::Gray)),
/// ]
/// .into_iter()
/// .collect();
///
/// let heading = palette.set(&Role::Heading)?;
/// println!("{heading}heading text{}", SgrCode::Reset);
/// # Ok::<(), r3bl_term_color::PaletteError>(())
/// ```
///
/// The palette can be deactivated wholesale; an inactive palette hands out
/// the [placeholder](SetColor::placeholder) for every key, so call sites keep
/// working while producing unstyled output.
#[derive(Debug, Clone)]
pub struct ColorPalette<K> {
    entries: HashMap<K, SetColor>,
    active: bool,
}

impl<K: Eq + Hash> PartialEq for ColorPalette<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.active == other.active
    }
}

impl<K: Eq + Hash> Eq for ColorPalette<K> {}

/// Palette lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("no color is mapped to the given key")]
    KeyNotFound,
}

mod color_palette_impl {
    use super::*;

    impl<K> Default for ColorPalette<K> {
        fn default() -> Self {
            Self {
                entries: HashMap::new(),
                active: true,
            }
        }
    }

    impl<K: Eq + Hash> ColorPalette<K> {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        pub fn insert(&mut self, key: K, color: SetColor) -> Option<SetColor> {
            self.entries.insert(key, color)
        }

        #[must_use]
        pub fn key_exists(&self, key: &K) -> bool { self.entries.contains_key(key) }

        #[must_use]
        pub fn len(&self) -> usize { self.entries.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.entries.is_empty() }

        /// When false, every lookup returns the placeholder, which renders as
        /// nothing. Returns the previous value so callers can restore it.
        pub fn set_active(&mut self, active: bool) -> bool {
            let previous = self.active;
            self.active = active;
            previous
        }

        #[must_use]
        pub fn is_active(&self) -> bool { self.active }

        /// Retrieve the color mapped to the given key.
        ///
        /// # Errors
        ///
        /// Returns [`PaletteError::KeyNotFound`] if the key has no mapping,
        /// whether or not the palette is active.
        pub fn set(&self, key: &K) -> Result<SetColor, PaletteError> {
            let color = self.entries.get(key).ok_or(PaletteError::KeyNotFound)?;
            if self.active {
                Ok(*color)
            } else {
                Ok(SetColor::placeholder())
            }
        }

        pub fn iter(&self) -> impl Iterator<Item = (&K, &SetColor)> {
            self.entries.iter()
        }
    }

    impl<K: Eq + Hash> FromIterator<(K, SetColor)> for ColorPalette<K> {
        fn from_iter<I: IntoIterator<Item = (K, SetColor)>>(iter: I) -> Self {
            Self {
                entries: iter.into_iter().collect(),
                active: true,
            }
        }
    }
}
