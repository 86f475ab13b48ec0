// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Character-for-character mapping between the ten Urdu-Arabic digit glyphs
//! (`۰`..`۹`, U+06F0..U+06F9) and ASCII `0`..`9`.
//!
//! This is a table lookup, not a numeral parser: every other character,
//! including digits from other scripts, passes through untouched.

use std::borrow::Cow;

use dec_from_char::DecimalExtended;

/// Urdu-Arabic digits indexed by their value.
pub const URDU_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

const URDU_ZERO: u32 = 0x06F0;

/// Returns the value of an Urdu-Arabic digit glyph.
fn urdu_digit_value(c: char) -> Option<u32> {
    let code = c as u32;
    if (URDU_ZERO..URDU_ZERO + 10).contains(&code) {
        Some(code - URDU_ZERO)
    } else {
        None
    }
}

pub fn is_urdu_digit(c: char) -> bool {
    urdu_digit_value(c).is_some()
}

/// Replaces each Urdu-Arabic digit with its ASCII counterpart.
///
/// Returns `Cow::Borrowed` when the input contains no Urdu digits.
pub fn to_ascii_digits(s: &str) -> Cow<'_, str> {
    if !has_non_ascii_digits(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| match urdu_digit_value(c) {
                Some(value) => char::from(b'0' + value as u8),
                None => c,
            })
            .collect(),
    )
}

/// Replaces each ASCII digit with its Urdu-Arabic counterpart.
pub fn to_urdu_digits(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    URDU_DIGITS[(c as u8 - b'0') as usize]
                } else {
                    c
                }
            })
            .collect(),
    )
}

/// Whether any Urdu-Arabic digit glyph is present.
pub fn has_non_ascii_digits(s: &str) -> bool {
    s.chars().any(is_urdu_digit)
}

/// Whether the string mixes ASCII and Urdu-Arabic digits.
pub fn has_mixed_digits(s: &str) -> bool {
    has_non_ascii_digits(s) && s.chars().any(|c| c.is_ascii_digit())
}

/// Whether the string carries decimal digits from a script this crate does
/// not transliterate, such as Arabic-Indic or Devanagari.
///
/// Such digits are dropped during normalization, so callers asking for
/// itemized errors are told about them explicitly.
pub fn has_unsupported_digits(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_decimal_utf8() && !c.is_ascii_digit() && !is_urdu_digit(c))
}
