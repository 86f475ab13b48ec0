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

use std::borrow::Cow;

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(| s | Cow::Borrowed(s)),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Cuts the string down to at most `max_chars` characters. Counts chars,
/// not bytes, so multi-byte input is never split inside a code point.
pub fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((byte_idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(byte_idx);
    }
}

/// Keeps ASCII digits and a plus sign that appears before the first digit.
/// Everything else is formatting noise and is dropped.
pub fn digits_with_leading_plus(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_digit() {
            result.push(c);
        } else if c == '+' && result.is_empty() {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{digits_with_leading_plus, strip_cow_prefix, truncate_chars};

    #[test]
    fn test_usage() {
        let str_to_strip = Cow::Owned("test0:test".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "test0");
        assert_eq!(stripped, Some(Cow::Owned(":test".to_owned())));

        let str_to_strip = Cow::Owned("test:test0".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "test0");
        assert_eq!(stripped, None);

        let stripped = strip_cow_prefix(Cow::Borrowed("+923001234567"), "+92");
        assert_eq!(stripped, Some(Cow::Borrowed("3001234567")));
    }

    #[test]
    fn truncate_counts_chars() {
        let mut s = "۰۳۰۰".to_owned();
        truncate_chars(&mut s, 2);
        assert_eq!(s, "۰۳");

        let mut s = "short".to_owned();
        truncate_chars(&mut s, 30);
        assert_eq!(s, "short");
    }

    #[test]
    fn keeps_only_leading_plus() {
        assert_eq!(digits_with_leading_plus("+92 (300) 123-4567"), "+923001234567");
        assert_eq!(digits_with_leading_plus("(+92) 300.1234567"), "+923001234567");
        assert_eq!(digits_with_leading_plus("0300+1234567"), "03001234567");
        assert_eq!(digits_with_leading_plus("++92300"), "+92300");
        assert_eq!(digits_with_leading_plus("abc"), "");
    }
}
