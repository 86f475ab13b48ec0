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

/// Country calling code of Pakistan.
pub const COUNTRY_CODE: &'static str = "92";
pub const PLUS_SIGN: &'static str = "+";
/// `+92`, the international form of the country code.
pub const INTERNATIONAL_COUNTRY_CODE: &'static str = "+92";
/// `00` international dialling prefix followed by the country code.
pub const IDD_COUNTRY_CODE: &'static str = "0092";
/// Trunk prefix that starts every number in national form.
pub const NATIONAL_PREFIX: &'static str = "0";

/// Length of the canonical `0XXXXXXXXXX` form.
pub const NATIONAL_NUMBER_LENGTH: usize = 11;
pub const PREFIX_LENGTH: usize = 3;

/// A bare `92` is only read as a country code when at least this many
/// characters follow the country code's position, i.e. `92` + 10 digits.
pub const MIN_LENGTH_WITH_BARE_COUNTRY_CODE: usize = 12;

/// Hard ceiling applied by the sanitizer, regardless of validity.
pub const MAX_SANITIZED_LENGTH: usize = 30;
/// Longest admissible digit string: `0092` + prefix + subscriber.
pub const MAX_NORMALIZABLE_LENGTH: usize = 14;

pub const MIN_SUBSCRIBER_NUMBER: u32 = 1_000_000;
pub const MAX_SUBSCRIBER_NUMBER: u32 = 9_999_999;

/// Known-valid number used when random generation cannot produce one.
pub const FALLBACK_NUMBER: &'static str = "03001234567";

/// Tolerant shape used when none of the explicit prefixes match. Optional
/// plus, optional `92`/`0092`, optional trunk zero, then prefix and
/// subscriber.
pub const LOOSE_MOBILE_PATTERN: &'static str = r"^\+?(?:0{0,2}92)?0?(3\d{2})(\d{7})$";

pub const MULTIPLE_SPACES_PATTERN: &'static str = r" {2,}";

// Case-insensitive signatures of markup and script injection. A match
// anywhere in the input rejects it. The set is a denylist, not a parser.
pub const UNSAFE_INPUT_SIGNATURES: [&'static str; 8] = [
    // <script ...> and </script>
    r"<\s*/?\s*script",
    // javascript:, vbscript:, livescript:
    r"(?:java|vb|live)script\s*:",
    r"data\s*:\s*text/html",
    // onclick=, onerror =, ...
    r"\bon[a-z]+\s*=",
    r"\beval\s*\(",
    r"\bexpression\s*\(",
    // &lt; &gt;
    r"&(?:lt|gt);?",
    // &#60; &#x3c; &#62; &#x3e;
    r"&#(?:0*6[02]|x0*3[ce]);?",
];

/// Bidirectional overrides, isolates and marks, zero-width characters and
/// the byte order mark. All of them are invisible and can split a signature
/// so that a pattern no longer sees it.
pub const INVISIBLE_CHARS: [char; 17] = [
    '\u{061C}', '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}',
    '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
    '\u{2060}', '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}', '\u{FEFF}',
];

/// Characters with markup meaning that the sanitizer never lets through.
pub const MARKUP_CHARS: [char; 5] = ['<', '>', '"', '\'', '`'];
