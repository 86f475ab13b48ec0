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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Output styles for a valid number. Each is a fixed template over the
/// 3-digit prefix and the 7-digit subscriber number; the examples below
/// are for `03001234567`.
///
/// Style names parse case-insensitively (`"E164".parse()`), and
/// [`PhoneNumberFormat::from_style_name`] falls back to
/// [`PhoneNumberFormat::National`] for names it does not know.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    EnumIter, EnumString, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PhoneNumberFormat {
    /// **National format.** `0300 1234567`
    #[default]
    National,
    /// **International format.** `+92 300 1234567`
    International,
    /// **E.164 format.** No separators: `+923001234567`
    E164,
    /// **Compact format.** The canonical national digits: `03001234567`
    Compact,
    /// `0300.123.4567`
    Dots,
    /// `0300-123-4567`
    Dashes,
    /// `(0300) 1234567`
    Parentheses,
}

/// Structural shapes recognised while rewriting input to national form.
///
/// Rules are tried in declaration order and the first one that applies
/// wins, so `+92`, `0092` and `92` are peeled off before a leading `0` is
/// taken as the trunk prefix, and the loose pattern only sees what is left.
/// Do not reorder.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationRule {
    /// `+92 300 1234567`
    InternationalPlus,
    /// `0092 300 1234567`
    InternationalDoubleZero,
    /// `923001234567`, only with at least 12 digits so that a national
    /// number starting with `92` is not misread.
    BareCountryCode,
    /// `03001234567`
    National,
    /// Anything else the tolerant pattern accepts, e.g. `3001234567`.
    Loose,
}

impl PhoneNumberFormat {
    /// Resolves a style name, never failing: unknown names mean `National`.
    pub fn from_style_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}
