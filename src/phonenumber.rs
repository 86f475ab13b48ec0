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

use std::fmt;

use crate::phonenumberutil::{carriers::CarrierRecord, helper_constants::NATIONAL_PREFIX};

/// A mobile number reduced to its 3-digit prefix and 7-digit subscriber
/// part. `0` + prefix + subscriber is always 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalNumber {
    prefix: u16,
    subscriber: String,
}

impl CanonicalNumber {
    /// Caller guarantees `prefix` is in 300..=399 and `subscriber` is
    /// exactly seven ASCII digits.
    pub(crate) fn new(prefix: u16, subscriber: String) -> Self {
        debug_assert!((300..=399).contains(&prefix));
        debug_assert!(subscriber.len() == 7 && subscriber.bytes().all(|b| b.is_ascii_digit()));
        Self { prefix, subscriber }
    }

    pub fn prefix(&self) -> u16 {
        self.prefix
    }

    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    /// The 11-digit national form, `03001234567`.
    pub fn national(&self) -> String {
        let mut buf = itoa::Buffer::new();
        fast_cat::concat_str!(NATIONAL_PREFIX, buf.format(self.prefix), &self.subscriber)
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", NATIONAL_PREFIX, self.prefix, self.subscriber)
    }
}

/// Result of a successful `parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPhoneNumber {
    /// Input exactly as the caller passed it.
    pub raw: String,
    /// National rendering, `0300 1234567`.
    pub formatted: String,
    /// International rendering, `+92 300 1234567`.
    pub international: String,
    /// Absent only when validation was driven by a custom pattern.
    pub operator: Option<&'static CarrierRecord>,
    pub prefix: u16,
    pub subscriber_number: String,
}

impl ParsedPhoneNumber {
    /// `None` for numbers admitted by a custom pattern, whose prefix need
    /// not belong to any carrier.
    pub fn canonical(&self) -> Option<CanonicalNumber> {
        self.operator
            .map(|_| CanonicalNumber::new(self.prefix, self.subscriber_number.clone()))
    }
}

/// Carrier resolved for a number, together with the prefix that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedOperator {
    pub code: &'static str,
    pub name: &'static str,
    pub prefix: u16,
    pub operator: &'static CarrierRecord,
}

impl DetectedOperator {
    pub(crate) fn new(prefix: u16, operator: &'static CarrierRecord) -> Self {
        Self {
            code: operator.code,
            name: operator.display_name,
            prefix,
            operator,
        }
    }
}
