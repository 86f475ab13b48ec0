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

use std::collections::BTreeMap;

use crate::{phonenumber::ParsedPhoneNumber, phonenumberutil::errors::ValidationError};

/// Per-call switches for `validate_strict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject any character other than digits and a leading plus sign.
    pub strict_mode: bool,
    /// Accept numbers written with a leading plus sign.
    pub allow_international: bool,
    /// Replaces the built-in rules entirely. The pattern is matched against
    /// the whole digit-only input and no operator lookup is done.
    pub custom_pattern: Option<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            allow_international: true,
            custom_pattern: None,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn allow_international(mut self, allow_international: bool) -> Self {
        self.allow_international = allow_international;
        self
    }

    pub fn custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_pattern = Some(pattern.into());
        self
    }
}

/// Outcome of `validate_strict`. `is_valid` is true exactly when `errors`
/// is empty.
#[derive(Debug, PartialEq)]
pub struct StrictValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub parsed: Option<ParsedPhoneNumber>,
}

impl StrictValidationResult {
    pub(crate) fn from_errors(errors: Vec<ValidationError>, parsed: Option<ParsedPhoneNumber>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            parsed: if errors.is_empty() { parsed } else { None },
            errors,
        }
    }

    /// Human readable messages, one per error.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|err| err.to_string()).collect()
    }
}

/// Counts over a batch of inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Carrier code to number of valid inputs it owns.
    pub by_operator: BTreeMap<&'static str, usize>,
}
