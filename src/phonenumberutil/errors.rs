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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Why an input could not be reduced to a canonical mobile number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NormalizationError {
    #[error("Phone number is empty")]
    EmptyInput,
    #[error("Phone number contains unsafe content")]
    UnsafeInput,
    #[error("Phone number has {0} digits, more than any valid format allows")]
    TooLong(usize),
    #[error("Phone number does not match any supported format")]
    StructuralMismatch,
    #[error("Prefix {0} does not belong to any mobile operator")]
    UnknownPrefix(u16),
}

/// One item of the error list produced by `validate_strict`.
#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Normalization(#[from] NormalizationError),
    #[error("Formatting characters are not allowed in strict mode")]
    FormattingCharacters,
    #[error("International format is not allowed")]
    InternationalNotAllowed,
    #[error("Phone number contains digits from an unsupported script")]
    UnsupportedDigits,
    #[error("Phone number does not match the custom pattern")]
    CustomPatternMismatch,
    #[error("{0}")]
    InvalidCustomPattern(#[from] InvalidRegexError),
}

/// Raised by the formatting functions for input that is not a valid number.
#[derive(Debug, PartialEq, Error)]
pub enum FormatError {
    #[error("Cannot format invalid phone number: {0}")]
    InvalidNumber(#[from] NormalizationError),
    #[error("{0}")]
    InvalidCustomPattern(#[from] InvalidRegexError),
}
