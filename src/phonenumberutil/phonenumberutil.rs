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

use log::trace;

use super::{
    PhoneNumberFormat,
    carriers::{CARRIERS, CarrierRecord},
    errors::{FormatError, NormalizationError, ValidationError},
    helper_constants::{MAX_NORMALIZABLE_LENGTH, NATIONAL_PREFIX, PLUS_SIGN},
    helper_functions::{self, render, rewrite_to_national, split_national},
    options::{StrictValidationResult, ValidationOptions},
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    i18n::urdu_digits::{has_unsupported_digits, to_urdu_digits},
    interfaces::MatcherApi,
    macros::ok_or_trace,
    phonenumber::{CanonicalNumber, DetectedOperator, ParsedPhoneNumber},
    regex_based_matcher::RegexBasedMatcher,
    string_util::digits_with_leading_plus,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, NormalizationError>;

pub struct PhoneNumberUtil {
    /// Matcher for caller-supplied patterns.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(super) reg_exps: PhoneNumberRegExpsAndMappings,
}

impl PhoneNumberUtil {
    pub(crate) fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
        }
    }

    /// Cleans input for further processing; see the crate docs for the
    /// exact steps. Never fails, empty input gives an empty string.
    pub fn sanitize(&self, input: &str) -> String {
        helper_functions::sanitize(&self.reg_exps, input)
    }

    /// Whether the input is free of known injection signatures.
    pub fn is_safe(&self, input: &str) -> bool {
        helper_functions::is_safe(&self.reg_exps, input)
    }

    /// Sanitizes and reduces input to ASCII digits with an optional leading
    /// plus, rejecting empty, unsafe and overlong input on the way.
    fn digits_only(&self, raw: &str) -> Result<String> {
        if raw.trim().is_empty() {
            return Err(NormalizationError::EmptyInput);
        }
        if !self.is_safe(raw) {
            return Err(NormalizationError::UnsafeInput);
        }
        let sanitized = self.sanitize(raw);
        if sanitized.is_empty() {
            return Err(NormalizationError::EmptyInput);
        }
        // Invisible characters may have been hiding a signature.
        if !self.is_safe(&sanitized) {
            return Err(NormalizationError::UnsafeInput);
        }
        let digits = digits_with_leading_plus(&sanitized);
        if digits.len() > MAX_NORMALIZABLE_LENGTH {
            return Err(NormalizationError::TooLong(digits.len()));
        }
        Ok(digits)
    }

    /// Splits input into prefix and subscriber number without asking whether
    /// any carrier owns the prefix.
    fn normalize_structure(&self, raw: &str) -> Result<(u16, String)> {
        let digits = self.digits_only(raw)?;
        let candidate = rewrite_to_national(&self.reg_exps, &digits)?;
        let (prefix, subscriber) = split_national(&candidate.national).inspect_err(|_| {
            trace!("{:?} candidate '{}' has no national shape", candidate.rule, candidate.national)
        })?;
        Ok((prefix, subscriber.to_owned()))
    }

    /// Reduces any supported rendering of a mobile number to its canonical
    /// prefix and subscriber number.
    ///
    /// Accepted shapes, tried in this order: `+92…`, `0092…`, bare `92…`
    /// (12 digits or more), `0…`, then a tolerant fallback. Punctuation is
    /// ignored and Urdu-Arabic digits are accepted.
    pub fn normalize(&self, raw: &str) -> Result<CanonicalNumber> {
        let (prefix, subscriber) = self.normalize_structure(raw)?;
        if !self.is_valid_prefix(prefix) {
            return Err(NormalizationError::UnknownPrefix(prefix));
        }
        Ok(CanonicalNumber::new(prefix, subscriber))
    }

    pub fn validate(&self, raw: &str) -> bool {
        ok_or_trace!(self.normalize(raw), raw, false);
        true
    }

    /// Validates with per-call options and reports every problem found.
    pub fn validate_strict(&self, raw: &str, options: &ValidationOptions) -> StrictValidationResult {
        if raw.trim().is_empty() {
            return StrictValidationResult::from_errors(vec![NormalizationError::EmptyInput.into()], None);
        }
        let sanitized = self.sanitize(raw);
        if !self.is_safe(raw) || !self.is_safe(&sanitized) {
            return StrictValidationResult::from_errors(vec![NormalizationError::UnsafeInput.into()], None);
        }
        if sanitized.is_empty() {
            return StrictValidationResult::from_errors(vec![NormalizationError::EmptyInput.into()], None);
        }
        let digits = digits_with_leading_plus(&sanitized);

        // Digits of other scripts are dropped like punctuation, so they only
        // explain a failure and never cause one.
        let unsupported_digits = has_unsupported_digits(raw);
        let mut errors = Vec::new();
        if options.strict_mode && digits != sanitized {
            errors.push(ValidationError::FormattingCharacters);
        }
        if !options.allow_international && digits.starts_with(PLUS_SIGN) {
            errors.push(ValidationError::InternationalNotAllowed);
        }

        let parsed = match &options.custom_pattern {
            Some(pattern) => match self.matcher_api.match_custom_pattern(&digits, pattern) {
                Ok(true) => self.parse_without_operator(raw),
                Ok(false) => {
                    if unsupported_digits {
                        errors.push(ValidationError::UnsupportedDigits);
                    }
                    errors.push(ValidationError::CustomPatternMismatch);
                    None
                }
                Err(err) => {
                    errors.push(err.into());
                    None
                }
            },
            None => match self.normalize(raw) {
                Ok(canonical) => Some(self.build_parsed(raw, canonical)),
                Err(err) => {
                    if unsupported_digits {
                        errors.push(ValidationError::UnsupportedDigits);
                    }
                    errors.push(err.into());
                    None
                }
            },
        };
        StrictValidationResult::from_errors(errors, parsed)
    }

    fn build_parsed(&self, raw: &str, canonical: CanonicalNumber) -> ParsedPhoneNumber {
        let prefix = canonical.prefix();
        ParsedPhoneNumber {
            raw: raw.to_owned(),
            formatted: render(prefix, canonical.subscriber(), PhoneNumberFormat::National),
            international: render(prefix, canonical.subscriber(), PhoneNumberFormat::International),
            operator: self.resolve_operator(prefix),
            prefix,
            subscriber_number: canonical.subscriber().to_owned(),
        }
    }

    /// Parse result for numbers admitted by a custom pattern. The operator
    /// is left empty; `None` if the input has no 11-digit national shape.
    fn parse_without_operator(&self, raw: &str) -> Option<ParsedPhoneNumber> {
        let (prefix, subscriber) = self.normalize_structure(raw).ok()?;
        Some(ParsedPhoneNumber {
            raw: raw.to_owned(),
            formatted: render(prefix, &subscriber, PhoneNumberFormat::National),
            international: render(prefix, &subscriber, PhoneNumberFormat::International),
            operator: None,
            prefix,
            subscriber_number: subscriber,
        })
    }

    pub fn parse(&self, raw: &str) -> Option<ParsedPhoneNumber> {
        let canonical = ok_or_trace!(self.normalize(raw), raw, None);
        Some(self.build_parsed(raw, canonical))
    }

    /// Formats a valid number. Fails loudly for anything that does not
    /// normalize; an unknown style is impossible here, see
    /// [`PhoneNumberUtil::format_with_style`].
    pub fn format(&self, raw: &str, number_format: PhoneNumberFormat) -> std::result::Result<String, FormatError> {
        let canonical = self.normalize(raw)?;
        Ok(render(canonical.prefix(), canonical.subscriber(), number_format))
    }

    /// Like [`PhoneNumberUtil::format`] with the style given by name.
    /// Unknown names format as national.
    pub fn format_with_style(&self, raw: &str, style: &str) -> std::result::Result<String, FormatError> {
        self.format(raw, PhoneNumberFormat::from_style_name(style))
    }

    /// Formats through a caller-supplied template.
    ///
    /// With `custom_pattern` the digit-only input must match it and the
    /// prefix is not checked against the carrier table; without it the
    /// input must normalize as usual.
    pub fn format_custom<F>(
        &self,
        raw: &str,
        template: F,
        custom_pattern: Option<&str>,
    ) -> std::result::Result<String, FormatError>
    where
        F: Fn(u16, &str) -> String,
    {
        let Some(pattern) = custom_pattern else {
            let canonical = self.normalize(raw)?;
            return Ok(template(canonical.prefix(), canonical.subscriber()));
        };
        let digits = self.digits_only(raw)?;
        if !self.matcher_api.match_custom_pattern(&digits, pattern)? {
            trace!("'{}' does not match custom pattern '{}'", raw, pattern);
            return Err(NormalizationError::StructuralMismatch.into());
        }
        let (prefix, subscriber) = self.normalize_structure(raw)?;
        Ok(template(prefix, &subscriber))
    }

    /// Never fails: invalid input comes back unchanged.
    pub fn ensure_format(&self, raw: &str, number_format: PhoneNumberFormat) -> String {
        self.format(raw, number_format).unwrap_or_else(|err| {
            trace!("Keeping '{}' as is: {}", raw, err);
            raw.to_owned()
        })
    }

    /// Formats, then writes the digits as Urdu-Arabic glyphs.
    pub fn format_in_urdu(&self, raw: &str, number_format: PhoneNumberFormat) -> std::result::Result<String, FormatError> {
        let formatted = self.format(raw, number_format)?;
        Ok(to_urdu_digits(&formatted).into_owned())
    }

    /// National rendering with the first three subscriber digits hidden,
    /// `0300 ***4567`.
    pub fn mask(&self, raw: &str) -> Option<String> {
        let canonical = ok_or_trace!(self.normalize(raw), raw, None);
        let mut buf = itoa::Buffer::new();
        let prefix = buf.format(canonical.prefix());
        let visible = &canonical.subscriber()[3..];
        Some(fast_cat::concat_str!(NATIONAL_PREFIX, prefix, " ***", visible))
    }

    pub fn detect_operator(&self, raw: &str) -> Option<DetectedOperator> {
        let canonical = ok_or_trace!(self.normalize(raw), raw, None);
        let operator = self.resolve_operator(canonical.prefix())?;
        Some(DetectedOperator::new(canonical.prefix(), operator))
    }

    /// Whether the input is a valid number of the carrier with the given
    /// code (case-insensitive).
    pub fn is_operator(&self, raw: &str, code: &str) -> bool {
        self.detect_operator(raw)
            .is_some_and(|detected| detected.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Whether both inputs are valid and denote the same number.
    pub fn is_number_match(&self, first: &str, second: &str) -> bool {
        match (self.normalize(first), self.normalize(second)) {
            (Ok(first), Ok(second)) => first == second,
            _ => false,
        }
    }

    pub fn resolve_operator(&self, prefix: u16) -> Option<&'static CarrierRecord> {
        self.reg_exps.carrier_by_prefix.get(&prefix).copied()
    }

    pub fn is_valid_prefix(&self, prefix: u16) -> bool {
        self.reg_exps.carrier_by_prefix.contains_key(&prefix)
    }

    /// Looks a carrier up by code, ignoring ASCII case.
    pub fn carrier_by_code(&self, code: &str) -> Option<&'static CarrierRecord> {
        self.reg_exps
            .carrier_by_code
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    pub fn carriers(&self) -> &'static [CarrierRecord] {
        &CARRIERS
    }

    /// Every prefix of the carrier, ascending.
    pub fn prefixes_for(&self, code: &str) -> Option<Vec<u16>> {
        self.carrier_by_code(code)
            .map(|carrier| carrier.prefixes().collect())
    }
}
