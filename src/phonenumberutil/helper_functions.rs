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

use log::trace;
use strum::IntoEnumIterator;

use crate::{
    i18n::urdu_digits::to_ascii_digits,
    macros::owned_from_cow_or,
    phonenumberutil::errors::NormalizationError,
    string_util::{strip_cow_prefix, truncate_chars},
};

use super::{
    PhoneNumberFormat,
    enums::NormalizationRule,
    helper_constants::{
        COUNTRY_CODE, IDD_COUNTRY_CODE, INTERNATIONAL_COUNTRY_CODE, MAX_SANITIZED_LENGTH,
        MIN_LENGTH_WITH_BARE_COUNTRY_CODE, NATIONAL_NUMBER_LENGTH, NATIONAL_PREFIX, PREFIX_LENGTH,
    },
    helper_types::CandidateNumber,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};

/// Cleans arbitrary input without judging whether it is a phone number.
///
/// Trims, transliterates Urdu-Arabic digits, drops invisible, markup and
/// control characters (tabs and line breaks become spaces), collapses runs
/// of spaces and finally cuts the result to `MAX_SANITIZED_LENGTH` chars.
pub(super) fn sanitize(reg_exps: &PhoneNumberRegExpsAndMappings, input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let transliterated = owned_from_cow_or!(to_ascii_digits(trimmed), trimmed.to_owned());

    let mut cleaned = String::with_capacity(transliterated.len());
    for c in transliterated.chars() {
        if reg_exps.invisible_chars.contains(&c) || reg_exps.markup_chars.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            cleaned.push(' ');
        } else if !c.is_control() {
            cleaned.push(c);
        }
    }

    if let Cow::Owned(s) = reg_exps.multiple_spaces_pattern.replace_all(&cleaned, " ") {
        cleaned = s;
    }
    let mut cleaned = cleaned.trim().to_owned();
    truncate_chars(&mut cleaned, MAX_SANITIZED_LENGTH);
    let trimmed_len = cleaned.trim_end().len();
    cleaned.truncate(trimmed_len);
    cleaned
}

/// Empty input is safe; otherwise no injection signature may match.
pub(super) fn is_safe(reg_exps: &PhoneNumberRegExpsAndMappings, input: &str) -> bool {
    input.is_empty() || !reg_exps.unsafe_input_signatures.is_match(input)
}

/// Prepends the trunk prefix to what remains after a country code.
fn national_from_rest(rest: Cow<'_, str>) -> Cow<'static, str> {
    Cow::Owned(fast_cat::concat_str!(NATIONAL_PREFIX, &rest))
}

/// Applies a single rule to a digit-only string (ASCII digits, optional
/// leading plus). Returns `None` when the rule does not apply.
pub(super) fn apply_normalization_rule<'a>(
    reg_exps: &PhoneNumberRegExpsAndMappings,
    rule: NormalizationRule,
    digits: &'a str,
) -> Option<Cow<'a, str>> {
    match rule {
        NormalizationRule::InternationalPlus => {
            strip_cow_prefix(Cow::Borrowed(digits), INTERNATIONAL_COUNTRY_CODE).map(national_from_rest)
        }
        NormalizationRule::InternationalDoubleZero => {
            strip_cow_prefix(Cow::Borrowed(digits), IDD_COUNTRY_CODE).map(national_from_rest)
        }
        NormalizationRule::BareCountryCode => {
            if digits.len() < MIN_LENGTH_WITH_BARE_COUNTRY_CODE {
                return None;
            }
            strip_cow_prefix(Cow::Borrowed(digits), COUNTRY_CODE).map(national_from_rest)
        }
        NormalizationRule::National => {
            digits.starts_with(NATIONAL_PREFIX).then_some(Cow::Borrowed(digits))
        }
        NormalizationRule::Loose => {
            let captures = reg_exps.loose_mobile_pattern.captures(digits)?;
            Some(Cow::Owned(fast_cat::concat_str!(
                NATIONAL_PREFIX,
                captures.get(1)?.as_str(),
                captures.get(2)?.as_str()
            )))
        }
    }
}

/// Rewrites a digit-only string to a national-form candidate using the
/// first rule that applies.
pub(super) fn rewrite_to_national<'a>(
    reg_exps: &PhoneNumberRegExpsAndMappings,
    digits: &'a str,
) -> Result<CandidateNumber<'a>, NormalizationError> {
    for rule in NormalizationRule::iter() {
        if let Some(national) = apply_normalization_rule(reg_exps, rule, digits) {
            trace!("'{}' rewritten by {:?} rule to '{}'", digits, rule, national);
            return Ok(CandidateNumber::new(national, rule));
        }
    }
    trace!("No normalization rule applies to '{}'", digits);
    Err(NormalizationError::StructuralMismatch)
}

/// Splits an 11-digit national candidate into prefix and subscriber
/// number. Checks shape only, not whether a carrier owns the prefix.
pub(super) fn split_national(national: &str) -> Result<(u16, &str), NormalizationError> {
    if national.len() != NATIONAL_NUMBER_LENGTH
        || !national.bytes().all(|b| b.is_ascii_digit())
        || !national.starts_with(NATIONAL_PREFIX)
    {
        return Err(NormalizationError::StructuralMismatch);
    }
    let prefix_digits = &national[1..1 + PREFIX_LENGTH];
    if prefix_digits.starts_with('0') {
        return Err(NormalizationError::StructuralMismatch);
    }
    let prefix = prefix_digits
        .parse::<u16>()
        .map_err(|_| NormalizationError::StructuralMismatch)?;
    Ok((prefix, &national[1 + PREFIX_LENGTH..]))
}

/// Renders prefix and subscriber number in one of the fixed styles.
///
/// `subscriber` must be the 7-digit subscriber number.
pub(super) fn render(prefix: u16, subscriber: &str, number_format: PhoneNumberFormat) -> String {
    let mut buf = itoa::Buffer::new();
    let prefix = buf.format(prefix);
    let (head, tail) = subscriber.split_at(3);

    match number_format {
        PhoneNumberFormat::National => {
            fast_cat::concat_str!(NATIONAL_PREFIX, prefix, " ", subscriber)
        }
        PhoneNumberFormat::International => {
            fast_cat::concat_str!(INTERNATIONAL_COUNTRY_CODE, " ", prefix, " ", subscriber)
        }
        PhoneNumberFormat::E164 => {
            fast_cat::concat_str!(INTERNATIONAL_COUNTRY_CODE, prefix, subscriber)
        }
        PhoneNumberFormat::Compact => {
            fast_cat::concat_str!(NATIONAL_PREFIX, prefix, subscriber)
        }
        PhoneNumberFormat::Dots => {
            fast_cat::concat_str!(NATIONAL_PREFIX, prefix, ".", head, ".", tail)
        }
        PhoneNumberFormat::Dashes => {
            fast_cat::concat_str!(NATIONAL_PREFIX, prefix, "-", head, "-", tail)
        }
        PhoneNumberFormat::Parentheses => {
            fast_cat::concat_str!("(", NATIONAL_PREFIX, prefix, ") ", subscriber)
        }
    }
}
