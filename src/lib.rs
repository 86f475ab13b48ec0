mod interfaces;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod phonenumber;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use phonenumberutil::{
    PHONE_NUMBER_UTIL,
    PhoneNumberFormat,
    carriers::{CARRIERS, CarrierRecord},
    errors::{FormatError, NormalizationError, ValidationError},
    options::{BatchSummary, StrictValidationResult, ValidationOptions},
    phonenumberutil::PhoneNumberUtil,
};
pub use phonenumber::{CanonicalNumber, DetectedOperator, ParsedPhoneNumber};
pub use regexp_cache::InvalidRegexError;
