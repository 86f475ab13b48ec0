/// Conversion between Urdu-Arabic (Extended Arabic-Indic) and ASCII digits.
pub mod urdu_digits;
