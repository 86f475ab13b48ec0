use crate::PhoneNumberFormat;

use super::get_phone_util;

const INPUTS: [&str; 6] = [
    "0300 1234567",
    "not a number",
    "+923001234567",
    "0345-123-4567",
    "۰۳۱۱۱۲۳۴۵۶۷",
    "02001234567",
];

#[test]
fn batch_outputs_line_up_with_inputs() {
    let phone_util = get_phone_util();
    assert_eq!(
        phone_util.validate_many(&INPUTS),
        [true, false, true, true, true, false]
    );

    let parsed = phone_util.parse_many(&INPUTS);
    assert_eq!(parsed.len(), INPUTS.len());
    assert_eq!(parsed[3].as_ref().unwrap().raw, "0345-123-4567");
    assert!(parsed[5].is_none());

    assert_eq!(
        phone_util.format_many(&INPUTS, PhoneNumberFormat::Dashes),
        [
            Some("0300-123-4567".to_owned()),
            None,
            Some("0300-123-4567".to_owned()),
            Some("0345-123-4567".to_owned()),
            Some("0311-123-4567".to_owned()),
            None,
        ]
    );

    let codes = phone_util
        .detect_operator_many(&INPUTS)
        .into_iter()
        .map(|detected| detected.map(|d| d.code))
        .collect::<Vec<_>>();
    assert_eq!(codes, [Some("JAZZ"), None, Some("JAZZ"), Some("TELENOR"), Some("ZONG"), None]);
}

#[test]
fn batch_accepts_owned_strings() {
    let phone_util = get_phone_util();
    let inputs = vec!["03391234567".to_owned(), String::new()];
    let normalized = phone_util.normalize_many(&inputs);
    assert_eq!(normalized[0].as_ref().unwrap().national(), "03391234567");
    assert!(normalized[1].is_none());
    assert!(phone_util.validate_many::<String>(&[]).is_empty());
}

#[test]
fn dedupe_keeps_first_seen_order() {
    let phone_util = get_phone_util();
    assert_eq!(
        phone_util.dedupe(&INPUTS),
        ["03001234567", "03451234567", "03111234567"]
    );
}

#[test]
fn sort_numbers_orders_canonical_forms() {
    let phone_util = get_phone_util();
    assert_eq!(
        phone_util.sort_numbers(&INPUTS),
        ["03001234567", "03001234567", "03111234567", "03451234567"]
    );
}

#[test]
fn group_and_filter_by_operator() {
    let phone_util = get_phone_util();
    let groups = phone_util.group_by_operator(&INPUTS);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups["JAZZ"], ["03001234567", "03001234567"]);
    assert_eq!(groups["TELENOR"], ["03451234567"]);
    assert_eq!(groups["ZONG"], ["03111234567"]);

    assert_eq!(phone_util.filter_by_operator(&INPUTS, "zong"), ["03111234567"]);
    assert!(phone_util.filter_by_operator(&INPUTS, "UFONE").is_empty());
    assert!(phone_util.filter_by_operator(&INPUTS, "unknown").is_empty());
}

#[test]
fn summarize_counts_valid_inputs_per_operator() {
    let phone_util = get_phone_util();
    let summary = phone_util.summarize(&INPUTS);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.valid, 4);
    assert_eq!(summary.invalid, 2);
    assert_eq!(summary.by_operator.get("JAZZ"), Some(&2));
    assert_eq!(summary.by_operator.get("TELENOR"), Some(&1));
    assert_eq!(summary.by_operator.get("ZONG"), Some(&1));
    assert_eq!(summary.by_operator.get("SCO"), None);
}
