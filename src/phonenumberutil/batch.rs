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

//! Sequence-oriented operations. Every element is handled independently by
//! the single-number operations; outputs of the `*_many` functions line up
//! one-to-one with their inputs.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use super::{
    PhoneNumberFormat, options::BatchSummary, phonenumberutil::PhoneNumberUtil,
};
use crate::phonenumber::{CanonicalNumber, DetectedOperator, ParsedPhoneNumber};

impl PhoneNumberUtil {
    pub fn validate_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<bool> {
        inputs.iter().map(|raw| self.validate(raw.as_ref())).collect()
    }

    pub fn normalize_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Option<CanonicalNumber>> {
        inputs.iter().map(|raw| self.normalize(raw.as_ref()).ok()).collect()
    }

    pub fn parse_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Option<ParsedPhoneNumber>> {
        inputs.iter().map(|raw| self.parse(raw.as_ref())).collect()
    }

    /// `None` stands in for every input that does not format.
    pub fn format_many<S: AsRef<str>>(
        &self,
        inputs: &[S],
        number_format: PhoneNumberFormat,
    ) -> Vec<Option<String>> {
        inputs
            .iter()
            .map(|raw| self.format(raw.as_ref(), number_format).ok())
            .collect()
    }

    pub fn detect_operator_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Option<DetectedOperator>> {
        inputs.iter().map(|raw| self.detect_operator(raw.as_ref())).collect()
    }

    /// Canonical forms of the valid inputs, each number once, in the order
    /// first seen. Invalid inputs are dropped.
    pub fn dedupe<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<String> {
        let mut seen = HashSet::with_capacity(inputs.len());
        let unique = self
            .normalize_many(inputs)
            .into_iter()
            .flatten()
            .filter(|canonical| seen.insert(canonical.clone()))
            .map(|canonical| canonical.national())
            .collect::<Vec<_>>();
        debug!("Deduplicated {} inputs to {} numbers", inputs.len(), unique.len());
        unique
    }

    /// Canonical forms of the valid inputs in ascending order. Duplicates
    /// are kept, invalid inputs are dropped.
    pub fn sort_numbers<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<String> {
        let mut numbers = self
            .normalize_many(inputs)
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        numbers.sort();
        numbers.iter().map(CanonicalNumber::national).collect()
    }

    /// Canonical forms of the valid inputs keyed by carrier code, each
    /// group in input order.
    pub fn group_by_operator<S: AsRef<str>>(&self, inputs: &[S]) -> BTreeMap<&'static str, Vec<String>> {
        let mut groups = BTreeMap::<&'static str, Vec<String>>::new();
        for canonical in self.normalize_many(inputs).into_iter().flatten() {
            if let Some(carrier) = self.resolve_operator(canonical.prefix()) {
                groups.entry(carrier.code).or_default().push(canonical.national());
            }
        }
        groups
    }

    /// Canonical forms of the inputs that belong to the given carrier.
    pub fn filter_by_operator<S: AsRef<str>>(&self, inputs: &[S], code: &str) -> Vec<String> {
        let Some(carrier) = self.carrier_by_code(code) else {
            debug!("Unknown carrier code '{}', nothing matches", code);
            return Vec::new();
        };
        self.normalize_many(inputs)
            .into_iter()
            .flatten()
            .filter(|canonical| carrier.contains_prefix(canonical.prefix()))
            .map(|canonical| canonical.national())
            .collect()
    }

    pub fn summarize<S: AsRef<str>>(&self, inputs: &[S]) -> BatchSummary {
        let mut summary = BatchSummary {
            total: inputs.len(),
            ..Default::default()
        };
        for detected in self.detect_operator_many(inputs) {
            match detected {
                Some(detected) => {
                    summary.valid += 1;
                    *summary.by_operator.entry(detected.code).or_default() += 1;
                }
                None => summary.invalid += 1,
            }
        }
        summary
    }
}
