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


use std::collections::{HashMap, HashSet};

use regex::{Regex, RegexSet, RegexSetBuilder};

use crate::phonenumberutil::{
    carriers::{CARRIERS, CarrierRecord},
    helper_constants::{
        INVISIBLE_CHARS, LOOSE_MOBILE_PATTERN, MARKUP_CHARS, MULTIPLE_SPACES_PATTERN,
        UNSAFE_INPUT_SIGNATURES,
    },
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Case-insensitive injection signatures. Any match marks the input
    /// unsafe.
    pub unsafe_input_signatures: RegexSet,

    /// Runs of two or more ordinary spaces.
    pub multiple_spaces_pattern: Regex,

    /// Fallback for inputs whose leading characters match none of the
    /// explicit rules. Captures the prefix and the subscriber number.
    pub loose_mobile_pattern: Regex,

    /// Invisible formatting characters removed by the sanitizer.
    pub invisible_chars: HashSet<char>,

    /// Markup characters removed by the sanitizer.
    pub markup_chars: HashSet<char>,

    /// Prefix to the single carrier that owns it.
    pub carrier_by_prefix: HashMap<u16, &'static CarrierRecord>,

    /// Uppercase carrier code to carrier.
    pub carrier_by_code: HashMap<&'static str, &'static CarrierRecord>,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_carrier_mappings(&mut self) {
        for carrier in &CARRIERS {
            self.carrier_by_code.insert(carrier.code, carrier);
            for prefix in carrier.prefixes() {
                if let Some(owner) = self.carrier_by_prefix.insert(prefix, carrier) {
                    let err_message = format!(
                        "Prefix {} is assigned to both {} and {}",
                        prefix, owner.code, carrier.code
                    );
                    log::error!("{}", err_message);
                    panic!("{}", err_message);
                }
            }
        }
    }

    pub fn new() -> Self {
        let mut instance = Self {
            unsafe_input_signatures: RegexSetBuilder::new(UNSAFE_INPUT_SIGNATURES)
                .case_insensitive(true)
                .build()
                .unwrap(),
            multiple_spaces_pattern: Regex::new(MULTIPLE_SPACES_PATTERN).unwrap(),
            loose_mobile_pattern: Regex::new(LOOSE_MOBILE_PATTERN).unwrap(),
            invisible_chars: INVISIBLE_CHARS.into_iter().collect(),
            markup_chars: MARKUP_CHARS.into_iter().collect(),
            carrier_by_prefix: HashMap::with_capacity(64),
            carrier_by_code: HashMap::with_capacity(CARRIERS.len()),
        };
        instance.initialize_carrier_mappings();
        instance
    }
}
