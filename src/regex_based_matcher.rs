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


use log::error;

use crate::{interfaces, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(32) }
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_custom_pattern(&self, number: &str, pattern: &str) -> Result<bool, InvalidRegexError> {
        // Wrapped so that alternations and unanchored user patterns are
        // checked against the whole number, not a substring of it.
        let anchored = fast_cat::concat_str!("^(?:", pattern, ")$");
        match self.cache.get_regex(&anchored) {
            Ok(regexp) => Ok(regexp.is_match(number)),
            Err(err) => {
                error!("Invalid custom pattern! {}", pattern);
                Err(err)
            }
        }
    }
}
