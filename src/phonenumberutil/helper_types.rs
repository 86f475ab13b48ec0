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

use super::enums::NormalizationRule;

/// A national-form candidate and the rule that produced it. The candidate
/// has not been checked for length or prefix yet.
#[derive(Debug)]
pub struct CandidateNumber<'a> {
    pub national: Cow<'a, str>,
    /// Kept for tracing why a candidate was rejected.
    pub rule: NormalizationRule,
}

impl<'a> CandidateNumber<'a> {
    pub fn new(national: Cow<'a, str>, rule: NormalizationRule) -> Self {
        Self { national, rule }
    }
}
