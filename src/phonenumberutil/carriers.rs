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

/// A mobile operator and the 3-digit prefixes assigned to it.
///
/// Prefix sets of different records never overlap and their union is the
/// full set of valid mobile prefixes.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CarrierRecord {
    /// Short uppercase key, `JAZZ`.
    pub code: &'static str,
    pub display_name: &'static str,
    /// Inclusive `(first, last)` prefix ranges.
    prefix_ranges: &'static [(u16, u16)],
}

impl CarrierRecord {
    const fn new(
        code: &'static str,
        display_name: &'static str,
        prefix_ranges: &'static [(u16, u16)],
    ) -> Self {
        Self { code, display_name, prefix_ranges }
    }

    pub fn contains_prefix(&self, prefix: u16) -> bool {
        self.prefix_ranges
            .iter()
            .any(|&(first, last)| first <= prefix && prefix <= last)
    }

    /// Every prefix of this carrier in ascending order.
    pub fn prefixes(&self) -> impl Iterator<Item = u16> + '_ {
        self.prefix_ranges.iter().flat_map(|&(first, last)| first..=last)
    }

    pub fn prefix_count(&self) -> usize {
        self.prefix_ranges
            .iter()
            .map(|&(first, last)| usize::from(last - first) + 1)
            .sum()
    }
}

/// All supported carriers. The first record is the default used when a
/// requested carrier code is unknown.
pub static CARRIERS: [CarrierRecord; 6] = [
    CarrierRecord::new("JAZZ", "Jazz", &[(300, 309), (320, 329)]),
    CarrierRecord::new("ZONG", "Zong", &[(310, 319), (370, 370)]),
    CarrierRecord::new("UFONE", "Ufone", &[(330, 338)]),
    CarrierRecord::new("ONIC", "Onic", &[(339, 339)]),
    CarrierRecord::new("TELENOR", "Telenor", &[(340, 349)]),
    CarrierRecord::new("SCO", "SCOM", &[(355, 355)]),
];

#[cfg(test)]
mod tests {
    use super::CARRIERS;

    #[test]
    fn prefixes_are_in_mobile_range() {
        for carrier in &CARRIERS {
            assert!(carrier.prefix_count() > 0, "{} has no prefixes", carrier.code);
            for prefix in carrier.prefixes() {
                assert!((300..=399).contains(&prefix), "{} owns {}", carrier.code, prefix);
            }
        }
    }

    #[test]
    fn prefix_sets_are_disjoint() {
        for (i, first) in CARRIERS.iter().enumerate() {
            for second in CARRIERS.iter().skip(i + 1) {
                for prefix in first.prefixes() {
                    assert!(
                        !second.contains_prefix(prefix),
                        "{} and {} both own {}", first.code, second.code, prefix
                    );
                }
            }
        }
        for prefix in 300..=399u16 {
            let owners = CARRIERS.iter().filter(|c| c.contains_prefix(prefix)).count();
            assert!(owners <= 1);
        }
    }

    #[test]
    fn codes_are_uppercase_and_unique() {
        for (i, carrier) in CARRIERS.iter().enumerate() {
            assert_eq!(carrier.code, carrier.code.to_ascii_uppercase());
            assert!(CARRIERS.iter().skip(i + 1).all(|other| other.code != carrier.code));
        }
    }
}
