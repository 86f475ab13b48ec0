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

use log::warn;
use rand::{Rng, seq::SliceRandom};

use super::{
    PhoneNumberFormat,
    carriers::{CARRIERS, CarrierRecord},
    helper_constants::{FALLBACK_NUMBER, MAX_SUBSCRIBER_NUMBER, MIN_SUBSCRIBER_NUMBER},
    helper_functions::render,
    phonenumberutil::PhoneNumberUtil,
};

impl PhoneNumberUtil {
    /// Random valid number, rendered in the given style.
    ///
    /// `carrier_code` picks the carrier (case-insensitive); `None` picks one
    /// at random and an unknown code falls back to the first carrier. The
    /// result always validates.
    pub fn generate_random(&self, carrier_code: Option<&str>, number_format: PhoneNumberFormat) -> String {
        let mut rng = rand::thread_rng();
        self.generate_with_rng(&mut rng, carrier_code, number_format)
    }

    pub fn generate_random_many(
        &self,
        count: usize,
        carrier_code: Option<&str>,
        number_format: PhoneNumberFormat,
    ) -> Vec<String> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| self.generate_with_rng(&mut rng, carrier_code, number_format))
            .collect()
    }

    fn pick_carrier<R: Rng>(&self, rng: &mut R, carrier_code: Option<&str>) -> &'static CarrierRecord {
        match carrier_code {
            Some(code) => self.carrier_by_code(code).unwrap_or_else(|| {
                warn!("Unknown carrier code '{}', generating for {}", code, CARRIERS[0].code);
                &CARRIERS[0]
            }),
            None => CARRIERS.choose(rng).unwrap_or(&CARRIERS[0]),
        }
    }

    fn generate_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        carrier_code: Option<&str>,
        number_format: PhoneNumberFormat,
    ) -> String {
        let carrier = self.pick_carrier(rng, carrier_code);
        let prefixes = carrier.prefixes().collect::<Vec<_>>();
        let subscriber = rng.gen_range(MIN_SUBSCRIBER_NUMBER..=MAX_SUBSCRIBER_NUMBER);

        let generated = prefixes.choose(rng).map(|&prefix| {
            let mut buf = itoa::Buffer::new();
            render(prefix, buf.format(subscriber), number_format)
        });
        match generated {
            Some(number) if self.validate(&number) => number,
            _ => {
                warn!("Generated number for {} did not validate, using fallback", carrier.code);
                self.ensure_format(FALLBACK_NUMBER, number_format)
            }
        }
    }
}
