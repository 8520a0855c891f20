//! ISO 4217 currencies.
//!
//! A small static table. Each [`Currency`] is a `'static` record and
//! compares equal only to itself.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::prelude::*;

/// Error returned when a currency code is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("unknown currency code: {0:?}")]
    UnknownCode(String),
}

/// A currency and the countries that use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{code}")]
pub struct Currency {
    code: &'static str,
    numeric_code: u16,
    minor_unit: u8,
    name: &'static str,
    country_codes: &'static [&'static str],
}

pub const AUD: Currency = Currency {
    code: "AUD",
    numeric_code: 36,
    minor_unit: 2,
    name: "Australian Dollar",
    country_codes: &["AU", "CX", "CC", "HM", "KI", "NR", "NF", "TV"],
};

pub const CAD: Currency = Currency {
    code: "CAD",
    numeric_code: 124,
    minor_unit: 2,
    name: "Canadian Dollar",
    country_codes: &["CA"],
};

pub const CHF: Currency = Currency {
    code: "CHF",
    numeric_code: 756,
    minor_unit: 2,
    name: "Swiss Franc",
    country_codes: &["CH", "LI"],
};

pub const EUR: Currency = Currency {
    code: "EUR",
    numeric_code: 978,
    minor_unit: 2,
    name: "Euro",
    country_codes: &[
        "AX", "AD", "AT", "BE", "CY", "EE", "FI", "FR", "GF", "TF", "DE", "GR", "GP", "VA", "IE",
        "IT", "LV", "LT", "LU", "MT", "MQ", "YT", "MC", "ME", "NL", "PT", "RE", "BL", "MF", "PM",
        "SM", "SK", "SI", "ES",
    ],
};

pub const GBP: Currency = Currency {
    code: "GBP",
    numeric_code: 826,
    minor_unit: 2,
    name: "Great Britain Pound",
    country_codes: &["GB"],
};

pub const JPY: Currency = Currency {
    code: "JPY",
    numeric_code: 392,
    minor_unit: 0,
    name: "Japanese Yen",
    country_codes: &["JP"],
};

pub const NZD: Currency = Currency {
    code: "NZD",
    numeric_code: 554,
    minor_unit: 2,
    name: "New Zealand Dollar",
    country_codes: &["NZ", "CK", "NU", "PN", "TK"],
};

pub const USD: Currency = Currency {
    code: "USD",
    numeric_code: 840,
    minor_unit: 2,
    name: "US Dollar",
    country_codes: &[
        "US", "AS", "BQ", "IO", "EC", "SV", "GU", "HT", "MH", "FM", "MP", "PW", "PA", "PR", "TL",
        "TC", "UM", "VG", "VI",
    ],
};

/// Currency assumed when an amount does not name one.
pub const DEFAULT_CURRENCY: Currency = AUD;

const ALL: [Currency; 8] = [AUD, CAD, CHF, EUR, GBP, JPY, NZD, USD];

impl Currency {
    /// Every known currency, ordered by code.
    pub const fn all() -> &'static [Self] {
        &ALL
    }

    /// Looks up a currency by its three-letter code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL.iter()
            .copied()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn from_numeric_code(numeric_code: u16) -> Option<Self> {
        ALL.iter()
            .copied()
            .find(|c| c.numeric_code == numeric_code)
    }

    /// ISO 4217 alphabetic code.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// ISO 4217 three-digit numeric code.
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Number of digits after the decimal separator.
    pub const fn minor_unit(&self) -> u8 {
        self.minor_unit
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// ISO 3166 codes of the countries using this currency.
    ///
    /// Returns a fresh vector; changing it does not touch the table.
    pub fn country_codes(&self) -> Vec<&'static str> {
        self.country_codes.to_vec()
    }

    pub fn is_used_in(&self, country_code: &str) -> bool {
        self.country_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country_code))
    }
}

impl Default for Currency {
    fn default() -> Self {
        DEFAULT_CURRENCY
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| CurrencyError::UnknownCode(s.to_owned()))
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        struct TestCase {
            currency: Currency,
            code: &'static str,
            numeric_code: u16,
            minor_unit: u8,
            countries: usize,
        }

        let cases = [
            TestCase {
                currency: AUD,
                code: "AUD",
                numeric_code: 36,
                minor_unit: 2,
                countries: 8,
            },
            TestCase {
                currency: CAD,
                code: "CAD",
                numeric_code: 124,
                minor_unit: 2,
                countries: 1,
            },
            TestCase {
                currency: CHF,
                code: "CHF",
                numeric_code: 756,
                minor_unit: 2,
                countries: 2,
            },
            TestCase {
                currency: EUR,
                code: "EUR",
                numeric_code: 978,
                minor_unit: 2,
                countries: 34,
            },
            TestCase {
                currency: GBP,
                code: "GBP",
                numeric_code: 826,
                minor_unit: 2,
                countries: 1,
            },
            TestCase {
                currency: JPY,
                code: "JPY",
                numeric_code: 392,
                minor_unit: 0,
                countries: 1,
            },
            TestCase {
                currency: NZD,
                code: "NZD",
                numeric_code: 554,
                minor_unit: 2,
                countries: 5,
            },
            TestCase {
                currency: USD,
                code: "USD",
                numeric_code: 840,
                minor_unit: 2,
                countries: 19,
            },
        ];

        assert_eq!(Currency::all().len(), cases.len());
        for case in &cases {
            let c = case.currency;
            assert_eq!(c.code(), case.code);
            assert_eq!(c.to_string(), case.code);
            assert_eq!(c.numeric_code(), case.numeric_code, "{}", case.code);
            assert_eq!(c.minor_unit(), case.minor_unit, "{}", case.code);
            assert_eq!(c.country_codes().len(), case.countries, "{}", case.code);
            assert!(!c.name().is_empty());
            assert_eq!(Currency::from_code(case.code), Some(c));
            assert_eq!(Currency::from_numeric_code(case.numeric_code), Some(c));
        }
    }

    #[test]
    fn test_all_is_sorted_by_code() {
        let codes: Vec<_> = Currency::all().iter().map(Currency::code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_default() {
        assert_eq!(DEFAULT_CURRENCY, AUD);
        assert_eq!(Currency::default(), AUD);
    }

    #[test]
    fn test_from_code_ignores_case() {
        assert_eq!(Currency::from_code("nzd"), Some(NZD));
        assert_eq!(Currency::from_code("Eur"), Some(EUR));
        assert_eq!(Currency::from_code("XYZ"), None);
        assert_eq!(Currency::from_code(""), None);
        assert_eq!(Currency::from_numeric_code(0), None);
    }

    #[test]
    fn test_country_codes_are_a_copy() {
        let mut codes = AUD.country_codes();
        codes.clear();
        assert_eq!(AUD.country_codes().first(), Some(&"AU"));
        assert!(AUD.is_used_in("cx"));
        assert!(GBP.is_used_in("GB"));
        assert!(!JPY.is_used_in("US"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("chf".parse::<Currency>(), Ok(CHF));
        assert_eq!(" USD ".parse::<Currency>(), Ok(USD));
        assert_eq!(
            "Dollars".parse::<Currency>(),
            Err(CurrencyError::UnknownCode("Dollars".to_owned()))
        );
    }

    #[test]
    fn test_serde() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Price {
            amount: i64,
            currency: Currency,
        }

        let price = Price { amount: 1250, currency: JPY };
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"amount":1250,"currency":"JPY"}"#);
        assert_eq!(serde_json::from_str::<Price>(&json).unwrap(), price);

        let lower: Currency = serde_json::from_str(r#""eur""#).unwrap();
        assert_eq!(lower, EUR);

        let err = serde_json::from_str::<Currency>(r#""ABC""#).unwrap_err();
        assert!(err.to_string().contains("unknown currency code"));
    }
}
