use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A strictly positive monetary amount, validated at the input boundary.
///
/// Free-form text becomes an `Amount` here or not at all: the core engine
/// never sees a zero, negative, or unparseable figure from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn parse(s: &str) -> Option<Self> {
        let value = Decimal::from_str(s.trim()).ok()?;
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid amount: {}", s)))
    }
}

/// A four-digit login pin. Not a security boundary, but still only
/// constructible from exactly four decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(u16);

impl Pin {
    pub fn new(value: u16) -> Option<Self> {
        if value <= 9999 { Some(Self(value)) } else { None }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok().and_then(Self::new)
    }
}

impl<'de> Deserialize<'de> for Pin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pin::parse(&s).ok_or_else(|| serde::de::Error::custom("Invalid pin: expected four digits"))
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, Pin};
    use rust_decimal::Decimal;

    #[test]
    fn amount_accepts_only_positive_decimals() {
        assert_eq!(Amount::parse("200").map(Amount::get), Some(Decimal::new(200, 0)));
        assert_eq!(Amount::parse(" 0.01 ").map(Amount::get), Some(Decimal::new(1, 2)));
        assert_eq!(Amount::parse("0"), None);
        assert_eq!(Amount::parse("-50"), None);
        assert_eq!(Amount::parse("12abc"), None);
        assert_eq!(Amount::parse(""), None);
    }

    #[test]
    fn pin_requires_exactly_four_digits() {
        assert_eq!(Pin::parse("1111"), Some(Pin::new(1111).unwrap()));
        assert_eq!(Pin::parse("0042"), Some(Pin::new(42).unwrap()));
        assert_eq!(Pin::parse("123"), None);
        assert_eq!(Pin::parse("12345"), None);
        assert_eq!(Pin::parse("12a4"), None);
        assert_eq!(Pin::parse("-111"), None);
    }

    #[test]
    fn pin_new_rejects_values_wider_than_four_digits() {
        assert!(Pin::new(9999).is_some());
        assert!(Pin::new(10000).is_none());
    }
}
