//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (agorot, cents) to avoid
//! floating-point drift when summing cart lines. The remote catalog speaks
//! decimal numbers; conversion happens once, at the serde boundary, through
//! [`decimal`].

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    ILS,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "ILS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ILS => "ILS",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₪").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ILS => "\u{20aa}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "ILS" | "NIS" => Some(Currency::ILS),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A sale discount, as a whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: DiscountPercent = DiscountPercent(0);

    /// Create a discount, rejecting values above 100.
    pub fn new(percent: u8) -> Result<Self, CommerceError> {
        if percent > 100 {
            return Err(CommerceError::InvalidDiscount(percent as i64));
        }
        Ok(Self(percent))
    }

    /// The percentage as an integer.
    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Clamp any percentage into `0..=100`. Non-finite values become zero.
    pub fn saturating_from(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0).round() as u8)
    }
}

impl TryFrom<f64> for DiscountPercent {
    type Error = CommerceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(CommerceError::InvalidDiscount(value as i64));
        }
        Ok(Self(value.round() as u8))
    }
}

impl From<DiscountPercent> for u8 {
    fn from(d: DiscountPercent) -> u8 {
        d.0
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Serde adapter for discounts sent by the catalog and cart services.
///
/// `null` reads as no discount. An out-of-range value is clamped and logged
/// so one bad record cannot fail a whole listing.
pub mod lenient_discount {
    use super::DiscountPercent;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(discount: &DiscountPercent, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        discount.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DiscountPercent, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(DiscountPercent::ZERO);
        };
        Ok(DiscountPercent::try_from(raw).unwrap_or_else(|_| {
            let clamped = DiscountPercent::saturating_from(raw);
            tracing::warn!(discount = raw, clamped = clamped.get(), "discount out of range");
            clamped
        }))
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., agorot).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use grocer_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(12.90, Currency::ILS);
    /// assert_eq!(price.amount_cents, 1290);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₪49.90").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Format as a display string without symbol (e.g., "49.90").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Calculate a whole-percent share of this amount, rounded half away
    /// from zero.
    pub fn percent_of(&self, percent: DiscountPercent) -> Money {
        let scaled = self.amount_cents as i128 * percent.get() as i128;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money::new(rounded as i64, self.currency)
    }

    /// Sum an iterator of Money values, failing on mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(currency), |acc, m| {
            if m.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: m.currency.code().to_string(),
                });
            }
            acc.try_add(m).ok_or(CommerceError::Overflow)
        })
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .expect("Currency mismatch or overflow in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch or overflow in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.try_multiply(factor).expect("Overflow in multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter for prices sent as plain decimal numbers.
///
/// Values are read in the default storefront currency. Negative and
/// non-finite prices are rejected.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!("invalid price: {value}")));
        }
        Ok(Money::from_decimal(value, Currency::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(12.9, Currency::ILS);
        assert_eq!(m.amount_cents, 1290);

        let m = Money::from_decimal(0.1 + 0.2, Currency::ILS);
        assert_eq!(m.amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4990, Currency::ILS);
        assert_eq!(m.display(), "\u{20aa}49.90");
        assert_eq!(m.display_amount(), "49.90");

        let m = Money::new(5, Currency::USD);
        assert_eq!(m.display(), "$0.05");
    }

    #[test]
    fn test_money_percent_of() {
        let m = Money::new(10000, Currency::ILS);
        let twenty = DiscountPercent::new(20).unwrap();
        assert_eq!(m.percent_of(twenty).amount_cents, 2000);

        // 15% of 0.99 = 0.1485 -> rounds to 0.15
        let m = Money::new(99, Currency::ILS);
        let fifteen = DiscountPercent::new(15).unwrap();
        assert_eq!(m.percent_of(fifteen).amount_cents, 15);
    }

    #[test]
    fn test_money_try_sum() {
        let values = [Money::new(5000, Currency::ILS), Money::new(3000, Currency::ILS)];
        let total = Money::try_sum(values.iter(), Currency::ILS).unwrap();
        assert_eq!(total.amount_cents, 8000);

        let empty: [Money; 0] = [];
        assert!(Money::try_sum(empty.iter(), Currency::ILS).unwrap().is_zero());
    }

    #[test]
    fn test_discount_saturating() {
        assert_eq!(DiscountPercent::saturating_from(140.0).get(), 100);
        assert_eq!(DiscountPercent::saturating_from(-5.0).get(), 0);
        assert_eq!(DiscountPercent::saturating_from(f64::NAN), DiscountPercent::ZERO);
        assert_eq!(DiscountPercent::saturating_from(12.6).get(), 13);
    }

    #[test]
    fn test_money_try_sum_mismatch() {
        let values = [Money::new(5000, Currency::ILS), Money::new(3000, Currency::USD)];
        let err = Money::try_sum(values.iter(), Currency::ILS).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_money_overflow() {
        let m = Money::new(i64::MAX, Currency::ILS);
        assert!(m.try_multiply(2).is_none());
        assert!(m.try_add(&Money::new(1, Currency::ILS)).is_none());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let ils = Money::new(1000, Currency::ILS);
        let eur = Money::new(1000, Currency::EUR);
        let _ = ils + eur;
    }

    #[test]
    fn test_discount_bounds() {
        assert!(DiscountPercent::new(100).is_ok());
        assert!(DiscountPercent::new(101).is_err());
        assert!(DiscountPercent::try_from(-1.0).is_err());
        assert_eq!(DiscountPercent::try_from(12.6).unwrap().get(), 13);
    }

    #[test]
    fn test_decimal_serde() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "decimal")]
            price: Money,
        }

        let p: Priced = serde_json::from_str(r#"{"price": 7.5}"#).unwrap();
        assert_eq!(p.price, Money::new(750, Currency::ILS));
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"price":7.5}"#);

        assert!(serde_json::from_str::<Priced>(r#"{"price": -1}"#).is_err());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("ils"), Some(Currency::ILS));
        assert_eq!(Currency::from_code("NIS"), Some(Currency::ILS));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
