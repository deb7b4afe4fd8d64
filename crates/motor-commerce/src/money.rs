//! Money type and the canonical price parse/format pair.
//!
//! Listing prices are whole amounts written with thousands separators
//! (`"185 000"`). Every total in the engine goes through [`parse_amount`] and
//! [`Money::display`], so line totals and order totals cannot drift apart.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters accepted as thousands separators besides whitespace.
const THOUSANDS_SEPARATORS: [char; 2] = [',', '\''];

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Digit grouping separator used when displaying amounts.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::RUB => '\u{a0}',
            Currency::USD => ',',
            Currency::EUR => '.',
        }
    }

    /// Whether the symbol follows the amount ("690 000 ₽") or leads it ("$690,000").
    pub fn symbol_after(&self) -> bool {
        !matches!(self, Currency::USD)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
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

/// Parse a price string such as `"185 000"` into a whole amount.
///
/// Whitespace of any kind and `,` / `'` separators are skipped; every other
/// character must be an ASCII digit. The conversion is exact and rejects
/// values that do not fit in an `i64`.
pub fn parse_amount(text: &str) -> Result<i64, CommerceError> {
    let invalid = || CommerceError::InvalidPrice(text.to_string());

    let mut amount: i64 = 0;
    let mut seen_digit = false;
    for ch in text.chars() {
        if ch.is_whitespace() || THOUSANDS_SEPARATORS.contains(&ch) {
            continue;
        }
        let digit = ch.to_digit(10).ok_or_else(invalid)?;
        amount = amount
            .checked_mul(10)
            .and_then(|a| a.checked_add(i64::from(digit)))
            .ok_or_else(invalid)?;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(invalid());
    }
    Ok(amount)
}

/// Group the digits of `amount` in threes with `separator`.
pub fn group_digits(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// A monetary value with currency.
///
/// Amounts are whole units of the currency; catalog prices carry no
/// fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a display price (e.g., "185 000") in the given currency.
    ///
    /// ```
    /// use motor_commerce::money::{Currency, Money};
    /// let price = Money::parse("185 000", Currency::RUB).unwrap();
    /// assert_eq!(price.amount, 185_000);
    /// ```
    pub fn parse(text: &str, currency: Currency) -> Result<Self, CommerceError> {
        parse_amount(text).map(|amount| Self::new(amount, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Add an amount in the same currency, saturating at the numeric bounds.
    pub fn saturating_add(&self, amount: i64) -> Money {
        Money::new(self.amount.saturating_add(amount), self.currency)
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(
            self.amount.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Format as a display string (e.g., "690 000 ₽" or "$690,000").
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        if self.currency.symbol_after() {
            format!("{} {}", amount, self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), amount)
        }
    }

    /// Format the grouped amount without symbol (e.g., "690 000").
    pub fn display_amount(&self) -> String {
        group_digits(self.amount, self.currency.group_separator())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_spaces() {
        assert_eq!(parse_amount("185 000").unwrap(), 185_000);
        assert_eq!(parse_amount("1\u{a0}250\u{a0}000").unwrap(), 1_250_000);
        assert_eq!(parse_amount("1\u{202f}000").unwrap(), 1_000);
    }

    #[test]
    fn test_parse_with_commas_and_apostrophes() {
        assert_eq!(parse_amount("320,000").unwrap(), 320_000);
        assert_eq!(parse_amount("1'000'000").unwrap(), 1_000_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("12.50").is_err());
        assert!(parse_amount("-100").is_err());
        assert!(parse_amount("100 ₽").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = parse_amount("99999999999999999999").unwrap_err();
        assert_eq!(
            err,
            CommerceError::InvalidPrice("99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ' '), "0");
        assert_eq!(group_digits(999, ' '), "999");
        assert_eq!(group_digits(1000, ' '), "1 000");
        assert_eq!(group_digits(690_000, ' '), "690 000");
        assert_eq!(group_digits(1_234_567, ','), "1,234,567");
        assert_eq!(group_digits(-45_000, ' '), "-45 000");
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(690_000, Currency::RUB).display(), "690\u{a0}000 \u{20bd}");
        assert_eq!(Money::new(690_000, Currency::USD).display(), "$690,000");
        assert_eq!(Money::new(1_500, Currency::EUR).display(), "1.500 \u{20ac}");
    }

    #[test]
    fn test_money_times_and_add() {
        let price = Money::new(185_000, Currency::RUB);
        assert_eq!(price.times(2).amount, 370_000);
        assert_eq!(price.saturating_add(320_000).amount, 505_000);
        assert_eq!(Money::new(i64::MAX, Currency::RUB).times(2).amount, i64::MAX);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let rub = Money::new(1000, Currency::RUB);
        let usd = Money::new(1000, Currency::USD);
        assert!(rub.try_add(&usd).is_none());
        assert_eq!(rub.try_add(&rub).unwrap().amount, 2000);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("rub"), Some(Currency::RUB));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
