//! Listing and price types.

use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::money::{parse_amount, Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A listing price: the text shown to customers plus its parsed amount.
///
/// Construction validates the text, so any `Price` in a catalog or cart
/// can be totalled without failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    text: String,
    amount: i64,
}

impl Price {
    /// Parse a price string such as `"185 000"`.
    pub fn parse(text: impl Into<String>) -> Result<Self, CommerceError> {
        let text = text.into();
        let amount = parse_amount(&text)?;
        Ok(Self { text, amount })
    }

    /// The price as written in the catalog.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The whole amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The price as money in the given currency.
    pub fn to_money(&self, currency: Currency) -> Money {
        Money::new(self.amount, currency)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Price {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::parse(s)
    }
}

impl TryFrom<String> for Price {
    type Error = CommerceError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Price::parse(text)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.text
    }
}

/// An engine listing in the catalog.
///
/// Listings are defined when the catalog is built and never change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Vehicle brand (facet).
    pub brand: String,
    /// Model and engine designation.
    pub model: String,
    /// Engine displacement label, e.g. "2.5л" (facet).
    pub displacement: String,
    /// Power rating label.
    pub power: String,
    /// Production years the engine fits.
    pub year_range: String,
    /// Asking price.
    pub price: Price,
    /// Condition grade.
    pub condition: String,
    /// Mileage label.
    pub mileage: String,
    /// Warranty term.
    pub warranty: String,
}

impl Listing {
    /// "Brand Model" label used in notices and summaries.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_keeps_text() {
        let price = Price::parse("185 000").unwrap();
        assert_eq!(price.as_str(), "185 000");
        assert_eq!(price.amount(), 185_000);
        assert_eq!(price.to_string(), "185 000");
    }

    #[test]
    fn test_price_rejects_invalid() {
        assert!(Price::parse("free").is_err());
        assert!("".parse::<Price>().is_err());
    }

    #[test]
    fn test_price_serde_is_text() {
        let price: Price = serde_json::from_str("\"295 000\"").unwrap();
        assert_eq!(price.amount(), 295_000);
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"295 000\"");
        assert!(serde_json::from_str::<Price>("\"n/a\"").is_err());
    }

    #[test]
    fn test_listing_title() {
        let listing = Listing {
            id: ListingId::new(1),
            brand: "Toyota".to_string(),
            model: "Camry 2.5".to_string(),
            displacement: "2.5л".to_string(),
            power: "181 л.с.".to_string(),
            year_range: "2018-2021".to_string(),
            price: Price::parse("185 000").unwrap(),
            condition: "Отличное".to_string(),
            mileage: "45 000 км".to_string(),
            warranty: "6 месяцев".to_string(),
        };
        assert_eq!(listing.title(), "Toyota Camry 2.5");
    }
}
