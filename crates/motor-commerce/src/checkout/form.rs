//! Order form fields and required-field validation.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Phone,
    Email,
    Address,
    Comment,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Address,
        FormField::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Address => "address",
            FormField::Comment => "comment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormField::Name => "Имя и фамилия",
            FormField::Phone => "Телефон",
            FormField::Email => "Email",
            FormField::Address => "Адрес доставки",
            FormField::Comment => "Комментарий к заказу",
        }
    }

    /// Whether submission needs this field filled in.
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Phone | FormField::Address)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown form field: {s}"))
    }
}

/// Customer details entered at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderForm {
    /// Customer name (required).
    #[serde(default)]
    pub name: String,
    /// Contact phone (required).
    #[serde(default)]
    pub phone: String,
    /// Email (optional).
    #[serde(default)]
    pub email: String,
    /// Delivery address (required).
    #[serde(default)]
    pub address: String,
    /// Free-form comment (optional).
    #[serde(default)]
    pub comment: String,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
            FormField::Comment => &self.comment,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Email => self.email = value,
            FormField::Address => self.address = value,
            FormField::Comment => self.comment = value,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are empty or whitespace only.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Check that every required field is filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete { missing })
        }
    }

    /// Check if every field is empty.
    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
