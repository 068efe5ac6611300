//! Item types.
//!
//! Items are the generic sample resource of the service. Unlike articles,
//! their ids are assigned by the store and they support full CRUD.

// Item fields mirror the JSON wire format one to one
#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of an item name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum length of an item description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// The category of an item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    #[default]
    Other,
}

impl ItemCategory {
    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Electronics => "electronics",
            ItemCategory::Clothing => "clothing",
            ItemCategory::Books => "books",
            ItemCategory::Home => "home",
            ItemCategory::Sports => "sports",
            ItemCategory::Other => "other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(ItemCategory::Electronics),
            "clothing" => Ok(ItemCategory::Clothing),
            "books" => Ok(ItemCategory::Books),
            "home" => Ok(ItemCategory::Home),
            "sports" => Ok(ItemCategory::Sports),
            "other" => Ok(ItemCategory::Other),
            other => Err(ValidationError::InvalidParameter {
                parameter: "category".to_string(),
                message: format!("unknown category '{}'", other),
            }),
        }
    }
}

/// A stored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub category: ItemCategory,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Builds a stored item from a creation request.
    pub fn from_new(id: impl Into<String>, new: NewItem, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            description: new.description,
            price: new.price,
            quantity: new.quantity,
            category: new.category,
            tags: new.tags,
            is_active: new.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update and stamps `updated_at`.
    pub fn apply(&mut self, update: ItemUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
    }

    /// Stock value of this item (`price * quantity`).
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A request to create an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub category: ItemCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewItem {
    /// Checks the field rules for a new item.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        validate_price(self.price)?;
        validate_quantity(self.quantity)
    }
}

/// A partial update of an item. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ItemUpdate {
    /// Returns true when the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.is_active.is_none()
    }

    /// Checks the field rules for the provided fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField {
            field: "name".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::InvalidField {
            field: "name".to_string(),
            message: format!("must be at most {} characters", MAX_NAME_CHARS),
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::InvalidField {
            field: "description".to_string(),
            message: format!("must be at most {} characters", MAX_DESCRIPTION_CHARS),
        });
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidField {
            field: "price".to_string(),
            message: "must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

fn validate_quantity(quantity: i64) -> Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::InvalidField {
            field: "quantity".to_string(),
            message: "must be 0 or greater".to_string(),
        });
    }
    Ok(())
}
