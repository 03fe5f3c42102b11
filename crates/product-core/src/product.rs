//! # Product Types
//!
//! The product record, its create and partial-update shapes, and the
//! seed catalog loaded from `config/products.toml`.

use crate::error::{ProductError, ProductResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// A product in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, system-assigned on create
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Price exactly as supplied (integers stay integers)
    pub price: Number,

    /// Optional free-form category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Whether the product is in stock
    #[serde(default)]
    pub in_stock: bool,
}

impl Product {
    /// Build a product from a validated create payload, assigning a fresh id
    pub fn create(new: NewProduct) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), new)
    }

    /// Build a product with an explicit id (seed data, tests)
    pub fn with_id(id: impl Into<String>, new: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            in_stock: new.in_stock,
        }
    }

    /// Merge a partial update onto this record. The id is never touched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Fields of a product that passed create validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: Option<String>,
    pub in_stock: bool,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: impl Into<Number>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            category: None,
            in_stock: false,
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set stock flag
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

/// Partial update payload. Absent fields are left unchanged; unknown
/// fields (including `id`) are ignored. `category: null` clears the category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Marks a field as present even when its value is `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    /// Decode a JSON body into a patch
    pub fn from_json(value: serde_json::Value) -> ProductResult<Self> {
        serde_json::from_value(value).map_err(|e| ProductError::Validation(e.to_string()))
    }
}

/// Seed catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> ProductResult<Self> {
        toml::from_str(toml_str).map_err(|e| ProductError::Catalog(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
