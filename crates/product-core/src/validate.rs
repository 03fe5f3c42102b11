//! # Create Validation
//!
//! Shape checks for incoming create payloads. Update payloads are only
//! decoded (see [`ProductPatch`](crate::ProductPatch)), never content-checked.

use crate::error::{ProductError, ProductResult};
use crate::product::NewProduct;
use serde_json::{Map, Value};

/// Validate a create payload and extract its fields.
///
/// Requires `name` and `description` to be non-empty strings and `price`
/// to be a JSON number. `category` may be absent, `null` or a string.
/// `inStock` is coerced with [`truthy`].
pub fn validate_create(payload: &Value) -> ProductResult<NewProduct> {
    let fields = payload
        .as_object()
        .ok_or_else(|| invalid("payload must be a JSON object"))?;

    let name = required_text(fields, "name")?;
    let description = required_text(fields, "description")?;

    let price = match fields.get("price") {
        Some(Value::Number(n)) => n.clone(),
        Some(_) => return Err(invalid("price must be a number")),
        None => return Err(invalid("price is required")),
    };

    let category = match fields.get("category") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(invalid("category must be a string")),
    };

    let in_stock = fields.get("inStock").is_some_and(truthy);

    Ok(NewProduct {
        name,
        description,
        price,
        category,
        in_stock,
    })
}

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are false; everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required_text(fields: &Map<String, Value>, key: &str) -> ProductResult<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(invalid(format!("{key} must not be empty"))),
        Some(_) => Err(invalid(format!("{key} must be a string"))),
        None => Err(invalid(format!("{key} is required"))),
    }
}

fn invalid(reason: impl Into<String>) -> ProductError {
    ProductError::Validation(reason.into())
}
