//! Create/update request payloads and the single place where they are coerced.
//!
//! Incoming bodies carry no enforced shape: any subset of the five fields may be
//! present, and numeric fields may arrive as JSON numbers or as strings. `ItemDraft`
//! keeps that looseness; `ItemDraft::validate` turns it into `ItemFields`, the only
//! form a store ever persists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use stockroom_core::{DomainError, DomainResult};

/// Unvalidated field set for an insert or a full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Validated, coerced field set.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

impl ItemDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<Value>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<Value>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check required fields and coerce everything else.
    pub fn validate(&self) -> DomainResult<ItemFields> {
        let name = match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => return Err(DomainError::validation("Name is required")),
        };

        Ok(ItemFields {
            name,
            description: non_empty(self.description.as_deref()),
            quantity: coerce_quantity(self.quantity.as_ref()),
            price: coerce_price(self.price.as_ref()),
            category: non_empty(self.category.as_deref()),
        })
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Coerce a loosely-typed quantity to a non-negative integer, defaulting to 0.
pub fn coerce_quantity(value: Option<&Value>) -> i64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    };
    raw.filter(|q| *q >= 0).unwrap_or(0)
}

/// Coerce a loosely-typed price to a non-negative finite decimal, defaulting to 0.
pub fn coerce_price(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|p| p.is_finite() && *p >= 0.0).unwrap_or(0.0)
}

fn truncate(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn missing_or_blank_name_is_rejected() {
        for draft in [
            ItemDraft::default(),
            ItemDraft::named(""),
            ItemDraft::named("   "),
        ] {
            match draft.validate() {
                Err(DomainError::Validation(msg)) => assert_eq!(msg, "Name is required"),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn absent_numbers_default_to_zero() {
        let fields = ItemDraft::named("Widget").validate().unwrap();
        assert_eq!(fields.quantity, 0);
        assert_eq!(fields.price, 0.0);
        assert_eq!(fields.description, None);
        assert_eq!(fields.category, None);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let fields = ItemDraft::named("Widget")
            .with_quantity("12")
            .with_price(" 19.99 ")
            .validate()
            .unwrap();
        assert_eq!(fields.quantity, 12);
        assert_eq!(fields.price, 19.99);
    }

    #[test]
    fn fractional_quantity_is_truncated() {
        assert_eq!(coerce_quantity(Some(&json!(4.9))), 4);
        assert_eq!(coerce_quantity(Some(&json!("7.2"))), 7);
    }

    #[test]
    fn invalid_numbers_become_zero() {
        for v in [json!("abc"), json!(null), json!(true), json!([1]), json!({"n": 1}), json!(-3)] {
            assert_eq!(coerce_quantity(Some(&v)), 0, "quantity {v}");
        }
        for v in [json!("abc"), json!(null), json!(false), json!(-0.5), json!("NaN"), json!("inf")] {
            assert_eq!(coerce_price(Some(&v)), 0.0, "price {v}");
        }
    }

    #[test]
    fn empty_optional_text_is_null() {
        let fields = ItemDraft::named("Widget")
            .with_description("")
            .with_category("")
            .validate()
            .unwrap();
        assert_eq!(fields.description, None);
        assert_eq!(fields.category, None);
    }

    #[test]
    fn deserializes_partial_bodies() {
        let draft: ItemDraft =
            serde_json::from_value(json!({ "name": "Widget", "price": "2.5", "extra": 1 })).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Widget"));
        assert_eq!(draft.quantity, None);
        assert_eq!(draft.validate().unwrap().price, 2.5);
    }

    proptest! {
        #[test]
        fn coerced_quantity_is_never_negative(s in ".*") {
            prop_assert!(coerce_quantity(Some(&Value::String(s))) >= 0);
        }

        #[test]
        fn coerced_price_is_finite_and_non_negative(f in proptest::num::f64::ANY) {
            let p = coerce_price(Some(&Value::String(f.to_string())));
            prop_assert!(p.is_finite() && p >= 0.0);
        }

        #[test]
        fn integer_quantities_round_trip(q in 0i64..1_000_000) {
            prop_assert_eq!(coerce_quantity(Some(&json!(q))), q);
            prop_assert_eq!(coerce_quantity(Some(&json!(q.to_string()))), q);
        }
    }
}
