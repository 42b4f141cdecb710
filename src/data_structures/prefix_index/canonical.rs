// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Canonical value forms used for value deduplication.
//!
//! Two values are the same entry in the index iff their canonical forms are
//! equal. Every `serde::Serialize` type gets a canonical form by going through
//! `serde_json::Value`, whose object maps are key-ordered, so structurally
//! equal data compares equal regardless of field or map iteration order.

use serde::Serialize;

use super::error::{PrefixIndexError, PrefixIndexResult};

/// Types that can produce a canonical, comparable serialization.
pub trait CanonicalForm {
    /// Returns the canonical serialization of `self`.
    fn canonical_form(&self) -> PrefixIndexResult<String>;
}

impl<T: Serialize + ?Sized> CanonicalForm for T {
    fn canonical_form(&self) -> PrefixIndexResult<String> {
        serde_json::to_value(self)
            .map(|value| value.to_string())
            .map_err(|e| PrefixIndexError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct College {
        name: String,
        state: &'static str,
    }

    #[test]
    fn test_structural_equality() {
        let a = College {
            name: "Reed College".to_string(),
            state: "OR",
        };
        let b = College {
            name: String::from("Reed College"),
            state: "OR",
        };
        assert_eq!(a.canonical_form().unwrap(), b.canonical_form().unwrap());
    }

    #[test]
    fn test_map_order_is_irrelevant() {
        let mut first = HashMap::new();
        let mut second = HashMap::new();
        for (k, v) in [("z", 1), ("a", 2), ("m", 3)] {
            first.insert(k, v);
        }
        for (k, v) in [("m", 3), ("z", 1), ("a", 2)] {
            second.insert(k, v);
        }
        assert_eq!(
            first.canonical_form().unwrap(),
            second.canonical_form().unwrap()
        );
        assert_eq!(first.canonical_form().unwrap(), r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn test_distinct_values_differ() {
        assert_ne!(1u32.canonical_form().unwrap(), 2u32.canonical_form().unwrap());
        assert_ne!(
            "1".canonical_form().unwrap(),
            1u32.canonical_form().unwrap()
        );
    }

    #[test]
    fn test_unserializable_value() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not valid JSON object keys");
        let err = map.canonical_form().unwrap_err();
        assert!(matches!(err, PrefixIndexError::Serialization(_)));
    }
}
