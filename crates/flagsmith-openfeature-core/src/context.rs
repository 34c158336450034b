// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attribute under which identity traits are passed to the backend.
pub const TRAITS_ATTRIBUTE: &str = "traits";

/// Context supplied by the caller for a single resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
	/// Identifier selecting identity-scoped evaluation.
	#[serde(default)]
	pub targeting_key: Option<String>,
	#[serde(default)]
	pub attributes: HashMap<String, serde_json::Value>,
}

impl EvaluationContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_targeting_key(mut self, targeting_key: impl Into<String>) -> Self {
		self.targeting_key = Some(targeting_key.into());
		self
	}

	pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
		self.attributes.insert(key.into(), value);
		self
	}

	/// Stores `traits` as a JSON object under the [`TRAITS_ATTRIBUTE`] attribute.
	pub fn with_traits<I, K>(self, traits: I) -> Self
	where
		I: IntoIterator<Item = (K, serde_json::Value)>,
		K: Into<String>,
	{
		let traits: serde_json::Map<String, serde_json::Value> =
			traits.into_iter().map(|(k, v)| (k.into(), v)).collect();
		self.with_attribute(TRAITS_ATTRIBUTE, serde_json::Value::Object(traits))
	}

	/// Returns the targeting key if it is present and non-empty.
	pub fn targeting_key(&self) -> Option<&str> {
		self.targeting_key.as_deref().filter(|key| !key.is_empty())
	}

	pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
		self.attributes.get(key)
	}
}
