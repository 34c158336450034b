// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flagsmith flag model as handed back by the backend client.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use flagsmith_openfeature_core::FlagValue;
use serde::{Deserialize, Serialize};

use crate::error::FlagsmithClientError;

/// A single evaluated flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
	/// None for synthesized placeholders.
	pub feature_id: Option<u64>,
	pub feature_name: String,
	pub enabled: bool,
	pub value: FlagValue,
	/// True when the backend synthesized this flag for an unknown key.
	#[serde(default)]
	pub is_default: bool,
}

impl Flag {
	pub fn new(
		feature_id: u64,
		feature_name: impl Into<String>,
		enabled: bool,
		value: impl Into<FlagValue>,
	) -> Self {
		Self {
			feature_id: Some(feature_id),
			feature_name: feature_name.into(),
			enabled,
			value: value.into(),
			is_default: false,
		}
	}

	/// Creates a placeholder flag with no real state behind it.
	pub fn default_flag(enabled: bool, value: impl Into<FlagValue>) -> Self {
		Self {
			feature_id: None,
			feature_name: String::new(),
			enabled,
			value: value.into(),
			is_default: true,
		}
	}
}

/// Produces a placeholder flag for a key the backend does not know.
pub type DefaultFlagHandler = Arc<dyn Fn(&str) -> Flag + Send + Sync>;

/// A set of evaluated flags keyed by feature name.
#[derive(Clone, Default)]
pub struct Flags {
	flags: HashMap<String, Flag>,
	default_flag_handler: Option<DefaultFlagHandler>,
}

impl Flags {
	pub fn new(flags: HashMap<String, Flag>) -> Self {
		Self {
			flags,
			default_flag_handler: None,
		}
	}

	pub fn with_default_flag_handler(mut self, handler: DefaultFlagHandler) -> Self {
		self.default_flag_handler = Some(handler);
		self
	}

	/// Builds a flag set from the Flagsmith REST API payload.
	pub fn from_api_flags(
		api_flags: &[ApiFlag],
		default_flag_handler: Option<DefaultFlagHandler>,
	) -> Self {
		let flags = api_flags
			.iter()
			.map(|api_flag| {
				let flag = Flag::new(
					api_flag.feature.id,
					api_flag.feature.name.clone(),
					api_flag.enabled,
					api_flag.feature_state_value.clone(),
				);
				(api_flag.feature.name.clone(), flag)
			})
			.collect();

		Self {
			flags,
			default_flag_handler,
		}
	}

	/// Looks up a flag by feature name.
	///
	/// Unknown names fall back to the default flag handler; without one the
	/// lookup fails with [`FlagsmithClientError::FeatureDoesNotExist`].
	pub fn get_flag(&self, feature_name: &str) -> Result<Flag, FlagsmithClientError> {
		if let Some(flag) = self.flags.get(feature_name) {
			return Ok(flag.clone());
		}

		match &self.default_flag_handler {
			Some(handler) => Ok(handler(feature_name)),
			None => Err(FlagsmithClientError::FeatureDoesNotExist {
				feature_name: feature_name.to_string(),
			}),
		}
	}

	pub fn len(&self) -> usize {
		self.flags.len()
	}

	pub fn is_empty(&self) -> bool {
		self.flags.is_empty()
	}
}

impl FromIterator<Flag> for Flags {
	fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
		let flags = iter
			.into_iter()
			.map(|flag| (flag.feature_name.clone(), flag))
			.collect();
		Self::new(flags)
	}
}

impl fmt::Debug for Flags {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let has_handler = self.default_flag_handler.is_some();
		f.debug_struct("Flags")
			.field("flags", &self.flags)
			.field("has_default_flag_handler", &has_handler)
			.finish()
	}
}

/// Flag entry as serialized by the Flagsmith REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFlag {
	pub feature: ApiFeature,
	pub enabled: bool,
	#[serde(default)]
	pub feature_state_value: FlagValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFeature {
	pub id: u64,
	pub name: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_flag_returns_stored_flag() {
		let flag = Flag::new(1, "my_feature", true, "foo");
		let flags: Flags = [flag].into_iter().collect();

		let flag = flags.get_flag("my_feature").unwrap();
		assert!(flag.enabled);
		assert!(!flag.is_default);
		assert_eq!(flag.value, FlagValue::String("foo".to_string()));
	}

	#[test]
	fn test_get_flag_unknown_without_handler() {
		let flags = Flags::default();
		match flags.get_flag("missing") {
			Err(FlagsmithClientError::FeatureDoesNotExist { feature_name }) => {
				assert_eq!(feature_name, "missing");
			}
			other => panic!("expected FeatureDoesNotExist, got {other:?}"),
		}
	}

	#[test]
	fn test_get_flag_unknown_uses_handler() {
		let handler = Arc::new(|_: &str| Flag::default_flag(true, "fallback"));
		let flags = Flags::default().with_default_flag_handler(handler);

		let flag = flags.get_flag("missing").unwrap();
		assert!(flag.is_default);
		assert!(flag.feature_id.is_none());
		assert_eq!(flag.value, FlagValue::String("fallback".to_string()));
	}

	#[test]
	fn test_from_api_flags() {
		let payload = r#"[
			{"feature": {"id": 1, "name": "banner"}, "enabled": true,
			 "feature_state_value": "hello"},
			{"feature": {"id": 2, "name": "limit"}, "enabled": false,
			 "feature_state_value": 10},
			{"feature": {"id": 3, "name": "plain"}, "enabled": true}
		]"#;
		let api_flags: Vec<ApiFlag> = serde_json::from_str(payload).unwrap();

		let flags = Flags::from_api_flags(&api_flags, None);
		assert_eq!(flags.len(), 3);

		let limit = flags.get_flag("limit").unwrap();
		assert_eq!(limit.feature_id, Some(2));
		assert!(!limit.enabled);
		assert_eq!(limit.value, FlagValue::Integer(10));

		assert_eq!(flags.get_flag("plain").unwrap().value, FlagValue::Null);
	}
}
