// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

pub const USE_BOOLEAN_CONFIG_VALUE_ENV: &str = "FLAGSMITH_USE_BOOLEAN_CONFIG_VALUE";
pub const RETURN_VALUE_FOR_DISABLED_FLAGS_ENV: &str = "FLAGSMITH_RETURN_VALUE_FOR_DISABLED_FLAGS";
pub const USE_FLAGSMITH_DEFAULTS_ENV: &str = "FLAGSMITH_USE_FLAGSMITH_DEFAULTS";

/// Resolution options, fixed when the provider is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
	/// Resolve booleans from the flag's stored value instead of its enabled state.
	pub use_boolean_config_value: bool,
	/// Return the stored value of disabled flags instead of failing.
	pub return_value_for_disabled_flags: bool,
	/// Treat placeholder flags synthesized by the client as real flags.
	pub use_flagsmith_defaults: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("invalid boolean for {var}: {value:?}")]
	InvalidBool { var: &'static str, value: String },
}

impl ProviderConfig {
	/// Reads options from `FLAGSMITH_*` environment variables.
	///
	/// Unset variables keep their default.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|var| std::env::var(var).ok())
	}

	/// Reads options through `lookup`, which maps a variable name to its value.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |var: &'static str| -> Result<bool, ConfigError> {
			match lookup(var) {
				Some(value) => parse_bool(var, &value),
				None => Ok(false),
			}
		};

		Ok(Self {
			use_boolean_config_value: read(USE_BOOLEAN_CONFIG_VALUE_ENV)?,
			return_value_for_disabled_flags: read(RETURN_VALUE_FOR_DISABLED_FLAGS_ENV)?,
			use_flagsmith_defaults: read(USE_FLAGSMITH_DEFAULTS_ENV)?,
		})
	}
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" => Ok(true),
		"false" | "0" => Ok(false),
		_ => Err(ConfigError::InvalidBool {
			var,
			value: value.to_string(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |var: &str| vars.get(var).cloned()
	}

	#[test]
	fn test_defaults_are_all_false() {
		let config = ProviderConfig::default();
		assert!(!config.use_boolean_config_value);
		assert!(!config.return_value_for_disabled_flags);
		assert!(!config.use_flagsmith_defaults);
	}

	#[test]
	fn test_from_lookup_reads_each_option() {
		let config = ProviderConfig::from_lookup(lookup(&[
			(USE_BOOLEAN_CONFIG_VALUE_ENV, "true"),
			(RETURN_VALUE_FOR_DISABLED_FLAGS_ENV, "0"),
			(USE_FLAGSMITH_DEFAULTS_ENV, "TRUE"),
		]))
		.unwrap();

		assert_eq!(
			config,
			ProviderConfig {
				use_boolean_config_value: true,
				return_value_for_disabled_flags: false,
				use_flagsmith_defaults: true,
			}
		);
	}

	#[test]
	fn test_from_lookup_unset_keeps_defaults() {
		let config = ProviderConfig::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config, ProviderConfig::default());
	}

	#[test]
	fn test_from_lookup_rejects_garbage() {
		let vars = lookup(&[(USE_FLAGSMITH_DEFAULTS_ENV, "yes please")]);
		let err = ProviderConfig::from_lookup(vars).unwrap_err();

		assert_eq!(
			err,
			ConfigError::InvalidBool {
				var: USE_FLAGSMITH_DEFAULTS_ENV,
				value: "yes please".to_string(),
			}
		);
	}

	#[test]
	fn test_deserialize_partial_config() {
		let config: ProviderConfig =
			serde_json::from_str(r#"{"return_value_for_disabled_flags": true}"#).unwrap();
		assert!(config.return_value_for_disabled_flags);
		assert!(!config.use_boolean_config_value);
	}
}
