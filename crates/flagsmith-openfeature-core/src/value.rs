// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::{Deserialize, Serialize};

/// The raw value stored on a flag by the backend.
///
/// Backends give no static guarantee about the shape of a flag value, so it is
/// carried as a tagged union and checked at resolution time. Structured values
/// arrive as JSON text in the `String` variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
	Boolean(bool),
	Integer(i64),
	Float(f64),
	String(String),
	#[default]
	Null,
}

impl FlagValue {
	/// Short name of the runtime type, for diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			FlagValue::Boolean(_) => "boolean",
			FlagValue::Integer(_) => "integer",
			FlagValue::Float(_) => "float",
			FlagValue::String(_) => "string",
			FlagValue::Null => "null",
		}
	}
}

impl From<bool> for FlagValue {
	fn from(value: bool) -> Self {
		FlagValue::Boolean(value)
	}
}

impl From<i64> for FlagValue {
	fn from(value: i64) -> Self {
		FlagValue::Integer(value)
	}
}

impl From<f64> for FlagValue {
	fn from(value: f64) -> Self {
		FlagValue::Float(value)
	}
}

impl From<String> for FlagValue {
	fn from(value: String) -> Self {
		FlagValue::String(value)
	}
}

impl From<&str> for FlagValue {
	fn from(value: &str) -> Self {
		FlagValue::String(value.to_string())
	}
}

impl<T: Into<FlagValue>> From<Option<T>> for FlagValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(FlagValue::Null)
	}
}

/// The semantic type a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
	Boolean,
	String,
	Integer,
	Float,
	Object,
}

impl FlagType {
	pub fn as_str(&self) -> &'static str {
		match self {
			FlagType::Boolean => "BOOLEAN",
			FlagType::String => "STRING",
			FlagType::Integer => "INTEGER",
			FlagType::Float => "FLOAT",
			FlagType::Object => "OBJECT",
		}
	}
}

impl fmt::Display for FlagType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
