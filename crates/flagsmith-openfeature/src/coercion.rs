// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turns a raw [`FlagValue`] into the type a caller asked for.
//!
//! Scalar types only accept an exact tag match: an integer is never widened to
//! a float and a boolean is never read as an integer. Objects are the one
//! conversion: a string value is decoded as JSON and must hold an object or an
//! array. JSON text holding a bare scalar (`12`, `"foo"`, `null`) is rejected
//! as a parse failure rather than returned as a scalar.

use flagsmith_openfeature_core::{FlagType, FlagValue};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoercionError {
	#[error("expected {expected}, got {actual}")]
	TypeMismatch {
		expected: FlagType,
		actual: &'static str,
	},

	#[error("invalid structured value: {0}")]
	Parse(String),
}

/// A Rust type a flag can be resolved to.
pub trait Resolvable: Sized + Send + 'static {
	/// The semantic type this Rust type stands for.
	const FLAG_TYPE: FlagType;

	fn from_flag_value(value: &FlagValue) -> Result<Self, CoercionError>;
}

/// Coerces `value` to `T`.
pub fn coerce<T: Resolvable>(value: &FlagValue) -> Result<T, CoercionError> {
	T::from_flag_value(value)
}

fn mismatch<T: Resolvable>(actual: &FlagValue) -> CoercionError {
	CoercionError::TypeMismatch {
		expected: T::FLAG_TYPE,
		actual: actual.type_name(),
	}
}

impl Resolvable for bool {
	const FLAG_TYPE: FlagType = FlagType::Boolean;

	fn from_flag_value(value: &FlagValue) -> Result<Self, CoercionError> {
		match value {
			FlagValue::Boolean(b) => Ok(*b),
			other => Err(mismatch::<Self>(other)),
		}
	}
}

impl Resolvable for String {
	const FLAG_TYPE: FlagType = FlagType::String;

	fn from_flag_value(value: &FlagValue) -> Result<Self, CoercionError> {
		match value {
			FlagValue::String(s) => Ok(s.clone()),
			other => Err(mismatch::<Self>(other)),
		}
	}
}

impl Resolvable for i64 {
	const FLAG_TYPE: FlagType = FlagType::Integer;

	fn from_flag_value(value: &FlagValue) -> Result<Self, CoercionError> {
		match value {
			FlagValue::Integer(n) => Ok(*n),
			other => Err(mismatch::<Self>(other)),
		}
	}
}

impl Resolvable for f64 {
	const FLAG_TYPE: FlagType = FlagType::Float;

	fn from_flag_value(value: &FlagValue) -> Result<Self, CoercionError> {
		match value {
			FlagValue::Float(n) => Ok(*n),
			other => Err(mismatch::<Self>(other)),
		}
	}
}

impl Resolvable for serde_json::Value {
	const FLAG_TYPE: FlagType = FlagType::Object;

	fn from_flag_value(value: &FlagValue) -> Result<Self, CoercionError> {
		let FlagValue::String(text) = value else {
			return Err(mismatch::<Self>(value));
		};

		match serde_json::from_str::<serde_json::Value>(text) {
			Ok(parsed @ (serde_json::Value::Object(_) | serde_json::Value::Array(_))) => Ok(parsed),
			Ok(_) => Err(CoercionError::Parse(
				"expected a JSON object or array".to_string(),
			)),
			Err(e) => Err(CoercionError::Parse(e.to_string())),
		}
	}
}
