// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a failed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// The provider was not set up correctly.
	ProviderNotReady,
	/// The backend handed back a placeholder for an unknown key.
	FlagNotFound,
	/// An object was requested but the stored text is not structured data.
	ParseError,
	/// The stored value does not have the requested shape.
	TypeMismatch,
	/// Backend failure, or a disabled flag whose value is not returned.
	General,
}

impl ErrorCode {
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorCode::ProviderNotReady => "PROVIDER_NOT_READY",
			ErrorCode::FlagNotFound => "FLAG_NOT_FOUND",
			ErrorCode::ParseError => "PARSE_ERROR",
			ErrorCode::TypeMismatch => "TYPE_MISMATCH",
			ErrorCode::General => "GENERAL",
		}
	}
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Why a resolution ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
	Disabled,
	Error,
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Reason::Disabled => f.write_str("DISABLED"),
			Reason::Error => f.write_str("ERROR"),
		}
	}
}

/// Result of resolving a flag to a typed value.
///
/// `error_code` is set exactly when `value` is the caller's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionDetails<T> {
	pub value: T,
	pub error_code: Option<ErrorCode>,
	pub error_message: Option<String>,
	pub reason: Option<Reason>,
}

impl<T> ResolutionDetails<T> {
	pub fn success(value: T) -> Self {
		Self {
			value,
			error_code: None,
			error_message: None,
			reason: None,
		}
	}

	/// Builds a failed resolution carrying the caller's default.
	pub fn failure(
		default_value: T,
		error_code: ErrorCode,
		reason: Reason,
		error_message: impl Into<String>,
	) -> Self {
		Self {
			value: default_value,
			error_code: Some(error_code),
			error_message: Some(error_message.into()),
			reason: Some(reason),
		}
	}

	pub fn is_error(&self) -> bool {
		self.error_code.is_some()
	}

	pub fn into_value(self) -> T {
		self.value
	}
}

/// Identifies a provider to the host flag framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
	pub name: String,
}

impl ProviderMetadata {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}
