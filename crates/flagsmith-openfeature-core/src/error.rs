// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

use crate::ErrorCode;

/// Standard resolution failure signal.
///
/// Providers raise this for the failure kinds every OpenFeature provider shares.
/// Provider-specific malfunctions are expected to use their own error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct OpenFeatureError {
	pub code: ErrorCode,
	pub message: String,
}

impl OpenFeatureError {
	pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			code,
			message: message.into(),
		}
	}

	pub fn flag_not_found(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::FlagNotFound, message)
	}

	pub fn type_mismatch(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::TypeMismatch, message)
	}

	pub fn parse_error(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::ParseError, message)
	}

	pub fn provider_not_ready(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::ProviderNotReady, message)
	}

	pub fn error_code(&self) -> ErrorCode {
		self.code
	}

	pub fn error_message(&self) -> &str {
		&self.message
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constructors_set_code() {
		assert_eq!(
			OpenFeatureError::flag_not_found("x").error_code(),
			ErrorCode::FlagNotFound
		);
		assert_eq!(
			OpenFeatureError::type_mismatch("x").error_code(),
			ErrorCode::TypeMismatch
		);
		assert_eq!(
			OpenFeatureError::parse_error("x").error_code(),
			ErrorCode::ParseError
		);
		assert_eq!(
			OpenFeatureError::provider_not_ready("x").error_code(),
			ErrorCode::ProviderNotReady
		);
	}

	#[test]
	fn test_display_includes_code_and_message() {
		let err = OpenFeatureError::flag_not_found("Flag 'my_feature' was not found.");
		assert_eq!(
			err.to_string(),
			"FLAG_NOT_FOUND: Flag 'my_feature' was not found."
		);
		assert_eq!(err.error_message(), "Flag 'my_feature' was not found.");
	}
}
