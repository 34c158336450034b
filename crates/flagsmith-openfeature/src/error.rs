// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Flagsmith provider.

use flagsmith_openfeature_core::{ErrorCode, OpenFeatureError};
use thiserror::Error;

/// Errors raised by the Flagsmith backend client.
///
/// These never escape a resolution call; the provider reclassifies them as
/// [`ErrorCode::General`] failures.
#[derive(Error, Debug)]
pub enum FlagsmithClientError {
	/// The Flagsmith API returned an error response.
	#[error("Flagsmith API returned an error: {status} - {message}")]
	Api {
		/// HTTP status code.
		status: u16,
		/// Error message from the API.
		message: String,
	},

	/// The request never produced a response.
	#[error("Failed to reach Flagsmith: {0}")]
	Transport(String),

	/// The response body could not be decoded.
	#[error("Failed to parse Flagsmith response: {0}")]
	InvalidResponse(#[from] serde_json::Error),

	/// No flag with this name exists and no default flag handler is set.
	#[error("Feature does not exist: {feature_name}")]
	FeatureDoesNotExist {
		/// The requested feature name.
		feature_name: String,
	},
}

/// Adapter-specific failure signal.
///
/// Raised for [`ErrorCode::General`] failures so callers can tell a backend
/// malfunction or a disabled flag apart from the standard resolution failures
/// carried by [`OpenFeatureError`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FlagsmithProviderError {
	pub code: ErrorCode,
	pub message: String,
	#[source]
	pub source: Option<FlagsmithClientError>,
}

impl FlagsmithProviderError {
	pub fn general(message: impl Into<String>) -> Self {
		Self {
			code: ErrorCode::General,
			message: message.into(),
			source: None,
		}
	}

	pub fn with_source(mut self, source: FlagsmithClientError) -> Self {
		self.source = Some(source);
		self
	}
}

/// Raised when the provider has not been set up correctly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FlagsmithConfigurationError {
	pub message: String,
}

impl FlagsmithConfigurationError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// Always [`ErrorCode::ProviderNotReady`].
	pub fn error_code(&self) -> ErrorCode {
		ErrorCode::ProviderNotReady
	}
}

/// Failure signal returned by resolutions in [`Signal`](crate::Signal) mode.
#[derive(Error, Debug)]
pub enum ResolveError {
	#[error(transparent)]
	Provider(#[from] FlagsmithProviderError),

	#[error(transparent)]
	OpenFeature(#[from] OpenFeatureError),
}

impl ResolveError {
	pub fn error_code(&self) -> ErrorCode {
		match self {
			ResolveError::Provider(err) => err.code,
			ResolveError::OpenFeature(err) => err.code,
		}
	}

	pub fn error_message(&self) -> &str {
		match self {
			ResolveError::Provider(err) => &err.message,
			ResolveError::OpenFeature(err) => &err.message,
		}
	}

	/// Returns true if this came from the backend or a disabled flag.
	pub fn is_provider_error(&self) -> bool {
		matches!(self, ResolveError::Provider(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn test_provider_error_keeps_source() {
		let source = FlagsmithClientError::Transport("connection refused".to_string());
		let err = FlagsmithProviderError::general("down").with_source(source);

		assert_eq!(err.code, ErrorCode::General);
		assert_eq!(
			err.source().map(|s| s.to_string()),
			Some("Failed to reach Flagsmith: connection refused".to_string())
		);
	}

	#[test]
	fn test_resolve_error_accessors() {
		let err = FlagsmithProviderError::general("Flag 'x' is not enabled.");
		let provider = ResolveError::from(err);
		assert!(provider.is_provider_error());
		assert_eq!(provider.error_code(), ErrorCode::General);
		assert_eq!(provider.error_message(), "Flag 'x' is not enabled.");

		let standard: ResolveError = OpenFeatureError::parse_error("bad json").into();
		assert!(!standard.is_provider_error());
		assert_eq!(standard.error_code(), ErrorCode::ParseError);
	}

	#[test]
	fn test_configuration_error_code() {
		let err = FlagsmithConfigurationError::new("missing client");
		assert_eq!(err.error_code(), ErrorCode::ProviderNotReady);
		assert_eq!(err.to_string(), "missing client");
	}
}
