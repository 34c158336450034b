// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! How a resolution reports its outcome to the caller.
//!
//! The resolution algorithm only ever produces a value or a
//! [`ResolutionFailure`]. A [`ReportingMode`] chosen when the provider is built
//! turns that into what the caller sees:
//!
//! | Mode | Success | Failure |
//! |------|---------|---------|
//! | [`Sentinel`] | details with the value | details with the default, code and reason |
//! | [`Signal`] | `Ok(ResolutionDetails)` | `Err(ResolveError)` |

use flagsmith_openfeature_core::{ErrorCode, OpenFeatureError, Reason, ResolutionDetails};

use crate::error::{FlagsmithClientError, FlagsmithProviderError, ResolveError};

/// A classified resolution failure, before it is reported.
#[derive(Debug)]
pub struct ResolutionFailure {
	pub code: ErrorCode,
	pub reason: Reason,
	pub message: String,
	pub source: Option<FlagsmithClientError>,
}

impl ResolutionFailure {
	pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			code,
			reason: Reason::Error,
			message: message.into(),
			source: None,
		}
	}

	pub fn backend(source: FlagsmithClientError) -> Self {
		Self {
			source: Some(source),
			..Self::new(
				ErrorCode::General,
				"An error occurred retrieving flags from Flagsmith client.",
			)
		}
	}

	pub fn not_found(flag_key: &str) -> Self {
		Self::new(
			ErrorCode::FlagNotFound,
			format!("Flag '{flag_key}' was not found."),
		)
	}

	pub fn disabled(flag_key: &str) -> Self {
		Self {
			reason: Reason::Disabled,
			..Self::new(
				ErrorCode::General,
				format!("Flag '{flag_key}' is not enabled."),
			)
		}
	}
}

/// Strategy for reporting resolution outcomes.
pub trait ReportingMode: Send + Sync + 'static {
	type Output<T>;

	fn report_success<T>(value: T) -> Self::Output<T>;

	fn report_failure<T>(default_value: T, failure: ResolutionFailure) -> Self::Output<T>;
}

/// Returns the caller's default with the failure recorded on it. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sentinel;

impl ReportingMode for Sentinel {
	type Output<T> = ResolutionDetails<T>;

	fn report_success<T>(value: T) -> Self::Output<T> {
		ResolutionDetails::success(value)
	}

	fn report_failure<T>(default_value: T, failure: ResolutionFailure) -> Self::Output<T> {
		ResolutionDetails::failure(default_value, failure.code, failure.reason, failure.message)
	}
}

/// Raises failures as a [`ResolveError`].
///
/// [`ErrorCode::General`] failures become [`FlagsmithProviderError`], every
/// other code the standard [`OpenFeatureError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Signal;

impl ReportingMode for Signal {
	type Output<T> = Result<ResolutionDetails<T>, ResolveError>;

	fn report_success<T>(value: T) -> Self::Output<T> {
		Ok(ResolutionDetails::success(value))
	}

	fn report_failure<T>(_default_value: T, failure: ResolutionFailure) -> Self::Output<T> {
		let err = match failure.code {
			ErrorCode::General => {
				let err = FlagsmithProviderError::general(failure.message);
				ResolveError::Provider(match failure.source {
					Some(source) => err.with_source(source),
					None => err,
				})
			}
			code => ResolveError::OpenFeature(OpenFeatureError::new(code, failure.message)),
		};
		Err(err)
	}
}
