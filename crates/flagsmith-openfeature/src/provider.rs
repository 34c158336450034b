// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenFeature provider backed by a Flagsmith client.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use flagsmith_openfeature_core::{EvaluationContext, ProviderMetadata};
use tracing::{debug, warn};

use crate::client::{FlagsmithClient, SharedFlagsmithClient};
use crate::coercion::Resolvable;
use crate::config::ProviderConfig;
use crate::error::FlagsmithConfigurationError;
use crate::reporting::{ReportingMode, Sentinel};
use crate::resolver;

/// Name reported through [`FlagsmithProvider::metadata`].
pub const PROVIDER_NAME: &str = "FlagsmithProvider";

const MISSING_CLIENT: &str = "A Flagsmith client is required to build the provider.";

/// Builder for constructing a FlagsmithProvider.
pub struct FlagsmithProviderBuilder<R = Sentinel> {
	client: Option<SharedFlagsmithClient>,
	config: ProviderConfig,
	_mode: PhantomData<R>,
}

impl FlagsmithProviderBuilder {
	/// Creates a new builder reporting in [`Sentinel`] mode.
	pub fn new() -> Self {
		Self {
			client: None,
			config: ProviderConfig::default(),
			_mode: PhantomData,
		}
	}
}

impl Default for FlagsmithProviderBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: ReportingMode> FlagsmithProviderBuilder<R> {
	/// Sets the Flagsmith client flags are fetched from.
	pub fn client<C: FlagsmithClient>(self, client: C) -> Self {
		self.shared_client(Arc::new(client))
	}

	/// Sets a client that is already shared elsewhere.
	pub fn shared_client(mut self, client: SharedFlagsmithClient) -> Self {
		self.client = Some(client);
		self
	}

	/// Replaces all resolution options at once.
	pub fn config(mut self, config: ProviderConfig) -> Self {
		self.config = config;
		self
	}

	pub fn use_boolean_config_value(mut self, enable: bool) -> Self {
		self.config.use_boolean_config_value = enable;
		self
	}

	pub fn return_value_for_disabled_flags(mut self, enable: bool) -> Self {
		self.config.return_value_for_disabled_flags = enable;
		self
	}

	pub fn use_flagsmith_defaults(mut self, enable: bool) -> Self {
		self.config.use_flagsmith_defaults = enable;
		self
	}

	/// Switches how failures are reported.
	///
	/// ```ignore
	/// let provider = FlagsmithProvider::builder()
	///     .client(client)
	///     .reporting_mode::<Signal>()
	///     .build()?;
	/// ```
	pub fn reporting_mode<M: ReportingMode>(self) -> FlagsmithProviderBuilder<M> {
		FlagsmithProviderBuilder {
			client: self.client,
			config: self.config,
			_mode: PhantomData,
		}
	}

	/// Builds the provider.
	///
	/// Fails with a `PROVIDER_NOT_READY` configuration error if no client was set.
	pub fn build(self) -> Result<FlagsmithProvider<R>, FlagsmithConfigurationError> {
		let Some(client) = self.client else {
			return Err(FlagsmithConfigurationError::new(MISSING_CLIENT));
		};

		debug!(config = ?self.config, "Flagsmith provider built");

		Ok(FlagsmithProvider {
			client,
			config: self.config,
			_mode: PhantomData,
		})
	}
}

/// Resolves typed flag values through a Flagsmith client.
///
/// The provider holds no mutable state; every resolution makes exactly one
/// client call and may run concurrently with any other.
pub struct FlagsmithProvider<R = Sentinel> {
	client: SharedFlagsmithClient,
	config: ProviderConfig,
	_mode: PhantomData<R>,
}

impl FlagsmithProvider {
	/// Creates a new builder for constructing a FlagsmithProvider.
	pub fn builder() -> FlagsmithProviderBuilder {
		FlagsmithProviderBuilder::new()
	}
}

impl<R: ReportingMode> FlagsmithProvider<R> {
	pub fn new<C: FlagsmithClient>(client: C, config: ProviderConfig) -> Self {
		Self {
			client: Arc::new(client),
			config,
			_mode: PhantomData,
		}
	}

	pub fn metadata(&self) -> ProviderMetadata {
		ProviderMetadata::new(PROVIDER_NAME)
	}

	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}

	/// Resolves a boolean flag.
	///
	/// Unless `use_boolean_config_value` is set, the value is the flag's
	/// enabled state and the stored value is ignored.
	pub async fn resolve_boolean_details(
		&self,
		flag_key: &str,
		default_value: bool,
		context: Option<&EvaluationContext>,
	) -> R::Output<bool> {
		self.resolve(flag_key, default_value, context).await
	}

	/// Resolves a string flag.
	pub async fn resolve_string_details(
		&self,
		flag_key: &str,
		default_value: &str,
		context: Option<&EvaluationContext>,
	) -> R::Output<String> {
		let default_value = default_value.to_string();
		self.resolve(flag_key, default_value, context).await
	}

	/// Resolves an integer flag.
	pub async fn resolve_integer_details(
		&self,
		flag_key: &str,
		default_value: i64,
		context: Option<&EvaluationContext>,
	) -> R::Output<i64> {
		self.resolve(flag_key, default_value, context).await
	}

	/// Resolves a float flag.
	pub async fn resolve_float_details(
		&self,
		flag_key: &str,
		default_value: f64,
		context: Option<&EvaluationContext>,
	) -> R::Output<f64> {
		self.resolve(flag_key, default_value, context).await
	}

	/// Resolves an object flag from the JSON text stored on it.
	pub async fn resolve_object_details(
		&self,
		flag_key: &str,
		default_value: serde_json::Value,
		context: Option<&EvaluationContext>,
	) -> R::Output<serde_json::Value> {
		self.resolve(flag_key, default_value, context).await
	}

	async fn resolve<T: Resolvable>(
		&self,
		flag_key: &str,
		default_value: T,
		context: Option<&EvaluationContext>,
	) -> R::Output<T> {
		let empty = EvaluationContext::default();
		let context = context.unwrap_or(&empty);
		let client = self.client.as_ref();

		match resolver::resolve::<T>(client, &self.config, flag_key, context).await {
			Ok(value) => R::report_success(value),
			Err(failure) => {
				warn!(
					flag_key = flag_key,
					error_code = %failure.code,
					reason = %failure.reason,
					"Flag resolution failed"
				);
				R::report_failure(default_value, failure)
			}
		}
	}
}

impl<R> Clone for FlagsmithProvider<R> {
	fn clone(&self) -> Self {
		Self {
			client: Arc::clone(&self.client),
			config: self.config,
			_mode: PhantomData,
		}
	}
}

impl<R> fmt::Debug for FlagsmithProvider<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlagsmithProvider")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
