// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenFeature provider for Flagsmith.
//!
//! This crate lets application code resolve typed flag values through the
//! vendor-neutral types in `flagsmith-openfeature-core` while flag storage and
//! evaluation stay with an injected Flagsmith client.
//!
//! # Features
//!
//! - **Context routing**: a targeting key selects identity flags (with the
//!   `traits` attribute), otherwise environment flags are fetched
//! - **Typed resolution**: boolean, string, integer, float and JSON object values
//!   with `TYPE_MISMATCH` / `PARSE_ERROR` classification
//! - **Flagsmith options**: `use_boolean_config_value`,
//!   `return_value_for_disabled_flags` and `use_flagsmith_defaults`
//! - **Two reporting modes**: [`Sentinel`] returns the caller's default with the
//!   error recorded, [`Signal`] returns an error
//!
//! # Example
//!
//! ```ignore
//! use flagsmith_openfeature::{EvaluationContext, FlagsmithProvider, Signal};
//!
//! let provider = FlagsmithProvider::builder()
//!     .client(my_flagsmith_client)
//!     .return_value_for_disabled_flags(true)
//!     .build()?;
//!
//! // Environment flags
//! let theme = provider.resolve_string_details("ui.theme", "light", None).await;
//!
//! // Identity flags
//! let ctx = EvaluationContext::new()
//!     .with_targeting_key("user123")
//!     .with_traits([("plan", serde_json::json!("enterprise"))]);
//! let limit = provider.resolve_integer_details("api.limit", 100, Some(&ctx)).await;
//! if let Some(code) = limit.error_code {
//!     tracing::warn!(%code, "using default limit");
//! }
//! ```

mod client;
mod coercion;
mod config;
mod error;
mod flags;
mod provider;
mod reporting;
mod resolver;
mod router;

#[cfg(test)]
mod testing;

pub use client::{FlagsmithClient, SharedFlagsmithClient, Traits};
pub use coercion::{coerce, CoercionError, Resolvable};
pub use config::{
	ConfigError, ProviderConfig, RETURN_VALUE_FOR_DISABLED_FLAGS_ENV, USE_BOOLEAN_CONFIG_VALUE_ENV,
	USE_FLAGSMITH_DEFAULTS_ENV,
};
pub use error::{
	FlagsmithClientError, FlagsmithConfigurationError, FlagsmithProviderError, ResolveError,
};
pub use flags::{ApiFeature, ApiFlag, DefaultFlagHandler, Flag, Flags};
pub use provider::{FlagsmithProvider, FlagsmithProviderBuilder, PROVIDER_NAME};
pub use reporting::{ReportingMode, ResolutionFailure, Sentinel, Signal};
pub use router::{route, traits_from_context};

// Re-export core types for convenience
pub use flagsmith_openfeature_core::{
	ErrorCode, EvaluationContext, FlagType, FlagValue, OpenFeatureError, ProviderMetadata, Reason,
	ResolutionDetails,
};
