// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The resolution algorithm shared by every reporting mode.

use flagsmith_openfeature_core::{ErrorCode, EvaluationContext, FlagType, FlagValue};
use tracing::{debug, instrument, warn};

use crate::client::FlagsmithClient;
use crate::coercion::{coerce, CoercionError, Resolvable};
use crate::config::ProviderConfig;
use crate::reporting::ResolutionFailure;
use crate::router::route;

/// Resolves `flag_key` to a `T`.
///
/// Rules are applied in order and the first one that matches decides:
///
/// 1. The backend fetch (or the lookup in its result) fails: `GENERAL`.
/// 2. The flag is a synthesized placeholder and defaults are not trusted: `FLAG_NOT_FOUND`.
/// 3. A boolean was requested and config values are not used for booleans:
///    the flag's `enabled` state is the value.
/// 4. The flag is disabled and disabled values are not returned: `GENERAL` / `DISABLED`.
/// 5. The stored value is coerced to `T`: `TYPE_MISMATCH` or `PARSE_ERROR` on failure.
#[instrument(skip(client, config, context), fields(flag_type = %T::FLAG_TYPE))]
pub async fn resolve<T: Resolvable>(
	client: &dyn FlagsmithClient,
	config: &ProviderConfig,
	flag_key: &str,
	context: &EvaluationContext,
) -> Result<T, ResolutionFailure> {
	let flag = route(client, context)
		.await
		.and_then(|flags| flags.get_flag(flag_key))
		.map_err(|e| {
			warn!(error = %e, "Failed to retrieve flags from Flagsmith");
			ResolutionFailure::backend(e)
		})?;

	if flag.is_default && !config.use_flagsmith_defaults {
		return Err(ResolutionFailure::not_found(flag_key));
	}

	let raw = if T::FLAG_TYPE == FlagType::Boolean && !config.use_boolean_config_value {
		debug!(enabled = flag.enabled, "Resolving boolean from enabled state");
		FlagValue::Boolean(flag.enabled)
	} else if !(config.return_value_for_disabled_flags || flag.enabled) {
		return Err(ResolutionFailure::disabled(flag_key));
	} else {
		flag.value
	};

	match coerce::<T>(&raw) {
		Ok(value) => {
			debug!("Resolved flag value");
			Ok(value)
		}
		Err(err) => Err(coercion_failure::<T>(flag_key, err)),
	}
}

fn coercion_failure<T: Resolvable>(flag_key: &str, err: CoercionError) -> ResolutionFailure {
	debug!(error = %err, "Flag value could not be coerced");
	let flag_type = T::FLAG_TYPE;
	match err {
		CoercionError::TypeMismatch { .. } => ResolutionFailure::new(
			ErrorCode::TypeMismatch,
			format!("Value for flag '{flag_key}' is not of type '{flag_type}'"),
		),
		CoercionError::Parse(_) => ResolutionFailure::new(
			ErrorCode::ParseError,
			format!("Unable to parse object from value for flag '{flag_key}'"),
		),
	}
}
