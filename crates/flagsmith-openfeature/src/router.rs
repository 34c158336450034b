// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Picks identity-scoped or environment-scoped retrieval for a context.

use flagsmith_openfeature_core::{EvaluationContext, TRAITS_ATTRIBUTE};
use tracing::{debug, warn};

use crate::client::{FlagsmithClient, Traits};
use crate::error::FlagsmithClientError;
use crate::flags::Flags;

/// Fetches the flag set for `context`.
///
/// A non-empty targeting key selects an identity fetch with the `traits`
/// attribute as payload; anything else fetches the environment flags. Exactly
/// one backend call is made and its error is returned untouched.
pub async fn route(
	client: &dyn FlagsmithClient,
	context: &EvaluationContext,
) -> Result<Flags, FlagsmithClientError> {
	match context.targeting_key() {
		Some(identifier) => {
			let traits = traits_from_context(context);
			debug!(
				identifier = identifier,
				trait_count = traits.len(),
				"Fetching identity flags"
			);
			client.get_identity_flags(identifier, &traits).await
		}
		None => {
			debug!("Fetching environment flags");
			client.get_environment_flags().await
		}
	}
}

/// Extracts identity traits from the context, empty when absent.
pub fn traits_from_context(context: &EvaluationContext) -> Traits {
	match context.attribute(TRAITS_ATTRIBUTE) {
		Some(serde_json::Value::Object(map)) => map
			.iter()
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect(),
		None | Some(serde_json::Value::Null) => Traits::new(),
		Some(other) => {
			warn!(
				actual = %other,
				"Traits attribute is not an object, sending no traits"
			);
			Traits::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{Call, RecordingClient};
	use serde_json::json;

	#[tokio::test]
	async fn test_routes_to_environment_without_targeting_key() {
		let client = RecordingClient::new(Flags::default());

		route(&client, &EvaluationContext::default()).await.unwrap();

		assert_eq!(client.calls(), vec![Call::Environment]);
	}

	#[tokio::test]
	async fn test_empty_targeting_key_routes_to_environment() {
		let client = RecordingClient::new(Flags::default());
		let ctx = EvaluationContext::new()
			.with_targeting_key("")
			.with_traits([("foo", json!("bar"))]);

		route(&client, &ctx).await.unwrap();

		assert_eq!(client.calls(), vec![Call::Environment]);
	}

	#[tokio::test]
	async fn test_routes_to_identity_with_traits() {
		let client = RecordingClient::new(Flags::default());
		let ctx = EvaluationContext::new()
			.with_targeting_key("u1")
			.with_traits([("foo", json!("bar"))]);

		route(&client, &ctx).await.unwrap();

		let mut expected = Traits::new();
		expected.insert("foo".to_string(), json!("bar"));
		assert_eq!(
			client.calls(),
			vec![Call::Identity {
				identifier: "u1".to_string(),
				traits: expected,
			}]
		);
	}

	#[tokio::test]
	async fn test_identity_without_traits_sends_empty_map() {
		let client = RecordingClient::new(Flags::default());
		let ctx = EvaluationContext::new().with_targeting_key("u1");

		route(&client, &ctx).await.unwrap();

		assert_eq!(
			client.calls(),
			vec![Call::Identity {
				identifier: "u1".to_string(),
				traits: Traits::new(),
			}]
		);
	}

	#[tokio::test]
	async fn test_backend_error_is_returned_unmodified() {
		let client = RecordingClient::failing();

		let err = route(&client, &EvaluationContext::default())
			.await
			.unwrap_err();

		assert!(matches!(err, FlagsmithClientError::Transport(_)));
	}

	#[test]
	fn test_non_object_traits_are_dropped() {
		let ctx = EvaluationContext::new().with_attribute(TRAITS_ATTRIBUTE, json!("oops"));
		assert!(traits_from_context(&ctx).is_empty());
	}
}
