// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The backend seam: whatever actually talks to Flagsmith.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FlagsmithClientError;
use crate::flags::Flags;

/// Identity traits sent along with an identity-scoped fetch.
pub type Traits = HashMap<String, serde_json::Value>;

/// A Flagsmith client able to fetch evaluated flag sets.
///
/// The provider makes exactly one of these calls per resolution and never
/// retries or caches; polling, local evaluation and network policy are the
/// implementation's concern. Implementations must be safe to call from many
/// tasks at once.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use flagsmith_openfeature::{Flags, FlagsmithClient, FlagsmithClientError, Traits};
///
/// struct HttpClient { /* ... */ }
///
/// #[async_trait]
/// impl FlagsmithClient for HttpClient {
///     async fn get_environment_flags(&self) -> Result<Flags, FlagsmithClientError> {
///         let api_flags = self.fetch("/api/v1/flags/").await?;
///         Ok(Flags::from_api_flags(&api_flags, None))
///     }
///
///     async fn get_identity_flags(
///         &self,
///         identifier: &str,
///         traits: &Traits,
///     ) -> Result<Flags, FlagsmithClientError> {
///         let api_flags = self.fetch_identity(identifier, traits).await?;
///         Ok(Flags::from_api_flags(&api_flags, None))
///     }
/// }
/// ```
#[async_trait]
pub trait FlagsmithClient: Send + Sync + 'static {
	/// Fetches the environment-wide flags.
	async fn get_environment_flags(&self) -> Result<Flags, FlagsmithClientError>;

	/// Fetches flags evaluated for a single identity.
	async fn get_identity_flags(
		&self,
		identifier: &str,
		traits: &Traits,
	) -> Result<Flags, FlagsmithClientError>;
}

/// Type alias for a shared client.
pub type SharedFlagsmithClient = Arc<dyn FlagsmithClient>;

#[async_trait]
impl<C: FlagsmithClient + ?Sized> FlagsmithClient for Arc<C> {
	async fn get_environment_flags(&self) -> Result<Flags, FlagsmithClientError> {
		(**self).get_environment_flags().await
	}

	async fn get_identity_flags(
		&self,
		identifier: &str,
		traits: &Traits,
	) -> Result<Flags, FlagsmithClientError> {
		(**self).get_identity_flags(identifier, traits).await
	}
}
