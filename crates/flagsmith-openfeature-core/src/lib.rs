// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core OpenFeature resolution types for the Flagsmith provider.
//!
//! This crate holds the vendor-neutral vocabulary that application code depends on:
//! the evaluation context passed in by callers, the dynamically typed flag value
//! handed back by the backend, and the resolution details (value, error code,
//! reason) returned by every resolution call. It is used by the provider crate
//! (`flagsmith-openfeature`) and by anything that wants to consume resolution
//! results without depending on Flagsmith itself.
//!
//! # Example
//!
//! ```
//! use flagsmith_openfeature_core::{
//!     ErrorCode, EvaluationContext, Reason, ResolutionDetails,
//! };
//!
//! let ctx = EvaluationContext::new()
//!     .with_targeting_key("user123")
//!     .with_attribute("plan", serde_json::json!("enterprise"));
//! assert_eq!(ctx.targeting_key(), Some("user123"));
//!
//! let ok = ResolutionDetails::success("dark".to_string());
//! assert!(!ok.is_error());
//!
//! let failed = ResolutionDetails::failure(
//!     "light".to_string(),
//!     ErrorCode::TypeMismatch,
//!     Reason::Error,
//!     "Value for flag 'ui.theme' is not of type 'STRING'",
//! );
//! assert_eq!(failed.value, "light");
//! assert_eq!(failed.error_code, Some(ErrorCode::TypeMismatch));
//! ```

pub mod context;
pub mod error;
pub mod resolution;
pub mod value;

pub use context::{EvaluationContext, TRAITS_ATTRIBUTE};
pub use error::OpenFeatureError;
pub use resolution::{ErrorCode, ProviderMetadata, Reason, ResolutionDetails};
pub use value::{FlagType, FlagValue};
