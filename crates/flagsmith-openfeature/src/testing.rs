// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{FlagsmithClient, Traits};
use crate::error::FlagsmithClientError;
use crate::flags::{Flag, Flags};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
	Environment,
	Identity { identifier: String, traits: Traits },
}

/// Serves a fixed flag set and records every call made to it.
pub struct RecordingClient {
	flags: Option<Flags>,
	calls: Mutex<Vec<Call>>,
}

impl RecordingClient {
	pub fn new(flags: Flags) -> Self {
		Self {
			flags: Some(flags),
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn with_flag(flag: Flag) -> Self {
		Self::new([flag].into_iter().collect())
	}

	pub fn failing() -> Self {
		Self {
			flags: None,
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	fn respond(&self, call: Call) -> Result<Flags, FlagsmithClientError> {
		self.calls.lock().unwrap().push(call);
		match &self.flags {
			Some(flags) => Ok(flags.clone()),
			None => Err(FlagsmithClientError::Transport("refused".to_string())),
		}
	}
}

#[async_trait]
impl FlagsmithClient for RecordingClient {
	async fn get_environment_flags(&self) -> Result<Flags, FlagsmithClientError> {
		self.respond(Call::Environment)
	}

	async fn get_identity_flags(
		&self,
		identifier: &str,
		traits: &Traits,
	) -> Result<Flags, FlagsmithClientError> {
		self.respond(Call::Identity {
			identifier: identifier.to_string(),
			traits: traits.clone(),
		})
	}
}
