//! Session User
//!
//! Persisted on the device by the Tauri shell; read once per mount.

use serde::{Deserialize, Serialize};

use super::de::{flexible_i64, flexible_string};
use super::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    /// Onboarding step; `1` means the signup details are still missing
    #[serde(default, deserialize_with = "flexible_i64")]
    pub steps: i64,
    #[serde(default, deserialize_with = "flexible_string")]
    pub name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image: String,
}

impl SessionUser {
    pub fn needs_signup_details(&self) -> bool {
        self.steps == 1
    }

    /// First letter of the name for avatar placeholders
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}
