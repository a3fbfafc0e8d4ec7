//! Session Commands
//!
//! Frontend bindings for the device-persisted session user and the
//! buzzwall-instructions flag. The user itself is written by the sign-in
//! screens of the host app.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::SessionUser;

// ========================
// Types
// ========================

/// Everything the shell keeps on the device
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeviceSession {
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Buzz Wall instructions were already walked through
    #[serde(default, rename = "buzzwallSeen")]
    pub buzzwall_seen: bool,
}

// ========================
// Commands
// ========================

pub async fn load_session() -> Result<DeviceSession, String> {
    let result = invoke("load_session", JsValue::NULL).await.map_err(describe)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn mark_buzzwall_seen() -> Result<(), String> {
    invoke("mark_buzzwall_seen", JsValue::NULL)
        .await
        .map(|_| ())
        .map_err(describe)
}

/// Command errors arrive as the shell's error string
fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
