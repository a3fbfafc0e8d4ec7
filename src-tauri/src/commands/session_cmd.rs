//! Session Commands
//!
//! Tauri commands over the device session store.

use serde_json::Value;
use tauri::State;

use crate::session::DeviceSession;
use crate::AppState;

/// Load the stored user and the instructions flag
#[tauri::command]
pub async fn load_session(state: State<'_, AppState>) -> Result<DeviceSession, String> {
    Ok(state.sessions.snapshot().await)
}

/// Store the signed-in user (called by the sign-in screens)
#[tauri::command]
pub async fn save_session_user(state: State<'_, AppState>, user: Value) -> Result<(), String> {
    state.sessions.save_user(user).await.map_err(|e| {
        log::warn!("save_session_user failed: {}", e);
        e.to_string()
    })
}

/// Sign out
#[tauri::command]
pub async fn clear_session(state: State<'_, AppState>) -> Result<(), String> {
    state.sessions.clear_user().await.map_err(|e| e.to_string())
}

/// Remember that the Buzz Wall instructions were walked through
#[tauri::command]
pub async fn mark_buzzwall_seen(state: State<'_, AppState>) -> Result<(), String> {
    state.sessions.mark_buzzwall_seen().await.map_err(|e| e.to_string())
}
