//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod session_cmd;

pub use session_cmd::*;
