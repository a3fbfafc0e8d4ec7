//! Wowfy Shell
//!
//! Hosts the Wowfy frontend and keeps the signed-in session on the device:
//! - session: JSON-backed session store
//! - commands: Tauri command handlers

use tauri::Manager;

mod commands;
mod session;

use session::SessionStore;

/// Application state shared across commands
pub struct AppState {
    pub sessions: SessionStore,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let paths = app.path();

            // Initialize logging
            rolling_logger::init_logger(paths.app_log_dir()?, "Wowfy")?;

            let data_dir = paths.app_data_dir()?;
            let sessions = tauri::async_runtime::block_on(SessionStore::open(&data_dir))?;
            log::info!("Session store at {}", sessions.path().display());

            app.manage(AppState { sessions });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_session,
            commands::save_session_user,
            commands::clear_session,
            commands::mark_buzzwall_seen,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            let _ = rolling_logger::error(&format!("error while running tauri application: {}", e));
            eprintln!("error while running tauri application: {}", e);
            std::process::exit(1);
        });
}
