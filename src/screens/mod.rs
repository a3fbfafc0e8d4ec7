//! Screens
//!
//! The two tabs of the app shell.

mod buzzwall;
mod todo;

pub use buzzwall::BuzzWallScreen;
pub use todo::TodoScreen;
