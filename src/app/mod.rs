//! Application layer.
//!
//! - `table` - the grid loaded from CSV and its file binding
//! - `session` - active marker symbol and edit mode
//! - `controller` - click handling rules
//! - `persist` - CSV read/write behind the save seam
//! - `texts` - static en/zh label bundles
//! - `settings` - persisted window/dialog preferences
//! - `error` / `messages` - shared error type and UI channel messages

pub mod controller;
pub mod error;
pub mod messages;
pub mod persist;
pub mod session;
pub mod settings;
pub mod table;
pub mod texts;

// Re-exports for convenient external access
pub use controller::{ClickOutcome, apply_click};
pub use error::{AppError, Result};
pub use messages::Message;
pub use session::{EditMode, EditSession, Marker};
pub use settings::AppSettings;
pub use table::TableStore;
pub use texts::{Lang, Texts};
