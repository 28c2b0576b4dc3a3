//! Interactive TUI explorer

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Overview, TOP_GROUPS, run_tui};
