//! Terminal-facing output: width-aware text, boxes, tables, prompts.

pub mod confirm;
pub mod frame;
pub mod help_table;
pub mod render;
pub mod text;
pub mod theme;

pub use confirm::{ask, confirm_box, sync_box, Choices, Decision, CONFIRM_CHOICES, SYNC_CHOICES};
pub use frame::{BoxFrame, Table};
pub use help_table::render_help_table;
pub use render::{RenderSink, Renderer};
pub use text::{display_width, pad_to_width, strip_ansi};
pub use theme::{Theme, Tone};
