//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: C++ input with line numbers and the failing line marked
//! - [`output`]: generated Python, or the diagnostic
//! - [`status`]: status bar with file name, result and keybindings
//! - [`highlight`]: line highlighter used by both code panes
//! - `utils`: scroll clamping and pane borders
//!
//! Each pane exports a `render_*` function that takes the frame, its area and
//! borrowed state; scroll offsets are clamped in place while rendering.

mod utils;

pub mod highlight;
pub mod output;
pub mod source;
pub mod status;

pub use output::{output_line_count, render_output_pane};
pub use source::render_source_pane;
pub use status::render_status_bar;
