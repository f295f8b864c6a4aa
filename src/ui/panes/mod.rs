//! TUI pane rendering modules
//!
//! - [`structure`]: the selected structure, drawn from the visible snapshot
//!   with the current step's element highlighted
//! - [`trace`]: the steps revealed so far
//! - [`input`]: the command prompt
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each module exports a single stateless `render_*` function.

pub mod input;
pub mod status;
pub mod structure;
pub mod trace;

pub use input::render_input_pane;
pub use status::render_status_bar;
pub use structure::render_structure_pane;
pub use trace::render_trace_pane;
