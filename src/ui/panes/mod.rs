//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*` function and, where it needs
//! more than a couple of inputs, a `*RenderData` struct bundling them.
//!
//! # Pane Modules
//!
//! - [`picker`]: Interest and concept choice lists
//! - [`explanation`]: Analogy, steps and highlighted code
//! - [`demo`]: Live stack/queue sequence with its controls
//! - [`status`]: Status bar with keybindings and the current selection
//! - `utils`: Shared block and scroll helpers

mod utils;

pub mod demo;
pub mod explanation;
pub mod picker;
pub mod status;

pub use demo::{render_demo_pane, DemoRenderData};
pub use explanation::render_explanation_pane;
pub use picker::{render_picker_pane, PickerRenderData};
pub use status::{render_status_bar, StatusRenderData};
