//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `StatusBar`: footer with position and hint
//! - `HelpOverlay`: keybinding reference
//! - `TableView`: header and columns, driven by one `RenderPlan`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `DetailView`: scrollable record view; its `DetailViewState` persists
//!   in `TuiState` and handles scroll events
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── table_view.rs    (header + per-column pads)
//! ├── status_bar.rs    (footer)
//! ├── detail_view.rs   (one record, full screen)
//! └── help_overlay.rs  (centered help box)
//! ```

pub mod detail_view;
pub mod help_overlay;
pub mod status_bar;
pub mod table_view;

pub use detail_view::{DetailView, DetailViewState};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use table_view::TableView;
