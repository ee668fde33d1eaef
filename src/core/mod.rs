//! # Core Table Logic
//!
//! Everything ctable knows about records, columns and scrolling.
//! It knows nothing about any specific terminal library.
//!
//! ```text
//!   records ──► projection ──► layout ──► viewport ──► RenderPlan
//!                                            ▲
//!                       Action ──► update() ─┘
//!                                            │
//!                                    selection ──► detail entries
//! ```
//!
//! ## Modules
//!
//! - [`record`]: decoding the payload into records
//! - [`projection`]: records → named columns
//! - [`layout`]: column widths and cell fitting
//! - [`viewport`]: scroll offset and selected row
//! - [`selection`]: row snapshot → original record
//! - [`help`]: keybinding reference text
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod help;
pub mod layout;
pub mod projection;
pub mod record;
pub mod selection;
pub mod state;
pub mod viewport;
