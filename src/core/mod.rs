//! # Core Application Logic
//!
//! Configuration, layout, per-cycle state and row formatting.
//! It knows nothing about ratatui or HTTP.
//!
//! ```text
//!   ┌──────────┐     ┌──────────────────────────┐     ┌──────────┐
//!   │   feed   │ ──▶ │           CORE           │ ──▶ │   TUI    │
//!   │ (fetch)  │     │                          │     │ (canvas) │
//!   └──────────┘     │  • config (run knobs)    │     └──────────┘
//!                    │  • layout (positions)    │
//!                    │  • state + action        │
//!                    │  • format (cells)        │
//!                    └──────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `ResolvedConfig`, every knob, resolved once at startup
//! - [`layout`]: `ScreenLayout`, fixed canvas geometry
//! - [`state`]: The `App` struct, what the current cycle shows
//! - [`action`]: The `Action` enum, everything that can happen in a cycle
//! - [`format`]: `format_quake()`, record to display cells

pub mod action;
pub mod config;
pub mod format;
pub mod layout;
pub mod state;
