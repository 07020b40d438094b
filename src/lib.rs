//! A desktop of floating windows with edge and corner snapping.
//!
//! The core (`layout`, `window`, `interaction`) is host-agnostic and works in
//! plain integer coordinates. The remaining modules host it in a terminal.

pub mod config;
pub mod content;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod interaction;
pub mod layout;
pub mod registry;
pub mod storage;
pub mod taskbar;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
