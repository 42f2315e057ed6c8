//! # Core Application Logic
//!
//! This module contains Lumina's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (input, phase) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render (view model)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Headless  │
//!             │  Adapter   │          │  (--once)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ReportInput`, `RequestState` and the `App` struct
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`controller`]: Validation, the request lifecycle and outcome resolution
//! - [`render`]: Key takeaway extraction and placeholder selection
//! - [`config`]: Layered settings

pub mod action;
pub mod config;
pub mod controller;
pub mod render;
pub mod state;
