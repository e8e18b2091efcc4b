//! # Core Application Logic
//!
//! This module contains taskpad's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Task (value type)    │
//!                    │  • Home (task owner)    │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ snapshot ↓   ↑ Action
//!                         ┌──────┴──────┐
//!                         │     TUI     │
//!                         │   Adapter   │
//!                         │  (ratatui)  │
//!                         └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: `Task`, `TaskId` and the id generator
//! - [`state`]: `Home`, the single owner of the task collection
//! - [`action`]: `Action`, `Effect` and `update()`
//! - [`config`]: config file loading and resolution

pub mod action;
pub mod config;
pub mod state;
pub mod task;
