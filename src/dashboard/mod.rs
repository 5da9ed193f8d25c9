//! Dashboard assembly
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Releases   │────▶│   Server    │────▶│    Table    │
//! │ (baseline)  │     │    list     │     │  (rows)     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │    Link     │◀────────────────────────│   Poller    │
//! │   builder   │                         │ (per row)   │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`controller`]: Runs the stages in order and produces a [`DashboardReport`]
//! - [`link`]: Kind-specific link construction and latest-release marking
//! - [`poller`]: Concurrent version/admin queries, one future per row
//! - [`table`]: Row and cell model

pub mod controller;
pub mod link;
pub mod poller;
pub mod table;

pub use controller::{Dashboard, DashboardReport, LogObserver, Stage, StageObserver};
pub use table::{Cell, RowState, ServerTable};
