//! Status dashboard for BCDice API servers
//!
//! Looks up the latest BCDice-API and BCDice releases, downloads the list of
//! public servers, queries every server's running versions and administrator,
//! and renders the result as an HTML page or a text table.
//!
//! # Modules
//!
//! - [`app`]: Command entry points used by the binary
//! - [`config`]: Constants, configuration file and data directory
//! - [`dashboard`]: Table model, link builder, poller and stage sequencing
//! - [`fetch`]: Timed GET requests and failure classification
//! - [`logging`]: Tracing subscriber setup
//! - [`render`]: HTML and text output
//! - [`resolve`]: Latest releases and server list
//! - [`version`]: Version tag normalization and comparison

pub mod app;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod version;
