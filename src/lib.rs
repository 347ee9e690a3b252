//! Personal Coding Assistant
//!
//! A server-side-rendered application shell for a personal coding
//! assistant. The shell is a pure, stateless composition root: a
//! bounded-width container holding a centered title, a file-explorer
//! region, and a chat region, in that order.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server delivering the rendered shell
//! - **UI**: Leptos SSR components following ShadCN-UI design principles
//! - **Config**: layered CLI / environment / file configuration
//!
//! # Modules
//!
//! - [`config`]: configuration loading and precedence
//! - [`server`]: router construction and serving
//! - [`ui`]: the shell and its regions

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::unused_async)]

pub mod config;
pub mod server;
pub mod ui;
