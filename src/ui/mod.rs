//! UI components and layouts.
//!
//! Leptos SSR components for rendering the application shell, following
//! ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: the application shell
//! - [`explorer`]: the file-explorer region
//! - [`chat`]: the chat region
//! - [`components`]: reusable ShadCN-style UI components

pub mod app;
pub mod chat;
pub mod components;
pub mod explorer;
