//! ShadCN-style reusable UI components.
//!
//! A small set of composable, accessible UI components inspired by
//! shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Primary action button
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Badge`]: Status badge/tag
//! - [`ScrollArea`]: Scrollable container
//! - [`Separator`]: Visual separator line
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod icons;
mod scroll_area;
mod separator;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
pub use scroll_area::ScrollArea;
pub use separator::Separator;
