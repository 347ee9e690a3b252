//! Separator component for visual division.

use leptos::prelude::*;

/// Horizontal separator line component.
#[component]
pub fn Separator(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("shrink-0 bg-outline h-[1px] w-full {}", class);

    view! {
        <div role="separator" class=classes />
    }
}
