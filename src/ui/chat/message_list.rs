//! Chat message list component.

use leptos::prelude::*;

use crate::ui::components::ScrollArea;

/// Scrollable container for chat messages.
#[component]
pub fn ChatMessageList() -> impl IntoView {
    view! {
        <ScrollArea class="flex-1">
            <div
                class="flex h-full items-center justify-center p-6"
                aria-live="polite"
                aria-label="Chat messages"
            >
                <p class="text-sm text-textMuted">
                    "No messages yet. The conversation will appear here."
                </p>
            </div>
        </ScrollArea>
    }
}
