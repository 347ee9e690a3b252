//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{Badge, BadgeVariant, MessageSquareIcon};

/// Chat header with title and status badge.
#[component]
pub fn ChatHeader() -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-4 py-3 border-b border-outline bg-surfaceContainer">
            <div class="flex items-center gap-2">
                <MessageSquareIcon class="h-5 w-5 text-primary"/>
                <h2 class="font-semibold text-lg">"Chat"</h2>
            </div>

            <Badge variant=BadgeVariant::Secondary>
                <span id="chat-status" class="text-xs">"Ready"</span>
            </Badge>
        </header>
    }
}
