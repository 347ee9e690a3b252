//! Chat region layout component.

use leptos::prelude::*;

use super::{ChatHeader, ChatInputArea, ChatMessageList};

/// Chat region component.
///
/// Composes the chat layout:
/// - header with title and status
/// - scrollable message area
/// - input row for new messages
#[component]
pub fn Chat() -> impl IntoView {
    view! {
        <section
            id="chat"
            aria-label="Chat"
            class="flex flex-col h-[28rem] bg-surface border border-outline rounded-2xl overflow-hidden shadow-sm"
        >
            <ChatHeader/>

            <ChatMessageList/>

            <ChatInputArea/>
        </section>
    }
}
