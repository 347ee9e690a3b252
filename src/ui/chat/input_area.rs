//! Chat input area component.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, SendIcon};

/// Chat message input row.
#[component]
pub fn ChatInputArea() -> impl IntoView {
    view! {
        <div class="border-t border-outline p-4 bg-surfaceContainer">
            <div class="flex gap-2">
                <div class="flex-1">
                    <textarea
                        name="message"
                        placeholder="Type your message..."
                        class="w-full min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl \
                               border border-outline bg-background text-textPrimary \
                               placeholder:text-textMuted resize-none \
                               focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent"
                        rows="1"
                    ></textarea>
                </div>

                <Button
                    size=ButtonSize::Icon
                    button_type="submit"
                    class="shrink-0 h-11 w-11 rounded-xl"
                >
                    <SendIcon class="h-5 w-5"/>
                </Button>
            </div>

            <p class="text-xs text-textMuted mt-2 text-center">
                "Press Enter to send, Shift+Enter for new line"
            </p>
        </div>
    }
}
