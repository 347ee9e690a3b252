//! The application shell.

use leptos::prelude::*;

use crate::ui::chat::Chat;
use crate::ui::explorer::FileExplorer;

/// Top-level shell component.
///
/// Renders the complete HTML document: a bounded-width centering
/// container with the title heading, the file-explorer region, and the
/// chat region, in that order. The shell takes no props and reads no
/// external state, so every render produces the same tree.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Personal coding assistant workspace"/>

                <title>"Personal Coding Assistant"</title>

                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <main class="container mx-auto px-4 max-w-5xl">
                    <div class="my-8 space-y-6">
                        <h1 class="text-2xl font-bold text-center">"Personal Coding Assistant"</h1>

                        <FileExplorer/>
                        <Chat/>
                    </div>
                </main>
            </body>
        </html>
    }
}

/// Render the shell to a full HTML document.
pub fn render_index() -> String {
    view! { <App/> }.to_html()
}
