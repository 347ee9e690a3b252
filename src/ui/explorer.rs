//! File-explorer region.
//!
//! Presentational placeholder for the file-browsing widget. The shell
//! only guarantees the region's position in the document; browsing
//! behavior lives behind this surface and is not wired here.

use leptos::prelude::*;

use crate::ui::components::{Card, CardContent, CardHeader, FileIcon, FolderIcon, Separator};

/// File-explorer region component.
#[component]
pub fn FileExplorer() -> impl IntoView {
    view! {
        <section id="file-explorer" aria-label="File explorer">
            <Card>
                <CardHeader class="flex-row items-center gap-2 space-y-0">
                    <FolderIcon class="h-5 w-5 text-primary"/>
                    <h2 class="font-semibold text-lg">"Files"</h2>
                </CardHeader>

                <Separator/>

                <CardContent class="pt-6">
                    <div class="flex flex-col items-center justify-center gap-2 py-10 text-textMuted">
                        <FileIcon class="h-8 w-8"/>
                        <p class="text-sm">"No folder open"</p>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}
