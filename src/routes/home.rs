use dioxus::prelude::*;

use crate::components::icons::FileTextIcon;
use crate::components::CopyButton;
use crate::routes::Route;
use crate::services::case_directory;
use crate::utils::copy_request::CopyTrigger;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "space-y-4",
            h1 {
                class: "text-2xl font-bold",
                "Tracked complaints"
            }
            p {
                class: "text-sm text-muted-foreground",
                "Open a case to see its status and share its tracking link."
            }

            for case in case_directory::all().iter() {
                div {
                    key: "{case.reference}",
                    class: "border border-border rounded-lg p-4 flex items-center justify-between gap-4",
                    div {
                        class: "flex items-center gap-3 min-w-0",
                        FileTextIcon { class: "w-5 h-5 flex-shrink-0" }
                        div {
                            class: "min-w-0",
                            Link {
                                to: Route::CaseDetail { reference: case.reference.to_string() },
                                class: "font-semibold hover:underline block truncate",
                                "{case.title}"
                            }
                            p {
                                class: "font-mono text-xs text-muted-foreground",
                                "{case.reference}"
                            }
                        }
                    }
                    CopyButton {
                        trigger: CopyTrigger::literal("Copy reference", case.reference),
                    }
                }
            }
        }
    }
}
