use dioxus::prelude::*;

use crate::components::CopyTriggerBar;
use crate::services::case_directory::{self, CaseRecord};
use crate::utils::copy_request::CopyTrigger;

#[component]
pub fn CaseDetail(reference: String) -> Element {
    match case_directory::lookup(&reference) {
        Some(case) => rsx! {
            CaseCard { case: case.clone() }
        },
        None => rsx! {
            div {
                class: "border border-border rounded-lg p-8 text-center space-y-2",
                h1 {
                    class: "text-xl font-semibold",
                    "Case not found"
                }
                p {
                    class: "text-sm text-muted-foreground",
                    "No complaint is tracked under {reference}."
                }
            }
        },
    }
}

#[component]
fn CaseCard(case: CaseRecord) -> Element {
    let status_label = case.status.label();
    let badge_class = case.status.badge_class();

    // The page's share triggers, registered once per view build.
    let triggers = vec![
        CopyTrigger::literal("Copy reference", case.reference),
        CopyTrigger::page_url("Copy link"),
    ];

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "space-y-2",
                div {
                    class: "flex items-center gap-3",
                    h1 {
                        class: "text-2xl font-bold",
                        "{case.title}"
                    }
                    span {
                        class: "px-2 py-0.5 rounded-full text-xs font-medium {badge_class}",
                        "{status_label}"
                    }
                }
                p {
                    class: "font-mono text-sm text-muted-foreground",
                    "{case.reference}"
                }
            }

            div {
                class: "border border-border rounded-lg p-4 grid grid-cols-2 gap-4 text-sm",
                div {
                    p {
                        class: "text-muted-foreground",
                        "Location"
                    }
                    p {
                        "{case.location}"
                    }
                }
                div {
                    p {
                        class: "text-muted-foreground",
                        "Filed"
                    }
                    p {
                        "{case.filed}"
                    }
                }
            }

            div {
                class: "space-y-2",
                h2 {
                    class: "text-sm font-medium text-muted-foreground",
                    "Share this case"
                }
                CopyTriggerBar { triggers }
            }
        }
    }
}
