use dioxus::prelude::*;

pub mod case_detail;
pub mod home;

use case_detail::CaseDetail;
use home::Home;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/case/:reference")]
        CaseDetail { reference: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",
            header {
                class: "border-b border-border",
                div {
                    class: "max-w-3xl mx-auto px-6 py-4 flex items-center justify-between",
                    Link {
                        to: Route::Home {},
                        class: "text-lg font-bold",
                        "Complaint Tracker"
                    }
                    span {
                        class: "text-sm text-muted-foreground",
                        "Citizen services portal"
                    }
                }
            }
            main {
                class: "max-w-3xl mx-auto px-6 py-8",
                Outlet::<Route> {}
            }
        }
    }
}
