//! Home page component

use dioxus::prelude::*;

use crate::components::JobList;

/// Home page - heading and the job feed
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "container mx-auto px-4 py-8",
            h1 {
                class: "text-3xl font-bold mb-8 text-center",
                "Daily Tech Job Update"
            }
            JobList {}
        }
    }
}
