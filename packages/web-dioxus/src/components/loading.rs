//! Loading and status lines shown under the job list

use dioxus::prelude::*;

/// Inline loading indicator shown while a page is in flight
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-4",
            div {
                class: "flex space-x-2",
                div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce" }
                div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-2 text-sm text-gray-500", "Loading..." }
        }
    }
}

#[component]
pub fn StatusLine(text: &'static str) -> Element {
    rsx! {
        div { class: "text-center py-4 text-gray-500", "{text}" }
    }
}
