//! Root application component

use std::rc::Rc;

use dioxus::prelude::*;
use jobs_client::JobSource;

use crate::config::{self, AppConfig};
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    match config::get() {
        Ok(config) => rsx! {
            ConfiguredApp { config: config.clone() }
        },
        Err(message) => rsx! {
            ConfigurationError { message: message }
        },
    }
}

/// Provides the base path and data client to everything under the router
#[component]
fn ConfiguredApp(config: AppConfig) -> Element {
    use_context_provider(|| config.base_path.clone());
    use_context_provider(|| Rc::new(config.jobs_client()) as Rc<dyn JobSource>);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn ConfigurationError(message: &'static str) -> Element {
    rsx! {
        main {
            class: "container mx-auto px-4 py-8 text-center",
            h1 { class: "text-3xl font-bold mb-8", "Daily Tech Job Update" }
            p { class: "text-red-500 mb-2", "The job feed is not configured." }
            pre { class: "text-sm text-gray-600 whitespace-pre-wrap", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_is_visible() {
        let mut dom = VirtualDom::new_with_props(
            ConfigurationError,
            ConfigurationErrorProps {
                message: "SUPABASE_URL must be set",
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("The job feed is not configured."));
        assert!(html.contains("SUPABASE_URL must be set"));
    }
}
