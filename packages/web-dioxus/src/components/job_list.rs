//! Infinite-scrolling job list

use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use jobs_client::JobSource;

use super::{JobCard, LoadingIndicator, StatusLine};
use crate::state::{viewport, JobFeed};

/// Messages handled by the feed loader, one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedCommand {
    /// Fetch the next page if the feed allows it.
    LoadMore,
    /// The window scrolled; fetch only if near the bottom.
    Scrolled,
    /// Drop everything and start again from the first page.
    Retry,
}

#[component]
pub fn JobList() -> Element {
    let source = use_context::<Rc<dyn JobSource>>();
    let mut feed = use_signal(JobFeed::new);

    // Commands are handled sequentially, so at most one request is in flight.
    // The loop is owned by this scope and stops when the list unmounts.
    let loader = use_coroutine(move |mut rx: UnboundedReceiver<FeedCommand>| {
        let source = source.clone();
        async move {
            while let Some(command) = rx.next().await {
                let window = match command {
                    FeedCommand::LoadMore => feed.write().begin_fetch(),
                    FeedCommand::Retry => feed.write().retry(),
                    FeedCommand::Scrolled => {
                        viewport::sample().and_then(|metrics| feed.write().maybe_fetch_next(metrics))
                    }
                };
                let Some(window) = window else {
                    continue;
                };

                let result = source.fetch_page(window).await;
                feed.write().finish_fetch(result);
            }
        }
    });

    use_hook(move || loader.send(FeedCommand::LoadMore));

    #[cfg(feature = "web")]
    {
        let tx = loader.tx();
        use_hook(move || {
            Rc::new(viewport::ScrollListener::attach(move || {
                // Scroll fires far more often than a page loads.
                if feed.peek().can_fetch() {
                    let _ = tx.unbounded_send(FeedCommand::Scrolled);
                }
            }))
        });
    }

    let (jobs, error, is_loading, is_exhausted, has_fetched) = {
        let state = feed.read();
        (
            state.jobs().to_vec(),
            state.error().map(str::to_string),
            state.is_loading(),
            state.is_exhausted(),
            state.has_fetched(),
        )
    };

    if let Some(message) = error {
        return rsx! {
            div {
                class: "text-center py-4",
                p { class: "text-red-500 mb-2", "{message}" }
                button {
                    class: "text-blue-500 underline",
                    onclick: move |_| loader.send(FeedCommand::Retry),
                    "Try again"
                }
            }
        };
    }

    rsx! {
        div {
            class: "flex flex-col gap-4 w-full max-w-[1200px] mx-auto",
            for job in jobs.iter() {
                JobCard { key: "{job.id()}", job: job.clone() }
            }
            if is_loading {
                LoadingIndicator {}
            }
            if is_exhausted && !jobs.is_empty() {
                StatusLine { text: "No more jobs to load" }
            }
            if !is_loading && has_fetched && jobs.is_empty() {
                StatusLine { text: "No jobs found" }
            }
        }
    }
}
