//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::Home;

/// All application routes. Paths are relative to the deployment base path.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
}
