use crate::frontend::pages::{Auth, Index};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Path of the sign-in page.
pub const AUTH_PATH: &str = "/auth";
/// Path of the main page.
pub const HOME_PATH: &str = "/";

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/auth")]
    Auth {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_routes() {
        assert_eq!(Route::Auth {}.to_string(), AUTH_PATH);
        assert_eq!(Route::Index {}.to_string(), HOME_PATH);
    }
}
