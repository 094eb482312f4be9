//! Embedded stylesheet loading.

use std::{collections::HashMap, sync::OnceLock};

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

macro_rules! embed_css {
    ($name:expr, $path:expr) => {
        (
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)),
        )
    };
}

const STYLESHEETS: &[(&str, &str)] = &[
    embed_css!("main", "assets/styles/main.css"),
    embed_css!("auth", "assets/styles/auth.css"),
];

pub struct ResourceLoader;

impl ResourceLoader {
    fn stylesheets() -> &'static HashMap<&'static str, &'static str> {
        CSS_CACHE.get_or_init(|| STYLESHEETS.iter().copied().collect())
    }

    /// Returns the named stylesheet, or an empty string if it is unknown.
    pub fn get_css(name: &str) -> &'static str {
        Self::stylesheets().get(name).copied().unwrap_or_else(|| {
            log::warn!("Unknown stylesheet: {name}");
            ""
        })
    }
}
