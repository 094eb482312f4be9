//! UI components: the page chrome in `layout` and the feature views in `panels`.

pub mod layout;
pub mod panels;
