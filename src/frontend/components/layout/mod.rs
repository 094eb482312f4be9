//! Layout components.

pub mod auth_layout;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loading;
pub mod navigation;

pub use auth_layout::AuthLayout;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use loading::LoadingScreen;
pub use navigation::Navigation;
