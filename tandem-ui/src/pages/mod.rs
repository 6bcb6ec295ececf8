//! Pages
//!
//! The two views switched in place by the app root.

pub mod home;
pub mod retro;

pub use home::Home;
pub use retro::Retro;
