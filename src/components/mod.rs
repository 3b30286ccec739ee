//! The components module contains the page's components and the pieces they
//! are built from.

mod app;
pub mod component;
mod host;
mod share;
mod user;
pub mod view;

pub use app::*;
pub use share::*;
pub use user::*;
