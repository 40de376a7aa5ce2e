//! The navigation bar component and its geometry.

pub mod layout;
pub mod navbar;

pub use navbar::{Navbar, NavbarOptions, OpenPanel};
