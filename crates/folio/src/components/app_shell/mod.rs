//! App shell components: Navbar, Footer, ScrollTopButton
//!
//! These components frame the page sections and stay the same across the site.

mod footer;
mod navbar;
mod scroll_top;

pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll_top::ScrollTopButton;
