//! Static page sections rendered from `folio_core::content`.

mod about;
mod experiences;
mod hero;
mod projects;

pub use about::About;
pub use experiences::Experiences;
pub use hero::Hero;
pub use projects::Projects;
