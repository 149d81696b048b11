//! Small helpers shared by the components.

pub mod formatting;
pub mod signal_ext;

pub use formatting::current_year;
pub use signal_ext::SignalExt;
