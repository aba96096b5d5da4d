//! Page components for Tokensmith.

mod studio;

pub use studio::Studio;
