//! Small shared pieces used across feature slices.

pub mod fetch;
pub mod form;
pub mod text;

pub use fetch::Fetch;
pub use form::TextField;
