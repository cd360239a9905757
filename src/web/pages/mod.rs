//! Page templates, one module per screen.

pub mod email;
pub mod kitten;
