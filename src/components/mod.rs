//! Maud HTML template components for the web UI.
//!
//! This module provides reusable maud components for generating HTML.
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout and navigation
//! - `alert`: Alert messages for form feedback
//! - `card`: Kitten display card
//! - `form`: Form elements and input components
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, Input};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (Alert::success("Kitten dispatched!"))
//!         (Input::email("email").placeholder("you@example.com"))
//!     };
//!     BaseLayout::new("My Page").render(content)
//! }
//! ```

pub mod alert;
pub mod card;
pub mod form;
pub mod layout;

// Re-export layout components
pub use layout::BaseLayout;

// Re-export alert components
pub use alert::{Alert, AlertVariant};

// Re-export card components
pub use card::KittenCard;

// Re-export form components
pub use form::{Form, Input, Label};
