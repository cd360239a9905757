//! Kitten display card.

use maud::{html, Markup, Render};

use crate::reddit::Kitten;

/// A card presenting one kitten: title, thumbnail, and source line.
#[derive(Debug, Clone)]
pub struct KittenCard<'a> {
    kitten: &'a Kitten,
}

impl<'a> KittenCard<'a> {
    /// Create a card for the given kitten.
    #[must_use]
    pub fn new(kitten: &'a Kitten) -> Self {
        Self { kitten }
    }
}

impl Render for KittenCard<'_> {
    fn render(&self) -> Markup {
        html! {
            article {
                header {
                    h2 { (self.kitten.title) }
                }
                a href=(self.kitten.url) {
                    img src=(self.kitten.thumbnail) alt=(self.kitten.title);
                }
                footer {
                    small {
                        "posted by " (self.kitten.author)
                        " | " a href=(self.kitten.url) { "source" }
                    }
                }
            }
        }
    }
}
