//! Kitten display page.

use maud::{html, Markup};

use crate::components::{BaseLayout, KittenCard};
use crate::reddit::Kitten;

/// Render the page shown by `/show-a-kitten`.
#[must_use]
pub fn render_kitten_page(kitten: &Kitten) -> Markup {
    let content = html! {
        h1 { "A kitten for you" }
        (KittenCard::new(kitten))
        p {
            a href="/show-a-kitten" role="button" { "Another one!" }
            " "
            a href="/email-a-kitten" role="button" class="secondary" { "Email a kitten" }
        }
    };

    BaseLayout::new("A Kitten").render(content)
}
