//! Email form, success page, and the plain-text mail body.

use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Form, Input, KittenCard, Label};
use crate::reddit::Kitten;

/// Render the email submission form.
///
/// `error` is an inline validation message from a rejected submission;
/// `value` echoes the submitted input back into the field.
#[must_use]
pub fn render_email_form(error: Option<&str>, value: Option<&str>) -> Markup {
    let content = html! {
        h1 { "Email a kitten" }
        p { "Enter an address and we'll send a fresh kitten straight to it." }

        @if let Some(err) = error {
            (Alert::error(err).with_title("Error"))
        }

        (Form::post("/email-a-kitten", html! {
            (Label::new("email", "Your email address"))
            (Input::email("email")
                .with_value(value)
                .placeholder("you@example.com")
                .required()
                .invalid(error.is_some()))
            button type="submit" { "Send me a kitten" }
        }))
    };

    BaseLayout::new("Email a Kitten").render(content)
}

/// Render the success page after a kitten has been mailed.
#[must_use]
pub fn render_email_success(kitten: &Kitten, recipient: &str, num_messages: usize) -> Markup {
    let content = html! {
        h1 { "Kitten dispatched" }
        (Alert::success("Your kitten is on its way.").with_title("Success"))
        p {
            (num_messages) " message(s) sent to " strong { (recipient) } "."
        }
        (KittenCard::new(kitten))
        p {
            a href="/email-a-kitten" role="button" { "Send another" }
        }
    };

    BaseLayout::new("Kitten Sent").render(content)
}

/// Plain-text body of the kitten email.
#[must_use]
pub fn kitten_email_body(kitten: &Kitten) -> String {
    format!(
        "Someone thought you could use a kitten!\n\n\
         {title}\n\
         posted by {author}\n\n\
         See it here: {url}\n",
        title = kitten.title,
        author = kitten.author,
        url = kitten.url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_kitten() -> Kitten {
        Kitten {
            title: "The saddest kitten in the world...".to_string(),
            thumbnail: "https://thumbs.example.com/sad.jpg".to_string(),
            url: "https://example.com/r/Awww/sad".to_string(),
            author: "kitten_fan".to_string(),
        }
    }

    #[test]
    fn test_empty_form_has_no_error() {
        let page = render_email_form(None, None).into_string();
        assert!(page.contains(r#"name="email""#));
        assert!(!page.contains(r#"class="error""#));
    }

    #[test]
    fn test_form_with_error_echoes_input() {
        let page = render_email_form(Some("Enter a valid email address."), Some("nope"));
        let page = page.into_string();
        assert!(page.contains("Enter a valid email address."));
        assert!(page.contains(r#"value="nope""#));
        assert!(page.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn test_success_page_shows_recipient_and_count() {
        let page =
            render_email_success(&sample_kitten(), "kitten_lord@gmail.com", 1).into_string();
        assert!(page.contains("kitten_lord@gmail.com"));
        assert!(page.contains("1 message(s) sent"));
        assert!(page.contains("The saddest kitten in the world..."));
    }

    #[test]
    fn test_email_body_mentions_kitten() {
        let body = kitten_email_body(&sample_kitten());
        assert!(body.contains("The saddest kitten in the world..."));
        assert!(body.contains("https://example.com/r/Awww/sad"));
    }
}
