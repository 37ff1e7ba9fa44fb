//! Inline Style Helpers

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that would end or corrupt a quoted CSS `url("...")`
const CSS_URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'\\');

/// Darkening gradient layered over the card image.
pub fn card_background(image_url: &str) -> String {
    format!(
        "background-image: linear-gradient(to top, rgba(0,0,0,0.9) 0%, rgba(0,0,0,0.4) 70%), url(\"{}\")",
        utf8_percent_encode(image_url, CSS_URL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_untouched() {
        let style = card_background("https://i.postimg.cc/52j3mttn/image.png");
        assert!(style.ends_with("url(\"https://i.postimg.cc/52j3mttn/image.png\")"));
    }

    #[test]
    fn test_data_url_untouched() {
        let src = "data:image/jpeg;base64,/9j/4AAQ+SkZJRg==";
        assert!(card_background(src).contains(src));
    }

    #[test]
    fn test_breaking_characters_escaped() {
        let style = card_background("https://x.test/a b\")");
        assert!(style.ends_with("url(\"https://x.test/a%20b%22%29\")"));
    }
}
