//! HTML → (title, body text) extraction.

use scraper::{Html, Selector};

/// Parses an HTML document and returns the `<title>` text and the
/// concatenated text nodes of `<body>`. Missing elements yield "".
pub fn parse_html(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let mut title = String::new();
    if let Ok(selector) = Selector::parse("title") {
        if let Some(elem) = document.select(&selector).next() {
            title = elem.text().collect::<String>();
        }
    }

    let mut body = String::new();
    if let Ok(selector) = Selector::parse("body") {
        if let Some(elem) = document.select(&selector).next() {
            body = elem.text().collect::<String>();
        }
    }

    (title, body)
}
