//! Markdown rendering for CMS free-text fields.
//!
//! Renders the lightweight markup of content records to sanitizer-ready
//! HTML. Block and inline markup only: no typographic substitution (straight
//! quotes and dashes stay as authored), and raw inline HTML passes through
//! untouched. Sanitizing the output for display is the consumer's concern.

use pulldown_cmark::{html, Options, Parser};

/// Renders markup to an HTML string.
pub fn render(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut rendered = String::with_capacity(text.len() * 2);
    html::push_html(&mut rendered, parser);
    rendered
}
