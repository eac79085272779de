//! Markdown -> HTML rendering for the email body's HTML part.

use pulldown_cmark::{html, Parser};

/// Render CommonMark text to HTML. Pure, no options beyond the defaults.
#[must_use]
pub fn render(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis() {
        assert_eq!(render("**done**"), "<p><strong>done</strong></p>\n");
    }

    #[test]
    fn renders_headings_and_lists() {
        let out = render("# Summary\n\n- point one\n- point two\n");
        assert!(out.contains("<h1>Summary</h1>"));
        assert!(out.contains("<li>point one</li>"));
        assert!(out.contains("<li>point two</li>"));
    }

    #[test]
    fn plain_text_becomes_a_paragraph() {
        assert_eq!(render("hello"), "<p>hello</p>\n");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }
}
