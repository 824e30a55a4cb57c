//! Markdown rendering for assistant answers.
//!
//! Answers are GitHub-flavoured markdown produced by the backend. They are
//! converted to HTML and sanitized before being injected with `inner_html`.

use pulldown_cmark::{html, Options, Parser};

fn gfm_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Render markdown to sanitized HTML
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, gfm_options());
    let mut unsafe_html = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut unsafe_html, parser);
    ammonia::Builder::default()
        .link_rel(Some("noopener noreferrer"))
        .clean(&unsafe_html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markup() {
        let html = render_markdown("**Consideration** is *bargained-for* exchange.");
        assert!(html.contains("<strong>Consideration</strong>"));
        assert!(html.contains("<em>bargained-for</em>"));
    }

    #[test]
    fn test_gfm_table() {
        let html = render_markdown("| Term | Meaning |\n|---|---|\n| Offer | Proposal |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Offer</td>"));
    }

    #[test]
    fn test_script_is_stripped() {
        let source = "Hello <script>alert(1)</script> <a href=\"javascript:x()\">x</a>";
        let html = render_markdown(source);
        assert!(!html.contains("<script"));
        assert!(!html.contains("javascript:"));
    }
}
