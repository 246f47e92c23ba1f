use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown content to sanitized HTML to prevent XSS attacks.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Strips unsafe HTML, keeping the markup markdown rendering produces.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = safe_markdown_to_html("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn strips_script_tags() {
        let html = safe_markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn links_get_nofollow() {
        let html = safe_markdown_to_html("[site](https://example.com)");
        assert!(html.contains("nofollow"));
    }
}
