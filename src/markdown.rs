//! Mock markdown rendering.
//!
//! The real backend renders user-submitted markdown to HTML before storing
//! the `body` field. For test purposes the rendering is faked by wrapping the
//! raw input in a single paragraph tag; client tests only assert that *some*
//! HTML came back for the markdown they sent.

/// Render markdown the way the mock backend does: one paragraph, no parsing.
pub fn render(markdown: &str) -> String {
    format!("<p>{markdown}</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_in_paragraph() {
        assert_eq!(render("hello **world**"), "<p>hello **world**</p>");
        assert_eq!(render(""), "<p></p>");
    }
}
