use pulldown_cmark::{Options, Parser, html};

/// Render model output as HTML.
///
/// The answer is opaque markup-bearing text; nothing is added or stripped
/// beyond the markdown-to-HTML conversion itself.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
