use comrak::{markdown_to_html, Options};

/// Render readme markdown to HTML with GitHub Flavored Markdown extensions
/// (tables, strikethrough, autolinks, task lists). Raw HTML embedded in the
/// markdown passes through unescaped.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    markdown_to_html(text, &options)
}
