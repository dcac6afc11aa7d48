use crate::markdown::render_markdown;
use crate::types::Repository;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::warn;

// Look of the original page: bordered cards, a left-aligned stat row, and a
// bounded scrollable readme panel.
const PAGE_STYLE: &str = "\
.page { max-width: 80%; margin: auto; font-family: Arial; }
.repo-list { list-style: none; padding: 0; }
.repo-card { border: 1px solid gray; margin: 10px; padding: 10px; }
.repo-summary { display: flex; flex-direction: row; justify-content: space-between; }
.repo-main { flex-basis: 80%; }
.repo-title { font-weight: bold; }
.repo-description { font-size: 0.875rem; }
.repo-stats { display: flex; flex-direction: row; justify-content: flex-start; font-size: 0.75rem; }
.repo-stats span { margin-right: 1rem; }
.repo-preview { flex-basis: 20%; }
.repo-readme { max-height: 200px; overflow: auto; border: 1px dashed gray; margin: 1rem; padding: 1rem; }
";

/// Render the full projects page for a pre-fetched repository list.
///
/// Pure and synchronous: no network, no shared state. Items come out in
/// input order, one `<li>` per repository, keyed by repository id.
pub fn render_page(repos: &[Repository]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Projects</title>\n");
    html.push_str("<style>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"page\">\n");
    html.push_str("<h1>Projects</h1>\n<h2>Github Repos</h2>\n");
    html.push_str("<ul class=\"repo-list\">\n");

    let mut seen_ids = HashSet::new();
    for repo in repos {
        if !seen_ids.insert(repo.id.as_str()) {
            // API guarantees unique ids; render anyway if that ever breaks
            warn!(id = %repo.id, name = %repo.name, "Duplicate repository id in result set");
        }
        render_item(&mut html, repo);
    }

    html.push_str("</ul>\n</div>\n</body>\n</html>\n");
    html
}

fn render_item(html: &mut String, repo: &Repository) {
    html.push_str(&format!("<li data-repo-id=\"{}\">\n", escape_html(&repo.id)));
    html.push_str("<div class=\"repo-card\">\n<div class=\"repo-summary\">\n");

    html.push_str("<div class=\"repo-main\">\n");
    html.push_str(&format!(
        "<div class=\"repo-title\"><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></div>\n",
        escape_html(&repo.url),
        escape_html(&repo.name)
    ));

    if let Some(description) = &repo.description {
        html.push_str(&format!(
            "<div class=\"repo-description\">{}</div>\n",
            escape_html(description)
        ));
    }

    html.push_str("<div class=\"repo-stats\">\n");
    html.push_str(&format!("<span>{} \u{1F374}</span>\n", repo.fork_count));
    html.push_str(&format!("<span>{} \u{2B50}</span>\n", repo.stargazers.total_count));
    html.push_str(&format!(
        "<span>Updated {}</span>\n",
        humanize_since(repo.updated_at)
    ));
    if let Some(language) = repo.primary_language_name() {
        html.push_str(&format!("<span>{}</span>\n", escape_html(language)));
    }
    html.push_str("</div>\n</div>\n");

    html.push_str(&format!(
        "<div class=\"repo-preview\"><img src=\"{}\" alt=\"{} preview\" width=\"100\"></div>\n",
        escape_html(&repo.open_graph_image_url),
        escape_html(&repo.name)
    ));
    html.push_str("</div>\n");

    if let Some(text) = repo.readme_text() {
        html.push_str("<div class=\"repo-readme\">\n");
        html.push_str(&render_markdown(text));
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</li>\n");
}

/// Human-relative rendering of the last-update timestamp ("2 days ago").
pub fn humanize_since(timestamp: DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(timestamp);

    let seconds = delta.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = delta.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = delta.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = delta.num_days();
    if days < 30 {
        return plural(days, "day");
    }
    if days < 365 {
        return plural(days / 30, "month");
    }
    plural(days / 365, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
