//! Self-contained HTML page scaffold and shared components.
//!
//! Every page is a single file: inline CSS, escaped text, chart divs. The
//! only external fetch is the plotly.js runtime from the CDN, loaded once
//! per page head.

pub mod pages;

/// Escape user-controlled text for HTML contexts.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap body content in the full page scaffold.
pub fn page(title: &str, subtitle: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("<script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\"></script>\n");
    html.push_str("<style>\n");
    html.push_str(INLINE_CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str("<div class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    if !subtitle.is_empty() {
        html.push_str(&format!(
            "<div class=\"subtitle\">{}</div>\n",
            escape_html(subtitle)
        ));
    }
    html.push_str("</div>\n");

    html.push_str(body);

    html.push_str("<footer>Generated by Prism</footer>\n");
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// A grid of headline stat cards.
pub fn stat_cards(stats: &[(String, String)]) -> String {
    let mut html = String::from("<div class=\"stats\">\n");
    for (label, value) in stats {
        html.push_str(&format!(
            "<div class=\"stat-box\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">{}</div></div>\n",
            escape_html(value),
            escape_html(label)
        ));
    }
    html.push_str("</div>\n");
    html
}

/// A data table with escaped cells.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// A white card section with a title. `inner` is already-rendered HTML.
pub fn section(title: &str, inner: &str) -> String {
    format!(
        "<div class=\"section\">\n<h2>{}</h2>\n{}\n</div>\n",
        escape_html(title),
        inner
    )
}

pub const INLINE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f7fa; color: #333; line-height: 1.6; padding: 40px 20px; }
.container { max-width: 1400px; margin: 0 auto; }
.header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 40px; border-radius: 10px; margin-bottom: 30px; }
h1 { font-size: 32px; margin: 0; }
.subtitle { margin-top: 10px; opacity: 0.9; }
.section { background: white; padding: 30px; margin-bottom: 20px; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
h2 { color: #667eea; border-bottom: 2px solid #667eea; padding-bottom: 10px; margin-bottom: 20px; font-size: 22px; }
h3 { color: #764ba2; margin: 16px 0 8px; font-size: 16px; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin-bottom: 30px; }
.stat-box { background: white; padding: 25px; border-radius: 10px; text-align: center; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
.stat-number { font-size: 36px; font-weight: 700; color: #667eea; margin-bottom: 5px; }
.stat-label { color: #666; font-size: 14px; }
table { width: 100%; border-collapse: collapse; margin: 12px 0; font-size: 14px; }
th { background: #f8f9fa; padding: 12px; text-align: left; font-weight: 600; border-bottom: 2px solid #e0e0e0; }
td { padding: 10px 12px; border-bottom: 1px solid #eee; vertical-align: top; }
tr:hover { background-color: #f8f9fa; }
.translation { color: #666; font-style: italic; }
.keyword-tag { display: inline-block; background: #e3f2fd; color: #1976d2; padding: 3px 9px; border-radius: 4px; font-size: 12px; font-weight: 500; margin: 2px; }
.keyword-tag.model { background: #f3e5f5; color: #7b1fa2; }
.sample { border-left: 3px solid #667eea; padding: 6px 12px; margin: 6px 0; color: #555; font-size: 14px; background: #fafbff; }
.index-links { list-style: none; }
.index-links li { margin: 8px 0; }
.index-links a { color: #667eea; font-weight: 600; text-decoration: none; font-size: 16px; }
.index-links a:hover { text-decoration: underline; }
.index-links .desc { color: #888; font-size: 13px; margin-left: 8px; }
footer { text-align: center; color: #999; font-size: 12px; margin-top: 32px; padding: 16px 0; }
"#;
