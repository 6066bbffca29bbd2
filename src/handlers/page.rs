//! Shared HTML scaffolding for the demo pages.

/// Escapes text for use inside HTML element content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    // ---
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wraps `content` in a complete HTML document that links the stats stylesheet.
///
/// `title` is escaped; `content` is inserted as-is.
pub(crate) fn layout(title: &str, content: &str) -> String {
    // ---
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" type="text/css" href="/page-stats/default.css">
</head>
<body>
<h1>{title}</h1>
{content}
</body>
</html>
"#
    )
}
