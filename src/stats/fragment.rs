//! HTML rendering of [`PageStats`].
//!
//! The fragment is a single-row table with a `STATS:` heading followed by
//! four label/value cells. Two flavours exist: one carrying CSS class names
//! (styled by [`DEFAULT_STYLESHEET`] or the site's own CSS) and one with the
//! styling inlined, for pages that do not link the stylesheet.

use super::PageStats;
use std::fmt::Write;
use std::str::FromStr;

/// Companion stylesheet for [`FragmentStyle::Classes`].
pub const DEFAULT_STYLESHEET: &str = r#"div.page_stats {
    margin: 1em 0 0 0;
    padding: 0.25em 0.5em;
    border-top: 1px solid #ccc;
    background-color: #f8f8f8;
    font-family: monospace;
    font-size: 0.8em;
    color: #555;
}

div.page_stats table {
    border-collapse: collapse;
}

td.page_stats_heading1 {
    padding-right: 1em;
    color: #333;
}

td.page_stats_heading2 {
    padding-left: 1em;
    text-align: right;
    color: #777;
}

td.page_stats_value {
    padding-left: 0.25em;
    color: #000;
}
"#;

/// How the fragment carries its styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FragmentStyle {
    // ---
    /// Fixed class names, styled by an external stylesheet.
    #[default]
    Classes,

    /// Inline `style` attributes, no stylesheet required.
    Inline,
}

impl FromStr for FragmentStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ---
        match s.trim().to_ascii_lowercase().as_str() {
            "classes" | "class" => Ok(FragmentStyle::Classes),
            "inline" => Ok(FragmentStyle::Inline),
            other => Err(anyhow::anyhow!(
                "Invalid fragment style '{other}', expected 'classes' or 'inline'"
            )),
        }
    }
}

/// Attribute strings for each kind of element in the fragment.
struct Attrs {
    container: &'static str,
    heading1: &'static str,
    heading2: &'static str,
    value: &'static str,
}

impl FragmentStyle {
    // ---
    fn attrs(self) -> Attrs {
        // ---
        match self {
            FragmentStyle::Classes => Attrs {
                container: r#"id="page_stats" class="page_stats""#,
                heading1: r#"class="page_stats_heading1""#,
                heading2: r#"class="page_stats_heading2""#,
                value: r#"class="page_stats_value""#,
            },
            FragmentStyle::Inline => Attrs {
                container: concat!(
                    r#"id="page_stats" style="margin:1em 0 0 0;padding:0.25em 0.5em;"#,
                    r#"border-top:1px solid #ccc;background-color:#f8f8f8;"#,
                    r#"font-family:monospace;font-size:0.8em;color:#555;""#
                ),
                heading1: r#"style="padding-right:1em;color:#333;""#,
                heading2: r#"style="padding-left:1em;text-align:right;color:#777;""#,
                value: r#"style="padding-left:0.25em;color:#000;""#,
            },
        }
    }
}

/// Renders the stats summary as an HTML fragment.
///
/// Times are shown in milliseconds with one decimal, the query count with
/// comma thousands separators. Output is ASCII and depends only on the
/// inputs.
pub fn render_fragment(stats: &PageStats, style: FragmentStyle) -> String {
    // ---
    let attrs = style.attrs();

    let cells = [
        ("Total Time:", format!("{:.1} ms", stats.total_ms())),
        ("Python Time:", format!("{:.1} ms", stats.python_ms())),
        ("DB Time:", format!("{:.1} ms", stats.db_ms())),
        ("Number of Queries:", group_thousands(stats.db_queries)),
    ];

    let mut html = format!(
        "<div {}><table><tr><td {}><b>STATS:</b></td>",
        attrs.container, attrs.heading1
    );
    for (label, value) in cells {
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "<td {}>{label}</td><td {}>{value}</td>",
            attrs.heading2, attrs.value
        );
    }
    html.push_str("</tr></table></div>");

    html
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(n: usize) -> String {
    // ---
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::time::Duration;

    #[test]
    fn groups_thousands() {
        // ---
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234), "1,234");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn renders_class_based_fragment() {
        // ---
        let stats = PageStats::new(Duration::from_micros(12_340), Duration::from_micros(2_100), 3);
        let html = render_fragment(&stats, FragmentStyle::Classes);

        let expected = concat!(
            r#"<div id="page_stats" class="page_stats"><table><tr>"#,
            r#"<td class="page_stats_heading1"><b>STATS:</b></td>"#,
            r#"<td class="page_stats_heading2">Total Time:</td><td class="page_stats_value">12.3 ms</td>"#,
            r#"<td class="page_stats_heading2">Python Time:</td><td class="page_stats_value">10.2 ms</td>"#,
            r#"<td class="page_stats_heading2">DB Time:</td><td class="page_stats_value">2.1 ms</td>"#,
            r#"<td class="page_stats_heading2">Number of Queries:</td><td class="page_stats_value">3</td>"#,
            r#"</tr></table></div>"#
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn inline_fragment_has_no_class_names() {
        // ---
        let stats = PageStats::new(Duration::from_millis(5), Duration::ZERO, 1_234);
        let html = render_fragment(&stats, FragmentStyle::Inline);

        assert!(!html.contains("class="));
        assert!(html.contains(r#"id="page_stats" style="#));
        assert!(html.contains(">Number of Queries:</td>"));
        assert!(html.contains(">1,234</td>"));
        assert!(html.contains(">0.0 ms</td>"));
    }

    #[test]
    fn fragment_is_ascii() {
        // ---
        let stats = PageStats::new(Duration::from_secs(3), Duration::from_secs(1), 10_000);

        assert!(render_fragment(&stats, FragmentStyle::Classes).is_ascii());
        assert!(render_fragment(&stats, FragmentStyle::Inline).is_ascii());
    }

    #[test]
    fn parses_style_names() {
        // ---
        assert_eq!("classes".parse::<FragmentStyle>().unwrap(), FragmentStyle::Classes);
        assert_eq!(" Inline ".parse::<FragmentStyle>().unwrap(), FragmentStyle::Inline);
        assert!("fancy".parse::<FragmentStyle>().is_err());
    }
}
