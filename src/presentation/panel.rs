//! Result panel contract and lender link markup.

use crate::models::Lender;

use super::PaymentDisplay;

/// Shows calculation results and the lender list.
pub trait ResultsPanel {
    /// Shows the three payment strings; a cleared display empties the fields.
    fn show_payment(&mut self, display: &PaymentDisplay);

    /// Shows the lender list, or removes it when `None`.
    fn show_lenders(&mut self, lenders: Option<&[Lender]>);
}

/// Renders lenders as a list group of links.
///
/// Names and URLs are HTML-escaped.
///
/// # Example
///
/// ```
/// use loan_engine::models::Lender;
/// use loan_engine::presentation::lender_links_html;
///
/// let html = lender_links_html(&[Lender {
///     name: "First Bank".to_string(),
///     url: "https://first.example".to_string(),
/// }]);
/// assert_eq!(
///     html,
///     "<div class=\"list-group\"><a href='https://first.example' \
///      class='list-group-item'>First Bank</a></div>"
/// );
/// ```
pub fn lender_links_html(lenders: &[Lender]) -> String {
    let mut html = String::from("<div class=\"list-group\">");
    for lender in lenders {
        html.push_str("<a href='");
        html.push_str(&escape_html(&lender.url));
        html.push_str("' class='list-group-item'>");
        html.push_str(&escape_html(&lender.name));
        html.push_str("</a>");
    }
    html.push_str("</div>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lender(name: &str, url: &str) -> Lender {
        Lender {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_empty_list_renders_empty_group() {
        assert_eq!(lender_links_html(&[]), "<div class=\"list-group\"></div>");
    }

    #[test]
    fn test_links_keep_order() {
        let html = lender_links_html(&[lender("A", "https://a"), lender("B", "https://b")]);
        let a = html.find(">A<").unwrap();
        let b = html.find(">B<").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_values_are_escaped() {
        let html = lender_links_html(&[lender("Smith & <Sons>", "https://x/?a=1&b='2'")]);
        assert!(html.contains("Smith &amp; &lt;Sons&gt;"));
        assert!(html.contains("href='https://x/?a=1&amp;b=&#39;2&#39;'"));
    }
}
