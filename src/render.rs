use crate::types::{ViolationGroups, ViolationRecord};
use tracing::debug;

const SUITE_NAME: &str = "flake8";

/// Render grouped violations as a JUnit XML document
///
/// Each file becomes a `<testcase>` with one `<failure>` per violation.
/// Returns `None` when there is nothing to report.
pub fn render(groups: &ViolationGroups) -> Option<String> {
    if groups.is_empty() {
        debug!("No violations, skipping report");
        return None;
    }

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"0\">\n",
        SUITE_NAME,
        groups.len(),
        groups.len()
    ));

    for (file, records) in groups.iter() {
        let file = escape_xml(file);
        xml.push_str(&format!(
            "  <testcase name=\"{}\" classname=\"{}\" file=\"{}\">\n",
            file, file, file
        ));
        for record in records {
            push_failure(&mut xml, record);
        }
        xml.push_str("  </testcase>\n");
    }

    xml.push_str("</testsuite>\n");
    Some(xml)
}

fn push_failure(xml: &mut String, record: &ViolationRecord) {
    let message = escape_xml(&format!(
        "{}:{} {}",
        record.line, record.col, record.detail
    ));
    xml.push_str(&format!(
        "    <failure type=\"{}\" message=\"{}\">{}</failure>\n",
        escape_xml(&record.code),
        message,
        message
    ));
}

/// Escape XML special characters and drop characters XML 1.0 cannot carry
fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c < ' ' || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}
