use crate::types::{ViolationGroups, ViolationRecord};
use tracing::{debug, trace};

/// Parse flake8 console output into violations grouped by file
///
/// Each line is expected as `<file>:<line>:<col>: <detail>`. Lines that do not
/// split into four colon-separated fields (blank lines, summaries, warnings) are
/// skipped.
pub fn parse(text: &str) -> ViolationGroups {
    let mut groups = ViolationGroups::new();
    let mut skipped = 0;

    for line in text.lines() {
        match parse_line(line) {
            Some(record) => groups.push(record),
            None => {
                trace!("Skipping line: {:?}", line);
                skipped += 1;
            }
        }
    }

    debug!(
        "Parsed {} violations in {} files, skipped {} lines",
        groups.violation_count(),
        groups.len(),
        skipped
    );
    groups
}

/// Parse a single `<file>:<line>:<col>: <detail>` line
pub fn parse_line(line: &str) -> Option<ViolationRecord> {
    let mut parts = line.splitn(4, ':');
    let file = parts.next()?;
    let line_no = parts.next()?;
    let col = parts.next()?;
    let rest = parts.next()?;

    let detail = rest.strip_prefix(' ').unwrap_or(rest);
    // Leading token up to the first whitespace, so it is always a prefix of detail
    let code = detail.split(char::is_whitespace).next().unwrap_or_default();

    Some(ViolationRecord {
        file: file.to_string(),
        line: line_no.to_string(),
        col: col.to_string(),
        code: code.to_string(),
        detail: detail.to_string(),
    })
}
