use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A single flake8 finding
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ViolationRecord {
    /// File path as reported by flake8
    pub file: String,
    /// Line number, kept verbatim
    pub line: String,
    /// Column number, kept verbatim
    pub col: String,
    /// Rule code (e.g. F401)
    pub code: String,
    /// Full message including the rule code
    pub detail: String,
}

/// Violations grouped by file, in the order files first appear
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViolationGroups {
    files: Vec<(String, Vec<ViolationRecord>)>,
    index: HashMap<String, usize>,
}

impl ViolationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ViolationRecord) {
        match self.index.get(&record.file) {
            Some(&i) => self.files[i].1.push(record),
            None => {
                self.index.insert(record.file.clone(), self.files.len());
                self.files.push((record.file.clone(), vec![record]));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with at least one violation
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|(_, records)| records.len()).sum()
    }

    #[cfg(test)]
    pub fn get(&self, file: &str) -> Option<&[ViolationRecord]> {
        self.index
            .get(file)
            .map(|&i| self.files[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ViolationRecord])> {
        self.files
            .iter()
            .map(|(file, records)| (file.as_str(), records.as_slice()))
    }
}

// Serialized as a JSON object keyed by file, preserving first-seen order
impl Serialize for ViolationGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for (file, records) in &self.files {
            map.serialize_entry(file, records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, line: &str) -> ViolationRecord {
        ViolationRecord {
            file: file.into(),
            line: line.into(),
            col: "1".into(),
            code: "E302".into(),
            detail: "E302 expected 2 blank lines, found 1".into(),
        }
    }

    #[test]
    fn test_push_groups_by_file_in_first_seen_order() {
        let mut groups = ViolationGroups::new();
        groups.push(record("b.py", "1"));
        groups.push(record("a.py", "2"));
        groups.push(record("b.py", "3"));

        let files: Vec<&str> = groups.iter().map(|(f, _)| f).collect();
        assert_eq!(files, vec!["b.py", "a.py"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.violation_count(), 3);

        let lines: Vec<&str> = groups
            .get("b.py")
            .unwrap()
            .iter()
            .map(|r| r.line.as_str())
            .collect();
        assert_eq!(lines, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_groups() {
        let groups = ViolationGroups::new();
        assert!(groups.is_empty());
        assert_eq!(groups.violation_count(), 0);
        assert!(groups.get("a.py").is_none());
    }

    #[test]
    fn test_serialize_keeps_file_order() {
        let mut groups = ViolationGroups::new();
        groups.push(record("z.py", "1"));
        groups.push(record("a.py", "1"));

        let json = serde_json::to_string(&groups).unwrap();
        let z = json.find("\"z.py\":").unwrap();
        let a = json.find("\"a.py\":").unwrap();
        assert!(z < a);
        assert!(json.contains("\"code\":\"E302\""));
    }
}
