/// One raw input tuple before validation.
///
/// `line` is the 1-based position in the source, used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

impl UsageRecord {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}
