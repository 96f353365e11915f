use crate::license_scan::domain::{AttributeValue, DependencyRecord};

/// Scanner state while walking the report line by line
enum ParserState {
    /// No block has been opened yet
    SeekingHeader,
    /// Inside a block, reading `Key: value` lines
    InBlock(DependencyRecord),
    /// Collecting the entries of a list attribute opened by `Key:`
    AccumulatingList {
        record: DependencyRecord,
        key: String,
        indent: usize,
        items: Vec<String>,
    },
}

impl ParserState {
    /// Closes any pending list and hands back the open record, if there is one
    fn finish(self) -> Option<DependencyRecord> {
        match self {
            ParserState::SeekingHeader => None,
            ParserState::InBlock(record) => Some(record),
            ParserState::AccumulatingList {
                mut record,
                key,
                items,
                ..
            } => {
                record.set_attribute(key, AttributeValue::List(items));
                Some(record)
            }
        }
    }
}

/// InfoReportParser service for turning `conan info` output into records
///
/// The report is indentation-delimited: a line starting at column 0 opens a
/// new block, indented `Key: value` lines add attributes to it, and a `Key:`
/// line with no value opens a list whose entries are the lines indented
/// strictly deeper than the key. Lines that fit none of these shapes are
/// skipped, so warnings interleaved with the report never abort the parse.
///
/// This service has no I/O dependencies and holds no state between calls.
pub struct InfoReportParser;

impl InfoReportParser {
    /// Parses a complete info report
    ///
    /// # Arguments
    /// * `report_text` - Full standard output of `conan info`
    ///
    /// # Returns
    /// One record per column-0 header line, in the order the headers appear.
    /// Duplicate identifiers produce separate records.
    pub fn parse(report_text: &str) -> Vec<DependencyRecord> {
        let mut records = Vec::new();
        let mut state = ParserState::SeekingHeader;

        for line in report_text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            state = Self::step(state, line, &mut records);
        }

        if let Some(record) = state.finish() {
            records.push(record);
        }

        records
    }

    fn step(state: ParserState, line: &str, records: &mut Vec<DependencyRecord>) -> ParserState {
        let indent = indentation(line);

        if indent == 0 {
            if let Some(record) = state.finish() {
                records.push(record);
            }
            return ParserState::InBlock(DependencyRecord::new(line.trim()));
        }

        match state {
            // Indented content before the first header
            ParserState::SeekingHeader => ParserState::SeekingHeader,
            ParserState::InBlock(record) => Self::apply_attribute_line(record, line, indent),
            ParserState::AccumulatingList {
                record,
                key,
                indent: list_indent,
                mut items,
            } if indent > list_indent => {
                items.push(line.trim().to_string());
                ParserState::AccumulatingList {
                    record,
                    key,
                    indent: list_indent,
                    items,
                }
            }
            ParserState::AccumulatingList {
                mut record,
                key,
                items,
                ..
            } => {
                record.set_attribute(key, AttributeValue::List(items));
                Self::apply_attribute_line(record, line, indent)
            }
        }
    }

    fn apply_attribute_line(
        mut record: DependencyRecord,
        line: &str,
        indent: usize,
    ) -> ParserState {
        match split_attribute(line) {
            Some((key, "")) => ParserState::AccumulatingList {
                record,
                key: key.to_string(),
                indent,
                items: Vec::new(),
            },
            Some((key, value)) => {
                record.set_attribute(key, AttributeValue::Scalar(value.to_string()));
                ParserState::InBlock(record)
            }
            None => ParserState::InBlock(record),
        }
    }
}

/// Number of leading whitespace bytes
fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Splits `Key: value` on the first colon; `None` for lines without one or with an empty key
fn split_attribute(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}
