use crate::license_scan::domain::ResolvedPackage;
use crate::shared::error::ScanError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// PackageFilter - Drops resolved packages whose name matches a user pattern
///
/// Supports `*` wildcards matching zero or more characters. Patterns are
/// case-sensitive and anchored at both ends (`boost*` does not match `myboost`).
#[derive(Debug)]
pub struct PackageFilter {
    patterns: Vec<ExcludePattern>,
}

impl PackageFilter {
    /// Creates a new PackageFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> 64)
    /// - Invalid pattern format (empty, too long, bad characters, only wildcards)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(ScanError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns only the packages that match no exclusion pattern, preserving order
    pub fn filter_packages(&self, packages: Vec<ResolvedPackage>) -> Vec<ResolvedPackage> {
        packages
            .into_iter()
            .filter(|pkg| !self.matches(pkg.name()))
            .collect()
    }

    fn matches(&self, package_name: &str) -> bool {
        // Every pattern is evaluated so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(package_name) || hit)
    }

    /// Returns the patterns that have not matched any package so far
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let segments = pattern.split('*').map(str::to_string).collect();
        Ok(Self {
            original: pattern,
            segments,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, package_name: &str) -> bool {
        let is_match = wildcard_match(&self.segments, package_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Matches `name` against a pattern pre-split on `*`.
///
/// The first segment must be a prefix, the last a suffix, and the middle
/// segments must appear in order between them.
fn wildcard_match(segments: &[String], name: &str) -> bool {
    let (first, rest) = match segments.split_first() {
        Some(split) => split,
        None => return name.is_empty(),
    };
    let Some((last, middle)) = rest.split_last() else {
        return name == first.as_str();
    };

    if name.len() < first.len() + last.len()
        || !name.starts_with(first.as_str())
        || !name.ends_with(last.as_str())
    {
        return false;
    }

    let mut remaining = &name[first.len()..name.len() - last.len()];
    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }
    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> Result<()> { Err(ScanError::Validation { message }.into()) };

    if pattern.is_empty() {
        return invalid("Exclusion pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, plus signs, and asterisks (*) are allowed.",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

/// Conan package names allow `+` (e.g. `libstdc++`) in addition to the usual set
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | '*')
}
