/// Recipe files Conan lists in its own info report as the root of the graph
pub const DEFAULT_SENTINEL_PREFIXES: [&str; 2] = ["conanfile.py", "conanfile.txt"];

/// SentinelPolicy decides which report entries stand for the scanned project
/// itself rather than a third-party dependency
pub trait SentinelPolicy {
    fn is_sentinel(&self, package_name: &str) -> bool;
}

/// Any predicate over the package name can serve as a policy
impl<F> SentinelPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_sentinel(&self, package_name: &str) -> bool {
        self(package_name)
    }
}

/// Treats every name starting with one of the configured prefixes as a sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSentinelPolicy {
    prefixes: Vec<String>,
}

impl PrefixSentinelPolicy {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Policy matching Conan's `conanfile.py` / `conanfile.txt` root entries
    pub fn conan_default() -> Self {
        Self::new(
            DEFAULT_SENTINEL_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }

    /// Adds further prefixes, skipping ones already present
    pub fn with_additional_prefixes(mut self, prefixes: impl IntoIterator<Item = String>) -> Self {
        for prefix in prefixes {
            if !self.prefixes.contains(&prefix) {
                self.prefixes.push(prefix);
            }
        }
        self
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PrefixSentinelPolicy {
    fn default() -> Self {
        Self::conan_default()
    }
}

impl SentinelPolicy for PrefixSentinelPolicy {
    fn is_sentinel(&self, package_name: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| package_name.starts_with(prefix.as_str()))
    }
}
