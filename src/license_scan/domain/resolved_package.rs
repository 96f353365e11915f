/// ResolvedPackage value object representing one third-party Conan dependency
/// with its license data attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    name: String,
    version: Option<String>,
    url: String,
    license_text: String,
    declared_license: Option<String>,
    requires: Vec<String>,
}

impl ResolvedPackage {
    pub fn new(name: String, version: Option<String>, url: String, license_text: String) -> Self {
        Self {
            name,
            version,
            url,
            license_text,
            declared_license: None,
            requires: Vec::new(),
        }
    }

    /// Attaches the license declared by the recipe (`License:` attribute)
    pub fn with_declared_license(mut self, declared_license: Option<String>) -> Self {
        self.declared_license = declared_license;
        self
    }

    /// Attaches the names of the packages this one requires
    pub fn with_requires(mut self, requires: Vec<String>) -> Self {
        self.requires = requires;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn license_text(&self) -> &str {
        &self.license_text
    }

    pub fn declared_license(&self) -> Option<&str> {
        self.declared_license.as_deref()
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Returns true when an on-disk license file was found for this package
    pub fn has_license_text(&self) -> bool {
        !self.license_text.is_empty()
    }

    /// Key used to collapse the same package seen in several scan runs
    pub fn identity(&self) -> (&str, Option<&str>) {
        (self.name(), self.version())
    }

    /// Takes over whatever `other` knows that this package does not
    ///
    /// Used when the same package is reported by several scan runs: fields
    /// already set are kept, empty ones are filled from `other`.
    pub fn fill_missing_from(&mut self, other: ResolvedPackage) {
        if self.license_text.is_empty() {
            self.license_text = other.license_text;
        }
        if self.url.is_empty() {
            self.url = other.url;
        }
        if self.declared_license.is_none() {
            self.declared_license = other.declared_license;
        }
        if self.requires.is_empty() {
            self.requires = other.requires;
        }
    }
}
