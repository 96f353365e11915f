use crate::license_scan::domain::{ResolvedPackage, ScanMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Version | Declared License | License File | URL |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|------------------|--------------|-----|\n";

/// MarkdownFormatter adapter for the human-readable license report
///
/// Renders a package inventory table, the packages whose license could not
/// be determined, and the `Requires` relationships between packages.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_url(url: &str) -> String {
        if url.is_empty() {
            "N/A".to_string()
        } else {
            format!("<{}>", Self::escape_markdown_table_cell(url))
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &ScanMetadata) {
        output.push_str("# Third-Party License Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}.\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));

        let context = metadata.context();
        output.push_str(&format!(
            "- Project: `{}`\n",
            context.project_path().display()
        ));
        output.push_str(&format!("- Conan command: `{}`\n", context.conan_command()));
        output.push_str(&format!("- Scan runs: {}\n", context.run_count()));
        if context.profiles().is_empty() {
            output.push_str("- Profiles: default profile\n\n");
        } else {
            let profiles: Vec<String> = context
                .profiles()
                .iter()
                .map(|profile| format!("`{}`", profile.display()))
                .collect();
            output.push_str(&format!("- Profiles: {}\n\n", profiles.join(", ")));
        }
    }

    fn render_summary(&self, output: &mut String, packages: &[ResolvedPackage]) {
        let with_license = packages.iter().filter(|p| p.has_license_text()).count();

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Dependencies: {}\n", packages.len()));
        output.push_str(&format!("- With license file: {}\n", with_license));
        output.push_str(&format!(
            "- Without license file: {}\n\n",
            packages.len() - with_license
        ));
    }

    fn render_packages(&self, output: &mut String, packages: &[ResolvedPackage]) {
        output.push_str("## Package Inventory\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for package in packages {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(package.name()),
                Self::escape_markdown_table_cell(package.version().unwrap_or("N/A")),
                Self::escape_markdown_table_cell(package.declared_license().unwrap_or("N/A")),
                if package.has_license_text() { "Found" } else { "Missing" },
                Self::format_url(package.url())
            ));
        }
        output.push('\n');
    }

    fn render_unknown_licenses(&self, output: &mut String, packages: &[ResolvedPackage]) {
        let missing: Vec<&ResolvedPackage> =
            packages.iter().filter(|p| !p.has_license_text()).collect();
        if missing.is_empty() {
            return;
        }

        output.push_str("## Packages Without License Files\n\n");
        output.push_str(
            "No license file was deployed for these packages; \
             their license is treated as unknown.\n\n",
        );
        for package in missing {
            match package.version() {
                Some(version) => output.push_str(&format!("- {} {}\n", package.name(), version)),
                None => output.push_str(&format!("- {}\n", package.name())),
            }
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, packages: &[ResolvedPackage]) {
        let with_requires: Vec<&ResolvedPackage> =
            packages.iter().filter(|p| !p.requires().is_empty()).collect();
        if with_requires.is_empty() {
            return;
        }

        output.push_str("## Dependency Relationships\n\n");
        for package in with_requires {
            output.push_str(&format!(
                "- {} → {}\n",
                package.name(),
                package.requires().join(", ")
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, packages: &[ResolvedPackage], metadata: &ScanMetadata) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, metadata);
        self.render_summary(&mut output, packages);
        self.render_packages(&mut output, packages);
        self.render_unknown_licenses(&mut output, packages);
        self.render_dependencies(&mut output, packages);

        Ok(output)
    }
}
