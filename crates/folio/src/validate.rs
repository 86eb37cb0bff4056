//! Content validation.
//!
//! Compiled-in content is checked by the type system; this pass covers what
//! types cannot express (non-empty names, well-formed URLs, contact formats)
//! and is the gate every externally loaded document goes through.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ValidationConfig;
use crate::content::{period, Icon, ProjectLink, Registry};
use crate::error::{Error, Result};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{2,}$").expect("valid phone regex"));

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth a look, does not fail validation by default.
    Warning,
    /// The content is not usable as-is.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding, located by a dotted path such as `work[2].href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Severity of the finding.
    pub severity: Severity,
    /// Location of the offending field.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

/// Everything a validation pass found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Findings in the order they were made.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Iterate over error-severity issues.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// Iterate over warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// True when nothing at all was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether the report fails under the given strictness.
    #[must_use]
    pub fn is_failure(&self, warnings_as_errors: bool) -> bool {
        if warnings_as_errors {
            !self.issues.is_empty()
        } else {
            self.errors().next().is_some()
        }
    }

    /// Turn a failing report into [`Error::Validation`].
    ///
    /// # Errors
    ///
    /// Returns every failing issue when the report fails.
    pub fn into_result(self, warnings_as_errors: bool) -> Result<()> {
        if !self.is_failure(warnings_as_errors) {
            return Ok(());
        }
        let issues = if warnings_as_errors {
            self.issues
        } else {
            self.issues
                .into_iter()
                .filter(|i| i.severity == Severity::Error)
                .collect()
        };
        Err(Error::Validation { issues })
    }
}

/// Collects issues while walking a registry.
struct Checker<'a> {
    options: &'a ValidationConfig,
    issues: Vec<Issue>,
}

impl<'a> Checker<'a> {
    fn new(options: &'a ValidationConfig) -> Self {
        Self {
            options,
            issues: Vec::new(),
        }
    }

    fn push(&mut self, severity: Severity, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            severity,
            path: path.into(),
            message: message.into(),
        });
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, path, message);
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, path, message);
    }

    fn non_empty(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.error(path, "must not be empty");
        }
    }

    fn url(&mut self, path: &str, value: &str) {
        let parsed = match Url::parse(value) {
            Ok(url) => url,
            Err(e) => {
                self.error(path, format!("not an absolute URL ({e}): {value:?}"));
                return;
            }
        };
        match parsed.scheme() {
            "https" => {}
            "http" if self.options.require_https => {
                let severity = self.https_severity();
                self.push(severity, path, format!("not HTTPS: {value}"));
            }
            "http" => {}
            other => self.error(path, format!("unsupported URL scheme {other:?}: {value}")),
        }
        if parsed.host_str().is_none() {
            self.error(path, format!("URL has no host: {value}"));
        }
    }

    fn https_severity(&self) -> Severity {
        if self.options.warnings_as_errors {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    /// Images and logos are either absolute URLs or site-rooted paths.
    fn asset(&mut self, path: &str, value: &str) {
        if value.starts_with('/') && !value.starts_with("//") {
            if value.contains(char::is_whitespace) {
                self.error(path, format!("asset path contains whitespace: {value:?}"));
            }
            return;
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            self.url(path, value);
            return;
        }
        self.error(
            path,
            format!("expected an absolute URL or a path starting with '/': {value:?}"),
        );
    }

    fn icon(&mut self, path: &str, icon: &Icon) {
        self.non_empty(path, icon.as_str());
    }

    fn labels(&mut self, path: &str, labels: &[String], warn_duplicates: bool) {
        let mut seen = HashSet::new();
        for (i, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                self.warning(format!("{path}[{i}]"), "empty label");
            } else if warn_duplicates && !seen.insert(label.as_str()) {
                self.warning(format!("{path}[{i}]"), format!("duplicate label {label:?}"));
            }
        }
    }

    fn links(&mut self, path: &str, links: &[ProjectLink]) {
        for (i, link) in links.iter().enumerate() {
            let base = format!("{path}[{i}]");
            self.non_empty(&format!("{base}.type"), &link.kind);
            self.url(&format!("{base}.href"), &link.href);
            self.icon(&format!("{base}.icon"), &link.icon);
        }
    }

    fn period(&mut self, path: &str, start: &str, end: &crate::content::EndPeriod) {
        if period::is_reversed(start, end) {
            self.warning(path, format!("ends ({end}) before it starts ({start})"));
        }
    }

    fn check(mut self, registry: &Registry) -> ValidationReport {
        self.profile(registry);
        self.contact(registry);
        self.work(registry);
        self.education(registry);
        self.projects(registry);
        self.hackathons(registry);
        ValidationReport {
            issues: self.issues,
        }
    }

    fn profile(&mut self, registry: &Registry) {
        let profile = &registry.profile;
        self.non_empty("profile.name", &profile.name);
        self.non_empty("profile.initials", &profile.initials);
        self.url("profile.url", &profile.url);
        self.url("profile.locationLink", &profile.location_link);
        self.asset("profile.avatarUrl", &profile.avatar_url);
        self.labels("profile.skills", &profile.skills, true);

        for (i, item) in profile.navbar.iter().enumerate() {
            let base = format!("profile.navbar[{i}]");
            self.non_empty(&format!("{base}.label"), &item.label);
            self.icon(&format!("{base}.icon"), &item.icon);
            if !item.href.starts_with('/') {
                self.error(
                    format!("{base}.href"),
                    format!("navigation path must start with '/': {:?}", item.href),
                );
            }
        }
    }

    fn contact(&mut self, registry: &Registry) {
        let contact = &registry.contact;
        if !EMAIL.is_match(&contact.email) {
            self.error("contact.email", format!("malformed email: {:?}", contact.email));
        }
        if !PHONE.is_match(&contact.tel) {
            self.error("contact.tel", format!("malformed phone number: {:?}", contact.tel));
        }
        for (key, link) in &contact.social {
            let base = format!("contact.social.{key}");
            if key.trim().is_empty() {
                self.error("contact.social", "platform key must not be empty");
            }
            self.non_empty(&format!("{base}.name"), &link.name);
            self.url(&format!("{base}.url"), &link.url);
            self.icon(&format!("{base}.icon"), &link.icon);
        }
    }

    fn work(&mut self, registry: &Registry) {
        for (i, entry) in registry.work.iter().enumerate() {
            let base = format!("work[{i}]");
            self.non_empty(&format!("{base}.company"), &entry.company);
            self.non_empty(&format!("{base}.title"), &entry.title);
            self.url(&format!("{base}.href"), &entry.href);
            self.asset(&format!("{base}.logoUrl"), &entry.logo_url);
            self.labels(&format!("{base}.badges"), &entry.badges, false);
            self.period(&base, &entry.start, &entry.end);
        }
    }

    fn education(&mut self, registry: &Registry) {
        for (i, entry) in registry.education.iter().enumerate() {
            let base = format!("education[{i}]");
            self.non_empty(&format!("{base}.school"), &entry.school);
            self.non_empty(&format!("{base}.degree"), &entry.degree);
            self.url(&format!("{base}.href"), &entry.href);
            self.asset(&format!("{base}.logoUrl"), &entry.logo_url);
            self.period(&base, &entry.start, &entry.end.as_str().into());
        }
    }

    fn projects(&mut self, registry: &Registry) {
        for (i, project) in registry.projects.iter().enumerate() {
            let base = format!("projects[{i}]");
            self.non_empty(&format!("{base}.title"), &project.title);
            if let Some(href) = &project.href {
                self.url(&format!("{base}.href"), href);
            }
            if let Some(image) = &project.image {
                self.asset(&format!("{base}.image"), image);
            }
            self.labels(&format!("{base}.technologies"), &project.technologies, false);
            self.links(&format!("{base}.links"), project.links());
            if let Some((start, end)) = period::split_range(&project.dates) {
                self.period(&format!("{base}.dates"), start, &end);
            }
        }
    }

    fn hackathons(&mut self, registry: &Registry) {
        for (i, entry) in registry.hackathons.iter().enumerate() {
            let base = format!("hackathons[{i}]");
            self.non_empty(&format!("{base}.title"), &entry.title);
            self.asset(&format!("{base}.image"), &entry.image);
            self.links(&format!("{base}.links"), entry.links());
        }
    }
}

/// Validate a registry and report every finding.
#[must_use]
pub fn validate(registry: &Registry, options: &ValidationConfig) -> ValidationReport {
    let report = Checker::new(options).check(registry);
    for issue in report.warnings() {
        warn!(path = %issue.path, "{}", issue.message);
    }
    debug!(
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "Validated content"
    );
    report
}

impl Registry {
    /// Validate this registry and hand it back if it passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] with the failing issues.
    pub fn validated(self, options: &ValidationConfig) -> Result<Self> {
        validate(&self, options).into_result(options.warnings_as_errors)?;
        Ok(self)
    }
}
