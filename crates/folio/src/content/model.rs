//! Record types for portfolio content.
//!
//! Every type here is plain immutable data. Ordered collections keep the
//! author's order because that order is the display order.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A blank line, with either line ending.
static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("valid blank line regex"));

/// The literal used for an open-ended period.
pub const PRESENT: &str = "Present";

/// An opaque icon reference resolved by the presentation layer.
///
/// Conventionally `<set>:<name>`, e.g. `lucide:home` or `icons:github`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    /// Create an icon reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the site navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Site-rooted path, e.g. `/blog`.
    pub href: String,
    /// Icon shown next to the label.
    pub icon: Icon,
    /// Visible label.
    pub label: String,
}

/// Who the site is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Profile {
    /// Full display name.
    pub name: String,
    /// Initials, used when the avatar is unavailable.
    pub initials: String,
    /// Canonical URL of the site.
    pub url: String,
    /// Human readable location.
    pub location: String,
    /// Map link for the location.
    pub location_link: String,
    /// One or two sentence description.
    pub description: String,
    /// Long summary; paragraphs separated by a blank line.
    pub summary: String,
    /// Avatar image reference.
    pub avatar_url: String,
    /// Skill labels in display order.
    pub skills: Vec<String>,
    /// Navigation entries in display order.
    pub navbar: Vec<NavItem>,
}

impl Profile {
    /// Split the summary into its non-empty paragraphs.
    ///
    /// Paragraphs are separated by a blank line; `\r\n` endings are accepted.
    pub fn summary_paragraphs(&self) -> impl Iterator<Item = &str> {
        BLANK_LINE
            .split(&self.summary)
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Display name of the platform.
    pub name: String,
    /// Profile URL.
    pub url: String,
    /// Platform icon.
    pub icon: Icon,
    /// Whether the link also appears in the navigation bar.
    pub navbar: bool,
}

/// Contact channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub tel: String,
    /// Social links keyed by case-sensitive platform name.
    pub social: BTreeMap<String, SocialLink>,
}

impl ContactInfo {
    /// Social links flagged for the navigation bar, with their platform keys.
    pub fn navbar_socials(&self) -> impl Iterator<Item = (&str, &SocialLink)> {
        self.social
            .iter()
            .filter(|(_, link)| link.navbar)
            .map(|(key, link)| (key.as_str(), link))
    }
}

/// End of a period: either still ongoing or a label kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EndPeriod {
    /// Ongoing; written as `Present`.
    Present,
    /// A closed period ending at this label.
    Until(String),
}

impl EndPeriod {
    /// Whether the period is still ongoing.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    /// The label as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => PRESENT,
            Self::Until(label) => label,
        }
    }
}

impl From<String> for EndPeriod {
    fn from(label: String) -> Self {
        if label == PRESENT {
            Self::Present
        } else {
            Self::Until(label)
        }
    }
}

impl From<&str> for EndPeriod {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<EndPeriod> for String {
    fn from(end: EndPeriod) -> Self {
        match end {
            EndPeriod::Present => PRESENT.to_string(),
            EndPeriod::Until(label) => label,
        }
    }
}

impl std::fmt::Display for EndPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position held at a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkExperience {
    /// Company name.
    pub company: String,
    /// Company website.
    pub href: String,
    /// Short presentational labels.
    pub badges: Vec<String>,
    /// Where the work took place.
    pub location: String,
    /// Job title.
    pub title: String,
    /// Company logo reference.
    pub logo_url: String,
    /// Start period label, e.g. `August 2024`.
    pub start: String,
    /// End period label or [`EndPeriod::Present`].
    pub end: EndPeriod,
    /// Free-text description.
    pub description: String,
}

impl WorkExperience {
    /// Whether this is a current position.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.end.is_present()
    }
}

/// A degree or course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationEntry {
    /// School name.
    pub school: String,
    /// School website.
    pub href: String,
    /// Degree label.
    pub degree: String,
    /// School logo reference.
    pub logo_url: String,
    /// Start year.
    pub start: String,
    /// End year.
    pub end: String,
}

/// An external link attached to a project or hackathon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLink {
    /// Kind of link, e.g. `Website` or `Source`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Link target.
    pub href: String,
    /// Link icon.
    pub icon: Icon,
}

/// A project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Primary URL, when the project has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Free-form date range label.
    pub dates: String,
    /// Whether the project is ongoing.
    pub active: bool,
    /// Free-text description.
    pub description: String,
    /// Technology tags in display order.
    pub technologies: Vec<String>,
    /// Links in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
    /// Screenshot or animation reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Project {
    /// Links, treating an absent list as empty.
    #[must_use]
    pub fn links(&self) -> &[ProjectLink] {
        self.links.as_deref().unwrap_or_default()
    }
}

/// A hackathon or competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HackathonEntry {
    /// Event title.
    pub title: String,
    /// Date label.
    pub dates: String,
    /// Where it took place.
    pub location: String,
    /// What was done.
    pub description: String,
    /// Image reference (URL or site-rooted path).
    pub image: String,
    /// Links in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
}

impl HackathonEntry {
    /// Links, treating an absent list as empty.
    #[must_use]
    pub fn links(&self) -> &[ProjectLink] {
        self.links.as_deref().unwrap_or_default()
    }
}

/// Entry counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    /// Number of skills.
    pub skills: usize,
    /// Number of social links.
    pub social: usize,
    /// Number of work entries.
    pub work: usize,
    /// Number of education entries.
    pub education: usize,
    /// Number of projects.
    pub projects: usize,
    /// Number of hackathons.
    pub hackathons: usize,
}

/// The aggregate of all portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    /// Identity and navigation.
    pub profile: Profile,
    /// Contact channels.
    pub contact: ContactInfo,
    /// Work history in display order.
    pub work: Vec<WorkExperience>,
    /// Education in display order.
    pub education: Vec<EducationEntry>,
    /// Projects in display order.
    pub projects: Vec<Project>,
    /// Hackathons in display order.
    pub hackathons: Vec<HackathonEntry>,
}

impl Registry {
    /// Work entries whose end is `Present`, in display order.
    pub fn current_positions(&self) -> impl Iterator<Item = &WorkExperience> {
        self.work.iter().filter(|w| w.is_current())
    }

    /// Projects flagged active, in display order.
    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.active)
    }

    /// Entry counts per collection.
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts {
            skills: self.profile.skills.len(),
            social: self.contact.social.len(),
            work: self.work.len(),
            education: self.education.len(),
            projects: self.projects.len(),
            hackathons: self.hackathons.len(),
        }
    }
}
