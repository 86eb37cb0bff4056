//! Portfolio content: the record types, the built-in registry, and the
//! interchange helpers around it.
//!
//! The registry is immutable once built. Renderers receive it by reference,
//! either from [`registry`] (built once per process) or from an owned value
//! produced by [`Registry::builtin`] or the loader.

mod builtin;
mod model;
pub mod period;

use once_cell::sync::Lazy;
use tracing::debug;

pub use model::{
    ContactInfo, Counts, EducationEntry, EndPeriod, HackathonEntry, Icon, NavItem, Profile,
    Project, ProjectLink, Registry, SocialLink, WorkExperience, PRESENT,
};

use crate::error::Result;

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    debug!("Building built-in content registry");
    builtin::registry()
});

/// The built-in registry, built on first access and shared for the rest of
/// the process.
#[must_use]
pub fn registry() -> &'static Registry {
    &BUILTIN
}

impl Registry {
    /// An owned copy of the built-in content.
    #[must_use]
    pub fn builtin() -> Self {
        registry().clone()
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse from JSON. The result is not validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or does not match
    /// the content schema.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// BLAKE3 digest of the compact JSON form, as lowercase hex.
    ///
    /// Field order is fixed by the types and social links are kept sorted, so
    /// equal registries always hash equal.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn fingerprint(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(blake3::hash(&json).to_hex().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_reference_stable() {
        let first = registry();
        let second = registry();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_builtin_matches_shared() {
        assert_eq!(&Registry::builtin(), registry());
    }

    #[test]
    fn test_json_round_trip() {
        let original = Registry::builtin();
        for pretty in [false, true] {
            let json = original.to_json(pretty).unwrap();
            let parsed = Registry::from_json(&json).unwrap();
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&Registry::builtin().to_json(false).unwrap()).unwrap();
        assert_eq!(json["profile"]["name"], "Marx Yeh");
        assert_eq!(
            json["profile"]["locationLink"],
            "https://www.google.com/maps/place/Taipei,+Taiwan"
        );
        assert_eq!(json["contact"]["social"]["GitHub"]["navbar"], true);
        assert_eq!(json["work"][0]["end"], "Present");
        assert!(json["projects"][4].get("href").is_none());
        assert_eq!(json["hackathons"][1]["links"], serde_json::json!([]));
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let mut json: serde_json::Value =
            serde_json::from_str(&Registry::builtin().to_json(false).unwrap()).unwrap();
        json["work"][0]
            .as_object_mut()
            .unwrap()
            .remove("company");
        let err = Registry::from_json(&json.to_string()).unwrap_err();
        assert!(err.to_string().contains("company"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = registry().fingerprint().unwrap();
        let b = Registry::builtin().fingerprint().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let mut changed = Registry::builtin();
        changed.profile.location = "Tainan, Taiwan".to_string();
        assert_ne!(
            changed.fingerprint().unwrap(),
            registry().fingerprint().unwrap()
        );
    }
}
