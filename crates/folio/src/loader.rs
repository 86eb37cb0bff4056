//! Loading content documents.
//!
//! An external document replaces the built-in content wholesale. It must
//! carry every required field; a missing one is reported as
//! [`Error::ContentLoad`] before validation runs.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Format, Json, Toml},
    Figment,
};
use tracing::{debug, info};

use crate::config::{Config, ValidationConfig};
use crate::content::Registry;
use crate::error::{Error, Result};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ContentFormat {
    /// Pick the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a registry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The content compiled into the crate.
    Builtin,
    /// An external document.
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a content document without validating it.
///
/// # Errors
///
/// Returns an error if the extension is unsupported, or the file is
/// unreadable or does not match the content schema.
pub fn read(path: &Path) -> Result<Registry> {
    let format = ContentFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    if !path.is_file() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("content document not found: {}", path.display()),
        )));
    }

    debug!(path = %path.display(), ?format, "Reading content document");
    let figment = match format {
        ContentFormat::Toml => Figment::from(Toml::file_exact(path)),
        ContentFormat::Json => Figment::from(Json::file_exact(path)),
    };
    figment
        .extract()
        .map_err(|source| Error::content_load(path, source))
}

/// Parse and validate a content document.
///
/// # Errors
///
/// Returns an error if the document cannot be read or fails validation.
pub fn load(path: &Path, options: &ValidationConfig) -> Result<Registry> {
    let registry = read(path)?.validated(options)?;
    info!(path = %path.display(), "Loaded content");
    Ok(registry)
}

/// Parse and validate a TOML document held in memory.
///
/// # Errors
///
/// Returns an error if the document does not match the schema or fails
/// validation.
pub fn from_toml_str(toml: &str, options: &ValidationConfig) -> Result<Registry> {
    let registry: Registry = Figment::from(Toml::string(toml))
        .extract()
        .map_err(|source| Error::content_load("<string>", source))?;
    registry.validated(options)
}

/// Pick and parse the active content without validating it.
///
/// The first of `file`, the configured document, or the built-in content
/// wins.
///
/// # Errors
///
/// Returns an error if the chosen document cannot be read.
pub fn read_active(config: &Config, file: Option<&Path>) -> Result<(Registry, Source)> {
    match file.or_else(|| config.content_path()) {
        Some(path) => Ok((read(path)?, Source::File(path.to_path_buf()))),
        None => {
            debug!("No content path configured, using built-in content");
            Ok((Registry::builtin(), Source::Builtin))
        }
    }
}

/// Resolve the active registry for a configuration: the configured document
/// if there is one, the built-in content otherwise.
///
/// # Errors
///
/// Returns an error if the configured document cannot be loaded or fails
/// validation.
pub fn resolve(config: &Config) -> Result<(Registry, Source)> {
    let (registry, source) = read_active(config, None)?;
    let registry = registry.validated(&config.validation)?;
    info!(%source, "Loaded content");
    Ok((registry, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const MINIMAL: &str = r#"
        work = []
        education = []
        hackathons = []

        [profile]
        name = "Ada Lovelace"
        initials = "AL"
        url = "https://ada.example.com"
        location = "London"
        locationLink = "https://maps.example.com/london"
        description = "Analyst."
        summary = "First paragraph.\n\nSecond paragraph."
        avatarUrl = "/ada.png"
        skills = ["Mathematics", "Poetry"]
        navbar = [{ href = "/", icon = "lucide:home", label = "Home" }]

        [contact]
        email = "ada@example.com"
        tel = "+441234567"

        [contact.social.GitHub]
        name = "GitHub"
        url = "https://github.com/ada"
        icon = "icons:github"
        navbar = true

        [[projects]]
        title = "Analytical Engine Notes"
        dates = "1842 - 1843"
        active = false
        description = "Notes on the engine."
        technologies = ["Punch cards"]
    "#;

    fn options() -> ValidationConfig {
        ValidationConfig::default()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ContentFormat::from_path(Path::new("a/content.toml")),
            Some(ContentFormat::Toml)
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("content.Json")),
            Some(ContentFormat::Json)
        );
        assert_eq!(ContentFormat::from_path(Path::new("content.yaml")), None);
        assert_eq!(ContentFormat::from_path(Path::new("content")), None);
    }

    #[test]
    fn test_from_toml_str_minimal() {
        let registry = from_toml_str(MINIMAL, &options()).unwrap();
        assert_eq!(registry.profile.name, "Ada Lovelace");
        assert_eq!(registry.profile.summary_paragraphs().count(), 2);
        assert_eq!(registry.projects.len(), 1);
        assert!(registry.projects[0].href.is_none());
        assert!(registry.projects[0].links.is_none());
        assert!(registry.work.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_load_error() {
        let broken = MINIMAL.replace("initials = \"AL\"", "");
        let err = from_toml_str(&broken, &options()).unwrap_err();
        assert!(matches!(err, Error::ContentLoad { .. }));
        assert!(err.to_string().contains("<string>"));
    }

    #[test]
    fn test_invalid_content_is_validation_error() {
        let broken = MINIMAL.replace("https://ada.example.com", "ada.example.com");
        let err = from_toml_str(&broken, &options()).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.issues()[0].path, "profile.url");
    }

    #[test]
    fn test_load_json_file_round_trip() {
        Jail::expect_with(|jail| {
            let json = Registry::builtin().to_json(true).map_err(|e| e.to_string())?;
            jail.create_file("content.json", &json)?;
            let loaded = load(Path::new("content.json"), &options()).map_err(|e| e.to_string())?;
            assert_eq!(&loaded, crate::content::registry());
            Ok(())
        });
    }

    #[test]
    fn test_load_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("content.toml", MINIMAL)?;
            let loaded = load(Path::new("content.toml"), &options()).map_err(|e| e.to_string())?;
            assert_eq!(loaded.profile.initials, "AL");
            Ok(())
        });
    }

    #[test]
    fn test_misspelled_optional_keys_rejected() {
        Jail::expect_with(|jail| {
            let mut json: serde_json::Value =
                serde_json::from_str(&Registry::builtin().to_json(false).map_err(|e| e.to_string())?)
                    .map_err(|e| e.to_string())?;
            let project = json["projects"][0]
                .as_object_mut()
                .ok_or("projects[0] is not an object")?;
            let image = project.remove("image").ok_or("image missing")?;
            let links = project.remove("links").ok_or("links missing")?;
            project.insert("img".to_string(), image);
            project.insert("link".to_string(), links);
            jail.create_file("content.json", &json.to_string())?;

            let err = load(Path::new("content.json"), &options()).unwrap_err();
            assert!(matches!(err, Error::ContentLoad { .. }));
            assert!(err.to_string().contains("content.json"));
            Ok(())
        });
    }

    #[test]
    fn test_misspelled_toml_key_rejected() {
        let typo = MINIMAL.replace("technologies = [", "image_url = \"/x.png\"\n        technologies = [");
        let err = from_toml_str(&typo, &options()).unwrap_err();
        assert!(matches!(err, Error::ContentLoad { .. }));
    }

    #[test]
    fn test_read_active_prefers_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("other.toml", MINIMAL)?;
            let mut config = Config::default();
            config.content.path = Some(PathBuf::from("missing.toml"));
            let (registry, source) = read_active(&config, Some(Path::new("other.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(source, Source::File(PathBuf::from("other.toml")));
            assert_eq!(registry.profile.name, "Ada Lovelace");
            Ok(())
        });
    }

    #[test]
    fn test_read_active_does_not_validate() {
        Jail::expect_with(|jail| {
            let broken = MINIMAL.replace("https://ada.example.com", "ada.example.com");
            jail.create_file("content.toml", &broken)?;
            let mut config = Config::default();
            config.content.path = Some(PathBuf::from("content.toml"));

            let (registry, _) = read_active(&config, None).map_err(|e| e.to_string())?;
            assert_eq!(registry.profile.url, "ada.example.com");
            assert!(resolve(&config).unwrap_err().is_validation_error());
            Ok(())
        });
    }

    #[test]
    fn test_read_active_builtin() {
        let (registry, source) = read_active(&Config::default(), None).unwrap();
        assert_eq!(source, Source::Builtin);
        assert_eq!(&registry, crate::content::registry());
    }

    #[test]
    fn test_read_missing_file() {
        Jail::expect_with(|_jail| {
            let err = read(Path::new("absent.json")).unwrap_err();
            assert!(matches!(err, Error::Io(_)));
            assert!(err.to_string().contains("absent.json"));
            Ok(())
        });
    }

    #[test]
    fn test_read_unsupported_extension() {
        let err = read(Path::new("content.yaml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_resolve_builtin() {
        let (registry, source) = resolve(&Config::default()).unwrap();
        assert_eq!(source, Source::Builtin);
        assert_eq!(registry.profile.name, "Marx Yeh");
        assert_eq!(source.to_string(), "built-in");
    }

    #[test]
    fn test_resolve_configured_file() {
        Jail::expect_with(|jail| {
            jail.create_file("content.toml", MINIMAL)?;
            let mut config = Config::default();
            config.content.path = Some(PathBuf::from("content.toml"));
            let (registry, source) = resolve(&config).map_err(|e| e.to_string())?;
            assert_eq!(source, Source::File(PathBuf::from("content.toml")));
            assert_eq!(registry.profile.name, "Ada Lovelace");
            Ok(())
        });
    }
}
