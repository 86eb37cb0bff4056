//! `folio` - the content registry behind a personal portfolio site
//!
//! The registry is one immutable aggregate: profile, contact channels, work
//! history, education, projects and hackathons. Renderers read it by
//! reference; nothing in this crate mutates it after construction.
//!
//! ```
//! let content = folio::registry();
//! assert_eq!(content.profile.name, "Marx Yeh");
//! assert!(content.work[0].is_current());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod loader;
pub mod logging;
pub mod validate;

pub use config::Config;
pub use content::{registry, Registry};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use validate::{validate, Issue, Severity, ValidationReport};
