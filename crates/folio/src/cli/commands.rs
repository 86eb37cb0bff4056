//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Which part of the content to show
    #[arg(value_enum, default_value = "all")]
    pub section: Section,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Validate command arguments.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Content document to validate instead of the active content
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(short, long)]
    pub strict: bool,

    /// Output the report as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write compact JSON regardless of configuration
    #[arg(long)]
    pub compact: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// A part of the content registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    /// Everything
    #[default]
    All,
    /// Name, summary, skills and navigation
    Profile,
    /// Email, phone and social links
    Contact,
    /// Work history
    Work,
    /// Education
    Education,
    /// Projects
    Projects,
    /// Hackathons
    Hackathons,
}
