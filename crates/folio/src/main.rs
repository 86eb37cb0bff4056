//! `folio` - CLI for the portfolio content registry
//!
//! Prints, validates and exports the content the portfolio site renders from.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use folio::cli::{Cli, Command, ConfigCommand, ExportCommand, Section, ShowCommand, ValidateCommand};
use folio::loader::{self, Source};
use folio::{init_logging, Config, Registry};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config_path = cli.config_path();
    // `config` subcommands load the file themselves so a broken one can be
    // diagnosed.
    match cli.command {
        Command::Config(cmd) => handle_config(&config_path, cmd),
        command => run(&load_config(&config_path)?, command),
    }
}

fn run(config: &Config, command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Show(cmd) => handle_show(config, &cmd),
        Command::Validate(cmd) => handle_validate(config, &cmd),
        Command::Export(cmd) => handle_export(config, &cmd),
        Command::Fingerprint => handle_fingerprint(config),
        Command::Config(_) => unreachable!("config commands are dispatched before loading"),
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(Some(path.to_path_buf()))
        .with_context(|| format!("loading configuration from {}", path.display()))
}

fn active_content(config: &Config) -> anyhow::Result<(Registry, Source)> {
    loader::resolve(config).context("loading content")
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<ExitCode> {
    let (content, _) = active_content(config)?;

    if cmd.json {
        let value = match cmd.section {
            Section::All => serde_json::to_value(&content)?,
            Section::Profile => serde_json::to_value(&content.profile)?,
            Section::Contact => serde_json::to_value(&content.contact)?,
            Section::Work => serde_json::to_value(&content.work)?,
            Section::Education => serde_json::to_value(&content.education)?,
            Section::Projects => serde_json::to_value(&content.projects)?,
            Section::Hackathons => serde_json::to_value(&content.hackathons)?,
        };
        let json = if config.output.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    let all = cmd.section == Section::All;
    if all || cmd.section == Section::Profile {
        print_profile(&content);
    }
    if all || cmd.section == Section::Contact {
        print_contact(&content);
    }
    if all || cmd.section == Section::Work {
        print_work(&content);
    }
    if all || cmd.section == Section::Education {
        print_education(&content);
    }
    if all || cmd.section == Section::Projects {
        print_projects(&content);
    }
    if all || cmd.section == Section::Hackathons {
        print_hackathons(&content);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_profile(content: &Registry) {
    let profile = &content.profile;
    println!("[Profile]");
    println!("  Name:        {} ({})", profile.name, profile.initials);
    println!("  URL:         {}", profile.url);
    println!("  Location:    {}", profile.location);
    println!("  Description: {}", profile.description);
    for paragraph in profile.summary_paragraphs() {
        println!();
        println!("  {paragraph}");
    }
    println!();
    println!("  Skills:      {}", profile.skills.join(", "));
    for item in &profile.navbar {
        println!("  Nav:         {} -> {}", item.label, item.href);
    }
    println!();
}

fn print_contact(content: &Registry) {
    let contact = &content.contact;
    println!("[Contact]");
    println!("  Email:       {}", contact.email);
    println!("  Phone:       {}", contact.tel);
    for (platform, link) in &contact.social {
        let nav = if link.navbar { " (navbar)" } else { "" };
        println!("  {platform}: {}{nav}", link.url);
    }
    println!();
}

fn print_work(content: &Registry) {
    println!("[Work]");
    for entry in &content.work {
        println!(
            "  {} - {} ({} - {})",
            entry.company, entry.title, entry.start, entry.end
        );
        if !entry.badges.is_empty() {
            println!("    Badges: {}", entry.badges.join(", "));
        }
    }
    println!();
}

fn print_education(content: &Registry) {
    println!("[Education]");
    for entry in &content.education {
        println!(
            "  {} - {} ({} - {})",
            entry.school, entry.degree, entry.start, entry.end
        );
    }
    println!();
}

fn print_projects(content: &Registry) {
    println!("[Projects]");
    for project in &content.projects {
        let active = if project.active { " [active]" } else { "" };
        println!("  {} ({}){active}", project.title, project.dates);
        if let Some(href) = &project.href {
            println!("    {href}");
        }
        println!("    {}", project.technologies.join(", "));
    }
    println!();
}

fn print_hackathons(content: &Registry) {
    println!("[Hackathons]");
    for entry in &content.hackathons {
        println!("  {} ({}, {})", entry.title, entry.dates, entry.location);
    }
    println!();
}

fn handle_validate(config: &Config, cmd: &ValidateCommand) -> anyhow::Result<ExitCode> {
    let mut options = config.validation.clone();
    options.warnings_as_errors |= cmd.strict;

    let (content, source) =
        loader::read_active(config, cmd.file.as_deref()).context("reading content")?;

    let report = folio::validate(&content, &options);
    let failed = report.is_failure(options.warnings_as_errors);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for issue in &report.issues {
            println!("{issue}");
        }
        println!(
            "{source}: {} error(s), {} warning(s)",
            report.errors().count(),
            report.warnings().count()
        );
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<ExitCode> {
    let (content, _) = active_content(config)?;
    let json = content.to_json(config.output.pretty && !cmd.compact)?;

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n")).map_err(|source| folio::Error::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Exported content");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_fingerprint(config: &Config) -> anyhow::Result<ExitCode> {
    let (content, source) = active_content(config)?;
    println!("{}  {source}", content.fingerprint()?);
    Ok(ExitCode::SUCCESS)
}

fn handle_config(config_path: &Path, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = &load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Content]");
                match config.content_path() {
                    Some(path) => println!("  Path:               {}", path.display()),
                    None => println!("  Path:               (built-in)"),
                }
                println!();
                println!("[Validation]");
                println!(
                    "  Require HTTPS:      {}",
                    config.validation.require_https
                );
                println!(
                    "  Warnings as errors: {}",
                    config.validation.warnings_as_errors
                );
                println!();
                println!("[Output]");
                println!("  Pretty JSON:        {}", config.output.pretty);
            }
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(|| config_path.to_path_buf());
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
