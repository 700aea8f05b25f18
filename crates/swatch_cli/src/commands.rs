//! Subcommand handlers

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use swatch_theme::{
    has_errors, resolve_theme_with, try_merge, validate, Issue, PartialTheme, ResolvedTheme, Theme,
    ThemePreset,
};

use crate::config::{OutputFormat, SwatchConfig};
use crate::{Cli, Command};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = SwatchConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Init { preset, out } => {
            let preset = pick_preset(preset.as_deref(), &config)?;
            let json = preset.theme().to_json_string_pretty()?;
            emit(&json, out.as_deref())?;
            if let Some(path) = out {
                eprintln!("Wrote {} theme to {}", preset.id(), path.display());
            }
        }

        Command::Presets => {
            for preset in ThemePreset::all() {
                println!("{:<10} {}", preset.id(), preset.display_name());
            }
        }

        Command::Validate { theme } => {
            let theme = load_theme(theme, &config)?;
            let issues = validate(&theme);
            print!("{}", render_issues(&issues));
            if has_errors(&issues) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Resolve {
            theme,
            mode,
            strict,
            format,
        } => {
            let theme = load_theme(theme, &config)?;
            let mode = mode.unwrap_or(config.resolve.mode);
            let options = config.resolve.options(strict);
            let resolved = resolve_theme_with(mode, &theme, options);

            for (path, missing) in resolved.missing() {
                tracing::warn!("unresolved {}: {}", path, missing);
            }

            let output = match format.unwrap_or(config.output.format) {
                OutputFormat::Json => serde_json::to_string_pretty(&resolved)?,
                OutputFormat::Css => render_css(&resolved, &config.output.css_prefix),
            };
            println!("{}", output);
        }

        Command::Merge { base, partial, out } => {
            let base = read_theme(&base)?;
            let partial = read_partial(&partial)?;
            let merged = merge_theme(&partial, &base)?;
            emit(&merged.to_json_string_pretty()?, out.as_deref())?;
        }

        Command::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Flag, then config, then the default preset
fn pick_preset(flag: Option<&str>, config: &SwatchConfig) -> Result<ThemePreset> {
    match flag.or(config.theme.preset.as_deref()) {
        Some(id) => Ok(id.parse()?),
        None => Ok(ThemePreset::default()),
    }
}

/// Theme file argument, then configured theme file, then configured preset
fn load_theme(arg: Option<PathBuf>, config: &SwatchConfig) -> Result<Theme> {
    match arg.or_else(|| config.theme.path.clone()) {
        Some(path) => read_theme(&path),
        None => {
            let preset = pick_preset(None, config)?;
            tracing::debug!("No theme file given, using preset {}", preset.id());
            Ok(preset.theme())
        }
    }
}

fn read_theme(path: &Path) -> Result<Theme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Theme::from_json_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_partial(path: &Path) -> Result<PartialTheme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    PartialTheme::from_json_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Unlike the library's total merge, a partial that does not fit is an error
fn merge_theme(partial: &PartialTheme, base: &Theme) -> Result<Theme> {
    try_merge(partial, base).context("Partial theme does not fit the base theme")
}

fn emit(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => fs::write(path, format!("{content}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn render_issues(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "Theme is valid\n".to_string();
    }

    let mut out = String::new();
    for issue in issues {
        let _ = writeln!(out, "{issue}");
    }
    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    let _ = writeln!(
        out,
        "{} issue(s): {} error(s), {} warning(s)",
        issues.len(),
        errors,
        issues.len() - errors
    );
    out
}

/// A `:root` block with one custom property per resolved leaf
fn render_css(resolved: &ResolvedTheme, prefix: &str) -> String {
    let mut css = format!("/* swatch: {} mode */\n:root {{\n", resolved.mode);
    for (name, value) in resolved.css_variables(prefix) {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push('}');
    css
}
