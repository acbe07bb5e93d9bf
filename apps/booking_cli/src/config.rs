use std::{fs, path::{Path, PathBuf}};

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

use crate::ui::{LayoutKind, Theme};

pub const DEFAULT_SETTINGS_FILE: &str = "wellness.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub layout: LayoutKind,
    pub catalog_path: Option<PathBuf>,
    pub revalidate_on_confirm: bool,
    pub theme: Theme,
    pub color: bool,
    pub streak_days: u32,
    pub log_filter: String,
    pub emit_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Wizard,
            catalog_path: None,
            revalidate_on_confirm: true,
            theme: Theme::Light,
            color: true,
            streak_days: 0,
            log_filter: "info".into(),
            emit_json: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    layout: Option<LayoutKind>,
    catalog_path: Option<PathBuf>,
    revalidate_on_confirm: Option<bool>,
    theme: Option<Theme>,
    color: Option<bool>,
    streak_days: Option<u32>,
    log_filter: Option<String>,
    emit_json: Option<bool>,
}

/// Settings plus the overrides that were dropped while loading them.
///
/// Loading runs before the tracing subscriber exists, so the caller logs
/// `warnings` once logging is up.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

/// Defaults, then the settings file (if present), then the environment.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<LoadedSettings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => {
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
        }
        Err(err) if required => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
        Err(_) => {}
    }

    let warnings = apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(LoadedSettings { settings, warnings })
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: SettingsFile = toml::from_str(raw)?;

    if let Some(v) = file.layout {
        settings.layout = v;
    }
    if let Some(v) = file.catalog_path {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file.revalidate_on_confirm {
        settings.revalidate_on_confirm = v;
    }
    if let Some(v) = file.theme {
        settings.theme = v;
    }
    if let Some(v) = file.color {
        settings.color = v;
    }
    if let Some(v) = file.streak_days {
        settings.streak_days = v;
    }
    if let Some(v) = file.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file.emit_json {
        settings.emit_json = v;
    }

    Ok(())
}

/// Applies environment overrides; malformed values are skipped and reported.
fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut ignored = |key: &str, value: &str, expected: &str| {
        warnings.push(format!("ignoring {key}={value:?}; expected {expected}"));
    };

    if let Some(v) = var("WELLNESS_LAYOUT").or_else(|| var("APP__LAYOUT")) {
        match LayoutKind::from_str(&v, true) {
            Ok(layout) => settings.layout = layout,
            Err(_) => ignored("layout override", &v, "wizard or single-page"),
        }
    }

    if let Some(v) = var("WELLNESS_CATALOG").or_else(|| var("APP__CATALOG_PATH")) {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__REVALIDATE_ON_CONFIRM") {
        match v.parse::<bool>() {
            Ok(parsed) => settings.revalidate_on_confirm = parsed,
            Err(_) => ignored("APP__REVALIDATE_ON_CONFIRM", &v, "true or false"),
        }
    }

    if let Some(v) = var("APP__THEME") {
        match Theme::from_str(&v, true) {
            Ok(theme) => settings.theme = theme,
            Err(_) => ignored("APP__THEME", &v, "light or dark"),
        }
    }

    if var("NO_COLOR").is_some() {
        settings.color = false;
    }

    if let Some(v) = var("APP__STREAK_DAYS") {
        match v.parse::<u32>() {
            Ok(parsed) => settings.streak_days = parsed,
            Err(_) => ignored("APP__STREAK_DAYS", &v, "a whole number of days"),
        }
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    warnings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
