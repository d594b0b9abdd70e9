use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use frames_core::{Catalog, CatalogSpec};
use frames_engine::{FetchSettings, RunSettings, SearchCredentials, SearchSettings};
use thiserror::Error;

use crate::cli::Cli;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const ENGINE_ID_VAR: &str = "GOOGLE_CSE_ID";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing search credentials: {}", .missing.join(", "))]
pub struct MissingCredentials {
    pub missing: Vec<&'static str>,
}

/// Reads search credentials through `lookup`; empty values count as missing.
pub fn credentials_from<F>(lookup: F) -> Result<SearchCredentials, MissingCredentials>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
    let api_key = read(API_KEY_VAR);
    let engine_id = read(ENGINE_ID_VAR);

    match (api_key, engine_id) {
        (Some(api_key), Some(engine_id)) => Ok(SearchCredentials { api_key, engine_id }),
        (api_key, engine_id) => {
            let mut missing = Vec::new();
            if api_key.is_none() {
                missing.push(API_KEY_VAR);
            }
            if engine_id.is_none() {
                missing.push(ENGINE_ID_VAR);
            }
            Err(MissingCredentials { missing })
        }
    }
}

pub fn credentials_from_env() -> Result<SearchCredentials, MissingCredentials> {
    credentials_from(|name| std::env::var(name).ok())
}

pub fn parse_catalog(text: &str) -> anyhow::Result<Catalog> {
    let spec: CatalogSpec = ron::from_str(text).context("catalog file is not valid RON")?;
    Ok(Catalog::from_spec(spec)?)
}

/// The built-in table, or the RON file at `path` when given.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        None => Ok(Catalog::builtin()),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read catalog {}", path.display()))?;
            parse_catalog(&text).with_context(|| format!("invalid catalog {}", path.display()))
        }
    }
}

pub fn resolve_output_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.output_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("could not determine working directory"),
    }
}

/// Whether `dir` looks like the frames asset directory the tree is meant to live in.
pub fn is_frames_dir(dir: &Path) -> bool {
    dir.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("frames"))
}

pub fn search_settings(cli: &Cli, credentials: SearchCredentials) -> SearchSettings {
    let mut settings = SearchSettings::new(credentials);
    settings.request_timeout = cli.request_timeout();
    settings
}

pub fn fetch_settings(cli: &Cli) -> FetchSettings {
    FetchSettings {
        request_timeout: cli.request_timeout(),
        ..FetchSettings::default()
    }
}

pub fn run_settings(cli: &Cli) -> RunSettings {
    RunSettings {
        entry_delay: cli.entry_delay(),
        query_delay: cli.query_delay(),
    }
}
