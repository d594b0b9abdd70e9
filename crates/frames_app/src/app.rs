use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use frames_core::RunState;
use frames_engine::{CustomSearchClient, Harvester, ReqwestFetcher, SearchCredentials};
use frames_logging::{frames_error, frames_info, frames_warn};

use crate::cli::Cli;
use crate::config::{self, MissingCredentials};
use crate::prompt::confirm;
use crate::report;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(cli, config::credentials_from_env, &mut input, &mut output)
}

/// Setup, confirmation and the harvest itself, with the console and credential
/// source supplied by the caller.
pub fn run_with<C, R, W>(
    cli: &Cli,
    credentials: C,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()>
where
    C: FnOnce() -> Result<SearchCredentials, MissingCredentials>,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", report::banner())?;

    let root = config::resolve_output_dir(cli)?;
    if !cli.yes && !config::is_frames_dir(&root) {
        writeln!(
            output,
            "\nWarning: the output directory is expected to be a 'frames' directory"
        )?;
        writeln!(output, "Output directory: {}", root.display())?;
        if !confirm("Continue anyway?", input, output)? {
            frames_info!("Stopped: output directory not confirmed");
            return Ok(());
        }
    }
    writeln!(output, "Output directory: {}", root.display())?;

    let credentials = match credentials() {
        Ok(credentials) => credentials,
        Err(missing) => {
            frames_error!("{}", missing);
            write!(output, "\n{}", report::credential_instructions(&missing.missing))?;
            return Err(missing.into());
        }
    };
    frames_info!("Search credentials found");

    let catalog = config::load_catalog(cli.catalog.as_deref())?;
    frames_info!(
        "Catalog: {} entries across {} categories",
        catalog.len(),
        catalog.categories().len()
    );

    let search = CustomSearchClient::new(config::search_settings(cli, credentials))
        .context("could not build the search client")?;
    let fetcher = ReqwestFetcher::new(config::fetch_settings(cli));
    let harvester = Harvester::new(Box::new(search), Box::new(fetcher))
        .with_run_settings(config::run_settings(cli));

    harvester
        .prepare_output_dirs(&catalog, &root)
        .with_context(|| format!("could not prepare output tree under {}", root.display()))?;

    writeln!(
        output,
        "\nWill fetch up to {} images ({} face shapes), Creative Commons licensed only",
        catalog.len(),
        catalog.categories().len()
    )?;
    if !cli.yes && !confirm("Start download?", input, output)? {
        writeln!(output, "Download cancelled")?;
        return Ok(());
    }

    let report = harvest(&harvester, &catalog, &root)?;
    if !report.summary.is_complete() {
        frames_warn!(
            "{} of {} entries still missing",
            report.summary.total() - report.summary.satisfied(),
            report.summary.total()
        );
    }
    write!(output, "{}", report::render_summary(&report.summary))?;
    Ok(())
}

fn harvest(
    harvester: &Harvester,
    catalog: &frames_core::Catalog,
    root: &Path,
) -> anyhow::Result<frames_engine::RunReport> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("could not start the async runtime")?;
    let mut state = RunState::default();
    Ok(runtime.block_on(harvester.run(catalog, root, &mut state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn credentials() -> Result<SearchCredentials, MissingCredentials> {
        Ok(SearchCredentials {
            api_key: "key".into(),
            engine_id: "cx".into(),
        })
    }

    fn cli(root: PathBuf, catalog: Option<PathBuf>, yes: bool) -> Cli {
        Cli {
            output_dir: Some(root),
            catalog,
            yes,
            entry_delay_ms: 0,
            query_delay_ms: 0,
            request_timeout_secs: 5,
            log_file: None,
            verbose: 0,
        }
    }

    fn drive<C>(cli: &Cli, credentials: C, reply: &str) -> (anyhow::Result<()>, String)
    where
        C: FnOnce() -> Result<SearchCredentials, MissingCredentials>,
    {
        let mut input = Cursor::new(reply.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_with(cli, credentials, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    fn write_catalog(dir: &Path) -> PathBuf {
        let path = dir.join("catalog.ron");
        fs::write(
            &path,
            r#"(categories: [(name: "oval", styles: [(name: "aviator-gold3", queries: ["gold aviator eyeglasses"])])])"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn declining_unexpected_directory_stops_before_setup() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("downloads");
        let (result, printed) = drive(&cli(root.clone(), None, false), credentials, "n\n");
        assert!(result.is_ok());
        assert!(printed.contains("Continue anyway? (y/n)"));
        assert!(!root.exists());
    }

    #[test]
    fn missing_credentials_abort_with_instructions() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("frames");
        let missing = || {
            Err(MissingCredentials {
                missing: vec![config::API_KEY_VAR],
            })
        };
        let (result, printed) = drive(&cli(root.clone(), None, true), missing, "");
        assert!(result.is_err());
        assert!(printed.contains("Search credentials not found: GOOGLE_API_KEY"));
        assert!(!root.exists());
    }

    #[test]
    fn declining_start_leaves_only_category_dirs() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("frames");
        let catalog = write_catalog(temp.path());
        let (result, printed) = drive(&cli(root.clone(), Some(catalog), false), credentials, "n\n");
        assert!(result.is_ok());
        assert!(printed.contains("Will fetch up to 1 images (1 face shapes)"));
        assert!(printed.contains("Download cancelled"));
        assert!(root.join("oval").is_dir());
        assert_eq!(fs::read_dir(root.join("oval")).unwrap().count(), 0);
    }

    #[test]
    fn fully_populated_tree_completes_without_network() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("frames");
        fs::create_dir_all(root.join("oval")).unwrap();
        fs::write(root.join("oval").join("aviator-gold3.jpg"), b"existing").unwrap();
        let catalog = write_catalog(temp.path());

        let (result, printed) = drive(&cli(root.clone(), Some(catalog), true), credentials, "");
        assert!(result.is_ok(), "{result:?}");
        assert!(printed.contains("Oval: 1/1 images"));
        assert!(printed.contains("All images present."));
        assert_eq!(
            fs::read(root.join("oval").join("aviator-gold3.jpg")).unwrap(),
            b"existing"
        );
    }
}
