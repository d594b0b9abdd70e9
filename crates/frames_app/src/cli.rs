use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Downloads one Creative Commons product photo per eyeglass frame style and face shape.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "frames-harvest")]
pub struct Cli {
    /// Root of the output tree [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// RON file replacing the built-in search catalog
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Pause after each catalog entry that hit the network, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub entry_delay_ms: u64,

    /// Pause after a search query that produced no usable result, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub query_delay_ms: u64,

    /// Timeout for each search and image request, in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_delay_ms)
    }

    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn defaults_match_the_courtesy_delays() {
        let cli = Cli::try_parse_from(["frames-harvest"]).unwrap();
        assert!(!cli.yes);
        assert_eq!(cli.entry_delay(), Duration::from_secs(2));
        assert_eq!(cli.query_delay(), Duration::from_secs(1));
        assert_eq!(cli.request_timeout(), Duration::from_secs(30));
        assert_eq!(cli.output_dir, None);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "frames-harvest",
            "-y",
            "--output-dir",
            "/tmp/frames",
            "--catalog",
            "catalog.ron",
            "--entry-delay-ms",
            "0",
            "-vv",
        ])
        .unwrap();
        assert!(cli.yes);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/frames")));
        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.ron")));
        assert_eq!(cli.entry_delay(), Duration::ZERO);
        assert_eq!(cli.verbose, 2);
    }
}
