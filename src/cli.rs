//! Command-line options

use clap::Parser;
use std::path::PathBuf;

/// Default horizontal size of one terminal cell, in pixels
pub const DEFAULT_CELL_WIDTH_PX: f64 = 8.0;

#[derive(Parser, Debug, Clone)]
#[command(name = "cardnews", version, about = "Card-news donation carousel for the terminal")]
pub struct Cli {
    /// Log links instead of opening them
    #[arg(long)]
    pub no_open: bool,

    /// Pixel width of one terminal column, used to scale mouse swipes
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH_PX, value_parser = parse_cell_width)]
    pub cell_width: f64,

    /// Log file path (defaults to cardnews.log in the temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("cardnews.log"))
    }
}

fn parse_cell_width(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("cell width must be positive, got {}", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cardnews"]).unwrap();
        assert!(!cli.no_open);
        assert_eq!(cli.cell_width, DEFAULT_CELL_WIDTH_PX);
        assert_eq!(cli.log_level, "info");
        assert!(cli.log_path().ends_with("cardnews.log"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "cardnews",
            "--no-open",
            "--cell-width",
            "10",
            "--log-file",
            "/tmp/x.log",
        ])
        .unwrap();
        assert!(cli.no_open);
        assert_eq!(cli.cell_width, 10.0);
        assert_eq!(cli.log_path(), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_rejects_non_positive_cell_width() {
        assert!(Cli::try_parse_from(["cardnews", "--cell-width", "0"]).is_err());
        assert!(Cli::try_parse_from(["cardnews", "--cell-width", "wide"]).is_err());
    }
}
