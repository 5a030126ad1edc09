//! CLI argument definitions for krxtrend.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Evaluate one security against the trend template |
//! | `resolve` | Resolve free-text input to a canonical (code, name) pair |
//! | `list` | Show the latest published pass list, diffed day over day |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Per-request timeout in ms |
//! | `--listing-url` | published mirror | Listing table location |
//! | `--post-base` | published mirror | Per-date post directory |
//! | `--price-base` | published mirror | Per-date price directory |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// 📈 krxtrend - KRX trend-template checklist CLI
///
/// Evaluates a KRX equity against the eight-point trend template using the
/// published relative-strength and price-history feeds.
#[derive(Debug, Parser)]
#[command(
    name = "krxtrend",
    author,
    version,
    about = "KRX trend-template checklist CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Override the listing table location.
    #[arg(long, global = true)]
    pub listing_url: Option<String>,

    /// Override the per-date post directory (rank and trend-list documents).
    #[arg(long, global = true)]
    pub post_base: Option<String>,

    /// Override the per-date price history directory.
    #[arg(long, global = true)]
    pub price_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report text.
    Text,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// ✅ Evaluate one security against the trend template.
    ///
    /// Accepts a six-digit code or free text containing a listed name.
    ///
    /// # Examples
    ///
    ///   krxtrend analyze 005930
    ///   krxtrend analyze 삼성전자
    ///   krxtrend analyze 카카오 --window 10 --format json
    Analyze(AnalyzeArgs),

    /// 🔍 Resolve free-text input to a canonical (code, name) pair.
    ///
    /// # Examples
    ///
    ///   krxtrend resolve "삼성전자우 매수"
    Resolve(ResolveArgs),

    /// 📋 Show the latest published pass list, diffed against the
    /// previous publication.
    ///
    /// # Examples
    ///
    ///   krxtrend list
    ///   krxtrend list --format json --pretty
    List(ListArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Security code or free text containing a listed name.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Lookback window in calendar days.
    #[arg(long, default_value_t = 30)]
    pub window: u32,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Free-form input (code or text containing a listed name).
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Args)]
pub struct ListArgs {}

impl AnalyzeArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

impl ResolveArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
