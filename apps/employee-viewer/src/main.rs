use anyhow::Result;
use clap::Parser;
use employee_viewer::{DisplayOptions, config::AppConfig, run, view::OutputFormat};
use platform_obs::{ObsConfig, init_tracing, shutdown_tracing};

#[derive(Parser, Debug)]
#[command(name = "employee-viewer", version, about = "List the employee directory")]
struct Cli {
    /// Directory endpoint; overrides EMPLOYEES_URL.
    #[arg(long, value_name = "URL")]
    url: Option<String>,
    /// Request timeout; overrides EMPLOYEES_TIMEOUT_SECS.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// First row to show.
    #[arg(long, default_value_t = 0)]
    offset: usize,
    /// Number of rows to show; all remaining rows when omitted.
    #[arg(long)]
    height: Option<usize>,
    #[arg(long, help = "Disable colored log output")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut obs = ObsConfig::default();
    if cli.no_color {
        obs = obs.without_ansi();
    }
    init_tracing(obs)?;

    let config = AppConfig::load()?.with_overrides(cli.url.as_deref(), cli.timeout_secs)?;
    let display = DisplayOptions {
        format: cli.format,
        offset: cli.offset,
        height: cli.height,
    };

    let stdout = std::io::stdout();
    let result = run(&config, display, &mut stdout.lock()).await;
    shutdown_tracing()?;
    result.map(|_| ())
}
