use anyhow::{Result, bail};
use clap::Parser;
use numfield_format::Locale;
use numfield_tui::DemoOptions;
use tracing::Level;

/// Interactive demo for the numfield number input widget.
#[derive(Debug, Parser)]
#[command(name = "numfield", version, about)]
struct Cli {
    /// Digit-info specifier, e.g. "1.5-5" (min 1 integer digit, 5 to 5
    /// fraction digits).
    #[arg(long, default_value = "1.5-5")]
    format: String,

    /// Left icon for the amount field: a "glyphicon-" class or a literal
    /// character such as "$".
    #[arg(long)]
    icon: Option<String>,

    /// Initial raw value for the amount field.
    #[arg(long)]
    value: Option<String>,

    /// Locale preset: en, de, or plain.
    #[arg(long, default_value = "en")]
    locale: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let defaults = DemoOptions::default();
    let options = DemoOptions {
        format: cli.format,
        left_icon: cli.icon.or(defaults.left_icon),
        value: cli.value,
        locale: parse_locale(&cli.locale)?,
    };

    numfield_tui::run(options).await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_locale(name: &str) -> Result<Locale> {
    match name.to_ascii_lowercase().as_str() {
        "en" => Ok(Locale::EN),
        "de" => Ok(Locale::DE),
        "plain" => Ok(Locale::PLAIN),
        other => bail!("unsupported locale preset: {other}"),
    }
}
