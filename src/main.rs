//! scancmd - A terminal command builder for RustScan
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use scancmd::headless::{self, ScanOptions};
use scancmd_app::config;
use scancmd_core::logging;

/// Build RustScan command lines interactively or straight from flags
#[derive(Parser, Debug)]
#[command(name = "scancmd", version)]
#[command(about = "A terminal command builder for RustScan", long_about = None)]
struct Args {
    /// Host or IP to scan (pre-fills the target field)
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    /// Print the command for the given options and exit
    #[arg(long, conflicts_with_all = ["json", "presets"])]
    print: bool,

    /// Print the command and its tokens as JSON and exit
    #[arg(long, conflicts_with = "presets")]
    json: bool,

    /// Print the preset catalog for the target and exit
    #[arg(long)]
    presets: bool,

    #[command(flatten)]
    options: ScanOptions,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;
    tracing::debug!("Parsed arguments: {:?}", args);

    let target = args.target.as_deref().unwrap_or_default();
    if args.presets {
        headless::emit(&headless::render_presets(target))?;
        return Ok(());
    }
    if args.json {
        let config = args.options.to_config();
        headless::emit(&headless::render_json(&config, target)?)?;
        return Ok(());
    }
    if args.print {
        let config = args.options.to_config();
        headless::emit(&headless::render_command(&config, target))?;
        return Ok(());
    }

    let settings = config::load_user_settings();
    scancmd::run(settings, args.target.as_deref())?;
    Ok(())
}
