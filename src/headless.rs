//! Headless mode - print commands without starting the TUI
//!
//! Options are taken from command-line flags, compiled exactly as the
//! Advance tab would, and written to stdout either as plain text or as a
//! single JSON object:
//!
//! ```json
//! {"command":"rustscan 10.0.0.5 -g","tokens":["rustscan","10.0.0.5","-g"]}
//! ```

use std::io::{self, Write};

use serde::Serialize;

use scancmd_core::prelude::*;
use scancmd_core::{
    compile, compile_tokens, PortSpec, PostScanTool, ScanConfiguration, ScanOrder,
    DEFAULT_BATCH_SIZE, DEFAULT_TIMEOUT_MS, DEFAULT_ULIMIT, PRESETS,
};

/// Scan options accepted on the command line
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ScanOptions {
    /// Slower but more reliable scanning
    #[arg(long)]
    pub accessible: bool,

    /// Ports per batch
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=65_535))]
    pub batch_size: Option<u32>,

    /// Response timeout in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u32).range(100..=10_000))]
    pub timeout: Option<u32>,

    /// Open files limit
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1_000..=100_000))]
    pub ulimit: Option<u32>,

    /// Port specification: top1000, full, custom or range
    #[arg(long, value_name = "SPEC")]
    pub ports: Option<PortSpec>,

    /// Port list used with `--ports custom`, e.g. 80,443,8000-9000
    #[arg(long, value_name = "LIST")]
    pub custom_ports: Option<String>,

    /// Port range used with `--ports range`, e.g. 1-1000
    #[arg(long, value_name = "START-END")]
    pub range: Option<String>,

    /// random or sequential
    #[arg(long, value_name = "ORDER")]
    pub scan_order: Option<ScanOrder>,

    /// Greppable output
    #[arg(long)]
    pub greppable: bool,

    /// Nmap flags passed after `--`
    #[arg(long, value_name = "TOOL")]
    pub post_scan: Option<PostScanTool>,
}

impl ScanOptions {
    /// Build the configuration; unset flags keep their defaults
    pub fn to_config(&self) -> ScanConfiguration {
        let mut config = ScanConfiguration {
            accessible: self.accessible,
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            timeout_ms: self.timeout.unwrap_or(DEFAULT_TIMEOUT_MS),
            ulimit: self.ulimit.unwrap_or(DEFAULT_ULIMIT),
            greppable: self.greppable,
            ..ScanConfiguration::default()
        };

        if let Some(text) = &self.custom_ports {
            config.custom_ports = text.clone();
        }
        if let Some(text) = &self.range {
            config.range = text.clone();
        }

        // A list or range without an explicit --ports selects its spec
        config.port_spec = match self.ports {
            Some(spec) => spec,
            None if self.custom_ports.is_some() => PortSpec::Custom,
            None if self.range.is_some() => PortSpec::Range,
            None => PortSpec::default(),
        };

        if let Some(order) = self.scan_order {
            config.scan_order = order;
        }
        if let Some(tool) = self.post_scan {
            config.post_scan = tool;
        }
        config
    }
}

/// JSON shape of `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    pub command: String,
    pub tokens: Vec<String>,
}

impl CommandOutput {
    pub fn new(config: &ScanConfiguration, target: &str) -> Self {
        Self {
            command: compile(config, target),
            tokens: compile_tokens(config, target),
        }
    }
}

/// Plain-text output of `--print`
pub fn render_command(config: &ScanConfiguration, target: &str) -> String {
    compile(config, target)
}

/// JSON output of `--json`
pub fn render_json(config: &ScanConfiguration, target: &str) -> Result<String> {
    Ok(serde_json::to_string(&CommandOutput::new(config, target))?)
}

/// Preset catalog for `--presets`, one block per entry
pub fn render_presets(target: &str) -> String {
    let mut out = String::new();
    for preset in PRESETS {
        out.push_str(&format!("# {} ({})\n", preset.label, preset.id));
        out.push_str(&preset.render(target));
        out.push('\n');
    }
    out
}

/// Write to stdout and flush
pub fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_default_config() {
        assert_eq!(ScanOptions::default().to_config(), ScanConfiguration::default());
    }

    #[test]
    fn test_custom_ports_imply_custom_spec() {
        let options = ScanOptions {
            custom_ports: Some("80,443".to_string()),
            ..Default::default()
        };
        let config = options.to_config();
        assert_eq!(config.port_spec, PortSpec::Custom);
        assert_eq!(render_command(&config, "h"), "rustscan h -p 80,443");
    }

    #[test]
    fn test_explicit_ports_win_over_text() {
        let options = ScanOptions {
            ports: Some(PortSpec::Full),
            range: Some("1-10".to_string()),
            ..Default::default()
        };
        let config = options.to_config();
        assert_eq!(config.port_spec, PortSpec::Full);
        assert_eq!(config.range, "1-10");
        assert_eq!(render_command(&config, "h"), "rustscan h -p 1-65535");
    }

    #[test]
    fn test_json_output_shape() {
        let options = ScanOptions {
            greppable: true,
            ..Default::default()
        };
        let json = render_json(&options.to_config(), "10.0.0.5").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "rustscan 10.0.0.5 -g");
        assert_eq!(value["tokens"][2], "-g");
    }

    #[test]
    fn test_presets_listing() {
        let listing = render_presets("10.0.0.5");
        assert!(listing.contains("# Basic Scan (Basic-Scan)\nrustscan -a 10.0.0.5\n"));
        assert_eq!(listing.lines().count(), PRESETS.len() * 2);
    }
}
