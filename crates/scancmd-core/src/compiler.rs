//! Command compiler
//!
//! Turns a [`ScanConfiguration`] plus a target into a RustScan command line.
//! Token groups are emitted in a fixed order and every option is omitted
//! while it still holds its default value, so the generated command stays
//! minimal:
//!
//! ```text
//! rustscan <target> [--accessible] [--batch-size N] [--timeout N] [--ulimit N]
//!          [-p PORTS | -r RANGE] [--scan-order sequential] [-g] [-- NMAP_FLAGS]
//! ```

use crate::types::{
    PortSpec, ScanConfiguration, ScanOrder, DEFAULT_BATCH_SIZE, DEFAULT_TIMEOUT_MS,
    DEFAULT_ULIMIT, FULL_PORT_RANGE, POST_SCAN_SEPARATOR, TARGET_PLACEHOLDER, TOOL_NAME,
};

/// Compile a configuration and target into the final command string
pub fn compile(config: &ScanConfiguration, target: &str) -> String {
    compile_tokens(config, target).join(" ")
}

/// Compile into individual token groups.
///
/// A group may contain spaces (`--batch-size 9000`, `-- -sV -sC`); joining
/// the groups with a single space yields [`compile`]'s output.
pub fn compile_tokens(config: &ScanConfiguration, target: &str) -> Vec<String> {
    let mut parts = vec![TOOL_NAME.to_string()];

    if target.is_empty() {
        parts.push(TARGET_PLACEHOLDER.to_string());
    } else {
        parts.push(target.to_string());
    }

    if config.accessible {
        parts.push("--accessible".to_string());
    }
    if config.batch_size != DEFAULT_BATCH_SIZE {
        parts.push(format!("--batch-size {}", config.batch_size));
    }
    if config.timeout_ms != DEFAULT_TIMEOUT_MS {
        parts.push(format!("--timeout {}", config.timeout_ms));
    }
    if config.ulimit != DEFAULT_ULIMIT {
        parts.push(format!("--ulimit {}", config.ulimit));
    }

    if let Some(ports) = port_tokens(config) {
        parts.push(ports);
    }

    if config.scan_order == ScanOrder::Sequential {
        parts.push("--scan-order sequential".to_string());
    }

    if config.greppable {
        parts.push("-g".to_string());
    }

    if let Some(flags) = config.post_scan.flags() {
        parts.push(format!("{POST_SCAN_SEPARATOR} {flags}"));
    }

    parts
}

/// Port specification token group. Custom and range text is passed through
/// verbatim; an empty text field contributes nothing.
fn port_tokens(config: &ScanConfiguration) -> Option<String> {
    match config.port_spec {
        PortSpec::Top1000 => None,
        PortSpec::Full => Some(format!("-p {FULL_PORT_RANGE}")),
        PortSpec::Custom if !config.custom_ports.is_empty() => {
            Some(format!("-p {}", config.custom_ports))
        }
        PortSpec::Range if !config.range.is_empty() => Some(format!("-r {}", config.range)),
        PortSpec::Custom | PortSpec::Range => None,
    }
}
