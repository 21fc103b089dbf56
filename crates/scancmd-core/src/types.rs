//! Core domain types for command synthesis

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of the scanner every generated command invokes
pub const TOOL_NAME: &str = "rustscan";

/// Stand-in for the target when none has been entered
pub const TARGET_PLACEHOLDER: &str = "<IP>";

/// Separator handing the remaining arguments to nmap
pub const POST_SCAN_SEPARATOR: &str = "--";

/// Port range emitted for [`PortSpec::Full`]
pub const FULL_PORT_RANGE: &str = "1-65535";

pub const DEFAULT_BATCH_SIZE: u32 = 4500;
pub const DEFAULT_TIMEOUT_MS: u32 = 1500;
pub const DEFAULT_ULIMIT: u32 = 5000;

/// Accepted input bounds for the numeric fields.
///
/// These mirror the min/max constraints of the form inputs; values outside
/// them are clamped when an edit is committed, never rejected.
pub const BATCH_SIZE_BOUNDS: RangeInclusive<u32> = 1..=65_535;
pub const TIMEOUT_MS_BOUNDS: RangeInclusive<u32> = 100..=10_000;
pub const ULIMIT_BOUNDS: RangeInclusive<u32> = 1_000..=100_000;

/// Which ports the scan covers. Exactly one variant is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortSpec {
    /// RustScan's own default; contributes no token
    #[default]
    Top1000,
    /// Every port (`-p 1-65535`)
    Full,
    /// Comma separated ports taken verbatim from `custom_ports`
    Custom,
    /// A start-end range taken verbatim from `range`
    Range,
}

impl PortSpec {
    pub const ALL: [PortSpec; 4] = [
        PortSpec::Top1000,
        PortSpec::Full,
        PortSpec::Custom,
        PortSpec::Range,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PortSpec::Top1000 => "Top 1000 Ports",
            PortSpec::Full => "All Ports",
            PortSpec::Custom => "Custom Ports",
            PortSpec::Range => "Port Range",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            PortSpec::Top1000 => Some("(Default)"),
            PortSpec::Full => Some("(1-65535)"),
            PortSpec::Custom | PortSpec::Range => None,
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSpec::Top1000 => write!(f, "top1000"),
            PortSpec::Full => write!(f, "full"),
            PortSpec::Custom => write!(f, "custom"),
            PortSpec::Range => write!(f, "range"),
        }
    }
}

impl FromStr for PortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top1000" => Ok(PortSpec::Top1000),
            "full" => Ok(PortSpec::Full),
            "custom" => Ok(PortSpec::Custom),
            "range" => Ok(PortSpec::Range),
            other => Err(format!(
                "unknown port spec '{other}' (expected top1000, full, custom or range)"
            )),
        }
    }
}

/// Order in which RustScan walks the port list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    #[default]
    Random,
    Sequential,
}

impl ScanOrder {
    pub fn label(&self) -> &'static str {
        match self {
            ScanOrder::Random => "Random (Default)",
            ScanOrder::Sequential => "Sequential",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ScanOrder::Random => ScanOrder::Sequential,
            ScanOrder::Sequential => ScanOrder::Random,
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOrder::Random => write!(f, "random"),
            ScanOrder::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for ScanOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(ScanOrder::Random),
            "sequential" => Ok(ScanOrder::Sequential),
            other => Err(format!(
                "unknown scan order '{other}' (expected random or sequential)"
            )),
        }
    }
}

/// nmap invocation appended after RustScan finishes port discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostScanTool {
    #[default]
    None,
    /// Same flags as [`PostScanTool::Aggressive`]
    Default,
    ServiceDetection,
    ScriptScan,
    ScriptAndService,
    OsDetection,
    Aggressive,
}

impl PostScanTool {
    pub const ALL: [PostScanTool; 7] = [
        PostScanTool::None,
        PostScanTool::Default,
        PostScanTool::ServiceDetection,
        PostScanTool::ScriptScan,
        PostScanTool::ScriptAndService,
        PostScanTool::OsDetection,
        PostScanTool::Aggressive,
    ];

    /// nmap flags for this variant, `None` when nothing is appended
    pub fn flags(&self) -> Option<&'static str> {
        match self {
            PostScanTool::None => None,
            PostScanTool::Default | PostScanTool::Aggressive => Some("-A"),
            PostScanTool::ServiceDetection => Some("-sV"),
            PostScanTool::ScriptScan => Some("-sC"),
            PostScanTool::ScriptAndService => Some("-sV -sC"),
            PostScanTool::OsDetection => Some("-O"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostScanTool::None => "None",
            PostScanTool::Default => "Default (-A)",
            PostScanTool::ServiceDetection => "Service Detection (-sV)",
            PostScanTool::ScriptScan => "Default Script Scan (-sC)",
            PostScanTool::ScriptAndService => "Service + Script Scan (-sV -sC)",
            PostScanTool::OsDetection => "OS Detection (-O)",
            PostScanTool::Aggressive => "Aggressive Scan (-A)",
        }
    }

    /// Next variant in display order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous variant in display order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PostScanTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostScanTool::None => "none",
            PostScanTool::Default => "default",
            PostScanTool::ServiceDetection => "service-detection",
            PostScanTool::ScriptScan => "script-scan",
            PostScanTool::ScriptAndService => "script-and-service",
            PostScanTool::OsDetection => "os-detection",
            PostScanTool::Aggressive => "aggressive",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PostScanTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.to_string() == s.to_ascii_lowercase().replace('_', "-"))
            .ok_or_else(|| {
                let names: Vec<String> = Self::ALL.iter().map(|t| t.to_string()).collect();
                format!(
                    "unknown post-scan tool '{s}' (expected one of: {})",
                    names.join(", ")
                )
            })
    }
}

/// The full set of user-chosen options controlling command synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfiguration {
    pub accessible: bool,
    pub batch_size: u32,
    pub timeout_ms: u32,
    pub ulimit: u32,
    pub port_spec: PortSpec,
    /// Retained even while another port spec is active
    pub custom_ports: String,
    /// Retained even while another port spec is active
    pub range: String,
    pub scan_order: ScanOrder,
    pub greppable: bool,
    pub post_scan: PostScanTool,
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self {
            accessible: false,
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            ulimit: DEFAULT_ULIMIT,
            port_spec: PortSpec::default(),
            custom_ports: String::new(),
            range: String::new(),
            scan_order: ScanOrder::default(),
            greppable: false,
            post_scan: PostScanTool::default(),
        }
    }
}
