//! Preset command catalog
//!
//! Fixed, non-configurable commands keyed only by the target. The target is
//! substituted verbatim; an empty target leaves an empty slot.

/// A ready-made command template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Stable identifier
    pub id: &'static str,
    /// Short title shown in the catalog
    pub label: &'static str,
    /// What the command does, shown when the entry is focused
    pub explanation: &'static str,
    /// Template with a single `{target}` slot
    template: &'static str,
}

const TARGET_SLOT: &str = "{target}";

impl Preset {
    /// Render the command for a target
    pub fn render(&self, target: &str) -> String {
        self.template.replace(TARGET_SLOT, target)
    }
}

/// The preset catalog in display order
pub const PRESETS: &[Preset] = &[
    Preset {
        id: "Ulimit-Scan",
        label: "Increase Ulimit for More Ports",
        explanation: "Raise ulimit to handle more simultaneous ports, then run Nmap scripts and service detection",
        template: "rustscan --ulimit 1000 -a {target} -- -sC -sV",
    },
    Preset {
        id: "Basic-Scan",
        label: "Basic Scan",
        explanation: "Quick scan of the top 1,000 most common ports using RustScan default settings",
        template: "rustscan -a {target}",
    },
    Preset {
        id: "All-Ports-Scan",
        label: "All Ports Scan",
        explanation: "Scan all 65,535 ports, faster than Nmap but without detailed service info by default",
        template: "rustscan -a {target} -r 1-65535",
    },
    Preset {
        id: "Batch-Size-Scan",
        label: "High Speed Scan",
        explanation: "Increase batch size to 4,500 for faster results (risk: might overwhelm slower networks)",
        template: "rustscan -a {target} -b 4500",
    },
    Preset {
        id: "Nmap-Integration",
        label: "RustScan + Nmap Aggressive Scan",
        explanation: "RustScan for port discovery, then Nmap aggressive scan (OS detect, version, scripts, traceroute)",
        template: "rustscan -a {target} -- -A",
    },
    Preset {
        id: "Top-Ports-Scan",
        label: "Top Ports Scan",
        explanation: "Scan only the top 100 most common ports quickly (uses Nmap's -F flag)",
        template: "rustscan -a {target} -- -F",
    },
    Preset {
        id: "Script-Scan",
        label: "Service & Script Scan",
        explanation: "RustScan for discovery, Nmap default scripts (-sC) and service/version detection (-sV)",
        template: "rustscan -a {target} -- -sC -sV",
    },
    Preset {
        id: "Quiet-Scan",
        label: "Quiet Scan",
        explanation: "Quiet mode, only shows open ports without additional output",
        template: "rustscan -a {target} -q",
    },
    Preset {
        id: "Custom-Range",
        label: "Custom Port Range",
        explanation: "Scan a specific port range (example: 1-1000)",
        template: "rustscan -a {target} -r 1-1000",
    },
    Preset {
        id: "UDP-Scan",
        label: "UDP Scan (via Nmap)",
        explanation: "RustScan for discovery, then Nmap UDP scan (-sU), slower but detects UDP services",
        template: "rustscan -a {target} -- -sU",
    },
];

/// Usage tips listed under the catalog
pub const TIPS: &[&str] = &[
    "RustScan is much faster than Nmap for port discovery",
    "Use -- to pass arguments to Nmap for detailed analysis",
    "Adjust batch size with -b (default 4500, max 65535)",
    "Use -t to set timeout in milliseconds (default 1500)",
    "Combine with Nmap for best of both worlds: speed + detail",
];

/// Look up a preset by id
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}
