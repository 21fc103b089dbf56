//! scancmd - RustScan command builder
//!
//! The binary wires the workspace crates together: `scancmd-tui` for the
//! interactive builder and [`headless`] for printing a command straight
//! from flags.

pub mod headless;

pub use scancmd_tui::run;
