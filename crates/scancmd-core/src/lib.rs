//! # scancmd-core - Core Domain Types
//!
//! Foundation crate for scancmd. Provides the scan configuration model, the
//! command compiler, the preset catalog, the shared target cell, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ScanConfiguration`] - Every option the builder exposes
//! - [`PortSpec`], [`ScanOrder`], [`PostScanTool`] - Mutually exclusive choices
//!
//! ### Compiler (`compiler`)
//! - [`compile()`] - Configuration + target to command string
//! - [`compile_tokens()`] - Same, as ordered token groups
//!
//! ### Presets (`presets`)
//! - [`PRESETS`] - Fixed command templates keyed by target
//!
//! ### Shared Target (`target`)
//! - [`SharedTarget`] - Reactive cell with get/set/subscribe
//! - [`TargetSubscription`] - Change tracking for derived state
//!
//! ### Edit Escape Hatch (`command`)
//! - [`EditableCommand`] - Compiled command that can be hand edited
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use scancmd_core::prelude::*;
//! ```

pub mod command;
pub mod compiler;
pub mod error;
pub mod logging;
pub mod ports;
pub mod prelude;
pub mod presets;
pub mod target;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use command::EditableCommand;
pub use compiler::{compile, compile_tokens};
pub use error::{Error, Result, ResultExt};
pub use ports::{custom_ports_well_formed, range_well_formed};
pub use presets::{find_preset, Preset, PRESETS, TIPS};
pub use target::{AddressFamily, SharedTarget, TargetSubscription};
pub use types::{
    PortSpec, PostScanTool, ScanConfiguration, ScanOrder, BATCH_SIZE_BOUNDS, DEFAULT_BATCH_SIZE,
    DEFAULT_TIMEOUT_MS, DEFAULT_ULIMIT, TIMEOUT_MS_BOUNDS, TOOL_NAME, ULIMIT_BOUNDS,
};
