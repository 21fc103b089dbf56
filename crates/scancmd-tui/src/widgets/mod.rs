//! Custom widget components

mod command_line;
mod header;
mod key_hints;
mod preset_list;
mod scan_form;
mod tabs;
mod target_input;
mod toast;

pub use command_line::CommandLine;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use preset_list::PresetList;
pub use scan_form::ScanForm;
pub use tabs::ModeTabs;
pub use target_input::TargetInput;
pub use toast::Toast;
