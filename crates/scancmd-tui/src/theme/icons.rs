//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use scancmd_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn globe(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ac}", // nf-fa-globe
            IconMode::Unicode => "\u{25ce}",   // ◎
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c5}", // nf-fa-copy
            IconMode::Unicode => "\u{29c9}",   // ⧉
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn network(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f6ff}", // nf-mdi-lan
            IconMode::Unicode => "\u{21c4}",   // ⇄
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn command(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "$",
        }
    }

    // --- Form controls ---

    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self.mode, checked) {
            (IconMode::NerdFonts, true) => "\u{f14a}",  // nf-fa-check_square
            (IconMode::NerdFonts, false) => "\u{f096}", // nf-fa-square_o
            (IconMode::Unicode, true) => "[x]",
            (IconMode::Unicode, false) => "[ ]",
        }
    }

    pub fn radio(&self, selected: bool) -> &'static str {
        match (self.mode, selected) {
            (IconMode::NerdFonts, true) => "\u{f192}",  // nf-fa-dot_circle_o
            (IconMode::NerdFonts, false) => "\u{f10c}", // nf-fa-circle_o
            (IconMode::Unicode, true) => "(\u{25cf})",  // (●)
            (IconMode::Unicode, false) => "( )",
        }
    }
}
