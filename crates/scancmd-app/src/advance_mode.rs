//! Configurable command builder state
//!
//! Holds the [`ScanConfiguration`] form, the derived command (with its
//! hand-edit escape hatch) and the subscription that keeps the command in
//! step with the shared target.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use crate::feedback::CopyFeedback;
use scancmd_core::{
    compile, custom_ports_well_formed, range_well_formed, EditableCommand, PortSpec,
    PostScanTool, ScanConfiguration, ScanOrder, SharedTarget, TargetSubscription,
    BATCH_SIZE_BOUNDS, TIMEOUT_MS_BOUNDS, ULIMIT_BOUNDS,
};

/// Longest digit string a numeric field accepts
const MAX_NUMBER_DIGITS: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Form Layout
// ─────────────────────────────────────────────────────────────────────────────

/// Group of fields rendered under one heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    ScanOptions,
    PortSpecification,
    Output,
    GeneratedCommand,
}

impl FormSection {
    pub const ALL: [FormSection; 4] = [
        FormSection::ScanOptions,
        FormSection::PortSpecification,
        FormSection::Output,
        FormSection::GeneratedCommand,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FormSection::ScanOptions => "Scan Options",
            FormSection::PortSpecification => "Port Specification",
            FormSection::Output => "Output & Post-Processing",
            FormSection::GeneratedCommand => "Generated Command",
        }
    }
}

/// How a field reacts to activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Toggle,
    Number,
    Radio,
    Text,
    Choice,
    Command,
}

/// One focusable row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Accessible,
    BatchSize,
    Timeout,
    Ulimit,
    Port(PortSpec),
    CustomPorts,
    RangeText,
    ScanOrder,
    Greppable,
    PostScan,
    Command,
}

impl FormField {
    /// Focus order, top to bottom
    pub const ORDER: [FormField; 14] = [
        FormField::Accessible,
        FormField::BatchSize,
        FormField::Timeout,
        FormField::Ulimit,
        FormField::Port(PortSpec::Top1000),
        FormField::Port(PortSpec::Full),
        FormField::Port(PortSpec::Custom),
        FormField::CustomPorts,
        FormField::Port(PortSpec::Range),
        FormField::RangeText,
        FormField::ScanOrder,
        FormField::Greppable,
        FormField::PostScan,
        FormField::Command,
    ];

    pub fn section(&self) -> FormSection {
        match self {
            FormField::Accessible
            | FormField::BatchSize
            | FormField::Timeout
            | FormField::Ulimit => FormSection::ScanOptions,
            FormField::Port(_)
            | FormField::CustomPorts
            | FormField::RangeText
            | FormField::ScanOrder => FormSection::PortSpecification,
            FormField::Greppable | FormField::PostScan => FormSection::Output,
            FormField::Command => FormSection::GeneratedCommand,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Accessible | FormField::Greppable => FieldKind::Toggle,
            FormField::BatchSize | FormField::Timeout | FormField::Ulimit => FieldKind::Number,
            FormField::Port(_) => FieldKind::Radio,
            FormField::CustomPorts | FormField::RangeText => FieldKind::Text,
            FormField::ScanOrder | FormField::PostScan => FieldKind::Choice,
            FormField::Command => FieldKind::Command,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Accessible => "Accessible Mode",
            FormField::BatchSize => "Batch Size",
            FormField::Timeout => "Timeout (ms)",
            FormField::Ulimit => "Ulimit",
            FormField::Port(spec) => spec.label(),
            FormField::CustomPorts => "Ports",
            FormField::RangeText => "Range",
            FormField::ScanOrder => "Scan Order",
            FormField::Greppable => "Greppable Output",
            FormField::PostScan => "Nmap Script",
            FormField::Command => "Command",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FormField::Accessible => Some("Slower but more reliable scanning"),
            FormField::BatchSize => Some("Ports per batch (default: 4500)"),
            FormField::Timeout => Some("Response timeout (default: 1500ms)"),
            FormField::Ulimit => Some("Open files limit (default: 5000)"),
            FormField::Port(spec) => spec.description(),
            FormField::CustomPorts => Some("e.g., 80,443,8000-9000"),
            FormField::RangeText => Some("e.g., 1-1000"),
            FormField::PostScan => {
                Some("RustScan will automatically pass discovered ports to Nmap")
            }
            FormField::ScanOrder | FormField::Greppable | FormField::Command => None,
        }
    }

    /// Inclusive input bounds of numeric fields
    pub fn bounds(&self) -> Option<RangeInclusive<u32>> {
        match self {
            FormField::BatchSize => Some(BATCH_SIZE_BOUNDS),
            FormField::Timeout => Some(TIMEOUT_MS_BOUNDS),
            FormField::Ulimit => Some(ULIMIT_BOUNDS),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Changes
// ─────────────────────────────────────────────────────────────────────────────

/// A single-field configuration edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    Accessible(bool),
    BatchSize(u32),
    Timeout(u32),
    Ulimit(u32),
    PortSpec(PortSpec),
    CustomPorts(String),
    Range(String),
    ScanOrder(ScanOrder),
    Greppable(bool),
    PostScan(PostScanTool),
}

impl ConfigChange {
    /// Apply to `config`, clamping numbers to their input bounds
    pub fn apply(self, config: &mut ScanConfiguration) {
        match self {
            ConfigChange::Accessible(on) => config.accessible = on,
            ConfigChange::BatchSize(n) => config.batch_size = clamp(n, BATCH_SIZE_BOUNDS),
            ConfigChange::Timeout(n) => config.timeout_ms = clamp(n, TIMEOUT_MS_BOUNDS),
            ConfigChange::Ulimit(n) => config.ulimit = clamp(n, ULIMIT_BOUNDS),
            ConfigChange::PortSpec(spec) => config.port_spec = spec,
            ConfigChange::CustomPorts(text) => config.custom_ports = text,
            ConfigChange::Range(text) => config.range = text,
            ConfigChange::ScanOrder(order) => config.scan_order = order,
            ConfigChange::Greppable(on) => config.greppable = on,
            ConfigChange::PostScan(tool) => config.post_scan = tool,
        }
    }
}

fn clamp(value: u32, bounds: RangeInclusive<u32>) -> u32 {
    value.clamp(*bounds.start(), *bounds.end())
}

// ─────────────────────────────────────────────────────────────────────────────
// Field Editing
// ─────────────────────────────────────────────────────────────────────────────

/// In-progress edit of a numeric or text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: FormField,
    pub buffer: String,
    original: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Advance Mode State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AdvanceModeState {
    pub config: ScanConfiguration,
    pub command: EditableCommand,
    /// Index into [`FormField::ORDER`]
    pub selected: usize,
    pub edit: Option<FieldEdit>,
    pub copied: CopyFeedback,
    target: TargetSubscription,
    target_value: String,
}

impl AdvanceModeState {
    pub fn new(target: &SharedTarget) -> Self {
        let mut subscription = target.subscribe();
        let target_value = subscription.take();
        let config = ScanConfiguration::default();
        let command = EditableCommand::new(compile(&config, &target_value));
        Self {
            config,
            command,
            selected: 0,
            edit: None,
            copied: CopyFeedback::default(),
            target: subscription,
            target_value,
        }
    }

    pub fn selected_field(&self) -> FormField {
        FormField::ORDER[self.selected.min(FormField::ORDER.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FormField::ORDER.len();
    }

    pub fn select_previous(&mut self) {
        let len = FormField::ORDER.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Auxiliary text inputs only accept input while their radio is chosen
    pub fn is_field_enabled(&self, field: FormField) -> bool {
        match field {
            FormField::CustomPorts => self.config.port_spec == PortSpec::Custom,
            FormField::RangeText => self.config.port_spec == PortSpec::Range,
            _ => true,
        }
    }

    /// Apply one change and recompile
    pub fn apply(&mut self, change: ConfigChange) {
        change.apply(&mut self.config);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.command.refresh(compile(&self.config, &self.target_value));
    }

    /// Pull a new target value if the shared cell moved.
    /// Returns whether the command was recompiled.
    pub fn sync_target(&mut self) -> bool {
        if !self.target.has_changed() {
            return false;
        }
        self.target_value = self.target.take();
        self.recompute();
        true
    }

    /// Whether keystrokes currently go to a field or the command line
    pub fn is_editing(&self) -> bool {
        self.edit.is_some() || self.command.is_editing()
    }

    /// Text a copy writes
    pub fn copy_text(&self) -> &str {
        self.command.committed()
    }

    pub fn mark_copied(&mut self, now: Instant, duration: Duration) {
        self.copied.trigger(now, duration);
    }

    pub fn expire(&mut self, now: Instant) {
        self.copied.expire(now);
    }

    // ─────────────────────────────────────────────────────────
    // Activation
    // ─────────────────────────────────────────────────────────

    /// Space/Enter on the selected field
    pub fn activate(&mut self) {
        let field = self.selected_field();
        match field {
            FormField::Accessible => self.apply(ConfigChange::Accessible(!self.config.accessible)),
            FormField::Greppable => self.apply(ConfigChange::Greppable(!self.config.greppable)),
            FormField::Port(spec) => self.apply(ConfigChange::PortSpec(spec)),
            FormField::ScanOrder => {
                self.apply(ConfigChange::ScanOrder(self.config.scan_order.toggled()))
            }
            FormField::PostScan => self.apply(ConfigChange::PostScan(self.config.post_scan.next())),
            FormField::BatchSize
            | FormField::Timeout
            | FormField::Ulimit
            | FormField::CustomPorts
            | FormField::RangeText => self.begin_field_edit(),
            FormField::Command => self.command.begin_edit(),
        }
    }

    /// Left/Right on the selected field
    pub fn cycle(&mut self, forward: bool) {
        match self.selected_field() {
            FormField::ScanOrder => {
                self.apply(ConfigChange::ScanOrder(self.config.scan_order.toggled()))
            }
            FormField::PostScan => {
                let tool = if forward {
                    self.config.post_scan.next()
                } else {
                    self.config.post_scan.prev()
                };
                self.apply(ConfigChange::PostScan(tool));
            }
            FormField::Port(_) => {
                let all = PortSpec::ALL;
                let current = all
                    .iter()
                    .position(|s| *s == self.config.port_spec)
                    .unwrap_or(0);
                let next = if forward {
                    (current + 1) % all.len()
                } else {
                    (current + all.len() - 1) % all.len()
                };
                self.apply(ConfigChange::PortSpec(all[next]));
                self.selected = FormField::ORDER
                    .iter()
                    .position(|f| *f == FormField::Port(all[next]))
                    .unwrap_or(self.selected);
            }
            FormField::Accessible => self.apply(ConfigChange::Accessible(!self.config.accessible)),
            FormField::Greppable => self.apply(ConfigChange::Greppable(!self.config.greppable)),
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────
    // Numeric / Text Field Editing
    // ─────────────────────────────────────────────────────────

    fn begin_field_edit(&mut self) {
        let field = self.selected_field();
        if !self.is_field_enabled(field) {
            return;
        }
        let current = self.field_text(field);
        self.edit = Some(FieldEdit {
            field,
            buffer: current.clone(),
            original: current,
        });
    }

    /// Type into the field being edited. Numeric fields take digits only;
    /// text fields write through to the configuration on every keystroke.
    pub fn edit_push(&mut self, c: char) {
        let Some(edit) = self.edit.as_mut() else {
            return;
        };
        match edit.field.kind() {
            FieldKind::Number => {
                if c.is_ascii_digit() && edit.buffer.len() < MAX_NUMBER_DIGITS {
                    edit.buffer.push(c);
                }
            }
            FieldKind::Text => {
                if !c.is_control() {
                    edit.buffer.push(c);
                    self.write_through();
                }
            }
            _ => {}
        }
    }

    pub fn edit_pop(&mut self) {
        let Some(edit) = self.edit.as_mut() else {
            return;
        };
        edit.buffer.pop();
        if edit.field.kind() == FieldKind::Text {
            self.write_through();
        }
    }

    pub fn edit_clear(&mut self) {
        let Some(edit) = self.edit.as_mut() else {
            return;
        };
        edit.buffer.clear();
        if edit.field.kind() == FieldKind::Text {
            self.write_through();
        }
    }

    fn write_through(&mut self) {
        if let Some(change) = self.edit.as_ref().and_then(text_change) {
            self.apply(change);
        }
    }

    /// Finish the field edit. Numbers are clamped to their bounds; an empty
    /// buffer keeps the previous value.
    pub fn edit_commit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        match edit.field.kind() {
            FieldKind::Number => {
                let Ok(value) = edit.buffer.parse::<u32>() else {
                    return;
                };
                let change = match edit.field {
                    FormField::BatchSize => ConfigChange::BatchSize(value),
                    FormField::Timeout => ConfigChange::Timeout(value),
                    FormField::Ulimit => ConfigChange::Ulimit(value),
                    _ => return,
                };
                self.apply(change);
            }
            FieldKind::Text => {
                if let Some(change) = text_change(&edit) {
                    self.apply(change);
                }
            }
            _ => {}
        }
    }

    /// Abandon the field edit, restoring text fields to their previous value
    pub fn edit_cancel(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        match edit.field {
            FormField::CustomPorts => self.apply(ConfigChange::CustomPorts(edit.original)),
            FormField::RangeText => self.apply(ConfigChange::Range(edit.original)),
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────
    // Display Helpers
    // ─────────────────────────────────────────────────────────

    /// Current text of a numeric or text field
    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::BatchSize => self.config.batch_size.to_string(),
            FormField::Timeout => self.config.timeout_ms.to_string(),
            FormField::Ulimit => self.config.ulimit.to_string(),
            FormField::CustomPorts => self.config.custom_ports.clone(),
            FormField::RangeText => self.config.range.clone(),
            FormField::ScanOrder => self.config.scan_order.label().to_string(),
            FormField::PostScan => self.config.post_scan.label().to_string(),
            FormField::Command => self.command.displayed().to_string(),
            FormField::Accessible | FormField::Greppable | FormField::Port(_) => String::new(),
        }
    }

    /// Whether a toggle or radio row is checked
    pub fn is_checked(&self, field: FormField) -> bool {
        match field {
            FormField::Accessible => self.config.accessible,
            FormField::Greppable => self.config.greppable,
            FormField::Port(spec) => self.config.port_spec == spec,
            _ => false,
        }
    }

    /// Whether the field's text fails the expected port pattern
    pub fn looks_malformed(&self, field: FormField) -> bool {
        match field {
            FormField::CustomPorts => !custom_ports_well_formed(&self.config.custom_ports),
            FormField::RangeText => !range_well_formed(&self.config.range),
            _ => false,
        }
    }
}

fn text_change(edit: &FieldEdit) -> Option<ConfigChange> {
    match edit.field {
        FormField::CustomPorts => Some(ConfigChange::CustomPorts(edit.buffer.clone())),
        FormField::RangeText => Some(ConfigChange::Range(edit.buffer.clone())),
        _ => None,
    }
}
