//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use scancmd_app::advance_mode::FormField;
use scancmd_app::config::ModeTab;
use scancmd_app::state::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::icons::IconSet;

/// Height of the generated command block
const COMMAND_LINE_HEIGHT: u16 = 3;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(state.active_tab, icons),
        areas.header,
    );

    let target = state.target.get();
    frame.render_widget(
        widgets::TargetInput::new(&target, state.address_family, icons)
            .focused(state.focus == Focus::Target)
            .copied(state.target_copied.is_active()),
        areas.target,
    );

    let body_focused = state.focus == Focus::Body;
    match state.active_tab {
        ModeTab::Simple => {
            frame.render_widget(
                widgets::PresetList::new(&state.simple, &target, icons)
                    .focused(body_focused)
                    .show_tips(state.settings.ui.show_tips),
                areas.body,
            );
        }
        ModeTab::Advance => render_advance(frame, state, areas.body, icons),
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    if let Some(notification) = &state.notification {
        let toast = widgets::Toast::new(&notification.message, icons);
        let toast_area = layout::toast_area(area, toast.width());
        frame.render_widget(toast, toast_area);
    }
}

fn render_advance(frame: &mut Frame, state: &AppState, area: Rect, icons: IconSet) {
    let focused = state.focus == Focus::Body;
    let chunks =
        Layout::vertical([Constraint::Min(3), Constraint::Length(COMMAND_LINE_HEIGHT)]).split(area);

    frame.render_widget(
        widgets::ScanForm::new(&state.advance, icons).focused(focused),
        chunks[0],
    );

    let command_selected = focused && state.advance.selected_field() == FormField::Command;
    frame.render_widget(
        widgets::CommandLine::new(&state.advance.command, icons)
            .selected(command_selected)
            .copied(state.advance.copied.is_active()),
        chunks[1],
    );
}
