//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mycodo_app::AppState;
use mycodo_core::{logging, Page};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Chrome first, then whatever page the content region resolved to. An
/// unmatched path leaves the container blank.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(
        widgets::Navbar::new(state.chrome()).focus(state.nav_focus),
        areas.navbar,
    );

    let container = layout::content_container(areas.content, state.settings.ui.max_content_width);
    if container.is_empty() {
        return;
    }

    let content = state.content();
    match content.page {
        Some(Page::Dashboard) => {
            frame.render_widget(widgets::Dashboard::new(&state.panels), container);
        }
        Some(Page::Settings) => {
            let page = widgets::SettingsPage::new(state.chrome(), &state.routes)
                .config_path(state.settings.source.clone())
                .log_path(logging::get_current_log_file());
            frame.render_widget(page, container);
        }
        Some(Page::NotFound) => {
            frame.render_widget(widgets::NotFound::new(&content.path), container);
        }
        None => {}
    }
}
