//! Titled dashboard panel
//!
//! Renders a slot's content inside a bordered card. Every content state
//! (empty, loading, ready, failed) draws into the same area.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use mycodo_app::{PanelBody, PanelContent, PanelSlot, Reading};
use mycodo_core::GaugeSpec;

use crate::theme::{palette, styles};

pub struct Panel<'a> {
    slot: &'a PanelSlot,
}

impl<'a> Panel<'a> {
    pub fn new(slot: &'a PanelSlot) -> Self {
        Self { slot }
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block().title(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.slot.title(), styles::heading()),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match &self.slot.content {
            PanelContent::Empty => {}
            PanelContent::Loading => {
                Paragraph::new(Span::styled("Loading…", styles::text_muted())).render(inner, buf);
            }
            PanelContent::Failed(message) => {
                Paragraph::new(Line::from(vec![
                    Span::styled("Error: ", styles::status_red()),
                    Span::styled(message.as_str(), styles::text_secondary()),
                ]))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            }
            PanelContent::Ready(PanelBody::Text(lines)) => {
                let lines: Vec<Line> = lines
                    .iter()
                    .map(|l| Line::styled(l.as_str(), styles::text_primary()))
                    .collect();
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            PanelContent::Ready(PanelBody::Readings(readings)) => {
                render_readings(readings, inner, buf);
            }
            PanelContent::Ready(PanelBody::Gauge(gauge)) => {
                render_gauge(gauge, inner, buf);
            }
        }
    }
}

/// Label on the left, value right-aligned, one reading per row
fn render_readings(readings: &[Reading], area: Rect, buf: &mut Buffer) {
    let width = area.width as usize;
    for (row, reading) in readings.iter().take(area.height as usize).enumerate() {
        let value = reading.display_value();
        let value_width = value.width();
        let label_room = width.saturating_sub(value_width + 1);
        let label = truncate_to_width(&reading.label, label_room);
        let padding = width.saturating_sub(label.width() + value_width);

        let line = Line::from(vec![
            Span::styled(label, styles::text_secondary()),
            Span::raw(" ".repeat(padding)),
            Span::styled(value, styles::text_primary()),
        ]);
        buf.set_line(area.x, area.y + row as u16, &line, area.width);
    }
}

/// Label row, gauge bar in the active band's color, then the band legend
fn render_gauge(gauge: &GaugeSpec, area: Rect, buf: &mut Buffer) {
    let [label_area, bar_area, legend_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    Line::styled(gauge.label.as_str(), styles::text_secondary()).render(label_area, buf);

    let value_label = match gauge.value {
        Some(v) if gauge.unit.is_empty() => format!("{v:.1}"),
        Some(v) => format!("{v:.1} {}", gauge.unit),
        None => "—".to_string(),
    };
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(styles::stop_color(gauge.active_stop()))
                .bg(palette::GAUGE_TRACK),
        )
        .ratio(gauge.ratio())
        .label(Span::styled(value_label, styles::heading()))
        .render(bar_area, buf);

    let mut legend = Vec::new();
    for stop in &gauge.stops {
        legend.push(Span::styled(
            "■ ",
            Style::default().fg(styles::stop_color(Some(stop))),
        ));
        legend.push(Span::styled(
            format!("{}-{}  ", stop.low, stop.high),
            styles::text_muted(),
        ));
    }
    Line::from(legend).render(legend_area, buf);
}

/// Cut `text` so it occupies at most `max` columns, marking the cut with `…`
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
