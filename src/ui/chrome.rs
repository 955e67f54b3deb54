//! Title bar and key-hint bar around the demo panels.

use crate::ui::app::Demo;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ");

/// Per-demo text shown above and below the panels.
struct Chrome {
    title: &'static str,
    detail: String,
    keys: &'static [(&'static str, &'static str)],
}

impl Chrome {
    fn of(demo: &Demo) -> Self {
        match demo {
            Demo::Counter(_) => Chrome {
                title: "Counter",
                detail: "child recomputes on every parent change".to_string(),
                keys: &[("i/+", "Increment"), ("t/Space", "Toggle"), ("q/Esc", "Quit")],
            },
            Demo::Face(face) => Chrome {
                title: "Satisfaction face",
                detail: format!("variant: {}", face.variant()),
                keys: &[
                    ("←/→", "Step"),
                    ("PgUp/PgDn", "Jump"),
                    ("Home/End", "0/500"),
                    ("q/Esc", "Quit"),
                ],
            },
        }
    }

    fn hints(&self) -> Line<'static> {
        let key_style = Style::default().fg(HEADER_TEXT);
        let sep_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", sep_style));
            }
            spans.push(Span::styled(*key, key_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(": {action}"), key_style));
        }
        Line::from(spans)
    }
}

pub fn draw_header(frame: &mut Frame<'_>, demo: &Demo, area: Rect) {
    let chrome = Chrome::of(demo);
    let text = Style::default().fg(HEADER_TEXT);
    let sep = Style::default().fg(HEADER_SEPARATOR);

    let line = Line::from(vec![
        Span::styled("  rerender-lab", text),
        Span::styled("  │  ", sep),
        Span::styled(
            chrome.title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", sep),
        Span::styled(chrome.detail, text),
    ]);
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Key hints on the left, crate version pinned to the right edge.
pub fn draw_footer(frame: &mut Frame<'_>, demo: &Demo, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [hints_area, version_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(VERSION.len() as u16)])
            .areas(inner);

    let dim = Style::default().add_modifier(Modifier::DIM);
    frame.render_widget(
        Paragraph::new(Chrome::of(demo).hints()).style(dim),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(VERSION)
            .style(dim.fg(HEADER_TEXT))
            .alignment(Alignment::Right),
        version_area,
    );
}
