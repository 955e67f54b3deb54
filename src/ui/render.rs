use crate::demo::counter::CounterDemo;
use crate::demo::face::{FaceDemo, FaceVariant};
use crate::demo::render_log::{RenderKind, RenderLog};
use crate::demo::satisfaction::MAX_LEVEL;
use crate::ui::app::{App, Demo};
use crate::ui::chrome::{draw_footer, draw_header};
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    class_color, ACCENT, BUTTON_BG, GLOBAL_BORDER, HEADER_TEXT, LOG_EXPENSIVE, LOG_FACE,
    MUTED_TEXT,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    draw_header(frame, app.demo(), header);
    frame.render_widget(Clear, body);

    let (demo_area, log_area) = split_body(body);
    match app.demo() {
        Demo::Counter(demo) => draw_counter(frame, demo, demo_area),
        Demo::Face(demo) => draw_face(frame, demo, demo_area),
    }
    draw_render_log(frame, app.render_log(), log_area);

    draw_footer(frame, app.demo(), footer);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn button(label: &str) -> Span<'_> {
    Span::styled(
        format!("[ {label} ]"),
        Style::default().fg(HEADER_TEXT).bg(BUTTON_BG),
    )
}

fn draw_counter(frame: &mut Frame<'_>, demo: &CounterDemo, area: Rect) {
    let state = demo.state();
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            button("i: Increment"),
            Span::raw("  "),
            button("t: Toggle"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" count: ", muted),
            Span::styled(state.count.to_string(), text_style),
            Span::styled("   toggle: ", muted),
            Span::styled(if state.toggled { "on" } else { "off" }, text_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Computed Value: ", text_style),
            Span::styled(
                demo.computed().0.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Toggling changes nothing the child uses, yet it recomputes.",
            muted,
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel("Counter")), area);
}

fn draw_face(frame: &mut Frame<'_>, demo: &FaceDemo, area: Rect) {
    let block = panel("Satisfaction");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let level = demo.level();
    let ratio = level.value() as f64 / MAX_LEVEL as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(BUTTON_BG))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{} / {}", level, MAX_LEVEL));
    frame.render_widget(gauge, rows[1]);

    let view = demo.view();
    let face_style = Style::default()
        .fg(class_color(view.class))
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(view.class.face(), face_style),
            Span::raw("  "),
            Span::styled(view.class.as_str(), face_style),
        ]),
        Line::from(""),
    ];
    match demo.variant() {
        FaceVariant::Skip => {
            lines.push(Line::from(Span::styled(
                format!(" rendered for level {}", view.level),
                muted,
            )));
            lines.push(Line::from(Span::styled(
                format!(" skipped renders: {}", demo.skipped()),
                muted,
            )));
            lines.push(Line::from(Span::styled(
                " Skips renders while the class is unchanged.",
                muted,
            )));
        }
        FaceVariant::NoSkip => {
            lines.push(Line::from(Span::styled(
                " Renders on every slider change.",
                muted,
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), rows[3]);
}

fn draw_render_log(frame: &mut Frame<'_>, log: &RenderLog, area: Rect) {
    let title = format!(" Render log ({} renders) ", log.total());
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = log
        .tail(visible)
        .into_iter()
        .map(|event| {
            let color = match event.kind {
                RenderKind::ExpensiveComputation => LOG_EXPENSIVE,
                RenderKind::FaceRerender => LOG_FACE,
            };
            Line::from(vec![
                Span::styled(format!("{:>4} ", event.seq), Style::default().fg(MUTED_TEXT)),
                Span::styled(event.message, Style::default().fg(color)),
                Span::styled(format!("  {}", event.detail), Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(panel(&title)), area);
}
