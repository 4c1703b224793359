use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use datepick::picker::{ActiveSegment, DayCell};

use crate::tui::app::AppState;

pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_status(f, app, chunks[2]);

    if app.show_help {
        render_help(f, app);
    }
}

fn segment_style(app: &AppState, segment: ActiveSegment) -> Style {
    if app.snapshot.active_segment == segment {
        Style::default()
            .fg(app.theme.active_segment)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(app.theme.title)
    }
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let labels = &app.snapshot.labels;

    let lines = vec![
        Line::from(Span::styled(
            labels.day_of_week.clone(),
            segment_style(app, ActiveSegment::Day),
        )),
        Line::from(vec![
            Span::styled(labels.month.clone(), segment_style(app, ActiveSegment::Month)),
            Span::raw(" "),
            Span::styled(labels.day.clone(), segment_style(app, ActiveSegment::Day)),
            Span::raw(" "),
            Span::styled(labels.year.clone(), segment_style(app, ActiveSegment::Year)),
        ]),
        Line::from(vec![
            Span::raw("‹ "),
            Span::styled(
                labels.month_year.clone(),
                segment_style(app, ActiveSegment::MonthYear),
            ),
            Span::raw(" ›"),
        ]),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = vec![
        Line::from(
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                .iter()
                .map(|name| {
                    Span::styled(
                        format!(" {}  ", name),
                        Style::default().fg(app.theme.weekday_header),
                    )
                })
                .collect::<Vec<Span>>(),
        ),
        Line::from(""),
    ];

    for (row, week) in app.snapshot.grid.weeks.iter().enumerate() {
        let mut spans = Vec::new();

        for (col, cell) in week.days.iter().enumerate() {
            let under_cursor = row * 7 + col == app.cursor;

            let text = match cell {
                DayCell::Empty => "      ".to_string(),
                DayCell::Day(day) => format!("  {:>2}  ", day.day_of_month),
            };

            let mut style = Style::default();
            if let DayCell::Day(day) = cell {
                if day.is_disabled {
                    style = style.fg(app.theme.disabled_day);
                } else if day.is_current_day {
                    style = style.fg(app.theme.current_day).add_modifier(Modifier::BOLD);
                }
            }
            if under_cursor {
                style = style
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD);
            }

            spans.push(Span::styled(text, style));
        }

        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(grid, area);
}

fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let (text, color) = match &app.status {
        Some(message) => (message.clone(), app.theme.error),
        None => (
            "hjkl = Move | { } = Month | Enter = Select | t = Selection | d/m/y/u = Segment | ? = Help | q = Quit"
                .to_string(),
            app.theme.status_bar,
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 52;
    let help_height = 15;
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "datepick Help",
            Style::default()
                .fg(app.theme.help_title)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation:",
            Style::default().fg(app.theme.help_section),
        )]),
        Line::from("  h/l      - Previous/next cell"),
        Line::from("  j/k      - Next/previous week"),
        Line::from("  { / }    - Previous/next month"),
        Line::from("  t        - Back to the selected month"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Selection & header:",
            Style::default().fg(app.theme.help_section),
        )]),
        Line::from("  Enter    - Select the day under the cursor"),
        Line::from("  d/m/y/u  - Highlight day/month/year/month-year"),
        Line::from(""),
        Line::from("  q/Esc    - Close help / quit"),
    ];

    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, help_area);
}
