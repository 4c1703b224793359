use std::io;

use chrono::Utc;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use datepick::{
    config::Config,
    picker::{ActiveSegment, DatePicker, EpochUnit, PickerInputs},
};

use crate::tui::{app::AppState, presentation::ui, theme::Theme};

pub fn run_tui(
    epoch: Option<i64>,
    theme_override: Option<String>,
    millis: bool,
) -> Result<(), io::Error> {
    let config = Config::load_or_create().map_err(|e| io::Error::other(e.to_string()))?;
    let unit = if millis {
        EpochUnit::Milliseconds
    } else {
        config.time.unit
    };
    let selected_epoch = epoch.unwrap_or_else(|| unit.from_instant(Utc::now()));

    let picker = DatePicker::new(PickerInputs {
        selected_epoch,
        viewed_month_epoch: None,
        min_epoch: config.time.min_epoch,
        max_epoch: config.time.max_epoch,
        unit,
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

    let theme_name = theme_override.unwrap_or(config.ui.theme);
    let mut app = AppState::new(picker, Theme::get_by_name(&theme_name))
        .map_err(|e| io::Error::other(e.to_string()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if app.show_help {
                handle_help_keys(key.code, app);
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                _ => handle_key(key.code, app),
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?')) {
        app.show_help = false;
    }
}

fn handle_key(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(1),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(7),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-7),
        KeyCode::Char('{') => app.shift_month(-1),
        KeyCode::Char('}') => app.shift_month(1),
        KeyCode::Enter => app.select_under_cursor(),
        KeyCode::Char('t') => app.reset_view(),
        KeyCode::Char('d') => app.set_segment(ActiveSegment::Day),
        KeyCode::Char('m') => app.set_segment(ActiveSegment::Month),
        KeyCode::Char('y') => app.set_segment(ActiveSegment::Year),
        KeyCode::Char('u') => app.set_segment(ActiveSegment::MonthYear),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}
