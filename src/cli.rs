use std::{env, io};

use chrono::{NaiveDate, Utc};

use datepick::{
    config::Config,
    picker::{DatePicker, DayCell, EpochUnit, PickerInputs, Snapshot},
};

#[derive(Clone, PartialEq)]
pub enum CliMode {
    Tui {
        epoch: Option<i64>,
        theme: Option<String>,
        millis: bool,
    },
    Grid {
        month: Option<(i32, u32)>,
        json: bool,
        millis: bool,
    },
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let mut grid = false;
    let mut month = None;
    let mut json = false;
    let mut epoch = None;
    let mut theme = None;
    let mut millis = false;
    let mut args = env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--grid" => {
                grid = true;
                if let Some(next) = args.peek()
                    && !next.starts_with("--")
                {
                    let month_str = args.next().expect("peeked value must exist");
                    month = Some(parse_month_arg(&month_str)?);
                }
            }
            "--json" => {
                json = true;
            }
            "--millis" => {
                millis = true;
            }
            "--epoch" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--epoch requires a value".to_string())?;
                let parsed = value
                    .parse::<i64>()
                    .map_err(|_| format!("Invalid epoch '{}'. Use an integer.", value))?;
                epoch = Some(parsed);
            }
            "--theme" => {
                theme = args
                    .next()
                    .ok_or_else(|| "--theme requires a name".to_string())
                    .map(Some)?;
            }
            "--help" => {
                println!("Usage: datepick [--grid [YYYY/MM]] [--json] [--millis] [--epoch N] [--theme NAME]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if grid {
        Ok(CliMode::Grid { month, json, millis })
    } else {
        Ok(CliMode::Tui { epoch, theme, millis })
    }
}

fn parse_month_arg(value: &str) -> Result<(i32, u32), String> {
    let invalid = || format!("Invalid month '{}'. Use YYYY/MM.", value);

    let (year_str, month_str) = value.split_once('/').ok_or_else(invalid)?;
    let year = year_str.parse::<i32>().map_err(|_| invalid())?;
    let month = month_str.parse::<u32>().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    Ok((year, month))
}

pub fn run_grid_mode(month: Option<(i32, u32)>, json: bool, millis: bool) -> Result<(), io::Error> {
    let config = Config::load_or_create().map_err(|e| io::Error::other(e.to_string()))?;
    let unit = if millis {
        EpochUnit::Milliseconds
    } else {
        config.time.unit
    };

    let viewed_month_epoch = month
        .map(|(year, month)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .ok_or_else(|| io::Error::other(format!("invalid month {}/{}", year, month)))?;
            Ok::<i64, io::Error>(unit.from_instant(first.and_utc()))
        })
        .transpose()?;

    let picker = DatePicker::new(PickerInputs {
        selected_epoch: unit.from_instant(Utc::now()),
        viewed_month_epoch,
        min_epoch: config.time.min_epoch,
        max_epoch: config.time.max_epoch,
        unit,
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

    let snapshot = picker.rebuild().map_err(|e| io::Error::other(e.to_string()))?;

    if json {
        let payload = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", payload);
    } else {
        print!("{}", format_grid_text(&snapshot));
    }
    Ok(())
}

fn format_grid_text(snapshot: &Snapshot) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{:^28}", snapshot.labels.month_year));
    lines.push(" Sun Mon Tue Wed Thu Fri Sat".to_string());

    for week in &snapshot.grid.weeks {
        let mut line = String::new();
        for cell in &week.days {
            match cell {
                DayCell::Empty => line.push_str("    "),
                DayCell::Day(day) if day.is_current_day => {
                    line.push_str(&format!("[{:>2}]", day.day_of_month));
                }
                DayCell::Day(day) if day.is_disabled => {
                    line.push_str(&format!("({:>2})", day.day_of_month));
                }
                DayCell::Day(day) => {
                    line.push_str(&format!(" {:>2} ", day.day_of_month));
                }
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("[d] selected day   (d) outside bounds".to_string());
    lines.join("\n") + "\n"
}
