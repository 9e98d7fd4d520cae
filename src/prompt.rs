use std::io::{BufRead, Write};

use chrono::Local;
use crossterm::style::Stylize;

use crate::error::Result;
use crate::forecast::Forecast;
use crate::view::{Report, Tone, QUESTION};

/// Asks once on `input`, fetches, prints the report to `out`.
pub fn run<R, W, F>(mut input: R, mut out: W, fetch: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&str) -> Result<Forecast>,
{
    write!(out, "{QUESTION} ")?;
    out.flush()?;

    let mut location = String::new();
    input.read_line(&mut location)?;

    let forecast = fetch(location.trim_end_matches(['\r', '\n']))?;
    print_report(&mut out, &Report::new(&forecast, &Local))?;
    Ok(())
}

pub fn print_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", report.header.as_str().green())?;
    for hour in &report.hours {
        let text = hour.text.as_str();
        match hour.tone {
            Tone::Dry => writeln!(out, "{}", text.blue())?,
            Tone::Wet => writeln!(out, "{}", text.red())?,
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::forecast::{Current, Hour, Location};
    use crate::view::HourLine;
    use std::io::Cursor;

    fn forecast() -> Forecast {
        Forecast {
            location: Location {
                name: "Lima".to_string(),
                country: "Peru".to_string(),
            },
            current: Current {
                temp_c: 21.2,
                condition: "Overcast".to_string(),
            },
            hourly: vec![Hour {
                time_epoch: 1711897200,
                temp_c: 19.0,
                condition: "Mist".to_string(),
                chance_of_rain: 10.0,
            }],
        }
    }

    #[test]
    fn reads_one_line_and_prints_report() {
        let mut out = Vec::new();
        let mut asked = String::new();
        run(Cursor::new("Tokyo\r\n"), &mut out, |location| {
            asked = location.to_string();
            Ok(forecast())
        })
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(asked, "Tokyo");
        assert!(out.starts_with("What's your current location? "));
        assert!(out.contains("Lima, Peru: 21C, Overcast"));
        assert!(out.contains("19C, 10%, Mist"));
    }

    #[test]
    fn empty_answer_is_passed_through() {
        let mut asked = None;
        run(Cursor::new(""), Vec::new(), |location| {
            asked = Some(location.to_string());
            Ok(forecast())
        })
        .unwrap();
        assert_eq!(asked.as_deref(), Some(""));
    }

    #[test]
    fn fetch_failure_prints_nothing_more() {
        let mut out = Vec::new();
        let err = run(Cursor::new("Atlantis\n"), &mut out, |_| {
            Err(Error::NoForecastDay)
        })
        .unwrap_err();
        assert!(matches!(err, Error::NoForecastDay));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "What's your current location? "
        );
    }

    #[test]
    fn hours_are_colored_by_tone() {
        let report = Report {
            header: "Lima, Peru: 21C, Overcast".to_string(),
            hours: vec![
                HourLine {
                    tone: Tone::Dry,
                    text: "09:00 - 19C, 39%, Mist".to_string(),
                },
                HourLine {
                    tone: Tone::Wet,
                    text: "10:00 - 19C, 40%, Light drizzle".to_string(),
                },
            ],
        };
        let mut out = Vec::new();
        print_report(&mut out, &report).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(&format!("{}", "09:00 - 19C, 39%, Mist".blue())));
        assert!(out.contains(&format!("{}", "10:00 - 19C, 40%, Light drizzle".red())));
    }
}
