//! Text shared by the interactive and plain front ends. Colors are assigned by
//! the front ends from [`Tone`].

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::forecast::{Forecast, Hour};

/// Hours at or above this chance of rain are highlighted as wet.
pub const RAIN_THRESHOLD: f64 = 40.0;

pub const QUESTION: &str = "What's your current location?";
pub const QUIT_HINT: &str = "(esc to quit)";

const MISSING_TIME: &str = "--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Dry,
    Wet,
}

impl Tone {
    pub fn for_rain(chance_of_rain: f64) -> Self {
        if chance_of_rain < RAIN_THRESHOLD {
            Tone::Dry
        } else {
            Tone::Wet
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourLine {
    pub tone: Tone,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub header: String,
    pub hours: Vec<HourLine>,
}

impl Report {
    /// Every hour of the day is listed, including ones already past.
    pub fn new<Tz>(forecast: &Forecast, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            header: header(forecast),
            hours: forecast
                .hourly
                .iter()
                .map(|hour| HourLine {
                    tone: Tone::for_rain(hour.chance_of_rain),
                    text: hour_line(hour, tz),
                })
                .collect(),
        }
    }
}

pub fn header(forecast: &Forecast) -> String {
    format!(
        "{}, {}: {:.0}C, {}",
        forecast.location.name,
        forecast.location.country,
        forecast.current.temp_c,
        forecast.current.condition
    )
}

pub fn hour_line<Tz>(hour: &Hour, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} - {:.0}C, {:.0}%, {}",
        clock(hour.time_epoch, tz),
        hour.temp_c,
        hour.chance_of_rain,
        hour.condition
    )
}

/// `HH:MM` of an epoch timestamp in `tz`.
pub fn clock<Tz>(time_epoch: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp(time_epoch, 0) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M").to_string(),
        None => MISSING_TIME.to_string(),
    }
}
