use log::debug;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::forecast::{Current, Forecast, Hour, Location};

const BASE_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

/// Queried when the user submits an empty location.
pub const DEFAULT_LOCATION: &str = "Lima";

const FORECAST_DAYS: &str = "1";

mod wire {
    use super::*;

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Response {
        pub location: Location,
        pub current: Current,
        pub forecast: Forecast,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Location {
        pub name: String,
        pub country: String,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Condition {
        pub text: String,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Current {
        pub temp_c: f64,
        pub condition: Condition,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Forecast {
        #[serde(rename = "forecastday")]
        pub days: Vec<Day>,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Day {
        pub hour: Vec<Hour>,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Hour {
        pub time_epoch: i64,
        pub temp_c: f64,
        pub condition: Condition,
        pub chance_of_rain: f64,
    }
}

impl TryFrom<wire::Response> for Forecast {
    type Error = Error;

    fn try_from(response: wire::Response) -> Result<Self> {
        // Only the first day is ever requested.
        let day = response
            .forecast
            .days
            .into_iter()
            .next()
            .ok_or(Error::NoForecastDay)?;

        let hourly = day
            .hour
            .into_iter()
            .map(|h| Hour {
                time_epoch: h.time_epoch,
                temp_c: h.temp_c,
                condition: h.condition.text,
                chance_of_rain: h.chance_of_rain,
            })
            .collect();

        Ok(Forecast {
            location: Location {
                name: response.location.name,
                country: response.location.country,
            },
            current: Current {
                temp_c: response.current.temp_c,
                condition: response.current.condition.text,
            },
            hourly,
        })
    }
}

/// Substitutes [`DEFAULT_LOCATION`] for blank input.
pub fn resolve_location(input: &str) -> &str {
    let input = input.trim();
    if input.is_empty() {
        DEFAULT_LOCATION
    } else {
        input
    }
}

/// Decodes a forecast.json body. Unknown fields are ignored and missing ones
/// fall back to zero values.
pub fn decode(body: &str) -> Result<Forecast> {
    let response: wire::Response = serde_json::from_str(body).map_err(Error::Decode)?;
    Forecast::try_from(response)
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("weathercast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: BASE_URL.to_string(),
            http,
        })
    }

    /// Builds the GET request for `location` without sending it.
    pub fn request(&self, location: &str) -> Result<Request> {
        self.http
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", resolve_location(location)),
                ("days", FORECAST_DAYS),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .build()
            .map_err(Error::Network)
    }

    /// Issues exactly one blocking request. Anything but a 200 is an error and
    /// the body is left unread.
    pub fn fetch_forecast(&self, location: &str) -> Result<Forecast> {
        let request = self.request(location)?;
        debug!("fetching forecast for {:?}", resolve_location(location));

        let response = self.http.execute(request).map_err(Error::Network)?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!("weather service answered {status}");
            return Err(Error::Status(status));
        }

        let body = response.text().map_err(Error::Body)?;
        debug!("received {} bytes", body.len());
        decode(&body)
    }
}
