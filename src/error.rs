use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load .env file: {0}")]
    Config(#[source] dotenvy::Error),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("the weather service rejected the request")]
    Status(StatusCode),

    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("invalid forecast JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response contained no forecast day")]
    NoForecastDay,

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
