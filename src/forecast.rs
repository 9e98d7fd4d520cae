/// Where the forecast was resolved to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Current {
    pub temp_c: f64,
    pub condition: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hour {
    /// Seconds since the Unix epoch.
    pub time_epoch: i64,
    pub temp_c: f64,
    pub condition: String,
    /// Percentage, 0 to 100.
    pub chance_of_rain: f64,
}

/// One decoded forecast for a single query. Never mutated after decoding; a
/// new query produces a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    pub location: Location,
    pub current: Current,
    pub hourly: Vec<Hour>,
}
