use serde::Deserialize;

/// One observation from the provider, flattened for composing a reply.
/// Every field is optional: upstream payloads are frequently partial.
#[derive(Debug, Clone)]
pub struct WeatherObservation {
    /// City as the user typed it, kept for display.
    pub city: String,
    pub condition: Option<String>,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u32>,
    pub pressure: Option<u32>,
    pub wind_speed: Option<f64>,
    /// Unix timestamps.
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// Wire structs for the OpenWeatherMap current-weather endpoint. Only the
// fields we read are declared.

#[derive(Debug, Deserialize)]
pub(super) struct OwmResponse {
    #[serde(default)]
    pub weather: Vec<OwmCondition>,
    #[serde(default)]
    pub main: Option<OwmMain>,
    #[serde(default)]
    pub wind: Option<OwmWind>,
    #[serde(default)]
    pub sys: Option<OwmSys>,
    #[serde(default)]
    pub coord: Option<OwmCoord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmCondition {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u32>,
    pub pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmWind {
    pub speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmSys {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OwmCoord {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl WeatherObservation {
    pub(super) fn from_provider(city: &str, data: OwmResponse) -> Self {
        let condition = data
            .weather
            .into_iter()
            .next()
            .and_then(|c| c.description);
        let main = data.main;
        let sys = data.sys;
        let coord = data.coord;

        Self {
            city: city.to_string(),
            condition,
            temperature: main.as_ref().and_then(|m| m.temp),
            feels_like: main.as_ref().and_then(|m| m.feels_like),
            humidity: main.as_ref().and_then(|m| m.humidity),
            pressure: main.as_ref().and_then(|m| m.pressure),
            wind_speed: data.wind.and_then(|w| w.speed),
            sunrise: sys.as_ref().and_then(|s| s.sunrise),
            sunset: sys.as_ref().and_then(|s| s.sunset),
            latitude: coord.as_ref().and_then(|c| c.lat),
            longitude: coord.as_ref().and_then(|c| c.lon),
        }
    }
}
