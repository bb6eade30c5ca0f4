use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// City selected when a screen is first opened.
pub const DEFAULT_CITY: &str = "Toronto";

/// Weather codes at or above this value are reported as cloudy.
pub const CLOUDY_CODE_THRESHOLD: i64 = 3;

/// Envelope returned by the provider for `current_weather=true` requests.
#[derive(Debug, Deserialize)]
pub struct RawWeatherEnvelope {
    pub current_weather: RawWeatherResponse,
}

/// Wire-level current weather block. Extra fields sent by the provider are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawWeatherResponse {
    pub temperature: f64,
    #[serde(rename = "weathercode", deserialize_with = "integral_code")]
    pub weather_code: i64,
}

/// Accepts any JSON number with no fractional part, so `3` and `3.0` both parse.
fn integral_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value.fract() == 0.0 {
        Ok(value as i64)
    } else {
        Err(D::Error::custom(format!("weathercode {value} is not an integer")))
    }
}

/// Flat response record handed out by the API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponseRecord {
    pub temperature: f64,
    pub condition: String,
}

impl From<RawWeatherResponse> for WeatherResponseRecord {
    fn from(raw: RawWeatherResponse) -> Self {
        Self {
            temperature: raw.temperature,
            condition: condition_for_code(raw.weather_code).to_string(),
        }
    }
}

/// Two-bucket classification of provider weather codes.
pub fn condition_for_code(code: i64) -> &'static str {
    if code >= CLOUDY_CODE_THRESHOLD { "Cloudy" } else { "Clear" }
}

/// Domain weather value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature_celsius: f64,
    pub description: String,
}

/// Display-ready strings for a [`Weather`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherViewData {
    pub display_temp: String,
    pub display_condition: String,
}

/// Everything the weather screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    pub city: String,
    pub weather_view_data: Option<WeatherViewData>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl PresentationState {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            weather_view_data: None,
            is_loading: false,
            error_message: None,
        }
    }
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
