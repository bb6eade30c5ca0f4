use crate::model::{Weather, WeatherResponseRecord, WeatherViewData};

pub fn map_to_domain(record: &WeatherResponseRecord) -> Weather {
    Weather {
        temperature_celsius: record.temperature,
        description: record.condition.clone(),
    }
}

/// Temperatures are truncated toward zero before display.
pub fn map_to_view_data(weather: &Weather) -> WeatherViewData {
    let whole_degrees = weather.temperature_celsius.trunc() as i64;

    WeatherViewData {
        display_temp: format!("{whole_degrees}°C"),
        display_condition: weather.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temperature_celsius: f64, description: &str) -> Weather {
        Weather {
            temperature_celsius,
            description: description.to_string(),
        }
    }

    #[test]
    fn record_fields_carry_over_to_domain() {
        let record = WeatherResponseRecord {
            temperature: 15.5,
            condition: "Cloudy".to_string(),
        };

        assert_eq!(map_to_domain(&record), weather(15.5, "Cloudy"));
    }

    #[test]
    fn display_temp_truncates_toward_zero() {
        let cases = [
            (24.9, "24°C"),
            (24.1, "24°C"),
            (0.0, "0°C"),
            (-0.5, "0°C"),
            (-1.5, "-1°C"),
            (-12.99, "-12°C"),
        ];

        for (celsius, expected) in cases {
            let view = map_to_view_data(&weather(celsius, "Clear"));
            assert_eq!(view.display_temp, expected, "{celsius}");
        }
    }

    #[test]
    fn description_is_echoed_verbatim() {
        let view = map_to_view_data(&weather(24.1, "Partly Cloudy"));
        assert_eq!(view.display_condition, "Partly Cloudy");
    }
}
