use weather_core::PresentationState;

/// Text for the weather screen: loading wins, then data, then the error.
pub fn render(state: &PresentationState) -> String {
    if state.is_loading {
        return "Loading...".to_string();
    }

    if let Some(data) = &state.weather_view_data {
        return format!("{}\n{}", data.display_temp, data.display_condition);
    }

    if let Some(error) = &state.error_message {
        return format!("error: {error}");
    }

    String::new()
}
