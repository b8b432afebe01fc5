//! Panel rendering for the terminal frontend.

use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;

use wsearch_core::{WeatherIcon, WeatherReport};

/// Trigger label while idle.
pub const SEARCH_LABEL: &str = "Search Weather";

/// Trigger label while a request is in flight.
pub const SEARCHING_LABEL: &str = "Searching...";

/// Busy indicator shown while a request is in flight.
pub fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(SEARCHING_LABEL);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Result panel: icon, city, then one row per field with "N/A" fallbacks.
pub fn render_result(report: &WeatherReport) -> String {
    let icon = WeatherIcon::for_description(report.description.as_deref());

    format!(
        "\n  {} {}\n\n  {:<13}{}\n  {:<13}{}\n  {:<13}{}\n  {:<13}{}\n",
        icon.glyph(),
        report.city.bold(),
        "Temperature:",
        report.temperature_display(),
        "Description:",
        report.description_display(),
        "Humidity:",
        report.humidity_display(),
        "Wind:",
        report.wind_speed_display(),
    )
}

/// Error panel: one marked line with the message verbatim.
pub fn render_error(message: &str) -> String {
    format!("\n  {} {}\n", "Error:".red().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_panel_shows_exact_values() {
        let report = WeatherReport {
            city: "Paris".to_string(),
            temperature: Some("18°C".to_string()),
            description: Some("Partly cloudy".to_string()),
            humidity: Some("60%".to_string()),
            wind_speed: Some("10 km/h".to_string()),
        };

        let panel = render_result(&report);

        assert!(panel.contains("Paris"));
        assert!(panel.contains("18°C"));
        assert!(panel.contains("Partly cloudy"));
        assert!(panel.contains("60%"));
        assert!(panel.contains("10 km/h"));
        // "Partly cloudy" resolves to the cloud icon by rule order.
        assert!(panel.contains(WeatherIcon::Cloud.glyph()));
    }

    #[test]
    fn missing_fields_render_as_not_available() {
        let report = WeatherReport {
            city: "Oslo".to_string(),
            temperature: Some("3°C".to_string()),
            description: None,
            humidity: None,
            wind_speed: None,
        };

        let panel = render_result(&report);

        assert!(panel.contains("N/A"));
        assert!(panel.contains(WeatherIcon::Default.glyph()));
    }

    #[test]
    fn error_panel_shows_message_verbatim() {
        let panel = render_error("City not found");
        assert!(panel.contains("City not found"));
    }

    #[test]
    fn trigger_labels_differ() {
        assert_ne!(SEARCH_LABEL, SEARCHING_LABEL);
    }
}
