/// Symbolic icon shown next to a weather description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    Sun,
    Cloud,
    PartlyCloudy,
    Rain,
    Storm,
    Snow,
    Fog,
    Wind,
    Default,
}

/// Keyword rules in match priority order. The first rule with any hit wins,
/// so a description containing both "partly" and "cloudy" resolves to the
/// cloud icon.
const RULES: &[(&[&str], WeatherIcon)] = &[
    (&["sunny", "clear"], WeatherIcon::Sun),
    (&["cloudy", "overcast"], WeatherIcon::Cloud),
    (&["partly"], WeatherIcon::PartlyCloudy),
    (&["rain", "drizzle"], WeatherIcon::Rain),
    (&["thunderstorm", "storm"], WeatherIcon::Storm),
    (&["snow"], WeatherIcon::Snow),
    (&["fog"], WeatherIcon::Fog),
    (&["wind"], WeatherIcon::Wind),
];

impl WeatherIcon {
    /// Pick the icon for a weather description.
    ///
    /// Matching is a case-insensitive substring check; absent or unmatched
    /// descriptions fall back to the default icon.
    pub fn for_description(description: Option<&str>) -> Self {
        let Some(description) = description else {
            return WeatherIcon::Default;
        };

        let lower = description.to_lowercase();

        for (keywords, icon) in RULES {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return *icon;
            }
        }

        WeatherIcon::Default
    }

    /// Glyph rendered in the result panel.
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀️",
            WeatherIcon::Cloud => "☁️",
            WeatherIcon::PartlyCloudy => "⛅",
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Storm => "⛈️",
            WeatherIcon::Snow => "🌨️",
            WeatherIcon::Fog => "🌫️",
            WeatherIcon::Wind => "💨",
            WeatherIcon::Default => "🌤️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_description_is_default() {
        assert_eq!(WeatherIcon::for_description(None), WeatherIcon::Default);
    }

    #[test]
    fn empty_description_is_default() {
        assert_eq!(WeatherIcon::for_description(Some("")), WeatherIcon::Default);
    }

    #[test]
    fn unmatched_description_is_default() {
        assert_eq!(WeatherIcon::for_description(Some("hazy")), WeatherIcon::Default);
    }

    #[test]
    fn each_keyword_maps_to_its_icon() {
        let cases = [
            ("sunny", WeatherIcon::Sun),
            ("clear", WeatherIcon::Sun),
            ("overcast", WeatherIcon::Cloud),
            ("rain", WeatherIcon::Rain),
            ("drizzle", WeatherIcon::Rain),
            ("thunderstorm", WeatherIcon::Storm),
            ("storm", WeatherIcon::Storm),
            ("snow", WeatherIcon::Snow),
            ("fog", WeatherIcon::Fog),
            ("wind", WeatherIcon::Wind),
        ];

        for (description, expected) in cases {
            assert_eq!(WeatherIcon::for_description(Some(description)), expected, "{description}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(WeatherIcon::for_description(Some("Light Rain")), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::for_description(Some("SUNNY")), WeatherIcon::Sun);
    }

    #[test]
    fn partly_cloudy_hits_the_cloud_rule_first() {
        assert_eq!(WeatherIcon::for_description(Some("Partly cloudy")), WeatherIcon::Cloud);
    }

    #[test]
    fn partly_sunny_hits_the_sun_rule_first() {
        assert_eq!(WeatherIcon::for_description(Some("partly sunny")), WeatherIcon::Sun);
    }

    #[test]
    fn partly_alone_gets_the_partly_icon() {
        assert_eq!(WeatherIcon::for_description(Some("partly foggy")), WeatherIcon::PartlyCloudy);
    }

    #[test]
    fn sun_beats_rain_when_both_present() {
        assert_eq!(
            WeatherIcon::for_description(Some("clear with light rain")),
            WeatherIcon::Sun
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let first = WeatherIcon::for_description(Some("Thunderstorms"));
        let second = WeatherIcon::for_description(Some("Thunderstorms"));
        assert_eq!(first, second);
        assert_eq!(first, WeatherIcon::Storm);
    }
}
