//! Weather Code Translator
//!
//! Maps the weather provider's numeric condition codes to human-readable
//! descriptions. The code/label pairs are the provider's wire contract
//! (https://docs.tomorrow.io/reference/data-layers-weather-codes), not an
//! internal choice. Total over all integers: unmapped codes yield "Unknown".

/// Translate a numeric weather code to its description
pub fn describe(code: i64) -> &'static str {
    match code {
        1000 => "Clear, Sunny",
        1100 => "Mostly Clear",
        1101 => "Partly Cloudy",
        1102 => "Mostly Cloudy",
        1001 => "Cloudy",
        2000 => "Fog",
        2100 => "Light Fog",
        4000 => "Drizzle",
        4001 => "Rain",
        4200 => "Light Rain",
        4201 => "Heavy Rain",
        5000 => "Snow",
        5001 => "Flurries",
        5100 => "Light Snow",
        5101 => "Heavy Snow",
        6000 => "Freezing Drizzle",
        6001 => "Freezing Rain",
        6200 => "Light Freezing Rain",
        6201 => "Heavy Freezing Rain",
        7000 => "Ice Pellets",
        7101 => "Heavy Ice Pellets",
        7102 => "Light Ice Pellets",
        8000 => "Thunderstorm",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_documented_codes() {
        let table = [
            (1000, "Clear, Sunny"),
            (1100, "Mostly Clear"),
            (1101, "Partly Cloudy"),
            (1102, "Mostly Cloudy"),
            (1001, "Cloudy"),
            (2000, "Fog"),
            (2100, "Light Fog"),
            (4000, "Drizzle"),
            (4001, "Rain"),
            (4200, "Light Rain"),
            (4201, "Heavy Rain"),
            (5000, "Snow"),
            (5001, "Flurries"),
            (5100, "Light Snow"),
            (5101, "Heavy Snow"),
            (6000, "Freezing Drizzle"),
            (6001, "Freezing Rain"),
            (6200, "Light Freezing Rain"),
            (6201, "Heavy Freezing Rain"),
            (7000, "Ice Pellets"),
            (7101, "Heavy Ice Pellets"),
            (7102, "Light Ice Pellets"),
            (8000, "Thunderstorm"),
        ];

        for (code, label) in table {
            assert_eq!(describe(code), label, "code {code}");
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(describe(9999), "Unknown");
        assert_eq!(describe(0), "Unknown");
        assert_eq!(describe(-1), "Unknown");
        assert_eq!(describe(i64::MAX), "Unknown");
    }
}
