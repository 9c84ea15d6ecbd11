//! Terminal rendering for lookup states.

use chrono::{DateTime, Utc};
use colored::Colorize;

use skycast_core::WeatherObservation;

pub fn banner() {
    println!("{}", "skycast — city weather lookup".bold());
}

pub fn loading() {
    println!("{}", "Fetching current weather...".dimmed());
}

pub fn error(message: &str) {
    eprintln!("{}", message.red());
}

/// Result panel on a background colored by the weather condition.
pub fn observation(obs: &WeatherObservation) {
    let (r, g, b) = parse_hex(&obs.color).unwrap_or((255, 255, 255));
    let paint = |text: String| println!("{}", text.black().on_truecolor(r, g, b));

    println!();
    paint(format!("  {}  ", obs.city));
    paint(format!("  Temperature: {} °C  ", obs.temperature_c));
    paint(format!("  Wind speed: {} km/h  ", obs.wind_speed_kmh));
    paint(format!("  Condition: {}  ", obs.condition));
    if let Some(time) = obs.observation_time {
        paint(format!("  Observed: {}  ", format_time(time)));
    }
    println!();
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Parse "#RRGGBB" into an RGB triple.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_condition_palette() {
        assert_eq!(parse_hex("#87CEEB"), Some((0x87, 0xCE, 0xEB)));
        assert_eq!(parse_hex("#800000"), Some((0x80, 0x00, 0x00)));
        assert_eq!(parse_hex("#FFFFFF"), Some((255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("87CEEB"), None);
        assert_eq!(parse_hex("#87CE"), None);
        assert_eq!(parse_hex("#87CEEB00"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn formats_observation_time_in_utc() {
        let time = DateTime::parse_from_rfc3339("2026-08-06T14:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_time(time), "2026-08-06 14:00 UTC");
    }
}
