//! WMO weather interpretation codes as reported by the weather provider,
//! mapped to display labels and colors.

/// Human-readable label for a weather condition code.
///
/// Codes outside the known set map to "Unknown".
pub fn condition_label(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Drizzle, Light",
        53 => "Drizzle, Moderate",
        55 => "Drizzle, Dense",
        61 => "Rain, Slight",
        63 => "Rain, Moderate",
        65 => "Rain, Heavy",
        71 => "Snow, Slight",
        73 => "Snow, Moderate",
        75 => "Snow, Heavy",
        80 => "Rain showers, Slight",
        81 => "Rain showers, Moderate",
        82 => "Rain showers, Violent",
        95 => "Thunderstorm, Slight",
        96 => "Thunderstorm, Moderate",
        99 => "Thunderstorm, Heavy hail",
        _ => "Unknown",
    }
}

/// Coarse grouping of condition codes, one display color per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionGroup {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Other,
}

impl ConditionGroup {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 | 1 => ConditionGroup::Clear,
            2 | 3 => ConditionGroup::Cloudy,
            45 | 48 => ConditionGroup::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => ConditionGroup::Rain,
            71 | 73 | 75 => ConditionGroup::Snow,
            95 | 96 | 99 => ConditionGroup::Thunderstorm,
            _ => ConditionGroup::Other,
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            ConditionGroup::Clear => "#87CEEB",
            ConditionGroup::Cloudy => "#B0C4DE",
            ConditionGroup::Fog => "#A9A9A9",
            ConditionGroup::Rain => "#4682B4",
            ConditionGroup::Snow => "#D3D3D3",
            ConditionGroup::Thunderstorm => "#800000",
            ConditionGroup::Other => "#FFFFFF",
        }
    }
}

/// Hex display color for a weather condition code.
pub fn condition_color(code: u32) -> &'static str {
    ConditionGroup::from_code(code).color()
}
