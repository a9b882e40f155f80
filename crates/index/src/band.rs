//! AQI classification bands.

/// Six-band health classification of an air quality index value.
///
/// Bands are mutually exclusive and cover the whole index scale. The
/// thresholds follow the US EPA convention: 0-50 Good, 51-100 Moderate,
/// 101-150 Unhealthy for Sensitive Groups, 151-200 Unhealthy, 201-300
/// Very Unhealthy, and everything above 300 Hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AqiBand {
    /// Index 0..=50.
    Good = 0,
    /// Index 51..=100.
    Moderate = 1,
    /// Index 101..=150.
    UnhealthySensitive = 2,
    /// Index 151..=200.
    Unhealthy = 3,
    /// Index 201..=300.
    VeryUnhealthy = 4,
    /// Index above 300.
    Hazardous = 5,
}

impl AqiBand {
    /// All six bands in ascending index order.
    pub const ALL: [AqiBand; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthySensitive,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Classifies an index value into its band.
    ///
    /// Total over the whole `u16` range; values above the nominal 500
    /// ceiling fall into [`AqiBand::Hazardous`].
    pub fn from_index(index: u16) -> Self {
        match index {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthySensitive,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Returns the zero-based index of this band (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Human-readable band label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Mood glyph shown next to the band label.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Good => "😊",
            Self::Moderate => "😐",
            Self::UnhealthySensitive => "😷",
            Self::Unhealthy => "😷",
            Self::VeryUnhealthy => "🤢",
            Self::Hazardous => "☠️",
        }
    }

    /// Foreground color token (hex) for this band.
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "#00e400",
            Self::Moderate => "#ffff00",
            Self::UnhealthySensitive => "#ff7e00",
            Self::Unhealthy => "#ff0000",
            Self::VeryUnhealthy => "#8f3f97",
            Self::Hazardous => "#7e0023",
        }
    }

    /// Background color token (hex) for this band.
    pub fn background(self) -> &'static str {
        match self {
            Self::Good => "#e8f5e8",
            Self::Moderate => "#fffde7",
            Self::UnhealthySensitive => "#fff3e0",
            Self::Unhealthy => "#ffebee",
            Self::VeryUnhealthy => "#f3e5f5",
            Self::Hazardous => "#fce4ec",
        }
    }
}
