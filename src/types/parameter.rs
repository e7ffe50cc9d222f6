use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical quantity observed once per day by the upstream provider.
///
/// The serialized names (`TEMP_AVG`, `TEMP_MAX`, ...) are the contract used
/// by the surrounding request layer; [`Parameter::power_name`] maps each
/// variant to the NASA POWER daily-point API parameter it is sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Parameter {
    TempAvg,
    TempMax,
    TempMin,
    WindAvg,
    WindMax,
    Humidity,
    Precipitation,
}

impl Parameter {
    pub const ALL: [Parameter; 7] = [
        Parameter::TempAvg,
        Parameter::TempMax,
        Parameter::TempMin,
        Parameter::WindAvg,
        Parameter::WindMax,
        Parameter::Humidity,
        Parameter::Precipitation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::TempAvg => "TEMP_AVG",
            Parameter::TempMax => "TEMP_MAX",
            Parameter::TempMin => "TEMP_MIN",
            Parameter::WindAvg => "WIND_AVG",
            Parameter::WindMax => "WIND_MAX",
            Parameter::Humidity => "HUMIDITY",
            Parameter::Precipitation => "PRECIPITATION",
        }
    }

    /// Name of the corresponding parameter in the POWER daily-point API.
    pub fn power_name(&self) -> &'static str {
        match self {
            Parameter::TempAvg => "T2M",
            Parameter::TempMax => "T2M_MAX",
            Parameter::TempMin => "T2M_MIN",
            Parameter::WindAvg => "WS2M",
            Parameter::WindMax => "WS2M_MAX",
            Parameter::Humidity => "RH2M",
            Parameter::Precipitation => "PRECTOTCORR",
        }
    }

    pub fn from_power_name(name: &str) -> Option<Parameter> {
        Parameter::ALL.iter().copied().find(|p| p.power_name() == name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
