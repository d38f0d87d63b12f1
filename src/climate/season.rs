//! Season Classification
//!
//! Meteorological seasons by calendar month. Months are grouped in threes
//! starting from December; the southern hemisphere is offset by six months.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl FromStr for Hemisphere {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Hemisphere::Northern),
            "southern" | "south" | "s" => Ok(Hemisphere::Southern),
            other => Err(ConfigError::InvalidValue {
                key: "hemisphere",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Season for a 1-based month. Out-of-range months wrap modulo 12.
    pub fn from_month(month: u32, hemisphere: Hemisphere) -> Self {
        let northern = match month % 12 {
            0 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        };

        match hemisphere {
            Hemisphere::Northern => northern,
            Hemisphere::Southern => northern.opposite(),
        }
    }

    pub fn from_date(date: NaiveDate, hemisphere: Hemisphere) -> Self {
        Self::from_month(date.month(), hemisphere)
    }

    /// Season six months away
    pub fn opposite(&self) -> Self {
        match self {
            Season::Winter => Season::Summer,
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}
