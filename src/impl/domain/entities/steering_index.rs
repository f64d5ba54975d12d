use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;

use crate::errors::InvalidTrendDirection;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Equal,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "Up",
            TrendDirection::Down => "Down",
            TrendDirection::Equal => "Equal",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(TrendDirection::Up),
            "down" => Ok(TrendDirection::Down),
            "equal" => Ok(TrendDirection::Equal),
            _ => Err(InvalidTrendDirection::new(s)),
        }
    }
}

/// The five scored dimensions tracked per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteeringIndexKind {
    Profitability,
    Leverage,
    Environment,
    Social,
    Controversies,
}

impl SteeringIndexKind {
    pub fn name(&self) -> &'static str {
        match self {
            SteeringIndexKind::Profitability => "Profitability",
            SteeringIndexKind::Leverage => "Leverage",
            SteeringIndexKind::Environment => "Environment",
            SteeringIndexKind::Social => "Social",
            SteeringIndexKind::Controversies => "Controversies",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct SteeringIndex {
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Trends", default)]
    pub trends: TrendDirection,
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct SteeringIndices {
    #[serde(rename = "Profitability")]
    pub profitability: SteeringIndex,
    #[serde(rename = "Leverage")]
    pub leverage: SteeringIndex,
    #[serde(rename = "Environment")]
    pub environment: SteeringIndex,
    #[serde(rename = "Social")]
    pub social: SteeringIndex,
    #[serde(rename = "Controversies")]
    pub controversies: SteeringIndex,
}

impl SteeringIndices {
    pub fn get(&self, kind: SteeringIndexKind) -> &SteeringIndex {
        match kind {
            SteeringIndexKind::Profitability => &self.profitability,
            SteeringIndexKind::Leverage => &self.leverage,
            SteeringIndexKind::Environment => &self.environment,
            SteeringIndexKind::Social => &self.social,
            SteeringIndexKind::Controversies => &self.controversies,
        }
    }
}

/// Sector-level means, plain numbers per index.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct SectorSteeringIndices {
    #[serde(rename = "Profitability")]
    pub profitability: f64,
    #[serde(rename = "Leverage")]
    pub leverage: f64,
    #[serde(rename = "Environment")]
    pub environment: f64,
    #[serde(rename = "Social")]
    pub social: f64,
    #[serde(rename = "Controversies")]
    pub controversies: f64,
}

impl SectorSteeringIndices {
    pub fn get(&self, kind: SteeringIndexKind) -> f64 {
        match kind {
            SteeringIndexKind::Profitability => self.profitability,
            SteeringIndexKind::Leverage => self.leverage,
            SteeringIndexKind::Environment => self.environment,
            SteeringIndexKind::Social => self.social,
            SteeringIndexKind::Controversies => self.controversies,
        }
    }
}
