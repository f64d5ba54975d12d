use std::fmt;

use fractic_server_error::ServerError;

use crate::errors::UnknownFormField;

use super::steering_index::TrendDirection;

/// Raw text of a numeric form field. Coerced to a number only when a payload
/// is built; anything unparsable (or non-finite) counts as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericInput(String);

impl NumericInput {
    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

impl From<f64> for NumericInput {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            NumericInput(v.to_string())
        } else {
            NumericInput("0".to_string())
        }
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput(s.to_string())
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editable fields of one period. Flat key = period prefix + suffix, e.g.
/// `actual` + `SteeringSocialScore`.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodFormState {
    pub isin: String,
    pub sector_name: String,
    pub z1_mean: NumericInput,
    pub z2_mean: NumericInput,
    pub sector_profitability: NumericInput,
    pub sector_leverage: NumericInput,
    pub sector_environment: NumericInput,
    pub sector_social: NumericInput,
    pub sector_controversies: NumericInput,
    pub market_capitalization: NumericInput,
    pub place_of_exchange: String,
    pub data: String,
    pub uco1: String,
    pub z1: NumericInput,
    pub uco2: String,
    pub z2: NumericInput,
    pub steering_profitability_score: NumericInput,
    pub steering_profitability_trends: TrendDirection,
    pub steering_leverage_score: NumericInput,
    pub steering_leverage_trends: TrendDirection,
    pub steering_environment_score: NumericInput,
    pub steering_environment_trends: TrendDirection,
    pub steering_social_score: NumericInput,
    pub steering_social_trends: TrendDirection,
    pub steering_controversies_score: NumericInput,
    pub steering_controversies_trends: TrendDirection,
    pub recent_changes: String,
    pub liquidity: NumericInput,
    pub group: String,
    pub value_at_risk: NumericInput,
    pub ce: NumericInput,
}

impl Default for PeriodFormState {
    /// Empty strings, zeros, and `Equal` trends: the state of a fresh "add"
    /// form.
    fn default() -> Self {
        let zero = || NumericInput::from(0.0);
        Self {
            isin: String::new(),
            sector_name: String::new(),
            z1_mean: zero(),
            z2_mean: zero(),
            sector_profitability: zero(),
            sector_leverage: zero(),
            sector_environment: zero(),
            sector_social: zero(),
            sector_controversies: zero(),
            market_capitalization: zero(),
            place_of_exchange: String::new(),
            data: String::new(),
            uco1: String::new(),
            z1: zero(),
            uco2: String::new(),
            z2: zero(),
            steering_profitability_score: zero(),
            steering_profitability_trends: TrendDirection::Equal,
            steering_leverage_score: zero(),
            steering_leverage_trends: TrendDirection::Equal,
            steering_environment_score: zero(),
            steering_environment_trends: TrendDirection::Equal,
            steering_social_score: zero(),
            steering_social_trends: TrendDirection::Equal,
            steering_controversies_score: zero(),
            steering_controversies_trends: TrendDirection::Equal,
            recent_changes: String::new(),
            liquidity: zero(),
            group: String::new(),
            value_at_risk: zero(),
            ce: zero(),
        }
    }
}

pub const PERIOD_FIELD_SUFFIXES: [&str; 31] = [
    "ISIN",
    "SectorName",
    "Z1Mean",
    "Z2Mean",
    "SectorProfitability",
    "SectorLeverage",
    "SectorEnvironment",
    "SectorSocial",
    "SectorControversies",
    "MarketCapitalization",
    "PlaceOfExchange",
    "Data",
    "UCO1",
    "Z1",
    "UCO2",
    "Z2",
    "SteeringProfitabilityScore",
    "SteeringProfitabilityTrends",
    "SteeringLeverageScore",
    "SteeringLeverageTrends",
    "SteeringEnvironmentScore",
    "SteeringEnvironmentTrends",
    "SteeringSocialScore",
    "SteeringSocialTrends",
    "SteeringControversiesScore",
    "SteeringControversiesTrends",
    "RecentChanges",
    "Liquidity",
    "Group",
    "ValueAtRisk",
    "CE",
];

pub const COMMON_NAME_FIELD: &str = "companyCommonName";

/// Read view of a single form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormValue<'a> {
    Text(&'a str),
    Number(&'a NumericInput),
    Trend(TrendDirection),
}

impl fmt::Display for FormValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Text(s) => f.write_str(s),
            FormValue::Number(n) => write!(f, "{}", n),
            FormValue::Trend(t) => write!(f, "{}", t),
        }
    }
}

enum FormSlot<'a> {
    Text(&'a mut String),
    Number(&'a mut NumericInput),
    Trend(&'a mut TrendDirection),
}

impl PeriodFormState {
    pub fn get(&self, suffix: &str) -> Option<FormValue<'_>> {
        use FormValue::*;
        Some(match suffix {
            "ISIN" => Text(&self.isin),
            "SectorName" => Text(&self.sector_name),
            "Z1Mean" => Number(&self.z1_mean),
            "Z2Mean" => Number(&self.z2_mean),
            "SectorProfitability" => Number(&self.sector_profitability),
            "SectorLeverage" => Number(&self.sector_leverage),
            "SectorEnvironment" => Number(&self.sector_environment),
            "SectorSocial" => Number(&self.sector_social),
            "SectorControversies" => Number(&self.sector_controversies),
            "MarketCapitalization" => Number(&self.market_capitalization),
            "PlaceOfExchange" => Text(&self.place_of_exchange),
            "Data" => Text(&self.data),
            "UCO1" => Text(&self.uco1),
            "Z1" => Number(&self.z1),
            "UCO2" => Text(&self.uco2),
            "Z2" => Number(&self.z2),
            "SteeringProfitabilityScore" => Number(&self.steering_profitability_score),
            "SteeringProfitabilityTrends" => Trend(self.steering_profitability_trends),
            "SteeringLeverageScore" => Number(&self.steering_leverage_score),
            "SteeringLeverageTrends" => Trend(self.steering_leverage_trends),
            "SteeringEnvironmentScore" => Number(&self.steering_environment_score),
            "SteeringEnvironmentTrends" => Trend(self.steering_environment_trends),
            "SteeringSocialScore" => Number(&self.steering_social_score),
            "SteeringSocialTrends" => Trend(self.steering_social_trends),
            "SteeringControversiesScore" => Number(&self.steering_controversies_score),
            "SteeringControversiesTrends" => Trend(self.steering_controversies_trends),
            "RecentChanges" => Text(&self.recent_changes),
            "Liquidity" => Number(&self.liquidity),
            "Group" => Text(&self.group),
            "ValueAtRisk" => Number(&self.value_at_risk),
            "CE" => Number(&self.ce),
            _ => return None,
        })
    }

    fn slot(&mut self, suffix: &str) -> Option<FormSlot<'_>> {
        use FormSlot::*;
        Some(match suffix {
            "ISIN" => Text(&mut self.isin),
            "SectorName" => Text(&mut self.sector_name),
            "Z1Mean" => Number(&mut self.z1_mean),
            "Z2Mean" => Number(&mut self.z2_mean),
            "SectorProfitability" => Number(&mut self.sector_profitability),
            "SectorLeverage" => Number(&mut self.sector_leverage),
            "SectorEnvironment" => Number(&mut self.sector_environment),
            "SectorSocial" => Number(&mut self.sector_social),
            "SectorControversies" => Number(&mut self.sector_controversies),
            "MarketCapitalization" => Number(&mut self.market_capitalization),
            "PlaceOfExchange" => Text(&mut self.place_of_exchange),
            "Data" => Text(&mut self.data),
            "UCO1" => Text(&mut self.uco1),
            "Z1" => Number(&mut self.z1),
            "UCO2" => Text(&mut self.uco2),
            "Z2" => Number(&mut self.z2),
            "SteeringProfitabilityScore" => Number(&mut self.steering_profitability_score),
            "SteeringProfitabilityTrends" => Trend(&mut self.steering_profitability_trends),
            "SteeringLeverageScore" => Number(&mut self.steering_leverage_score),
            "SteeringLeverageTrends" => Trend(&mut self.steering_leverage_trends),
            "SteeringEnvironmentScore" => Number(&mut self.steering_environment_score),
            "SteeringEnvironmentTrends" => Trend(&mut self.steering_environment_trends),
            "SteeringSocialScore" => Number(&mut self.steering_social_score),
            "SteeringSocialTrends" => Trend(&mut self.steering_social_trends),
            "SteeringControversiesScore" => Number(&mut self.steering_controversies_score),
            "SteeringControversiesTrends" => Trend(&mut self.steering_controversies_trends),
            "RecentChanges" => Text(&mut self.recent_changes),
            "Liquidity" => Number(&mut self.liquidity),
            "Group" => Text(&mut self.group),
            "ValueAtRisk" => Number(&mut self.value_at_risk),
            "CE" => Number(&mut self.ce),
            _ => return None,
        })
    }
}

/// Transient editing state for one add/edit session. Never persisted as-is;
/// see `shape_mapper::to_document_payload`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatFormState {
    pub company_common_name: String,
    pub actual: PeriodFormState,
    pub previous: PeriodFormState,
}

impl FlatFormState {
    /// All flat keys, name first, then `actual*` and `previous*`.
    pub fn keys() -> Vec<String> {
        std::iter::once(COMMON_NAME_FIELD.to_string())
            .chain(
                ["actual", "previous"]
                    .into_iter()
                    .flat_map(|p| PERIOD_FIELD_SUFFIXES.iter().map(move |s| format!("{p}{s}"))),
            )
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<FormValue<'_>> {
        if key == COMMON_NAME_FIELD {
            return Some(FormValue::Text(&self.company_common_name));
        }
        if let Some(suffix) = key.strip_prefix("actual") {
            return self.actual.get(suffix);
        }
        if let Some(suffix) = key.strip_prefix("previous") {
            return self.previous.get(suffix);
        }
        None
    }

    /// Sets a field from raw user input. Numbers are stored verbatim (coerced
    /// later); trends must parse.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), ServerError> {
        if key == COMMON_NAME_FIELD {
            self.company_common_name = raw.to_string();
            return Ok(());
        }
        let slot = if let Some(suffix) = key.strip_prefix("actual") {
            self.actual.slot(suffix)
        } else if let Some(suffix) = key.strip_prefix("previous") {
            self.previous.slot(suffix)
        } else {
            None
        };
        match slot.ok_or_else(|| UnknownFormField::new(key))? {
            FormSlot::Text(s) => *s = raw.to_string(),
            FormSlot::Number(n) => *n = NumericInput::from(raw),
            FormSlot::Trend(t) => *t = raw.parse()?,
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        Self::keys()
            .into_iter()
            .filter_map(|k| {
                let v = self.get(&k)?.to_string();
                Some((k, v))
            })
            .collect()
    }
}
