use serde_json::Value;

use crate::entities::{
    Company, CompanyDetails, CompanyDocument, CompanyPayload, CompanyRootData, FlatFormState,
    NumericInput, PeriodData, PeriodFormState, Risks, SectorInfo, SectorSteeringIndices,
    SteeringIndex, SteeringIndices,
};

use super::safe_access::{lookup, number_at, string_at, trend_at, Segment};

// Document keys. Canonical spelling first, older spellings after.
const COMPANY: Segment = &["Company"];
const COMMON_NAME: Segment = &["Company Common Name", "CompanyCommonName"];
const ACTUAL: Segment = &["Actual"];
const PREVIOUS: Segment = &["Previous"];
const DETAILS: Segment = &["Details"];
const ISIN: Segment = &["ISIN"];
const SECTOR: Segment = &["Sector"];
const NAME: Segment = &["Name"];
const Z1_MEAN: Segment = &["Z1 Mean", "Z1Mean"];
const Z2_MEAN: Segment = &["Z2 Mean", "Z2Mean"];
const STEERING_INDICES: Segment = &["Steering Indices", "SteeringIndices"];
const MARKET_CAPITALIZATION: Segment = &["Market Capitalization", "MarketCapitalization"];
const PLACE_OF_EXCHANGE: Segment = &["Place of Exchange", "PlaceOfExchange"];
const DATA: Segment = &["Data"];
const UCO1: Segment = &["UCO1"];
const Z1: Segment = &["Z1"];
const UCO2: Segment = &["UCO2"];
const Z2: Segment = &["Z2"];
const RECENT_CHANGES: Segment = &["Recent Changes", "RecentChanges"];
const LIQUIDITY: Segment = &["Liquidity"];
const GROUP: Segment = &["Group"];
const RISKS: Segment = &["Risks"];
const VALUE_AT_RISK: Segment = &["Value At Risk", "ValueAtRisk"];
const CE: Segment = &["CE"];
const SCORE: Segment = &["Score"];
const TRENDS: Segment = &["Trends"];
const PROFITABILITY: Segment = &["Profitability"];
const LEVERAGE: Segment = &["Leverage"];
const ENVIRONMENT: Segment = &["Environment"];
const SOCIAL: Segment = &["Social"];
const CONTROVERSIES: Segment = &["Controversies"];

/// Flattens a document's `data` (raw JSON, possibly incomplete) into form
/// state. `None` gives the blank "add" form.
pub fn to_form_state(data: Option<&Value>) -> FlatFormState {
    let null = Value::Null;
    let root = data.unwrap_or(&null);
    FlatFormState {
        company_common_name: string_at(root, &[COMPANY, COMMON_NAME]),
        actual: period_form_state(lookup(root, &[COMPANY, ACTUAL]).unwrap_or(&null)),
        previous: period_form_state(lookup(root, &[COMPANY, PREVIOUS]).unwrap_or(&null)),
    }
}

fn period_form_state(p: &Value) -> PeriodFormState {
    let text = |path: &[Segment]| string_at(p, path);
    let number = |path: &[Segment]| NumericInput::from(number_at(p, path));
    let trend = |path: &[Segment]| trend_at(p, path);
    let sector_mean = |index: Segment| number(&[DETAILS, SECTOR, STEERING_INDICES, index]);

    PeriodFormState {
        isin: text(&[DETAILS, ISIN]),
        sector_name: text(&[DETAILS, SECTOR, NAME]),
        z1_mean: number(&[DETAILS, SECTOR, Z1_MEAN]),
        z2_mean: number(&[DETAILS, SECTOR, Z2_MEAN]),
        sector_profitability: sector_mean(PROFITABILITY),
        sector_leverage: sector_mean(LEVERAGE),
        sector_environment: sector_mean(ENVIRONMENT),
        sector_social: sector_mean(SOCIAL),
        sector_controversies: sector_mean(CONTROVERSIES),
        market_capitalization: number(&[DETAILS, MARKET_CAPITALIZATION]),
        place_of_exchange: text(&[DETAILS, PLACE_OF_EXCHANGE]),
        data: text(&[DATA]),
        uco1: text(&[UCO1]),
        z1: number(&[Z1]),
        uco2: text(&[UCO2]),
        z2: number(&[Z2]),
        steering_profitability_score: number(&[STEERING_INDICES, PROFITABILITY, SCORE]),
        steering_profitability_trends: trend(&[STEERING_INDICES, PROFITABILITY, TRENDS]),
        steering_leverage_score: number(&[STEERING_INDICES, LEVERAGE, SCORE]),
        steering_leverage_trends: trend(&[STEERING_INDICES, LEVERAGE, TRENDS]),
        steering_environment_score: number(&[STEERING_INDICES, ENVIRONMENT, SCORE]),
        steering_environment_trends: trend(&[STEERING_INDICES, ENVIRONMENT, TRENDS]),
        steering_social_score: number(&[STEERING_INDICES, SOCIAL, SCORE]),
        steering_social_trends: trend(&[STEERING_INDICES, SOCIAL, TRENDS]),
        steering_controversies_score: number(&[STEERING_INDICES, CONTROVERSIES, SCORE]),
        steering_controversies_trends: trend(&[STEERING_INDICES, CONTROVERSIES, TRENDS]),
        recent_changes: text(&[RECENT_CHANGES]),
        liquidity: number(&[LIQUIDITY]),
        group: text(&[GROUP]),
        value_at_risk: number(&[RISKS, VALUE_AT_RISK]),
        ce: number(&[RISKS, CE]),
    }
}

/// Rebuilds the nested document shape from form state. Never fails: numeric
/// input that does not parse becomes 0. Only the company name is trimmed.
pub fn to_document_payload(form: &FlatFormState) -> CompanyPayload {
    CompanyPayload {
        data: CompanyRootData {
            company: Company {
                common_name: form.company_common_name.trim().to_string(),
                actual: period_data(&form.actual),
                previous: period_data(&form.previous),
            },
        },
    }
}

fn period_data(f: &PeriodFormState) -> PeriodData {
    PeriodData {
        details: CompanyDetails {
            isin: f.isin.clone(),
            sector: SectorInfo {
                name: f.sector_name.clone(),
                z1_mean: f.z1_mean.value(),
                z2_mean: f.z2_mean.value(),
                steering_indices: SectorSteeringIndices {
                    profitability: f.sector_profitability.value(),
                    leverage: f.sector_leverage.value(),
                    environment: f.sector_environment.value(),
                    social: f.sector_social.value(),
                    controversies: f.sector_controversies.value(),
                },
            },
            market_capitalization: f.market_capitalization.value(),
            place_of_exchange: f.place_of_exchange.clone(),
        },
        data: f.data.clone(),
        uco1: f.uco1.clone(),
        z1: f.z1.value(),
        uco2: f.uco2.clone(),
        z2: f.z2.value(),
        steering_indices: SteeringIndices {
            profitability: SteeringIndex {
                score: f.steering_profitability_score.value(),
                trends: f.steering_profitability_trends,
            },
            leverage: SteeringIndex {
                score: f.steering_leverage_score.value(),
                trends: f.steering_leverage_trends,
            },
            environment: SteeringIndex {
                score: f.steering_environment_score.value(),
                trends: f.steering_environment_trends,
            },
            social: SteeringIndex {
                score: f.steering_social_score.value(),
                trends: f.steering_social_trends,
            },
            controversies: SteeringIndex {
                score: f.steering_controversies_score.value(),
                trends: f.steering_controversies_trends,
            },
        },
        recent_changes: f.recent_changes.clone(),
        liquidity: f.liquidity.value(),
        group: f.group.clone(),
        risks: Risks {
            value_at_risk: f.value_at_risk.value(),
            ce: f.ce.value(),
        },
    }
}

/// Brings raw stored or imported JSON into the complete typed shape, filling
/// whatever is missing with defaults.
pub(crate) fn normalize(data: &Value) -> CompanyRootData {
    to_document_payload(&to_form_state(Some(data))).data
}

impl CompanyDocument {
    /// Form state pre-populated for an edit session.
    pub fn to_form_state(&self) -> FlatFormState {
        to_form_state(serde_json::to_value(&self.data).ok().as_ref())
    }
}
