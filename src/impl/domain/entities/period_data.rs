use super::steering_index::{SectorSteeringIndices, SteeringIndices};

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct SectorInfo {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Z1 Mean")]
    pub z1_mean: f64,
    #[serde(rename = "Z2 Mean")]
    pub z2_mean: f64,
    #[serde(rename = "Steering Indices")]
    pub steering_indices: SectorSteeringIndices,
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct CompanyDetails {
    #[serde(rename = "ISIN")]
    pub isin: String,
    #[serde(rename = "Sector")]
    pub sector: SectorInfo,
    #[serde(rename = "Market Capitalization")]
    pub market_capitalization: f64,
    #[serde(rename = "Place of Exchange")]
    pub place_of_exchange: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct Risks {
    #[serde(rename = "Value At Risk")]
    pub value_at_risk: f64,
    #[serde(rename = "CE")]
    pub ce: f64,
}

/// One period snapshot ("Actual" or "Previous") of a company's metrics.
///
/// Score ranges (Z1/Z2 in [0,1], index scores in [0,200], liquidity in
/// [0,100]) are display conventions only and are not enforced here.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct PeriodData {
    #[serde(rename = "Details")]
    pub details: CompanyDetails,
    /// Data provider label.
    #[serde(rename = "Data")]
    pub data: String,
    #[serde(rename = "UCO1")]
    pub uco1: String,
    #[serde(rename = "Z1")]
    pub z1: f64,
    #[serde(rename = "UCO2")]
    pub uco2: String,
    #[serde(rename = "Z2")]
    pub z2: f64,
    #[serde(rename = "Steering Indices")]
    pub steering_indices: SteeringIndices,
    #[serde(rename = "Recent Changes")]
    pub recent_changes: String,
    #[serde(rename = "Liquidity")]
    pub liquidity: f64,
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Risks")]
    pub risks: Risks,
}
