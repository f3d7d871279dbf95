use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::amount::parse_amount;

/// One project's inventory feed as supplied by the backend or a static
/// snapshot. The payload keeps whatever nesting the source uses; the
/// normalizer flattens it on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFeed {
    pub project_id: u32,
    pub project_name: String,
    #[serde(rename = "units")]
    pub payload: FeedPayload,
}

/// The three nesting conventions observed across project feeds. Deserialized
/// untagged; `BySection` precedes `ByFloor` because its shape is the more
/// specific of the two map forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedPayload {
    /// A plain list of unit records.
    Flat(Vec<Value>),
    /// Floor label, then section label, then the section's unit records.
    BySection(BTreeMap<String, BTreeMap<String, Vec<Value>>>),
    /// Floor label, then unit number, then the unit record.
    ByFloor(BTreeMap<String, BTreeMap<String, Value>>),
}

/// Tolerant per-unit record the normalizer extracts from feed payloads.
/// Field names vary per project, hence the aliases; amounts arrive as raw
/// numbers or formatted display strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawUnitRecord {
    #[serde(default, alias = "unidad", alias = "numero")]
    pub(crate) unit: Option<LabelField>,
    #[serde(alias = "tipologia", alias = "detalle")]
    pub(crate) description: String,
    #[serde(alias = "estado")]
    pub(crate) status: String,
    #[serde(
        alias = "totalArea",
        alias = "totalWithAmenities",
        alias = "superficieTotal"
    )]
    pub(crate) total_area: AmountField,
    #[serde(alias = "saleValue", alias = "precio", alias = "valor")]
    pub(crate) sale_value: AmountField,
    #[serde(default, alias = "pricePerArea", alias = "precioPorM2")]
    pub(crate) price_per_area: Option<AmountField>,
    #[serde(
        default,
        alias = "orientacion",
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) orientation: Option<String>,
    #[serde(default, alias = "piso")]
    pub(crate) floor: Option<i32>,
}

/// Numeric feed fields come through either as JSON numbers or as formatted
/// display strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    /// Resolve to a positive finite amount, or `None` when the field is a
    /// placeholder (`"consultar"`) or otherwise unusable.
    pub(crate) fn to_amount(&self) -> Option<f64> {
        match self {
            AmountField::Number(value) if value.is_finite() && *value > 0.0 => Some(*value),
            AmountField::Number(_) => None,
            AmountField::Text(text) => parse_amount(text),
        }
    }
}

/// Unit identifiers appear as strings in some feeds and bare numbers in
/// others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum LabelField {
    Number(i64),
    Text(String),
}

impl LabelField {
    pub(crate) fn to_label(&self) -> String {
        match self {
            LabelField::Number(value) => value.to_string(),
            LabelField::Text(text) => text.trim().to_string(),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
