use serde::{de, Deserialize, Deserializer, Serialize};

use crate::inventory::Unit;

/// Buyer criteria as submitted by the caller, usually straight from a form.
/// Bound fields accept raw numbers or numeric strings; a blank string means
/// the bound was left unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriteriaInput {
    pub project_ids: Vec<u32>,
    pub typology_ids: Vec<u32>,
    #[serde(deserialize_with = "flexible_bound")]
    pub area_min: Option<f64>,
    #[serde(deserialize_with = "flexible_bound")]
    pub area_max: Option<f64>,
    #[serde(deserialize_with = "flexible_bound")]
    pub price_min: Option<f64>,
    #[serde(deserialize_with = "flexible_bound")]
    pub price_max: Option<f64>,
}

fn flexible_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawBound {
        Number(f64),
        Text(String),
    }

    match Option::<RawBound>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawBound::Number(value)) => Ok(Some(value)),
        Some(RawBound::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid numeric bound: {text:?}")))
        }
    }
}

/// Criteria in canonical form with sanitized bounds, threaded as an argument
/// through every scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientCriteria {
    pub project_ids: Vec<u32>,
    pub typology_ids: Vec<u32>,
    pub area: BoundedRange,
    pub price: BoundedRange,
}

impl ClientCriteria {
    pub fn from_input(input: CriteriaInput) -> Self {
        Self {
            project_ids: input.project_ids,
            typology_ids: input.typology_ids,
            area: BoundedRange::from_bounds(input.area_min, input.area_max),
            price: BoundedRange::from_bounds(input.price_min, input.price_max),
        }
    }

    /// Criteria expressing no preference on any axis.
    pub fn unrestricted() -> Self {
        Self::from_input(CriteriaInput::default())
    }

    pub fn prefers_project(&self, project_id: u32) -> bool {
        self.project_ids.contains(&project_id)
    }

    /// A non-empty project preference excludes every project it omits.
    pub(crate) fn excludes_project(&self, project_id: u32) -> bool {
        !self.project_ids.is_empty() && !self.project_ids.contains(&project_id)
    }
}

/// Inclusive numeric range where either end may be open. Zero, negative, and
/// non-finite bounds collapse to "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundedRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl BoundedRange {
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|value| value.is_finite() && *value > 0.0),
            max: max.filter(|value| value.is_finite() && *value > 0.0),
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Place a value relative to the range. Open ends never yield a
    /// `Below`/`Above` verdict, so the ratio math cannot divide by zero.
    pub(crate) fn fit(&self, value: f64) -> RangeFit {
        if let Some(min) = self.min {
            if value < min {
                return RangeFit::Below { ratio: value / min };
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return RangeFit::Above { ratio: value / max };
            }
        }
        RangeFit::Within
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RangeFit {
    Within,
    Below { ratio: f64 },
    Above { ratio: f64 },
}

/// Composite score plus the ordered reasons that earned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// A sellable unit paired with how well it fits the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub unit: Unit,
    pub result: MatchResult,
}
