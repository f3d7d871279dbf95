use serde::{Deserialize, Serialize};

/// Canonical sales status after feed vocabulary mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Available,
    Reserved,
    Sold,
    Blocked,
}

impl UnitStatus {
    pub const fn label(self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Reserved => "reserved",
            UnitStatus::Sold => "sold",
            UnitStatus::Blocked => "blocked",
        }
    }

    /// Map a feed's own status wording onto the canonical set. Feeds mix
    /// Spanish and English and are inconsistent about casing; anything outside
    /// the known vocabulary yields `None` so the unit is never recommended.
    pub fn from_feed(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disponible" | "available" => Some(Self::Available),
            "reservado" | "reserved" => Some(Self::Reserved),
            "vendido" | "sold" => Some(Self::Sold),
            "bloqueado" | "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// A sellable unit in canonical form, independent of the feed shape it came
/// from. Materialized fresh on every query and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub project_id: u32,
    pub project_name: String,
    pub unit_number: String,
    /// 0 when the source schema carries no usable floor information.
    pub floor: i32,
    /// Free-text label the typology matcher classifies against.
    pub description: String,
    pub status: UnitStatus,
    /// Square meters including the unit's share of common/amenity area.
    pub total_area: f64,
    pub sale_value: f64,
    /// Informational only; never enters the score.
    pub price_per_area: f64,
    pub orientation: Option<String>,
}
