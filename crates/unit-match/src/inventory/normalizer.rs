use serde_json::Value;
use tracing::debug;

use super::domain::{Unit, UnitStatus};
use super::feeds::{AmountField, FeedPayload, ProjectFeed, RawUnitRecord};

/// Flatten a project feed into sellable units. Records that are malformed,
/// carry placeholder amounts, or are not currently available are skipped
/// without aborting the rest of the feed.
pub(crate) fn enumerate_available_units(feed: &ProjectFeed) -> Vec<Unit> {
    let mut units = Vec::new();

    match &feed.payload {
        FeedPayload::Flat(records) => {
            for value in records {
                push_unit(&mut units, feed, value, None, None);
            }
        }
        FeedPayload::BySection(floors) => {
            for (floor_key, sections) in floors {
                let floor = parse_floor_key(floor_key);
                for records in sections.values() {
                    for value in records {
                        push_unit(&mut units, feed, value, Some(floor), None);
                    }
                }
            }
        }
        FeedPayload::ByFloor(floors) => {
            for (floor_key, numbers) in floors {
                let floor = parse_floor_key(floor_key);
                for (unit_key, value) in numbers {
                    push_unit(&mut units, feed, value, Some(floor), Some(unit_key));
                }
            }
        }
    }

    units
}

fn push_unit(
    units: &mut Vec<Unit>,
    feed: &ProjectFeed,
    value: &Value,
    floor_hint: Option<i32>,
    fallback_label: Option<&str>,
) {
    if let Some(unit) = canonical_unit(feed, value, floor_hint, fallback_label) {
        units.push(unit);
    }
}

fn canonical_unit(
    feed: &ProjectFeed,
    value: &Value,
    floor_hint: Option<i32>,
    fallback_label: Option<&str>,
) -> Option<Unit> {
    let record: RawUnitRecord = match serde_json::from_value(value.clone()) {
        Ok(record) => record,
        Err(error) => {
            debug!(project_id = feed.project_id, %error, "skipping malformed unit record");
            return None;
        }
    };

    let status = match UnitStatus::from_feed(&record.status) {
        Some(status) => status,
        None => {
            debug!(
                project_id = feed.project_id,
                status = %record.status,
                "skipping unit with unrecognized status"
            );
            return None;
        }
    };
    if status != UnitStatus::Available {
        return None;
    }

    let total_area = match record.total_area.to_amount() {
        Some(area) => area,
        None => {
            debug!(project_id = feed.project_id, "skipping unit without a usable area");
            return None;
        }
    };
    let sale_value = match record.sale_value.to_amount() {
        Some(price) => price,
        None => {
            debug!(project_id = feed.project_id, "skipping unit without a usable price");
            return None;
        }
    };

    let unit_number = match record.unit.as_ref().map(|label| label.to_label()) {
        Some(label) if !label.is_empty() => label,
        _ => match fallback_label.map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => {
                debug!(project_id = feed.project_id, "skipping unit without an identifier");
                return None;
            }
        },
    };

    let price_per_area = record
        .price_per_area
        .as_ref()
        .and_then(AmountField::to_amount)
        .unwrap_or(sale_value / total_area);

    Some(Unit {
        project_id: feed.project_id,
        project_name: feed.project_name.clone(),
        unit_number,
        floor: floor_hint.or(record.floor).unwrap_or(0),
        description: record.description.trim().to_string(),
        status,
        total_area,
        sale_value,
        price_per_area,
        orientation: record.orientation,
    })
}

/// Floor map keys are usually numeric strings, but ground floors show up as
/// labels like `"PB"`. Anything non-numeric lands on floor zero.
fn parse_floor_key(key: &str) -> i32 {
    key.trim().parse().unwrap_or(0)
}
