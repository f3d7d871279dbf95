//! Integration specifications for feed ingestion.
//!
//! Snapshots exercise the three nesting shapes project feeds arrive in,
//! formatted-amount parsing, and the skip semantics that keep one bad record
//! from taking down the rest of a feed.

use serde_json::json;

use unit_match::inventory::{ProjectCatalog, UnitStatus};

#[test]
fn all_three_feed_shapes_normalize_to_the_same_record() {
    let snapshot = json!([
        {
            "projectId": 1,
            "projectName": "Flat Sample",
            "units": [
                {
                    "unit": "101",
                    "description": "2 DORMITORIOS",
                    "status": "available",
                    "totalArea": 80.0,
                    "saleValue": 300_000,
                    "floor": 1,
                }
            ]
        },
        {
            "projectId": 2,
            "projectName": "Floor Keyed Sample",
            "units": {
                "4": {
                    "401": {
                        "description": "2 DORMITORIOS",
                        "status": "disponible",
                        "totalArea": 80.0,
                        "saleValue": 300_000,
                    }
                }
            }
        },
        {
            "projectId": 3,
            "projectName": "Section Keyed Sample",
            "units": {
                "4": {
                    "A": [
                        {
                            "unidad": "4A1",
                            "tipologia": "2 DORMITORIOS",
                            "estado": "disponible",
                            "superficieTotal": 80.0,
                            "precio": 300_000,
                        }
                    ]
                }
            }
        }
    ]);

    let catalog = ProjectCatalog::from_value(snapshot).expect("snapshot parses");
    let units = catalog.available_units();

    assert_eq!(units.len(), 3);
    assert!(units.iter().all(|unit| unit.total_area == 80.0));
    assert!(units.iter().all(|unit| unit.sale_value == 300_000.0));
    assert!(units.iter().all(|unit| unit.status == UnitStatus::Available));

    assert_eq!(units[0].floor, 1);
    assert_eq!(units[1].unit_number, "401");
    assert_eq!(units[1].floor, 4);
    assert_eq!(units[2].unit_number, "4A1");
    assert_eq!(units[2].floor, 4);
}

#[test]
fn formatted_prices_parse_and_placeholders_exclude() {
    let snapshot = json!([
        {
            "projectId": 5,
            "projectName": "Costanera Anexo",
            "units": [
                {
                    "unit": "901",
                    "description": "3 DORMITORIOS PREMIUM",
                    "status": "available",
                    "totalArea": "210,45",
                    "saleValue": "$1,226,600",
                },
                {
                    "unit": "902",
                    "description": "3 DORMITORIOS",
                    "status": "available",
                    "totalArea": 208.0,
                    "saleValue": "consultar",
                }
            ]
        }
    ]);

    let units = ProjectCatalog::from_value(snapshot)
        .expect("snapshot parses")
        .available_units();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].unit_number, "901");
    assert_eq!(units[0].sale_value, 1_226_600.0);
    assert_eq!(units[0].total_area, 210.45);
}

#[test]
fn only_available_statuses_survive_normalization() {
    let snapshot = json!([
        {
            "projectId": 8,
            "projectName": "Status Sample",
            "units": [
                {"unit": "1", "description": "2D", "status": "available",
                 "totalArea": 70.0, "saleValue": 200_000},
                {"unit": "2", "description": "2D", "status": "reservado",
                 "totalArea": 70.0, "saleValue": 200_000},
                {"unit": "3", "description": "2D", "status": "vendido",
                 "totalArea": 70.0, "saleValue": 200_000},
                {"unit": "4", "description": "2D", "status": "bloqueado",
                 "totalArea": 70.0, "saleValue": 200_000},
                {"unit": "5", "description": "2D", "status": "en obra",
                 "totalArea": 70.0, "saleValue": 200_000}
            ]
        }
    ]);

    let units = ProjectCatalog::from_value(snapshot)
        .expect("snapshot parses")
        .available_units();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].unit_number, "1");
}

#[test]
fn malformed_records_never_abort_the_rest_of_a_feed() {
    let snapshot = json!([
        {
            "projectId": 4,
            "projectName": "Mixed Quality",
            "units": [
                {"note": "legacy placeholder row"},
                {"unit": "10", "description": "MONOAMBIENTE", "status": "available",
                 "totalArea": 40.0, "saleValue": 150_000},
                {"unit": "11", "description": "MONOAMBIENTE", "status": "available",
                 "totalArea": "sin datos", "saleValue": 150_000}
            ]
        }
    ]);

    let units = ProjectCatalog::from_value(snapshot)
        .expect("snapshot parses")
        .available_units();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].unit_number, "10");
}

#[test]
fn snapshots_load_through_a_reader() {
    let text = r#"[
        {
            "projectId": 6,
            "projectName": "Reader Sample",
            "units": [
                {
                    "unit": "1A",
                    "description": "1 DORMITORIO",
                    "status": "available",
                    "totalArea": 52.0,
                    "saleValue": 180000
                }
            ]
        }
    ]"#;

    let catalog = ProjectCatalog::from_reader(text.as_bytes()).expect("reader parses");

    assert_eq!(catalog.feeds().len(), 1);
    assert_eq!(catalog.available_units().len(), 1);
}
