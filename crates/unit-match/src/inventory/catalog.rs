use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{json, Value};

use super::domain::Unit;
use super::feeds::{FeedPayload, ProjectFeed};
use super::normalizer::enumerate_available_units;
use super::InventoryImportError;

/// In-memory collection of project feeds a recommendation run reads from.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    feeds: Vec<ProjectFeed>,
}

impl ProjectCatalog {
    /// Built-in portfolio mirroring the six production feeds, nesting quirks
    /// included. Used by the demo CLI and as the default serving catalog.
    pub fn standard() -> Self {
        Self::from_feeds(standard_project_feeds())
    }

    pub fn from_feeds(feeds: Vec<ProjectFeed>) -> Self {
        Self { feeds }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InventoryImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InventoryImportError> {
        let feeds = serde_json::from_reader(reader)?;
        Ok(Self::from_feeds(feeds))
    }

    pub fn from_value(value: Value) -> Result<Self, InventoryImportError> {
        let feeds = serde_json::from_value(value)?;
        Ok(Self::from_feeds(feeds))
    }

    pub fn feeds(&self) -> &[ProjectFeed] {
        &self.feeds
    }

    /// Materialize every sellable unit across the catalog, in feed order.
    pub fn available_units(&self) -> Vec<Unit> {
        self.feeds
            .iter()
            .flat_map(enumerate_available_units)
            .collect()
    }
}

fn keyed<V>(entries: Vec<(&str, V)>) -> BTreeMap<String, V> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn standard_project_feeds() -> Vec<ProjectFeed> {
    vec![
        ProjectFeed {
            project_id: 1,
            project_name: "Torre Alvear".to_string(),
            payload: FeedPayload::Flat(vec![
                json!({
                    "unidad": "101",
                    "tipologia": "MONOAMBIENTE AL CONTRAFRENTE",
                    "estado": "disponible",
                    "superficieTotal": 42.5,
                    "precio": 158_000,
                    "piso": 1,
                    "orientacion": "N",
                }),
                json!({
                    "unidad": "102",
                    "tipologia": "1 DORMITORIO",
                    "estado": "disponible",
                    "superficieTotal": 55.0,
                    "precio": 210_000,
                    "piso": 1,
                }),
                json!({
                    "unidad": "503",
                    "tipologia": "2 DORMITORIOS C/BALCON",
                    "estado": "reservado",
                    "superficieTotal": 78.3,
                    "precio": 298_000,
                    "piso": 5,
                }),
                json!({
                    "unidad": "804",
                    "tipologia": "3 DORMITORIOS C/DEPENDENCIA",
                    "estado": "disponible",
                    "superficieTotal": 210.45,
                    "precio": 1_008_900,
                    "piso": 8,
                    "orientacion": "NE",
                }),
                json!({
                    "unidad": "805",
                    "tipologia": "3 DORMITORIOS",
                    "estado": "vendido",
                    "superficieTotal": 128.0,
                    "precio": 495_000,
                    "piso": 8,
                }),
            ]),
        },
        ProjectFeed {
            project_id: 2,
            project_name: "Puerto Madero Plaza".to_string(),
            payload: FeedPayload::Flat(vec![
                json!({
                    "unit": "2A",
                    "description": "2 Bedrooms with river view",
                    "status": "available",
                    "totalArea": 95.0,
                    "saleValue": 610_000,
                    "orientation": "E",
                }),
                json!({
                    "unit": "3B",
                    "description": "3 Bedrooms corner",
                    "status": "DISPONIBLE",
                    "totalArea": 140.0,
                    "saleValue": 890_000,
                }),
                json!({
                    "unit": "PH1",
                    "description": "Penthouse duplex",
                    "status": "available",
                    "totalArea": 245.8,
                    "saleValue": "consultar",
                }),
                json!({
                    "unit": "1C",
                    "description": "1 Bedroom",
                    "status": "sold",
                    "totalArea": 52.0,
                    "saleValue": 340_000,
                }),
            ]),
        },
        ProjectFeed {
            project_id: 3,
            project_name: "Costanera Norte".to_string(),
            payload: FeedPayload::ByFloor(keyed(vec![
                (
                    "3",
                    keyed(vec![
                        (
                            "301",
                            json!({
                                "tipologia": "1 DORMITORIO VISTA AL RIO",
                                "estado": "disponible",
                                "superficieTotal": "58,40",
                                "precio": "$298,500",
                            }),
                        ),
                        (
                            "302",
                            json!({
                                "tipologia": "2 DORMITORIOS",
                                "estado": "en obra",
                                "superficieTotal": "82,10",
                                "precio": "$415,000",
                            }),
                        ),
                    ]),
                ),
                (
                    "12",
                    keyed(vec![
                        (
                            "1201",
                            json!({
                                "tipologia": "3 DORMITORIOS PREMIUM",
                                "estado": "disponible",
                                "superficieTotal": "210,45",
                                "precio": "$1,226,600",
                            }),
                        ),
                        (
                            "1202",
                            json!({
                                "tipologia": "3 DORMITORIOS",
                                "estado": "reservado",
                                "superficieTotal": "208,00",
                                "precio": "$1,190,000",
                            }),
                        ),
                    ]),
                ),
            ])),
        },
        ProjectFeed {
            project_id: 4,
            project_name: "Jardines del Este".to_string(),
            payload: FeedPayload::ByFloor(keyed(vec![
                (
                    "PB",
                    keyed(vec![
                        (
                            "PB-A",
                            json!({
                                "tipologia": "TOWN HOUSE CON JARDIN PROPIO",
                                "estado": "disponible",
                                "superficieTotal": 165.0,
                                "precio": 480_000,
                            }),
                        ),
                        (
                            "PB-B",
                            json!({
                                "tipologia": "2 DORMITORIOS CON PATIO",
                                "estado": "disponible",
                                "superficieTotal": 88.0,
                                "precio": 295_000,
                            }),
                        ),
                    ]),
                ),
                (
                    "1",
                    keyed(vec![(
                        "1-A",
                        json!({
                            "tipologia": "MONOAMBIENTE",
                            "estado": "bloqueado",
                            "superficieTotal": 40.0,
                            "precio": 152_000,
                        }),
                    )]),
                ),
            ])),
        },
        ProjectFeed {
            project_id: 5,
            project_name: "Altos de Belgrano".to_string(),
            payload: FeedPayload::BySection(keyed(vec![
                (
                    "2",
                    keyed(vec![(
                        "A",
                        vec![
                            json!({
                                "unidad": "2A1",
                                "tipologia": "4 DORMITORIOS",
                                "estado": "disponible",
                                "superficieTotal": 150.2,
                                "precio": 560_000,
                            }),
                            json!({
                                "unidad": "2A2",
                                "tipologia": "2 DORMITORIOS",
                                "estado": "disponible",
                                "superficieTotal": 81.0,
                                "precio": 310_000,
                            }),
                        ],
                    )]),
                ),
                (
                    "10",
                    keyed(vec![
                        (
                            "A",
                            vec![json!({
                                "unidad": "10A1",
                                "tipologia": "PENTHOUSE 4 DORMITORIOS",
                                "estado": "disponible",
                                "superficieTotal": 260.0,
                                "precio": 1_150_000,
                                "orientacion": "NO",
                            })],
                        ),
                        (
                            "B",
                            vec![json!({
                                "unidad": "10B1",
                                "tipologia": "PENTHOUSE",
                                "estado": "bloqueado",
                                "superficieTotal": 255.0,
                                "precio": 1_095_000,
                            })],
                        ),
                    ]),
                ),
            ])),
        },
        ProjectFeed {
            project_id: 6,
            project_name: "Nordelta Office Park".to_string(),
            payload: FeedPayload::BySection(keyed(vec![
                (
                    "PB",
                    keyed(vec![(
                        "Galeria",
                        vec![
                            json!({
                                "unidad": "L-01",
                                "tipologia": "LOCAL COMERCIAL SOBRE AVENIDA",
                                "estado": "disponible",
                                "superficieTotal": 120.0,
                                "precio": 420_000,
                            }),
                            json!({
                                "unidad": "L-02",
                                "tipologia": "LOCAL",
                                "estado": "reservado",
                                "superficieTotal": 95.0,
                                "precio": 335_000,
                            }),
                        ],
                    )]),
                ),
                (
                    "1",
                    keyed(vec![(
                        "Oficinas",
                        vec![json!({
                            "unidad": "L-11",
                            "tipologia": "LOCAL COMERCIAL",
                            "estado": "disponible",
                            "superficieTotal": 85.5,
                            "precio": 315_000,
                        })],
                    )]),
                ),
            ])),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::UnitStatus;

    #[test]
    fn standard_catalog_exposes_only_sellable_units() {
        let units = ProjectCatalog::standard().available_units();

        assert_eq!(units.len(), 14);
        assert!(units
            .iter()
            .all(|unit| unit.status == UnitStatus::Available));
    }

    #[test]
    fn placeholder_priced_unit_is_absent() {
        let units = ProjectCatalog::standard().available_units();

        assert!(!units.iter().any(|unit| unit.unit_number == "PH1"));
    }

    #[test]
    fn ground_floor_labels_resolve_to_floor_zero() {
        let units = ProjectCatalog::standard().available_units();
        let town_house = units
            .iter()
            .find(|unit| unit.unit_number == "PB-A")
            .expect("town house present");

        assert_eq!(town_house.floor, 0);
        assert_eq!(town_house.project_name, "Jardines del Este");
    }

    #[test]
    fn formatted_amounts_are_parsed_on_enumeration() {
        let units = ProjectCatalog::standard().available_units();
        let premium = units
            .iter()
            .find(|unit| unit.unit_number == "1201")
            .expect("premium unit present");

        assert_eq!(premium.sale_value, 1_226_600.0);
        assert_eq!(premium.total_area, 210.45);
        assert_eq!(premium.floor, 12);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = ProjectCatalog::from_path("./does-not-exist.json")
            .expect_err("expected io error");

        match error {
            InventoryImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
