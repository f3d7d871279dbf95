use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Canonical typology the sales team can request by id, with the lexical
/// variants its free-text descriptions are known to use. Only id and label
/// go out over the wire; the variants are matcher internals.
#[derive(Debug, Clone, Serialize)]
pub struct Typology {
    pub id: u32,
    pub label: &'static str,
    #[serde(skip)]
    pub variants: &'static [&'static str],
}

const TYPOLOGIES: &[Typology] = &[
    Typology {
        id: 1,
        label: "1 Bedroom",
        variants: &["1 dorm", "1d"],
    },
    Typology {
        id: 2,
        label: "2 Bedrooms",
        variants: &["2 dorm", "2d"],
    },
    Typology {
        id: 3,
        label: "3 Bedrooms",
        variants: &["3 dorm", "3d"],
    },
    Typology {
        id: 4,
        label: "4 Bedrooms",
        variants: &["4 dorm", "4d"],
    },
    Typology {
        id: 5,
        label: "Studio",
        variants: &["monoambiente", "studio"],
    },
    Typology {
        id: 6,
        label: "Penthouse",
        variants: &["penthouse"],
    },
    Typology {
        id: 7,
        label: "Town House",
        variants: &["town house", "townhouse"],
    },
    Typology {
        id: 8,
        label: "Commercial Unit",
        variants: &["local"],
    },
];

static TYPOLOGY_INDEX: OnceLock<HashMap<u32, &'static Typology>> = OnceLock::new();

fn typology_index() -> &'static HashMap<u32, &'static Typology> {
    TYPOLOGY_INDEX.get_or_init(|| {
        TYPOLOGIES
            .iter()
            .map(|typology| (typology.id, typology))
            .collect()
    })
}

/// Every typology the matcher understands, in id order.
pub fn catalog() -> &'static [Typology] {
    TYPOLOGIES
}

pub fn typology_for_id(id: u32) -> Option<&'static Typology> {
    typology_index().get(&id).copied()
}

/// Outcome of testing a unit description against the requested typology ids.
#[derive(Debug, Clone, PartialEq)]
pub struct TypologyMatch {
    pub matched: bool,
    pub label: Option<&'static str>,
}

/// Heuristic substring classifier over human-authored descriptions. An empty
/// id list means no preference, which every unit satisfies without earning a
/// display label. Ids resolve in the order supplied; the first whose variants
/// appear in the description wins. Unknown ids are skipped.
pub fn match_description(description: &str, typology_ids: &[u32]) -> TypologyMatch {
    if typology_ids.is_empty() {
        return TypologyMatch {
            matched: true,
            label: None,
        };
    }

    let normalized = normalize_description(description);
    for id in typology_ids {
        if let Some(typology) = typology_for_id(*id) {
            if typology
                .variants
                .iter()
                .any(|variant| normalized.contains(variant))
            {
                return TypologyMatch {
                    matched: true,
                    label: Some(typology.label),
                };
            }
        }
    }

    TypologyMatch {
        matched: false,
        label: None,
    }
}

fn normalize_description(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bedroom_counts_match_dormitorio_phrasings() {
        let result = match_description("3 DORMITORIOS C/DEPENDENCIA", &[3]);
        assert!(result.matched);
        assert_eq!(result.label, Some("3 Bedrooms"));

        let compact = match_description("APTO 2D VISTA AL PARQUE", &[2]);
        assert!(compact.matched);
        assert_eq!(compact.label, Some("2 Bedrooms"));
    }

    #[test]
    fn empty_preference_matches_without_a_label() {
        let result = match_description("LOCAL COMERCIAL", &[]);
        assert!(result.matched);
        assert_eq!(result.label, None);
    }

    #[test]
    fn first_requested_id_wins() {
        let description = "PENTHOUSE 4 DORMITORIOS";

        let bedrooms_first = match_description(description, &[4, 6]);
        assert_eq!(bedrooms_first.label, Some("4 Bedrooms"));

        let penthouse_first = match_description(description, &[6, 4]);
        assert_eq!(penthouse_first.label, Some("Penthouse"));
    }

    #[test]
    fn casing_and_spacing_are_tolerated() {
        assert!(match_description("town  HOUSE con jardin", &[7]).matched);
        assert!(match_description("TOWNHOUSE", &[7]).matched);
        assert!(match_description("Monoambiente al frente", &[5]).matched);
        assert!(match_description("Studio apartment", &[5]).matched);
    }

    #[test]
    fn unknown_ids_are_skipped_not_fatal() {
        let result = match_description("3 DORMITORIOS", &[99, 3]);
        assert!(result.matched);
        assert_eq!(result.label, Some("3 Bedrooms"));
    }

    #[test]
    fn unrelated_descriptions_do_not_match() {
        let result = match_description("COCHERA CUBIERTA", &[1, 2, 3, 6]);
        assert!(!result.matched);
        assert_eq!(result.label, None);
    }

    #[test]
    fn catalog_is_ordered_and_indexed() {
        let ids: Vec<u32> = catalog().iter().map(|typology| typology.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(typology_for_id(6).map(|t| t.label), Some("Penthouse"));
        assert!(typology_for_id(42).is_none());
    }
}
