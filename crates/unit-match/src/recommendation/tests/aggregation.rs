use super::common::*;

use crate::inventory::UnitStatus;
use crate::recommendation::domain::{ClientCriteria, CriteriaInput};
use crate::recommendation::scoring::ScoringConfig;
use crate::recommendation::{
    recommend_within, run_within, RecommendationError, RecommendationService,
};

#[test]
fn unrestricted_criteria_rank_every_available_unit() {
    let run = run_within(
        &catalog(),
        &ClientCriteria::unrestricted(),
        &ScoringConfig::default(),
    );

    assert_eq!(run.evaluated_units, 14);
    assert_eq!(run.recommendations.len(), 14);
    assert!(run.recommendations.iter().all(|rec| rec.result.score == 55));
    assert!(run
        .recommendations
        .iter()
        .all(|rec| rec.unit.status == UnitStatus::Available));
}

#[test]
fn equal_scores_keep_feed_encounter_order() {
    let recommendations = recommend_within(
        &catalog(),
        &ClientCriteria::unrestricted(),
        &ScoringConfig::default(),
    );

    let numbers: Vec<&str> = recommendations
        .iter()
        .map(|rec| rec.unit.unit_number.as_str())
        .collect();
    assert_eq!(
        numbers,
        vec![
            "101", "102", "804", "2A", "3B", "1201", "301", "PB-A", "PB-B", "10A1", "2A1",
            "2A2", "L-11", "L-01"
        ]
    );
}

#[test]
fn project_preference_excludes_every_other_project() {
    let criteria = ClientCriteria::from_input(CriteriaInput {
        project_ids: vec![2],
        ..CriteriaInput::default()
    });
    let run = run_within(&catalog(), &criteria, &ScoringConfig::default());

    assert_eq!(run.evaluated_units, 2);
    assert_eq!(run.recommendations.len(), 2);
    assert!(run
        .recommendations
        .iter()
        .all(|rec| rec.unit.project_id == 2));
    assert!(run.recommendations.iter().all(|rec| rec.result.score == 85));
}

#[test]
fn three_bedroom_search_ranks_premium_units_first() {
    let run = run_within(&catalog(), &three_bedroom_criteria(), &ScoringConfig::default());

    assert_eq!(run.evaluated_units, 14);
    let ranked: Vec<(&str, u8)> = run
        .recommendations
        .iter()
        .map(|rec| (rec.unit.unit_number.as_str(), rec.result.score))
        .collect();
    assert_eq!(
        ranked,
        vec![("804", 70), ("1201", 65), ("3B", 35), ("PB-A", 35), ("2A1", 35)]
    );
}

#[test]
fn every_returned_score_meets_the_default_threshold() {
    let recommendations = recommend_within(
        &catalog(),
        &three_bedroom_criteria(),
        &ScoringConfig::default(),
    );

    assert!(!recommendations.is_empty());
    assert!(recommendations.iter().all(|rec| rec.result.score >= 30));
}

#[test]
fn threshold_drops_units_scoring_below_it() {
    let config = ScoringConfig {
        minimum_score: 60,
        ..ScoringConfig::default()
    };
    let run = run_within(&catalog(), &ClientCriteria::unrestricted(), &config);

    assert_eq!(run.evaluated_units, 14);
    assert!(run.recommendations.is_empty());
}

#[test]
fn results_are_capped_and_sorted_by_score() {
    let config = ScoringConfig {
        max_results: 3,
        ..ScoringConfig::default()
    };
    let recommendations = recommend_within(&catalog(), &ClientCriteria::unrestricted(), &config);

    assert_eq!(recommendations.len(), 3);
    let numbers: Vec<&str> = recommendations
        .iter()
        .map(|rec| rec.unit.unit_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["101", "102", "804"]);
}

#[test]
fn scan_cap_bounds_the_work_per_run() {
    let config = ScoringConfig {
        max_units_scanned: 5,
        ..ScoringConfig::default()
    };
    let run = run_within(&catalog(), &ClientCriteria::unrestricted(), &config);

    assert_eq!(run.evaluated_units, 5);
    assert_eq!(run.recommendations.len(), 5);
    assert_eq!(run.recommendations[4].unit.unit_number, "3B");
}

#[test]
fn identical_runs_produce_identical_output() {
    let catalog = catalog();
    let criteria = three_bedroom_criteria();
    let config = ScoringConfig::default();

    let first = run_within(&catalog, &criteria, &config);
    let second = run_within(&catalog, &criteria, &config);

    assert_eq!(first, second);
}

#[test]
fn service_facade_matches_the_free_functions() {
    let service = RecommendationService::with_defaults();
    let criteria = three_bedroom_criteria();

    let direct = recommend_within(service.catalog(), &criteria, service.config());
    assert_eq!(service.recommend(&criteria), direct);
}

#[test]
fn inline_snapshot_is_ranked_like_a_catalog() {
    let service = RecommendationService::with_defaults();
    let snapshot = serde_json::json!([
        {
            "projectId": 9,
            "projectName": "Riverside Annex",
            "units": [
                {
                    "unit": "R1",
                    "description": "2 Bedrooms",
                    "status": "available",
                    "totalArea": 82.0,
                    "saleValue": 240_000,
                }
            ]
        }
    ]);

    let run = service
        .run_snapshot(snapshot, &ClientCriteria::unrestricted())
        .expect("snapshot parses");

    assert_eq!(run.evaluated_units, 1);
    assert_eq!(run.recommendations.len(), 1);
    assert_eq!(run.recommendations[0].unit.project_name, "Riverside Annex");
}

#[test]
fn inline_snapshot_with_wrong_shape_is_rejected() {
    let service = RecommendationService::with_defaults();
    let result = service.run_snapshot(
        serde_json::json!({"not": "a feed list"}),
        &ClientCriteria::unrestricted(),
    );

    assert!(matches!(result, Err(RecommendationError::Inventory(_))));
}
