use super::*;
use crate::model::scores::{CATEGORY_MAX, CRITERION_MAX, OVERALL_MAX, SUBCRITERION_COUNT};
use crate::model::taxonomy::all_subcriterion_keys;

fn uniform_inputs(value: i64) -> ScoreInputs {
    all_subcriterion_keys().map(|k| (k, value)).collect()
}

fn lcg_inputs(seed: u64) -> ScoreInputs {
    let mut state = seed;
    let mut out = ScoreInputs::new();
    for key in all_subcriterion_keys() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let v = (state >> 33) % 7;
        // 6 leaves the entry blank
        if v < 6 {
            out.insert(key, v as i64);
        }
    }
    out
}

#[test]
fn test_bounds_and_additivity() {
    for seed in 0..64u64 {
        let agg = score(&lcg_inputs(seed)).unwrap();
        let mut overall = 0u16;
        for cat in agg.categories() {
            let mut cat_sum = 0u16;
            for c in cat.criteria() {
                assert!(c.total() <= CRITERION_MAX);
                let sub_sum: u8 = c.subcriteria().iter().map(|s| s.value()).sum();
                assert_eq!(c.total(), sub_sum);
                cat_sum += c.total() as u16;
            }
            assert!(cat.total() <= CATEGORY_MAX);
            assert_eq!(cat.total(), cat_sum);
            overall += cat.total();
        }
        assert!(agg.overall() <= OVERALL_MAX);
        assert_eq!(agg.overall(), overall);
    }
}

#[test]
fn test_idempotent() {
    let inputs = lcg_inputs(7);
    let a = score(&inputs).unwrap();
    let b = score(&inputs).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_rejects_above_range() {
    let key = SubcriterionKey::new(Category::Urban, "walkability", "traffic_calming").unwrap();
    let mut inputs = ScoreInputs::new();
    inputs.insert(key, 6);
    let err = score(&inputs).unwrap_err();
    assert_eq!(
        err,
        ScoreError::InvalidScoreRange(vec![OutOfRange { key, value: 6 }])
    );
    assert!(err.to_string().contains("urban.walkability.traffic_calming=6"));
}

#[test]
fn test_rejects_negative() {
    let key = SubcriterionKey::new(Category::Green, "biophilia", "access_green_spaces").unwrap();
    let mut inputs = ScoreInputs::new();
    inputs.insert(key, -1);
    assert!(matches!(
        score(&inputs),
        Err(ScoreError::InvalidScoreRange(ref v)) if v.len() == 1 && v[0].value == -1
    ));
}

#[test]
fn test_rejection_reports_every_offender_in_order() {
    let mut inputs = uniform_inputs(2);
    let a = SubcriterionKey::new(Category::Green, "daylight", "view_quality").unwrap();
    let b = SubcriterionKey::new(Category::Architectural, "identity", "public_perception").unwrap();
    inputs.insert(a, 9);
    inputs.insert(b, -3);
    let ScoreError::InvalidScoreRange(offenders) = score(&inputs).unwrap_err();
    assert_eq!(offenders.len(), 2);
    assert_eq!(offenders[0].key, b);
    assert_eq!(offenders[1].key, a);
}

#[test]
fn test_all_threes_scenario() {
    let agg = score(&uniform_inputs(3)).unwrap();
    for (_, c) in agg.criteria() {
        assert_eq!(c.total(), 12);
    }
    for cat in agg.categories() {
        assert_eq!(cat.total(), 72);
    }
    assert_eq!(agg.overall(), 216);
    assert_eq!(agg.overall_percentage(), 60);
    assert_eq!(agg.sustainability_percentage(), 60.0);
    assert!(agg.is_complete());
}

#[test]
fn test_all_zero_scenario() {
    let agg = score(&uniform_inputs(0)).unwrap();
    assert_eq!(agg.overall(), 0);
    assert!(agg.categories().iter().all(|c| c.total() == 0));
    assert_eq!(agg.overall_percentage(), 0);
    assert!(agg.subcriteria().all(|(_, s)| s.was_provided()));
}

#[test]
fn test_all_fives_scenario() {
    let agg = score(&uniform_inputs(5)).unwrap();
    assert_eq!(agg.overall(), 360);
    assert!(agg.categories().iter().all(|c| c.total() == 120));
    assert_eq!(agg.overall_percentage(), 100);
    assert_eq!(agg.sustainability_percentage(), 100.0);
}

#[test]
fn test_missing_distinguished_from_zero() {
    let entered = SubcriterionKey::new(Category::Architectural, "compactness", "floor_area_ratio")
        .unwrap();
    let mut inputs = ScoreInputs::new();
    inputs.insert(entered, 0);
    let agg = score(&inputs).unwrap();

    assert_eq!(agg.overall(), 0);
    assert_eq!(agg.provided_count(), 1);
    assert!(!agg.is_complete());
    for (key, s) in agg.subcriteria() {
        assert_eq!(s.value(), 0);
        assert_eq!(s.was_provided(), key == entered);
    }
}

#[test]
fn test_empty_input_is_total_aggregation() {
    let agg = score(&ScoreInputs::new()).unwrap();
    assert_eq!(agg.subcriteria().count(), SUBCRITERION_COUNT);
    assert_eq!(agg.criteria().count(), 18);
    assert_eq!(agg.overall(), 0);
    assert_eq!(agg.provided_count(), 0);
}

#[test]
fn test_values_land_on_their_keys() {
    let key = SubcriterionKey::new(Category::Urban, "mixed_use", "economic_viability").unwrap();
    let mut inputs = ScoreInputs::new();
    inputs.insert(key, 4);
    let agg = score(&inputs).unwrap();
    let urban = agg.category(Category::Urban);
    assert_eq!(urban.total(), 4);
    assert_eq!(urban.criteria()[1].key(), "mixed_use");
    assert_eq!(urban.criteria()[1].total(), 4);
    assert_eq!(urban.criteria()[1].subcriteria()[3].value(), 4);
    assert_eq!(agg.category(Category::Architectural).total(), 0);
    assert_eq!(agg.category(Category::Green).total(), 0);
}

#[test]
fn test_category_inputs_feed_projector_in_order() {
    let agg = score(&uniform_inputs(3)).unwrap();
    let inputs = agg.category_inputs();
    let names: Vec<&str> = inputs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Architectural", "Urban", "Green"]);
    assert!(inputs.iter().all(|c| c.score == 72.0 && c.maximum == 120.0));
}
