use super::*;
use std::collections::BTreeSet;

#[test]
fn test_taxonomy_shape() {
    assert_eq!(Category::ALL.len(), 3);
    for category in Category::ALL {
        let criteria = category.criteria();
        assert_eq!(criteria.len(), 6);
        for c in criteria {
            assert_eq!(c.subcriteria.len(), 4);
            assert!(!c.title.is_empty());
            assert!(!c.short_title.is_empty());
        }
    }
    assert_eq!(all_subcriterion_keys().count(), 72);
}

#[test]
fn test_category_order_fixed() {
    assert_eq!(
        Category::ALL,
        [Category::Architectural, Category::Urban, Category::Green]
    );
    for (i, c) in Category::ALL.iter().enumerate() {
        assert_eq!(c.index(), i);
        assert_eq!(Category::from_key(c.key()), Some(*c));
    }
    assert_eq!(Category::from_key("Green"), None);
}

#[test]
fn test_keys_unique_within_category() {
    for category in Category::ALL {
        let mut criteria = BTreeSet::new();
        let mut responses = BTreeSet::new();
        for c in category.criteria() {
            assert!(criteria.insert(c.key));
            for s in &c.subcriteria {
                assert!(responses.insert(format!("{}_{}", c.key, s.key)));
            }
        }
    }
}

#[test]
fn test_response_key_round_trip_all() {
    for key in all_subcriterion_keys() {
        let resolved = SubcriterionKey::from_response_key(key.category(), &key.response_key());
        assert_eq!(resolved, Some(key));
    }
}

#[test]
fn test_lookup_by_parts() {
    let key = SubcriterionKey::new(Category::Green, "daylight", "glare_control").unwrap();
    assert_eq!(key.criterion().title, "Daylight");
    assert_eq!(key.subcriterion().label, "Glare Control");
    assert_eq!(key.to_string(), "green.daylight.glare_control");

    assert!(SubcriterionKey::new(Category::Urban, "daylight", "glare_control").is_none());
    assert!(SubcriterionKey::from_response_key(Category::Architectural, "compactness").is_none());
    assert!(
        SubcriterionKey::from_response_key(Category::Architectural, "compactness_bogus").is_none()
    );
}

#[test]
fn test_short_titles() {
    let urban = Category::Urban.criteria();
    assert_eq!(urban[3].short_title, "Densification");
    assert_eq!(urban[5].short_title, "Neighborhood");
    let green = Category::Green.criteria();
    assert_eq!(green[1].short_title, "Air Quality");
    assert_eq!(green[4].short_title, "Biophilia");
}

#[test]
fn test_taxonomy_doc_serializes() {
    let doc = taxonomy_doc();
    assert_eq!(doc.len(), 3);
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json[0]["key"], "architectural");
    assert_eq!(json[0]["maximum"], 120);
    assert_eq!(json[2]["criteria"][5]["key"], "special_solutions");
    assert_eq!(
        json[0]["criteria"][0]["subcriteria"][1]["label"],
        "Floor Area Ratio (FAR)"
    );
}
