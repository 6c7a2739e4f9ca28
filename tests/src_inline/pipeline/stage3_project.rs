use super::*;

const EPS: f64 = 1e-6;

fn aug(a: f64, u: f64, g: f64) -> Vec<CategoryInput> {
    [("Architectural", a), ("Urban", u), ("Green", g)]
        .into_iter()
        .map(|(name, score)| CategoryInput {
            name: name.to_string(),
            score,
            maximum: 120.0,
        })
        .collect()
}

fn assert_contained(geom: &CompassGeometry) {
    for p in geom.coordinates() {
        assert!(
            p.x >= -EPS && p.x <= geom.canvas_size + EPS,
            "x out of canvas: {p:?}"
        );
        assert!(
            p.y >= -EPS && p.y <= geom.canvas_size + EPS,
            "y out of canvas: {p:?}"
        );
    }
}

#[test]
fn test_architectural_spoke_points_north() {
    let geom = project(&aug(120.0, 120.0, 120.0), 400.0).unwrap();
    assert!((geom.center.x - 200.0).abs() < EPS);
    assert!((geom.center.y - 200.0).abs() < EPS);
    assert!((geom.max_radius - 140.0).abs() < EPS);

    let end = geom.spokes[0].end;
    assert!((end.x - 200.0).abs() < EPS);
    assert!((end.y - 60.0).abs() < EPS);
    let tip = geom.polygon[0].position;
    assert!((tip.x - 200.0).abs() < EPS);
    assert!((tip.y - 60.0).abs() < EPS);
}

#[test]
fn test_spoke_angles_follow_input_order() {
    let geom = project(&aug(10.0, 50.0, 100.0), 400.0).unwrap();
    let angles: Vec<f64> = geom.spokes.iter().map(|s| s.angle_deg).collect();
    assert_eq!(angles, vec![-90.0, 30.0, 150.0]);

    // Urban at 30 degrees: right and below the centre.
    let u = geom.spokes[1].end;
    assert!((u.x - (200.0 + 140.0 * 30f64.to_radians().cos())).abs() < EPS);
    assert!((u.y - (200.0 + 140.0 * 30f64.to_radians().sin())).abs() < EPS);
    // Green at 150 degrees: left and below.
    let g = geom.spokes[2].end;
    assert!(g.x < 200.0 && g.y > 200.0);
}

#[test]
fn test_order_is_identity_not_magnitude() {
    let geom = project(&aug(30.0, 120.0, 60.0), 400.0).unwrap();
    assert!((geom.polygon[0].percentage - 0.25).abs() < EPS);
    assert!((geom.polygon[1].percentage - 1.0).abs() < EPS);
    assert!((geom.polygon[2].percentage - 0.5).abs() < EPS);
    assert_eq!(geom.labels[1].name, "Urban");
}

#[test]
fn test_rings_and_labels() {
    let geom = project(&aug(72.0, 72.0, 72.0), 400.0).unwrap();
    let radii: Vec<f64> = geom.rings.iter().map(|r| r.radius).collect();
    assert_eq!(radii, vec![35.0, 70.0, 105.0, 140.0]);
    let levels: Vec<f64> = geom.rings.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![0.25, 0.5, 0.75, 1.0]);

    assert!((geom.label_radius - 170.0).abs() < EPS);
    let a = geom.labels[0].position;
    assert!((a.x - 200.0).abs() < EPS);
    assert!((a.y - 30.0).abs() < EPS);
    assert_eq!(geom.labels[0].score, 72.0);
    assert_eq!(geom.labels[0].maximum, 120.0);
}

#[test]
fn test_containment_grid_at_350() {
    let steps = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
    for &a in &steps {
        for &u in &steps {
            for &g in &steps {
                let geom = project(&aug(a * 120.0, u * 120.0, g * 120.0), 350.0).unwrap();
                assert_contained(&geom);
            }
        }
    }
}

#[test]
fn test_containment_small_canvas_and_large_offset() {
    let profile = CompassProfile::default_v1().with_label_offset(250.0);
    for canvas in [40.0, 100.0, 350.0, 1000.0] {
        let geom = project_with_profile(&aug(120.0, 120.0, 120.0), canvas, &profile).unwrap();
        assert_contained(&geom);
        let geom = project(&aug(120.0, 0.0, 60.0), canvas).unwrap();
        assert_contained(&geom);
    }
}

#[test]
fn test_over_maximum_is_clamped_to_outer_ring() {
    let geom = project(&aug(150.0, -20.0, 60.0), 400.0).unwrap();
    assert_eq!(geom.polygon[0].percentage, 1.0);
    assert!((geom.polygon[0].radius - geom.max_radius).abs() < EPS);
    assert_eq!(geom.polygon[1].percentage, 0.0);
    assert_contained(&geom);
    // the label keeps the raw score for display
    assert_eq!(geom.labels[0].score, 150.0);
}

#[test]
fn test_degenerate_all_zero() {
    let geom = project(&aug(0.0, 0.0, 0.0), 400.0).unwrap();
    for p in geom.polygon_points() {
        assert!((p.x - geom.center.x).abs() < EPS);
        assert!((p.y - geom.center.y).abs() < EPS);
    }
    assert_eq!(geom.overall_percentage, 0);
}

#[test]
fn test_maximum_on_outer_ring() {
    let geom = project(&aug(120.0, 120.0, 120.0), 400.0).unwrap();
    for p in &geom.polygon {
        assert_eq!(p.radius, geom.max_radius);
        let dx = p.position.x - geom.center.x;
        let dy = p.position.y - geom.center.y;
        assert!(((dx * dx + dy * dy).sqrt() - geom.max_radius).abs() < EPS);
    }
    assert_eq!(geom.overall_percentage, 100);
}

#[test]
fn test_overall_percentage() {
    assert_eq!(overall_percentage(&aug(72.0, 72.0, 72.0)).unwrap(), 60);
    assert_eq!(overall_percentage(&aug(85.0, 90.0, 82.0)).unwrap(), 71);
    // 9/360 = 2.5% rounds half-up
    assert_eq!(overall_percentage(&aug(9.0, 0.0, 0.0)).unwrap(), 3);
    assert_eq!(overall_percentage(&aug(0.0, 0.0, 0.0)).unwrap(), 0);
}

#[test]
fn test_invalid_category_count() {
    let mut two = aug(1.0, 2.0, 3.0);
    two.pop();
    assert_eq!(
        project(&two, 400.0).unwrap_err(),
        ProjectError::InvalidCategoryCount {
            expected: 3,
            actual: 2
        }
    );
    let mut four = aug(1.0, 2.0, 3.0);
    four.push(four[0].clone());
    assert!(matches!(
        project(&four, 400.0),
        Err(ProjectError::InvalidCategoryCount { actual: 4, .. })
    ));
    assert!(matches!(
        overall_percentage(&[]),
        Err(ProjectError::InvalidCategoryCount { actual: 0, .. })
    ));
}

#[test]
fn test_zero_maximum_guarded() {
    let mut input = aug(10.0, 10.0, 10.0);
    input[2].maximum = 0.0;
    assert!(matches!(
        project(&input, 400.0),
        Err(ProjectError::DivisionByZero { ref name, .. }) if name == "Green"
    ));
    input[2].maximum = -5.0;
    assert!(matches!(
        overall_percentage(&input),
        Err(ProjectError::DivisionByZero { .. })
    ));
    input[2].maximum = f64::NAN;
    assert!(project(&input, 400.0).is_err());
}

#[test]
fn test_non_finite_score_and_canvas_rejected() {
    let mut input = aug(10.0, 10.0, 10.0);
    input[1].score = f64::NAN;
    assert!(matches!(
        project(&input, 400.0),
        Err(ProjectError::NonFiniteScore { .. })
    ));

    let input = aug(10.0, 10.0, 10.0);
    assert_eq!(
        project(&input, 0.0).unwrap_err(),
        ProjectError::InvalidCanvasSize(0.0)
    );
    assert!(project(&input, -10.0).is_err());
    assert!(project(&input, f64::INFINITY).is_err());
}

#[test]
fn test_invalid_profile_rejected() {
    let mut profile = CompassProfile::default_v1();
    profile.radius_fraction = 0.8;
    assert!(matches!(
        project_with_profile(&aug(1.0, 1.0, 1.0), 400.0, &profile),
        Err(ProjectError::InvalidProfile(_))
    ));
}

#[test]
fn test_projection_deterministic() {
    let input = aug(33.0, 71.0, 104.0);
    let a = project(&input, 512.0).unwrap();
    let b = project(&input, 512.0).unwrap();
    assert_eq!(a, b);
    for (pa, pb) in a.coordinates().iter().zip(b.coordinates().iter()) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
    }
}
