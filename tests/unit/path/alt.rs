use super::*;

fn layer(path: Vec<Vec<f64>>) -> AltLayer {
    AltLayer {
        id: "layer-1".to_string(),
        path: path.into_iter().map(AltCommand).collect(),
    }
}

#[test]
fn move_and_curves_form_one_sub_path() {
    let l = layer(vec![
        vec![1.0, 0.0, 0.0],
        vec![4.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![4.0, 10.0, 10.0],
    ]);
    let parsed = parse_alt(&l).unwrap();
    assert_eq!(parsed.identifier, "layer-1");
    assert_eq!(parsed.sub_paths.len(), 1);
    assert_eq!(
        parsed.sub_paths[0].points,
        vec![
            0.0, 0.0, //
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, //
            10.0, 10.0, 10.0, 10.0, 10.0, 10.0,
        ]
    );
    assert!(matches!(parsed.origin, PathOrigin::AltLayer(ref cmds) if cmds.len() == 3));
}

#[test]
fn nan_fields_fall_back_to_the_first_pair() {
    let l = layer(vec![
        vec![1.0, 0.0, 0.0],
        vec![4.0, 2.0, 3.0, f64::NAN, f64::NAN, 8.0, 9.0],
    ]);
    let parsed = parse_alt(&l).unwrap();
    assert_eq!(
        parsed.sub_paths[0].points[2..],
        [2.0, 3.0, 2.0, 3.0, 8.0, 9.0]
    );
}

#[test]
fn close_tag_stops_reading() {
    let l = layer(vec![
        vec![1.0, 0.0, 0.0],
        vec![4.0, 5.0, 5.0],
        vec![7.0],
        vec![4.0, 99.0, 99.0],
    ]);
    let parsed = parse_alt(&l).unwrap();
    assert_eq!(parsed.sub_paths[0].group_count(), 1);
}

#[test]
fn each_move_starts_a_sub_path() {
    let l = layer(vec![
        vec![1.0, 0.0, 0.0],
        vec![4.0, 5.0, 5.0],
        vec![1.0, 20.0, 20.0],
        vec![4.0, 25.0, 25.0],
    ]);
    let parsed = parse_alt(&l).unwrap();
    assert_eq!(parsed.sub_paths.len(), 2);
    assert_eq!(parsed.sub_paths[1].start(), Some(kurbo::Point::new(20.0, 20.0)));
}

#[test]
fn curve_before_move_is_a_syntax_error() {
    let err = parse_alt(&layer(vec![vec![4.0, 1.0, 1.0]])).unwrap_err();
    assert!(matches!(err, MorphError::Syntax(_)));
}

#[test]
fn missing_coordinates_are_a_syntax_error() {
    let err = parse_alt(&layer(vec![vec![1.0, 0.0]])).unwrap_err();
    assert!(matches!(err, MorphError::Syntax(_)));
    let err = parse_alt(&layer(vec![Vec::new()])).unwrap_err();
    assert!(matches!(err, MorphError::Syntax(_)));
}

#[test]
fn layer_round_trips_through_json() {
    let json = r#"{"id":"a","path":[[1,0,0],[4,1,1,2,2,3,3],[7]]}"#;
    let l: AltLayer = serde_json::from_str(json).unwrap();
    assert_eq!(l.path.len(), 3);
    assert_eq!(l.path[0].tag(), Some(ALT_MOVE));
    let parsed = parse_alt(&l).unwrap();
    assert_eq!(parsed.sub_paths[0].points, vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
}
