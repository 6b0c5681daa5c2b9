use super::*;

#[test]
fn renders_move_then_curve_groups() {
    let m = vec![vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]];
    assert_eq!(
        render_path_data(&m, &Formatter::default()),
        "M 0 0 C 1 2 3 4 5 6"
    );
}

#[test]
fn truncates_by_default() {
    let m = vec![vec![0.129, 1.0, 1.555, 2.0, 3.0, 4.999, 5.0, 6.0]];
    assert_eq!(
        render_path_data(&m, &Formatter::default()),
        "M 0.12 1 C 1.55 2 3 4.99 5 6"
    );
}

#[test]
fn each_sub_path_gets_its_own_figure() {
    let m = vec![
        vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        vec![9.0, 9.0],
    ];
    assert_eq!(
        render_path_data(&m, &Formatter::default()),
        "M 0 0 C 1 1 1 1 1 1 M 9 9 C"
    );
}

#[test]
fn repeated_zero_length_groups_collapse() {
    let p = [4.0, 4.0, 4.0, 4.0, 4.0, 4.0];
    let mut pts = vec![0.0, 0.0];
    for _ in 0..3 {
        pts.extend_from_slice(&p);
    }
    let out = render_path_data(&[pts], &Formatter::default());
    assert_eq!(out, "M 0 0 C 4 4 4 4 4 4");
}

#[test]
fn zero_length_groups_that_differ_are_kept() {
    let pts = vec![
        0.0, 0.0, //
        4.0, 4.0, 4.0, 4.0, 4.0, 4.0, //
        5.0, 5.0, 5.0, 5.0, 5.0, 5.0,
    ];
    let out = render_path_data(&[pts], &Formatter::default());
    assert_eq!(out, "M 0 0 C 4 4 4 4 4 4 5 5 5 5 5 5");
}

#[test]
fn elision_compares_formatted_values() {
    // Differences below the formatter's precision still collapse.
    let pts = vec![
        0.0, 0.0, //
        4.001, 4.0, 4.0, 4.0, 4.0, 4.0, //
        4.0, 4.004, 4.0, 4.0, 4.0, 4.0,
    ];
    let out = render_path_data(&[pts.clone()], &Formatter::default());
    assert_eq!(out, "M 0 0 C 4 4 4 4 4 4");
    let out = render_path_data(&[pts], &Formatter::identity());
    assert_eq!(out.split(' ').count(), 4 + 12);
}

#[test]
fn straight_lines_are_never_elided() {
    let pts = vec![
        0.0, 0.0, //
        0.0, 0.0, 4.0, 4.0, 4.0, 4.0, //
        0.0, 0.0, 4.0, 4.0, 4.0, 4.0,
    ];
    let out = render_path_data(&[pts], &Formatter::default());
    assert_eq!(out.split(' ').count(), 4 + 12);
}

#[test]
fn negative_zero_group_is_kept_when_it_prints_differently() {
    let pts = vec![
        0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
        -0.0, -0.0, -0.0, -0.0, -0.0, -0.0,
    ];
    let out = render_path_data(&[pts], &Formatter::identity());
    assert_eq!(out, "M 0 0 C 0 0 0 0 0 0 -0 -0 -0 -0 -0 -0");
}

#[test]
fn unit_suffix_formatter() {
    let m = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]];
    let px = Formatter::custom(|n| format!("{n}px"));
    assert_eq!(
        render_path_data(&m, &px),
        "M 1px 2px C 3px 4px 5px 6px 7px 8px"
    );
}

#[test]
fn text_groups_elide_on_printed_equality() {
    let mut pts = vec![0.0, 0.0];
    for _ in 0..2 {
        pts.extend_from_slice(&[3.0; 6]);
    }
    let px = Formatter::custom(|n| format!("{n}px"));
    assert_eq!(
        render_path_data(&[pts], &px),
        "M 0px 0px C 3px 3px 3px 3px 3px 3px"
    );
}
