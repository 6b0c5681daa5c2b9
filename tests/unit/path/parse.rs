use super::*;

fn points(d: &str) -> Vec<Vec<f64>> {
    parse(d).unwrap().to_matrix()
}

fn start() -> PenState {
    PenState {
        pos: Point::new(10.0, 10.0),
        start: Point::new(0.0, 0.0),
        reflect: Reflect::None,
    }
}

#[test]
fn tokenizer_splits_packed_numbers() {
    let toks = tokenize("M0.5.5-1e2,3E-1").unwrap();
    assert_eq!(
        toks,
        vec![
            Token::Command('M'),
            Token::Number(0.5),
            Token::Number(0.5),
            Token::Number(-100.0),
            Token::Number(0.3),
        ]
    );
}

#[test]
fn tokenizer_rejects_stray_characters() {
    assert!(matches!(tokenize("M 0 0 # 1"), Err(MorphError::Syntax(_))));
    assert!(matches!(tokenize("M - 1"), Err(MorphError::Syntax(_))));
}

#[test]
fn advance_line_is_a_straight_cubic() {
    let (next, emit) = advance(start(), Segment::LineTo(Point::new(20.0, 10.0)));
    assert_eq!(next.pos, Point::new(20.0, 10.0));
    assert_eq!(
        emit,
        Emit::Curve(CubicBez::new(
            (10.0, 10.0),
            (10.0, 10.0),
            (20.0, 10.0),
            (20.0, 10.0)
        ))
    );
}

#[test]
fn advance_close_collapses_controls_onto_the_start() {
    let (next, emit) = advance(start(), Segment::Close);
    assert_eq!(next.pos, Point::ZERO);
    let Emit::Close(c) = emit else {
        panic!("expected a close");
    };
    assert_eq!((c.p1, c.p2, c.p3), (Point::ZERO, Point::ZERO, Point::ZERO));
}

#[test]
fn advance_smooth_cubic_reflects_only_after_a_cubic() {
    let after_curve = PenState {
        reflect: Reflect::Cubic(Point::new(8.0, 6.0)),
        ..start()
    };
    let (_, emit) = advance(
        after_curve,
        Segment::SmoothCurveTo(Point::new(15.0, 15.0), Point::new(20.0, 20.0)),
    );
    let Emit::Curve(c) = emit else {
        panic!("expected a curve");
    };
    assert_eq!(c.p1, Point::new(12.0, 14.0));

    let after_quad = PenState {
        reflect: Reflect::Quad(Point::new(8.0, 6.0)),
        ..start()
    };
    let (_, emit) = advance(
        after_quad,
        Segment::SmoothCurveTo(Point::new(15.0, 15.0), Point::new(20.0, 20.0)),
    );
    let Emit::Curve(c) = emit else {
        panic!("expected a curve");
    };
    assert_eq!(c.p1, Point::new(10.0, 10.0));
}

#[test]
fn advance_quad_raises_with_two_thirds_ratio() {
    let pen = PenState {
        pos: Point::ZERO,
        ..start()
    };
    let (next, emit) = advance(
        pen,
        Segment::QuadTo(Point::new(3.0, 3.0), Point::new(6.0, 0.0)),
    );
    assert_eq!(next.reflect, Reflect::Quad(Point::new(3.0, 3.0)));
    let Emit::Curve(c) = emit else {
        panic!("expected a curve");
    };
    assert!((c.p1 - Point::new(2.0, 2.0)).hypot() < 1e-12);
    assert!((c.p2 - Point::new(4.0, 2.0)).hypot() < 1e-12);
}

#[test]
fn absolute_and_relative_lines_agree() {
    assert_eq!(points("M10 10 L20 10 L20 20"), points("m10 10 l10 0 l0 10"));
    assert_eq!(points("M10 10 H20 V20"), points("M10 10 h10 v10"));
}

#[test]
fn implicit_repeat_and_moveto_pairs() {
    // Extra pairs after a move are line-tos.
    let m = points("M0 0 10 0 10 10");
    assert_eq!(m.len(), 1);
    assert_eq!(m[0].len(), 2 + 12);
    assert_eq!(points("M0 0 L10 0 10 10"), m);

    // Relative repeats chain from the updated pen.
    assert_eq!(points("m0 0 10 0 0 10"), m);
}

#[test]
fn close_returns_to_the_start() {
    let m = points("M1 1 L5 1 L5 5 Z");
    assert_eq!(m.len(), 1);
    assert_eq!(&m[0][m[0].len() - 6..], &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    let parsed = parse("M1 1 L5 1 L5 5 Z").unwrap();
    assert!(parsed.sub_paths[0].is_closed());
}

#[test]
fn repeated_close_is_ignored() {
    assert_eq!(points("M0 0 L5 0 Z Z"), points("M0 0 L5 0 Z"));
}

#[test]
fn drawing_after_close_starts_a_new_sub_path() {
    let m = points("M1 1 L5 1 Z L9 9");
    assert_eq!(m.len(), 2);
    assert_eq!(m[1], vec![1.0, 1.0, 1.0, 1.0, 9.0, 9.0, 9.0, 9.0]);
}

#[test]
fn each_move_starts_a_sub_path() {
    let parsed = parse("M0 0 L10 0 L10 10 Z M20 20 L30 20 L30 30 Z").unwrap();
    assert_eq!(parsed.sub_paths.len(), 2);
    assert_eq!(parsed.sub_paths[1].start(), Some(Point::new(20.0, 20.0)));
    assert_eq!(parsed.identifier, "M0 0 L10 0 L10 10 Z M20 20 L30 20 L30 30 Z");
    assert_eq!(parsed.origin, PathOrigin::PathData);
}

#[test]
fn smooth_curves_reflect_the_previous_control() {
    let m = points("M0 0 C0 10 10 10 10 0 S20 -10 20 0");
    // Reflection of (10,10) through (10,0).
    assert_eq!(&m[0][8..10], &[10.0, -10.0]);
    // Without a preceding cubic the first control is the pen.
    let m = points("M0 0 S5 5 10 0");
    assert_eq!(&m[0][2..4], &[0.0, 0.0]);
}

#[test]
fn smooth_quad_chains_reflected_controls() {
    let m = points("M0 0 Q3 3 6 0 T12 0");
    // Second quad control is (9,-3); raised first control is 6 + 2/3 * (9 - 6).
    let g = &m[0][8..14];
    assert!((g[0] - 8.0).abs() < 1e-12);
    assert!((g[1] + 2.0).abs() < 1e-12);
    assert_eq!(&g[4..], &[12.0, 0.0]);
}

#[test]
fn sub_paths_are_measured() {
    let parsed = parse("M0 0 H10 V10 H0 Z").unwrap();
    assert_eq!(parsed.sub_paths[0].metrics.size, 40.0);
    assert_eq!(parsed.sub_paths[0].metrics.centroid_x, 5.0);
}

#[test]
fn unsupported_commands_are_syntax_errors() {
    let err = parse("M0 0 A5 5 0 0 1 10 10").unwrap_err();
    assert!(matches!(err, MorphError::Syntax(ref m) if m.contains("'A' is not supported")));
    assert!(matches!(parse("M0 0 x1"), Err(MorphError::Syntax(_))));
}

#[test]
fn malformed_argument_lists_are_syntax_errors() {
    assert!(matches!(parse("M0 0 L10"), Err(MorphError::Syntax(_))));
    assert!(matches!(parse("M0 0 C1 2 3 4"), Err(MorphError::Syntax(_))));
    assert!(matches!(parse("M0 0 Z 4"), Err(MorphError::Syntax(_))));
    assert!(matches!(parse("M"), Err(MorphError::Syntax(_))));
    assert!(matches!(parse("10 10 L0 0"), Err(MorphError::Syntax(_))));
    assert!(matches!(parse("L10 10"), Err(MorphError::Syntax(_))));
}

#[test]
fn empty_input_has_no_sub_paths() {
    assert!(parse("").unwrap().sub_paths.is_empty());
    assert!(parse("  \n ").unwrap().sub_paths.is_empty());
}
