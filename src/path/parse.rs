//! Path-data parsing into cubic-only sub-paths.
//!
//! Supported commands are `M H V L Z C S Q T` in either case. Lowercase commands are relative to
//! the pen. Lines and closes become straight cubic groups and quadratics are raised to cubics, so
//! every sub-path is a start point followed by six-value curve groups.

use crate::{
    foundation::{
        core::{CubicBez, Point, QuadBez},
        error::{MorphError, MorphResult},
    },
    path::model::{ParsedPath, PathOrigin, SubPath},
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

/// A letter and the numbers that followed it.
#[derive(Clone, Debug, PartialEq)]
struct CommandRun {
    letter: char,
    args: Vec<f64>,
}

/// One absolute drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Segment {
    MoveTo(Point),
    LineTo(Point),
    HorizontalTo(f64),
    VerticalTo(f64),
    CurveTo(Point, Point, Point),
    SmoothCurveTo(Point, Point),
    QuadTo(Point, Point),
    SmoothQuadTo(Point),
    Close,
}

/// Control point available for reflection by the next smooth command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Reflect {
    None,
    /// Second control point of the previous `C` or `S`.
    Cubic(Point),
    /// Control point of the previous `Q` or `T`.
    Quad(Point),
}

/// Pen state threaded through [`advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PenState {
    pub(crate) pos: Point,
    pub(crate) start: Point,
    pub(crate) reflect: Reflect,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            pos: Point::ZERO,
            start: Point::ZERO,
            reflect: Reflect::None,
        }
    }
}

/// What a segment contributes to the sub-path being built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Emit {
    Move(Point),
    Curve(CubicBez),
    Close(CubicBez),
}

fn arity(command: char) -> Option<usize> {
    match command {
        'M' | 'L' | 'T' => Some(2),
        'H' | 'V' => Some(1),
        'C' => Some(6),
        'S' | 'Q' => Some(4),
        'Z' => Some(0),
        _ => None,
    }
}

fn reflect(p: Point, about: Point) -> Point {
    Point::new(about.x * 2.0 - p.x, about.y * 2.0 - p.y)
}

fn line(from: Point, to: Point) -> CubicBez {
    CubicBez::new(from, from, to, to)
}

/// Apply one absolute segment to the pen.
pub(crate) fn advance(state: PenState, seg: Segment) -> (PenState, Emit) {
    let pos = state.pos;
    let drawn = |to: Point, reflect: Reflect| PenState {
        pos: to,
        start: state.start,
        reflect,
    };

    match seg {
        Segment::MoveTo(p) => (
            PenState {
                pos: p,
                start: p,
                reflect: Reflect::None,
            },
            Emit::Move(p),
        ),
        Segment::LineTo(p) => (drawn(p, Reflect::None), Emit::Curve(line(pos, p))),
        Segment::HorizontalTo(x) => {
            let p = Point::new(x, pos.y);
            (drawn(p, Reflect::None), Emit::Curve(line(pos, p)))
        }
        Segment::VerticalTo(y) => {
            let p = Point::new(pos.x, y);
            (drawn(p, Reflect::None), Emit::Curve(line(pos, p)))
        }
        Segment::CurveTo(c1, c2, to) => (
            drawn(to, Reflect::Cubic(c2)),
            Emit::Curve(CubicBez::new(pos, c1, c2, to)),
        ),
        Segment::SmoothCurveTo(c2, to) => {
            let c1 = match state.reflect {
                Reflect::Cubic(prev) => reflect(prev, pos),
                _ => pos,
            };
            (
                drawn(to, Reflect::Cubic(c2)),
                Emit::Curve(CubicBez::new(pos, c1, c2, to)),
            )
        }
        Segment::QuadTo(ctrl, to) => (
            drawn(to, Reflect::Quad(ctrl)),
            Emit::Curve(QuadBez::new(pos, ctrl, to).raise()),
        ),
        Segment::SmoothQuadTo(to) => {
            let ctrl = match state.reflect {
                Reflect::Quad(prev) => reflect(prev, pos),
                _ => pos,
            };
            (
                drawn(to, Reflect::Quad(ctrl)),
                Emit::Curve(QuadBez::new(pos, ctrl, to).raise()),
            )
        }
        Segment::Close => {
            let s = state.start;
            (
                drawn(s, Reflect::None),
                Emit::Close(CubicBez::new(pos, s, s, s)),
            )
        }
    }
}

fn tokenize(d: &str) -> MorphResult<Vec<Token>> {
    let bytes = d.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() || b == b',' {
            i += 1;
            continue;
        }
        if b.is_ascii_alphabetic() {
            tokens.push(Token::Command(char::from(b)));
            i += 1;
            continue;
        }
        if b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.') {
            let end = scan_number(bytes, i);
            if end == i {
                return Err(MorphError::syntax(format!(
                    "malformed number at byte {i} in path data"
                )));
            }
            let text = &d[i..end];
            let n: f64 = text
                .parse()
                .map_err(|_| MorphError::syntax(format!("malformed number '{text}'")))?;
            tokens.push(Token::Number(n));
            i = end;
            continue;
        }

        let c = d[i..].chars().next().unwrap_or('?');
        return Err(MorphError::syntax(format!(
            "unexpected character '{c}' in path data"
        )));
    }
    Ok(tokens)
}

/// Scan one number starting at `start`; returns `start` when no digits were found.
pub(crate) fn scan_number(bytes: &[u8], start: usize) -> usize {
    let digits = |mut j: usize| {
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits(i);
    let mut end = int_end;
    let mut has_digits = int_end > i;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return start;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

fn group_runs(tokens: Vec<Token>) -> MorphResult<Vec<CommandRun>> {
    let mut runs: Vec<CommandRun> = Vec::new();
    for token in tokens {
        match token {
            Token::Command(letter) => runs.push(CommandRun {
                letter,
                args: Vec::new(),
            }),
            Token::Number(n) => match runs.last_mut() {
                Some(run) => run.args.push(n),
                None => {
                    return Err(MorphError::syntax(
                        "path data must start with a command letter",
                    ));
                }
            },
        }
    }
    Ok(runs)
}

/// Build the absolute segment for one argument group.
///
/// `repeat` is true for the second and later groups of a run; repeated move-to pairs are
/// line-tos.
fn segment(command: char, relative: bool, repeat: bool, args: &[f64], pen: Point) -> Segment {
    let pt = |i: usize| {
        let p = Point::new(args[i], args[i + 1]);
        if relative {
            Point::new(p.x + pen.x, p.y + pen.y)
        } else {
            p
        }
    };

    match command {
        'M' if repeat => Segment::LineTo(pt(0)),
        'M' => Segment::MoveTo(pt(0)),
        'L' => Segment::LineTo(pt(0)),
        'H' => Segment::HorizontalTo(if relative { args[0] + pen.x } else { args[0] }),
        'V' => Segment::VerticalTo(if relative { args[0] + pen.y } else { args[0] }),
        'C' => Segment::CurveTo(pt(0), pt(2), pt(4)),
        'S' => Segment::SmoothCurveTo(pt(0), pt(2)),
        'Q' => Segment::QuadTo(pt(0), pt(2)),
        'T' => Segment::SmoothQuadTo(pt(0)),
        _ => Segment::Close,
    }
}

/// Sub-path accumulator around the pen state.
#[derive(Default)]
struct Builder {
    state: PenState,
    finished: Vec<SubPath>,
    current: Option<Vec<f64>>,
    closed: bool,
}

impl Builder {
    fn apply(&mut self, seg: Segment) -> MorphResult<()> {
        if self.closed && seg == Segment::Close {
            return Ok(());
        }
        let is_move = matches!(seg, Segment::MoveTo(_));
        if !is_move {
            if self.current.is_none() {
                return Err(MorphError::syntax(
                    "path data must begin with a move-to command",
                ));
            }
            if self.closed {
                // Drawing after a close starts a new sub-path at the closed start point.
                self.begin(self.state.start);
            }
        }

        let (state, emit) = advance(self.state, seg);
        self.state = state;
        match emit {
            Emit::Move(p) => self.begin(p),
            Emit::Curve(c) => self.push(c),
            Emit::Close(c) => {
                self.push(c);
                self.closed = true;
            }
        }
        Ok(())
    }

    fn begin(&mut self, p: Point) {
        if let Some(done) = self.current.replace(vec![p.x, p.y]) {
            self.finished.push(SubPath::new(done));
        }
        self.closed = false;
    }

    fn push(&mut self, c: CubicBez) {
        if let Some(points) = self.current.as_mut() {
            points.extend_from_slice(&[c.p1.x, c.p1.y, c.p2.x, c.p2.y, c.p3.x, c.p3.y]);
        }
    }

    fn finish(mut self) -> Vec<SubPath> {
        if let Some(done) = self.current.take() {
            self.finished.push(SubPath::new(done));
        }
        self.finished
    }
}

/// Parse path data into the canonical cubic model.
///
/// Fails with [`MorphError::Syntax`] for unsupported command letters (including arcs), numbers
/// before the first command, argument counts that do not fit the command's arity, and drawing
/// before the first move-to. Empty input yields a path with no sub-paths.
#[tracing::instrument(skip(raw), fields(len = raw.len()))]
pub fn parse(raw: &str) -> MorphResult<ParsedPath> {
    let runs = group_runs(tokenize(raw)?)?;
    let mut builder = Builder::default();

    for run in runs {
        let command = run.letter.to_ascii_uppercase();
        let Some(n) = arity(command) else {
            return Err(MorphError::syntax(format!(
                "'{}' is not supported",
                run.letter
            )));
        };
        let relative = run.letter.is_ascii_lowercase();

        if n == 0 {
            if !run.args.is_empty() {
                return Err(MorphError::syntax(format!(
                    "'{}' takes no arguments, got {}",
                    run.letter,
                    run.args.len()
                )));
            }
            builder.apply(Segment::Close)?;
            continue;
        }

        if run.args.is_empty() || run.args.len() % n != 0 {
            return Err(MorphError::syntax(format!(
                "'{}' expects arguments in groups of {n}, got {}",
                run.letter,
                run.args.len()
            )));
        }
        for (k, args) in run.args.chunks_exact(n).enumerate() {
            let seg = segment(command, relative, k > 0, args, builder.state.pos);
            builder.apply(seg)?;
        }
    }

    Ok(ParsedPath {
        identifier: raw.to_string(),
        origin: PathOrigin::PathData,
        sub_paths: builder.finish(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/path/parse.rs"]
mod tests;
