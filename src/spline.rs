//! Monotone cubic spline through evenly spaced chart points
//!
//! Tangents follow the Fritsch–Carlson scheme: secant averages at interior
//! points, zeroed across flat segments, then scaled down wherever they would
//! make the Hermite segment overshoot. Interior tangents are also zeroed
//! where the secants change sign, a deliberate departure from the plain
//! secant average, so a local peak or dip stays flat instead of bulging past
//! its point. Each tangent is turned into a Bezier control offset and the
//! curve is emitted as SVG path commands (`C` for the first segment, `S`
//! afterwards).
//!
//! Points must have strictly increasing x. The no-overshoot guarantee holds
//! for evenly spaced x, which is how week positions are laid out.

use std::fmt::Write;

use kurbo::{Point, Vec2};

/// Secants smaller than this are treated as flat
pub(crate) const FLAT_EPSILON: f64 = 1e-9;

/// Tangents are limited so that `a² + b² <= LIMIT_RADIUS_SQ`
const LIMIT_RADIUS_SQ: f64 = 9.0;

/// A single SVG path drawing instruction, starting from the current point
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    /// Straight line to the point
    Line(Point),
    /// Cubic Bezier with both control points explicit
    Cubic(Point, Point, Point),
    /// Cubic Bezier whose first control point mirrors the previous segment's
    /// second control point
    SmoothCubic(Point, Point),
}

impl DrawCommand {
    pub(crate) fn write_svg(&self, out: &mut String) {
        // Writing into a String cannot fail
        let _ = match *self {
            DrawCommand::Line(p) => write!(out, "L{},{}", p.x, p.y),
            DrawCommand::Cubic(c1, c2, p) => write!(
                out,
                "C{},{},{},{},{},{}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            DrawCommand::SmoothCubic(c2, p) => {
                write!(out, "S{},{},{},{}", c2.x, c2.y, p.x, p.y)
            }
        };
    }
}

fn slope(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

/// Initial tangent slopes: one-sided secants at the ends, secant averages
/// inside, zero where the secants change sign.
fn finite_differences(points: &[Point]) -> Vec<f64> {
    let secants: Vec<f64> = points.windows(2).map(|w| slope(w[0], w[1])).collect();
    let last = secants.len() - 1;

    let mut m = Vec::with_capacity(points.len());
    m.push(secants[0]);
    for i in 1..=last {
        let (prev, next) = (secants[i - 1], secants[i]);
        m.push(if prev * next <= 0.0 {
            0.0
        } else {
            (prev + next) / 2.0
        });
    }
    m.push(secants[last]);
    m
}

/// Limited tangent slopes, one per point
pub(crate) fn monotonic_slopes(points: &[Point]) -> Vec<f64> {
    if points.len() < 2 {
        return vec![0.0; points.len()];
    }

    let mut m = finite_differences(points);

    for i in 0..points.len() - 1 {
        let d = slope(points[i], points[i + 1]);

        if d.abs() < FLAT_EPSILON {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }

        let a = m[i] / d;
        let b = m[i + 1] / d;
        let s = a * a + b * b;
        if s > LIMIT_RADIUS_SQ {
            let tau = d * 3.0 / s.sqrt();
            m[i] = tau * a;
            m[i + 1] = tau * b;
        }
    }

    m
}

/// Bezier control offsets for each point.
///
/// The x offset is the neighbor span over `6 (1 + m²)`; the ends use their
/// single neighbor.
pub(crate) fn monotonic_tangents(points: &[Point]) -> Vec<Vec2> {
    let n = points.len();
    let slopes = monotonic_slopes(points);

    (0..n)
        .map(|i| {
            let span = points[(i + 1).min(n - 1)].x - points[i.saturating_sub(1)].x;
            let dx = span / (6.0 * (1.0 + slopes[i] * slopes[i]));
            Vec2::new(dx, slopes[i] * dx)
        })
        .collect()
}

/// Commands that trace the curve from `points[0]` through every point.
///
/// The caller positions the pen at `points[0]`. Fewer than three points
/// degrade to straight lines.
pub(crate) fn monotonic_spline_commands(points: &[Point]) -> Vec<DrawCommand> {
    if points.len() < 3 {
        return points.iter().skip(1).map(|&p| DrawCommand::Line(p)).collect();
    }

    let tangents = monotonic_tangents(points);

    let mut commands = Vec::with_capacity(points.len() - 1);
    commands.push(DrawCommand::Cubic(
        points[0] + tangents[0],
        points[1] - tangents[1],
        points[1],
    ));
    for (&point, &tangent) in points.iter().zip(&tangents).skip(2) {
        commands.push(DrawCommand::SmoothCubic(point - tangent, point));
    }

    commands
}

/// Append commands to SVG path data
pub(crate) fn write_commands(out: &mut String, commands: &[DrawCommand]) {
    for command in commands {
        command.write_svg(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{CubicBez, ParamCurve};

    /// Expand commands into explicit cubics, resolving smooth reflections
    fn to_cubics(start: Point, commands: &[DrawCommand]) -> Vec<CubicBez> {
        let mut current = start;
        let mut last_control = start;
        let mut cubics = Vec::new();

        for command in commands {
            let cubic = match *command {
                DrawCommand::Line(p) => CubicBez::new(current, current, p, p),
                DrawCommand::Cubic(c1, c2, p) => CubicBez::new(current, c1, c2, p),
                DrawCommand::SmoothCubic(c2, p) => {
                    let c1 = current + (current - last_control);
                    CubicBez::new(current, c1, c2, p)
                }
            };
            last_control = cubic.p2;
            current = cubic.p3;
            cubics.push(cubic);
        }

        cubics
    }

    fn even_points(ys: &[f64]) -> Vec<Point> {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| Point::new(i as f64 * 40.0, y))
            .collect()
    }

    #[test]
    fn two_points_make_one_line() {
        let points = even_points(&[10.0, 30.0]);
        let commands = monotonic_spline_commands(&points);
        assert_eq!(commands, vec![DrawCommand::Line(points[1])]);
    }

    #[test]
    fn single_point_makes_nothing() {
        assert!(monotonic_spline_commands(&even_points(&[5.0])).is_empty());
        assert_eq!(monotonic_tangents(&even_points(&[5.0])).len(), 1);
    }

    #[test]
    fn command_shape() {
        let points = even_points(&[0.0, 10.0, 5.0, 20.0]);
        let commands = monotonic_spline_commands(&points);

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Cubic(..)));
        assert!(matches!(commands[1], DrawCommand::SmoothCubic(..)));
        assert!(matches!(commands[2], DrawCommand::SmoothCubic(..)));
    }

    #[test]
    fn curve_passes_through_every_point() {
        let points = even_points(&[12.0, 80.0, 80.0, 33.5, 140.0, 141.0, 0.0]);
        let commands = monotonic_spline_commands(&points);
        let cubics = to_cubics(points[0], &commands);

        assert_eq!(cubics.len(), points.len() - 1);
        for (i, cubic) in cubics.iter().enumerate() {
            assert!(cubic.eval(0.0).distance(points[i]) < 1e-9);
            assert!(cubic.eval(1.0).distance(points[i + 1]) < 1e-9);
        }
    }

    #[test]
    fn no_overshoot_between_neighbors() {
        let cases: [&[f64]; 4] = [
            &[0.0, 1.0, 50.0, 51.0, 200.0],
            &[200.0, 150.0, 149.0, 10.0, 0.0],
            &[0.0, 100.0, 100.0, 100.0, 300.0],
            &[50.0, 260.0, 10.0, 240.0, 30.0, 35.0],
        ];

        for ys in cases {
            let points = even_points(ys);
            let cubics = to_cubics(points[0], &monotonic_spline_commands(&points));

            for (i, cubic) in cubics.iter().enumerate() {
                let lo = points[i].y.min(points[i + 1].y);
                let hi = points[i].y.max(points[i + 1].y);
                for step in 0..=200 {
                    let y = cubic.eval(step as f64 / 200.0).y;
                    assert!(
                        y >= lo - 1e-9 && y <= hi + 1e-9,
                        "Segment {} of {:?} overshoots: {} outside [{}, {}]",
                        i,
                        ys,
                        y,
                        lo,
                        hi
                    );
                }
            }
        }
    }

    #[test]
    fn flat_segment_has_zero_tangents() {
        let points = even_points(&[10.0, 60.0, 60.0, 90.0]);
        let slopes = monotonic_slopes(&points);
        assert_eq!(slopes[1], 0.0);
        assert_eq!(slopes[2], 0.0);

        let cubics = to_cubics(points[0], &monotonic_spline_commands(&points));
        for step in 0..=50 {
            let y = cubics[1].eval(step as f64 / 50.0).y;
            assert!((y - 60.0).abs() < 1e-9, "Flat segment bends to {}", y);
        }
    }

    #[test]
    fn limiter_bounds_tangent_ratios() {
        let points = even_points(&[0.0, 0.5, 100.0, 100.5, 101.0, 300.0]);
        let slopes = monotonic_slopes(&points);

        for i in 0..points.len() - 1 {
            let d = slope(points[i], points[i + 1]);
            if d.abs() < FLAT_EPSILON {
                continue;
            }
            let (a, b) = (slopes[i] / d, slopes[i + 1] / d);
            assert!(a >= 0.0 && b >= 0.0);
            assert!(a * a + b * b <= LIMIT_RADIUS_SQ + 1e-9);
        }
    }

    #[test]
    fn local_extremum_gets_zero_slope() {
        let slopes = monotonic_slopes(&even_points(&[0.0, 50.0, 10.0]));
        assert_eq!(slopes[1], 0.0);
    }

    #[test]
    fn tangent_offsets_use_neighbor_span() {
        let points = even_points(&[0.0, 0.0, 0.0]);
        let tangents = monotonic_tangents(&points);
        // Flat: endpoints span one gap, interior spans two
        assert_eq!(tangents[0], Vec2::new(40.0 / 6.0, 0.0));
        assert_eq!(tangents[1], Vec2::new(80.0 / 6.0, 0.0));
        assert_eq!(tangents[2], Vec2::new(40.0 / 6.0, 0.0));
    }

    #[test]
    fn smooth_joints_are_continuous() {
        let points = even_points(&[5.0, 20.0, 60.0, 70.0]);
        let cubics = to_cubics(points[0], &monotonic_spline_commands(&points));

        for pair in cubics.windows(2) {
            let incoming = pair[0].p3 - pair[0].p2;
            let outgoing = pair[1].p1 - pair[1].p0;
            assert!((incoming - outgoing).hypot() < 1e-9);
        }
    }

    #[test]
    fn svg_formatting() {
        let mut out = String::new();
        write_commands(
            &mut out,
            &[
                DrawCommand::Line(Point::new(1.0, 2.5)),
                DrawCommand::Cubic(
                    Point::new(1.0, 2.0),
                    Point::new(3.0, 4.0),
                    Point::new(5.0, 6.0),
                ),
                DrawCommand::SmoothCubic(Point::new(7.0, 8.0), Point::new(9.0, 10.0)),
            ],
        );
        assert_eq!(out, "L1,2.5C1,2,3,4,5,6S7,8,9,10");
    }
}
