use geowalle::{
    geometry::{Intersection, containment::contains, intersect},
    interpreter::value::figure::{Arc, Circle, Figure, Line, Measure, Point, Ray, Segment},
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn line(a: Point, b: Point) -> Figure {
    Figure::Line(Line { p1: a, p2: b })
}

fn segment(a: Point, b: Point) -> Figure {
    Figure::Segment(Segment { p1: a, p2: b })
}

fn ray(a: Point, b: Point) -> Figure {
    Figure::Ray(Ray { p1: a, p2: b })
}

fn circle(center: Point, radius: f64) -> Figure {
    Figure::Circle(Circle { center,
                            radius: Measure::new(radius) })
}

fn arc(center: Point, start: Point, end: Point, radius: f64) -> Figure {
    Figure::Arc(Arc { center,
                      start,
                      end,
                      radius: Measure::new(radius) })
}

fn points(a: &Figure, b: &Figure) -> Vec<Point> {
    match intersect(a, b) {
        Some(Intersection::Points(points)) => points,
        other => panic!("expected points for {a} and {b}, found {other:?}"),
    }
}

fn assert_points(a: &Figure, b: &Figure, expected: &[Point]) {
    let found = points(a, b);
    assert_eq!(found.len(), expected.len(), "{a} and {b} gave {found:?}");
    for (found, expected) in found.iter().zip(expected) {
        assert!(found.near(*expected), "{a} and {b}: {found} is not {expected}");
    }
}

fn sample_figures() -> Vec<Figure> {
    vec![Figure::Point(p(1.0, 1.0)),
         line(p(0.0, 0.0), p(2.0, 2.0)),
         line(p(0.0, 1.0), p(1.0, 1.0)),
         segment(p(-3.0, 0.0), p(3.0, 0.0)),
         segment(p(0.0, -2.0), p(0.0, 2.0)),
         ray(p(0.0, 0.0), p(1.0, 0.0)),
         ray(p(2.0, 2.0), p(2.0, 3.0)),
         circle(p(0.0, 0.0), 2.0),
         circle(p(2.0, 0.0), 1.5),
         arc(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), 1.0),
         arc(p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0), 1.0)]
}

#[test]
fn crossing_lines_meet_once() {
    assert_points(&line(p(0.0, 0.0), p(2.0, 2.0)),
                  &line(p(0.0, 2.0), p(2.0, 0.0)),
                  &[p(1.0, 1.0)]);
}

#[test]
fn parallel_lines_never_meet() {
    assert_points(&line(p(0.0, 0.0), p(1.0, 0.0)), &line(p(0.0, 1.0), p(1.0, 1.0)), &[]);
}

#[test]
fn bounded_figures_respect_their_bounds() {
    assert_points(&segment(p(0.0, 0.0), p(1.0, 0.0)), &segment(p(2.0, -1.0), p(2.0, 1.0)), &[]);
    assert_points(&ray(p(0.0, 0.0), p(1.0, 0.0)), &line(p(-1.0, -1.0), p(-1.0, 1.0)), &[]);
    assert_points(&ray(p(0.0, 0.0), p(1.0, 0.0)),
                  &line(p(3.0, -1.0), p(3.0, 1.0)),
                  &[p(3.0, 0.0)]);
    assert_points(&segment(p(0.0, 0.0), p(2.0, 0.0)),
                  &segment(p(2.0, 0.0), p(2.0, 5.0)),
                  &[p(2.0, 0.0)]);
}

#[test]
fn overlapping_collinear_figures_coincide() {
    let a = segment(p(0.0, 0.0), p(2.0, 0.0));
    let b = segment(p(1.0, 0.0), p(3.0, 0.0));
    assert_eq!(intersect(&a, &b), Some(Intersection::Coincident));

    let touching = segment(p(2.0, 0.0), p(4.0, 0.0));
    assert_points(&a, &touching, &[p(2.0, 0.0)]);

    let opposite = ray(p(0.0, 0.0), p(-1.0, 0.0));
    assert_points(&ray(p(0.0, 0.0), p(1.0, 0.0)), &opposite, &[p(0.0, 0.0)]);
}

#[test]
fn line_and_circle() {
    let c = circle(p(0.0, 0.0), 1.0);
    assert_points(&line(p(-2.0, 0.0), p(2.0, 0.0)), &c, &[p(-1.0, 0.0), p(1.0, 0.0)]);
    assert_points(&line(p(-2.0, 1.0), p(2.0, 1.0)), &c, &[p(0.0, 1.0)]);
    assert_points(&line(p(-2.0, 3.0), p(2.0, 3.0)), &c, &[]);
    assert_points(&segment(p(0.0, 0.0), p(5.0, 0.0)), &c, &[p(1.0, 0.0)]);
}

#[test]
fn two_circles() {
    let a = circle(p(0.0, 0.0), 1.0);
    assert_points(&a, &circle(p(2.0, 0.0), 1.0), &[p(1.0, 0.0)]);
    assert_points(&a, &circle(p(5.0, 0.0), 1.0), &[]);
    assert_points(&a, &circle(p(0.0, 0.0), 3.0), &[]);
    assert_points(&a, &circle(p(0.2, 0.0), 0.5), &[]);
    assert_eq!(intersect(&a, &circle(p(0.0, 0.0), 1.0)), Some(Intersection::Coincident));

    let found = points(&a, &circle(p(1.0, 0.0), 1.0));
    assert_eq!(found.len(), 2);
    let h = 3f64.sqrt() / 2.0;
    assert!(found[0].near(p(0.5, -h)));
    assert!(found[1].near(p(0.5, h)));
}

#[test]
fn arcs_keep_only_their_angular_range() {
    let quarter = arc(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), 1.0);
    assert_points(&quarter,
                  &line(p(-2.0, 0.0), p(2.0, 0.0)),
                  &[p(1.0, 0.0)]);
    assert_points(&quarter, &line(p(-2.0, -0.5), p(2.0, -0.5)), &[]);

    let h = 0.5f64.sqrt();
    assert_points(&quarter, &line(p(0.0, 0.0), p(1.0, 1.0)), &[p(h, h)]);
}

#[test]
fn arcs_on_the_same_circle() {
    let first = arc(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), 1.0);
    let second = arc(p(0.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0), 1.0);
    let overlapping = arc(p(0.0, 0.0), p(1.0, 1.0), p(-1.0, 1.0), 1.0);
    let opposite = arc(p(0.0, 0.0), p(-1.0, 0.0), p(0.0, -1.0), 1.0);

    assert_points(&first, &second, &[p(0.0, 1.0)]);
    assert_eq!(intersect(&first, &overlapping), Some(Intersection::Coincident));
    assert_points(&first, &opposite, &[]);
    assert_eq!(intersect(&first, &circle(p(0.0, 0.0), 1.0)), Some(Intersection::Coincident));
}

#[test]
fn points_intersect_what_contains_them() {
    let point = Figure::Point(p(1.0, 0.0));
    assert_points(&point, &circle(p(0.0, 0.0), 1.0), &[p(1.0, 0.0)]);
    assert_points(&point, &segment(p(2.0, 0.0), p(3.0, 0.0)), &[]);
    assert_points(&point, &point, &[p(1.0, 0.0)]);
}

#[test]
fn degenerate_segments_behave_like_points() {
    let dot = segment(p(1.0, 1.0), p(1.0, 1.0));
    assert_points(&dot, &line(p(0.0, 0.0), p(2.0, 2.0)), &[p(1.0, 1.0)]);
    assert_points(&dot, &line(p(0.0, 0.0), p(2.0, 0.0)), &[]);
}

#[test]
fn measures_have_no_intersections() {
    let m = Figure::Measure(Measure::new(3.0));
    assert_eq!(intersect(&m, &circle(p(0.0, 0.0), 1.0)), None);
    assert_eq!(contains(&m, p(0.0, 0.0)), None);
}

#[test]
fn intersection_is_symmetric() {
    let figures = sample_figures();

    for a in &figures {
        for b in &figures {
            match (intersect(a, b), intersect(b, a)) {
                (Some(Intersection::Points(x)), Some(Intersection::Points(y))) => {
                    assert_eq!(x.len(), y.len(), "{a} and {b}");
                    assert!(x.iter().zip(&y).all(|(u, v)| u.near(*v)), "{a} and {b}");
                },
                (x, y) => assert_eq!(x, y, "{a} and {b}"),
            }
        }
    }
}

#[test]
fn intersection_points_lie_on_both_figures() {
    let figures = sample_figures();

    for a in &figures {
        for b in &figures {
            let Some(Intersection::Points(found)) = intersect(a, b) else { continue };
            for q in found {
                assert_eq!(contains(a, q), Some(true), "{q} not on {a}");
                assert_eq!(contains(b, q), Some(true), "{q} not on {b}");
            }
        }
    }
}
