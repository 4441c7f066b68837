use cgmath::Vector2;

use crate::hit_objects::slider::CurveType;

use super::{
    fields::{parse_decimal, Fields},
    ParseError,
};

/// Decoded slider curve path field, e.g. `B|100:100|200:200`
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    pub curve_type: CurveType,
    /// Starts with the slider head
    pub control_points: Vec<Vector2<f32>>,
}

impl CurvePath {
    /// Single letter tokens switch the curve type, unknown letters
    /// are skipped. Everything else is an `x:y` pair, both sides
    /// truncated to whole numbers.
    pub fn parse(head: Vector2<f32>, field: &str) -> Result<Self, ParseError> {
        let mut curve_type = CurveType::default();
        let mut control_points = vec![head];

        for token in field.split('|') {
            let mut chars = token.chars();

            if let (Some(c), None) = (chars.next(), chars.next()) {
                match CurveType::from_legacy_char(c) {
                    Some(new_type) => curve_type = new_type,
                    None => tracing::debug!("Ignoring unknown curve type `{c}`"),
                }

                continue;
            }

            control_points.push(parse_point(token)?);
        }

        Ok(Self {
            curve_type,
            control_points,
        })
    }

    /// Writes the path back in legacy form, without the head point
    pub fn to_legacy_string(&self) -> String {
        let mut out = self.curve_type.legacy_char().to_string();

        for point in self.control_points.iter().skip(1) {
            out.push_str(&format!("|{}:{}", point.x as i32, point.y as i32));
        }

        out
    }
}

fn parse_point(token: &str) -> Result<Vector2<f32>, ParseError> {
    let split = Fields::split(token, ':');

    // x is converted before y is looked up
    let x = parse_decimal(split.get(0, "control point x")?, "control point x")?;
    let y = split.decimal(1, "control point y")?;

    Ok(Vector2::new(x as i32 as f32, y as i32 as f32))
}

#[test]
fn test_bezier_path() {
    let path = CurvePath::parse(Vector2::new(0.0, 0.0), "B|100:100|200:200").unwrap();

    assert_eq!(path.curve_type, CurveType::Bezier);
    assert_eq!(
        path.control_points,
        vec![Vector2::new(0.0, 0.0), Vector2::new(100.0, 100.0), Vector2::new(200.0, 200.0)]
    );
}

#[test]
fn test_path_truncates_points() {
    let path = CurvePath::parse(Vector2::new(10.0, 10.0), "L|20.9:-30.7").unwrap();

    assert_eq!(path.curve_type, CurveType::Linear);
    assert_eq!(path.control_points[1], Vector2::new(20.0, -30.0));
}

#[test]
fn test_path_curve_letters() {
    // Unknown letters keep the current type, last known letter wins
    let path = CurvePath::parse(Vector2::new(0.0, 0.0), "P|1:1|X|2:2").unwrap();
    assert_eq!(path.curve_type, CurveType::PerfectCurve);

    let path = CurvePath::parse(Vector2::new(0.0, 0.0), "B|1:1|L|2:2").unwrap();
    assert_eq!(path.curve_type, CurveType::Linear);
    assert_eq!(path.control_points.len(), 3);

    let path = CurvePath::parse(Vector2::new(0.0, 0.0), "1:1").unwrap();
    assert_eq!(path.curve_type, CurveType::Catmull);
}

#[test]
fn test_path_errors() {
    let head = Vector2::new(0.0, 0.0);

    assert_eq!(
        CurvePath::parse(head, "B|100"),
        Err(ParseError::field("control point y", 1))
    );
    assert!(matches!(
        CurvePath::parse(head, "B|"),
        Err(ParseError::Format { field: "control point x", .. })
    ));
    assert!(matches!(
        CurvePath::parse(head, "B|1:y"),
        Err(ParseError::Format { field: "control point y", .. })
    ));
}

#[test]
fn test_path_legacy_string() {
    let field = "P|128:64|256:0";
    let path = CurvePath::parse(Vector2::new(0.0, 0.0), field).unwrap();

    assert_eq!(path.to_legacy_string(), field);

    let reparsed = CurvePath::parse(Vector2::new(0.0, 0.0), &path.to_legacy_string()).unwrap();
    assert_eq!(reparsed, path);
}
