use std::fmt;

use cgmath::Vector2;

/// Interpolation between slider control points
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CurveType {
    #[default]
    Catmull,
    Bezier,
    Linear,
    PerfectCurve,
}

impl CurveType {
    /// Single letter used in the legacy curve path
    pub fn from_legacy_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Catmull),
            'B' => Some(Self::Bezier),
            'L' => Some(Self::Linear),
            'P' => Some(Self::PerfectCurve),
            _ => None,
        }
    }

    pub fn legacy_char(&self) -> char {
        match self {
            Self::Catmull => 'C',
            Self::Bezier => 'B',
            Self::Linear => 'L',
            Self::PerfectCurve => 'P',
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Catmull => "Catmull",
            Self::Bezier => "Bezier",
            Self::Linear => "Linear",
            Self::PerfectCurve => "PerfectCurve",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub pos: Vector2<f32>,

    /// First point is always the slider position
    pub control_points: Vec<Vector2<f32>>,
    pub curve_type: CurveType,

    /// Pixel length, `0.0` when the line doesn't specify one
    pub length: f64,

    /// Slides as written in the line
    /// Example:
    /// `*===R===R===*` => 3
    /// `*===R===*` => 2
    /// `*===*` => 1
    pub repeat_count: u32,
}

impl Slider {
    pub fn reverse_count(&self) -> u32 {
        self.repeat_count.saturating_sub(1)
    }
}

#[test]
fn test_curve_type_chars() {
    for curve in [CurveType::Catmull, CurveType::Bezier, CurveType::Linear, CurveType::PerfectCurve] {
        assert_eq!(CurveType::from_legacy_char(curve.legacy_char()), Some(curve));
    }

    assert_eq!(CurveType::from_legacy_char('X'), None);
    assert_eq!(CurveType::from_legacy_char('b'), None);
    assert_eq!(CurveType::default(), CurveType::Catmull);
}

#[test]
fn test_reverse_count() {
    let mut slider = Slider {
        pos: Vector2::new(0.0, 0.0),
        control_points: vec![Vector2::new(0.0, 0.0)],
        curve_type: CurveType::Linear,
        length: 100.0,
        repeat_count: 3,
    };

    assert_eq!(slider.reverse_count(), 2);

    slider.repeat_count = 0;
    assert_eq!(slider.reverse_count(), 0);
}
