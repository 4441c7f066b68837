use cgmath::Vector2;

use crate::hit_objects::{
    circle::Hit,
    slider::{CurveType, Slider},
    spinner::Spinner,
    HitObject, HitObjectKind,
};

/// Ruleset hooks building the actual objects out of decoded fields.
///
/// The parser fills start time and samples afterwards.
pub trait HitObjectFactory {
    fn create_hit(&self, pos: Vector2<f32>, new_combo: bool) -> HitObject;

    fn create_slider(
        &self,
        pos: Vector2<f32>,
        new_combo: bool,
        control_points: Vec<Vector2<f32>>,
        length: f64,
        curve_type: CurveType,
        repeat_count: u32,
    ) -> HitObject;

    fn create_spinner(&self, pos: Vector2<f32>, end_time: f64) -> HitObject;
}

/// Builds plain objects without any ruleset specific changes
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardFactory;

impl HitObjectFactory for StandardFactory {
    fn create_hit(&self, pos: Vector2<f32>, new_combo: bool) -> HitObject {
        HitObject::new(HitObjectKind::Hit(Hit { pos }), new_combo)
    }

    fn create_slider(
        &self,
        pos: Vector2<f32>,
        new_combo: bool,
        control_points: Vec<Vector2<f32>>,
        length: f64,
        curve_type: CurveType,
        repeat_count: u32,
    ) -> HitObject {
        let slider = Slider {
            pos,
            control_points,
            curve_type,
            length,
            repeat_count,
        };

        HitObject::new(HitObjectKind::Slider(slider), new_combo)
    }

    fn create_spinner(&self, pos: Vector2<f32>, end_time: f64) -> HitObject {
        HitObject::new(HitObjectKind::Spinner(Spinner { pos, end_time }), false)
    }
}
