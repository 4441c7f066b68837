use cgmath::Vector2;

/// A single tap, called a circle in osu!standard
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub pos: Vector2<f32>,
}
