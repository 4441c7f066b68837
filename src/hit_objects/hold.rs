use cgmath::Vector2;

/// Hold note coming from BMS converts.
///
/// Only position and combo are decoded. End time is not known
/// to the legacy decoder so consumers must treat this kind as
/// incomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct Hold {
    pub pos: Vector2<f32>,
}
