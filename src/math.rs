use cgmath::Vector2;

pub const OSU_COORDS_WIDTH: f32 = 512.0;
pub const OSU_COORDS_HEIGHT: f32 = 384.0;

/// Center of a playfield with the given size
pub fn playfield_center(width: f32, height: f32) -> Vector2<f32> {
    Vector2::new(width, height) / 2.0
}

/// Legacy maps store positions as integers but
/// objects carry them as floats
#[inline]
pub fn int_pos(x: i32, y: i32) -> Vector2<f32> {
    Vector2::new(x as f32, y as f32)
}

#[test]
pub fn test_playfield_center() {
    let center = playfield_center(OSU_COORDS_WIDTH, OSU_COORDS_HEIGHT);

    assert_eq!(center, Vector2::new(256.0, 192.0));
}
