use crate::math::{OSU_COORDS_HEIGHT, OSU_COORDS_WIDTH};

/// Highest repeat count legacy loaders accept.
/// Not a gameplay limit, only a guard against corrupted lines.
pub const LEGACY_MAX_REPEAT_COUNT: u32 = 9000;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParserConfig {
    /// Reference playfield size, spinners are placed at its center
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub max_repeat_count: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            playfield_width: OSU_COORDS_WIDTH,
            playfield_height: OSU_COORDS_HEIGHT,
            max_repeat_count: LEGACY_MAX_REPEAT_COUNT,
        }
    }
}
