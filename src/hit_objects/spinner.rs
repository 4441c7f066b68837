use cgmath::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub struct Spinner {
    /// Always the playfield center, legacy lines
    /// don't store a position for spinners
    pub pos: Vector2<f32>,
    pub end_time: f64,
}

impl Spinner {
    pub fn duration(&self, start_time: f64) -> f64 {
        self.end_time - start_time
    }
}

#[test]
fn test_spinner_duration() {
    let spinner = Spinner {
        pos: Vector2::new(256.0, 192.0),
        end_time: 1500.0,
    };

    assert_eq!(spinner.duration(500.0), 1000.0);
}
