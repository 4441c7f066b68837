pub mod circle;
pub mod hold;
pub mod slider;
pub mod spinner;

use std::fmt;

use cgmath::Vector2;
use circle::Hit;
use hold::Hold;
use slider::Slider;
use spinner::Spinner;

use crate::{parser::ParseError, samples::SampleInfo};

bitflags::bitflags! {
    /// Type bitmask stored in the fourth field of a legacy hit object line
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HitObjectType: i32 {
        const CIRCLE = 1;
        const SLIDER = 1 << 1;
        const NEW_COMBO = 1 << 2;
        const SPINNER = 1 << 3;
        /// Combo colour skip, not used by the decoder
        const COLOUR_HAX = 0b111 << 4;
        /// Only produced by BMS converts
        const HOLD = 1 << 7;
    }
}

/// Kind of object selected by the type bitmask
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LegacyKind {
    Circle,
    Slider,
    Spinner,
    Hold,
}

/// Result of [`HitObjectType::decode`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecodedType {
    pub kind: LegacyKind,
    pub new_combo: bool,
}

impl HitObjectType {
    const KIND_MASK: Self = Self::from_bits_retain(
        Self::CIRCLE.bits() | Self::SLIDER.bits() | Self::SPINNER.bits() | Self::HOLD.bits()
    );

    /// Masks off colour and combo bits and picks the object kind.
    /// Exactly one kind bit has to be left, unknown bits outside of
    /// the kind mask are ignored.
    pub fn decode(self) -> Result<DecodedType, ParseError> {
        let ty = self.difference(Self::COLOUR_HAX);
        let new_combo = ty.contains(Self::NEW_COMBO);
        let ty = ty.difference(Self::NEW_COMBO);

        let kinds = ty.intersection(Self::KIND_MASK);

        let kind = if kinds == Self::CIRCLE {
            LegacyKind::Circle
        } else if kinds == Self::SLIDER {
            LegacyKind::Slider
        } else if kinds == Self::SPINNER {
            LegacyKind::Spinner
        } else if kinds == Self::HOLD {
            LegacyKind::Hold
        } else {
            return Err(ParseError::UnsupportedType(ty));
        };

        Ok(DecodedType { kind, new_combo })
    }
}

impl fmt::Display for HitObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        bitflags::parser::to_writer(self, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HitObjectKind {
    Hit(Hit),
    Slider(Slider),
    Spinner(Spinner),
    /// Partially decoded, see [`Hold`]
    Hold(Hold),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitObject {
    pub start_time: f64,
    pub new_combo: bool,

    /// Always starts with `hitnormal`, followed by
    /// finish, whistle and clap additions in that order
    pub samples: Vec<SampleInfo>,

    pub kind: HitObjectKind,
}

impl HitObject {
    pub fn new(kind: HitObjectKind, new_combo: bool) -> Self {
        Self {
            start_time: 0.0,
            new_combo,
            samples: Vec::new(),
            kind,
        }
    }

    pub fn pos(&self) -> Vector2<f32> {
        match &self.kind {
            HitObjectKind::Hit(hit) => hit.pos,
            HitObjectKind::Slider(slider) => slider.pos,
            HitObjectKind::Spinner(spinner) => spinner.pos,
            HitObjectKind::Hold(hold) => hold.pos,
        }
    }

    /// Spinners carry their own end time, for everything
    /// else legacy lines don't say anything more than start time
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Spinner(spinner) => spinner.end_time,
            _ => self.start_time,
        }
    }

    /// Holds are only partially decoded and shouldn't be
    /// treated as complete objects
    pub fn is_partial(&self) -> bool {
        matches!(self.kind, HitObjectKind::Hold(_))
    }
}

#[test]
fn test_type_decode() {
    let decoded = HitObjectType::from_bits_retain(1).decode().unwrap();
    assert_eq!(decoded, DecodedType { kind: LegacyKind::Circle, new_combo: false });

    // Slider + new combo + skipping 3 combo colours
    let decoded = HitObjectType::from_bits_retain(2 | 4 | 48).decode().unwrap();
    assert_eq!(decoded, DecodedType { kind: LegacyKind::Slider, new_combo: true });

    let decoded = HitObjectType::from_bits_retain(12).decode().unwrap();
    assert_eq!(decoded, DecodedType { kind: LegacyKind::Spinner, new_combo: true });

    let decoded = HitObjectType::from_bits_retain(128).decode().unwrap();
    assert_eq!(decoded.kind, LegacyKind::Hold);
}

#[test]
fn test_type_decode_unsupported() {
    assert!(matches!(
        HitObjectType::from_bits_retain(0).decode(),
        Err(ParseError::UnsupportedType(_))
    ));

    // Only combo bits
    assert!(matches!(
        HitObjectType::from_bits_retain(4 | 112).decode(),
        Err(ParseError::UnsupportedType(_))
    ));

    // Circle and slider at the same time
    assert_eq!(
        HitObjectType::from_bits_retain(3).decode(),
        Err(ParseError::UnsupportedType(HitObjectType::CIRCLE | HitObjectType::SLIDER))
    );
}

#[test]
fn test_type_display() {
    assert_eq!(HitObjectType::empty().to_string(), "None");
    assert_eq!((HitObjectType::CIRCLE | HitObjectType::SLIDER).to_string(), "CIRCLE | SLIDER");
}
