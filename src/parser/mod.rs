pub mod curve;
pub(crate) mod fields;

use thiserror::Error;

use crate::{
    config::ParserConfig,
    factory::HitObjectFactory,
    hit_objects::{hold::Hold, HitObject, HitObjectKind, HitObjectType, LegacyKind},
    math::{int_pos, playfield_center},
    samples::{LegacySoundType, SampleBanks},
};

use curve::CurvePath;
use fields::Fields;

const X: usize = 0;
const Y: usize = 1;
const START_TIME: usize = 2;
const TYPE: usize = 3;
const SOUND_TYPE: usize = 4;

const CIRCLE_SAMPLES: usize = 5;

const SLIDER_PATH: usize = 5;
const SLIDER_REPEATS: usize = 6;
const SLIDER_LENGTH: usize = 7;
// 8 and 9 are edge sounds and edge sets, not handled here
const SLIDER_SAMPLES: usize = 10;

const SPINNER_END_TIME: usize = 5;
const SPINNER_SAMPLES: usize = 6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("field `{field}` is not a valid number: `{value}`")]
    Format {
        field: &'static str,
        value: String,
    },
    #[error("unknown hit object type `{0}`")]
    UnsupportedType(HitObjectType),
    #[error("`{field}` is out of range: {value} (allowed 0..={max})")]
    Range {
        field: &'static str,
        value: i32,
        max: u32,
    },
    #[error("couldn't find a required field `{field}` at index {index}")]
    MissingField {
        field: &'static str,
        index: usize,
    },
}

impl ParseError {
    pub fn field(name: &'static str, index: usize) -> Self {
        Self::MissingField { field: name, index }
    }

    pub fn format(name: &'static str, value: &str) -> Self {
        Self::Format {
            field: name,
            value: value.to_owned(),
        }
    }
}

/// Decoder for a single line of the legacy `[HitObjects]` section.
///
/// Keeps nothing between calls, one parser can be shared
/// between threads.
#[derive(Debug, Default, Clone)]
pub struct LegacyHitObjectParser {
    config: ParserConfig,
}

impl LegacyHitObjectParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Fields are read in the same order legacy loaders do,
    /// so the first reported error matches theirs
    pub fn parse<F>(&self, line: &str, factory: &F) -> Result<HitObject, ParseError>
    where
        F: HitObjectFactory + ?Sized,
    {
        let split = Fields::split(line, ',');

        let ty = HitObjectType::from_bits_retain(split.int(TYPE, "type")?);
        let decoded = ty.decode()?;
        let combo = decoded.new_combo;

        let (mut result, banks) = match decoded.kind {
            LegacyKind::Circle => {
                let pos = int_pos(split.int(X, "x")?, split.int(Y, "y")?);
                let result = factory.create_hit(pos, combo);

                (result, read_sample_banks(&split, CIRCLE_SAMPLES)?)
            }
            LegacyKind::Slider => {
                let pos = int_pos(split.int(X, "x")?, split.int(Y, "y")?);
                let path = CurvePath::parse(pos, split.get(SLIDER_PATH, "curve path")?)?;

                let repeat_count = self.repeat_count(split.int(SLIDER_REPEATS, "repeat count")?)?;

                let length = match split.optional(SLIDER_LENGTH) {
                    Some(_) => split.decimal(SLIDER_LENGTH, "length")?,
                    None => 0.0,
                };

                let result = factory.create_slider(
                    pos,
                    combo,
                    path.control_points,
                    length,
                    path.curve_type,
                    repeat_count,
                );

                (result, read_sample_banks(&split, SLIDER_SAMPLES)?)
            }
            LegacyKind::Spinner => {
                let pos = playfield_center(self.config.playfield_width, self.config.playfield_height);
                let end_time = split.decimal(SPINNER_END_TIME, "end time")?;
                let result = factory.create_spinner(pos, end_time);

                (result, read_sample_banks(&split, SPINNER_SAMPLES)?)
            }
            LegacyKind::Hold => {
                tracing::debug!("Hold objects are decoded without end time");

                let pos = int_pos(split.int(X, "x")?, split.int(Y, "y")?);
                let result = HitObject::new(HitObjectKind::Hold(Hold { pos }), combo);

                (result, SampleBanks::default())
            }
        };

        result.start_time = split.decimal(START_TIME, "start time")?;

        let sound_type = LegacySoundType::from_bits_retain(split.int(SOUND_TYPE, "sound type")?);
        result.samples.extend(banks.samples(sound_type));

        tracing::trace!(
            "Decoded {:?} at {} with {} samples",
            decoded.kind,
            result.start_time,
            result.samples.len()
        );

        Ok(result)
    }

    /// Legacy sanity bound against corrupted lines,
    /// not an actual gameplay limit
    fn repeat_count(&self, value: i32) -> Result<u32, ParseError> {
        let max = self.config.max_repeat_count;

        match u32::try_from(value) {
            Ok(count) if count <= max => Ok(count),
            _ => Err(ParseError::Range {
                field: "repeat count",
                value,
                max,
            }),
        }
    }
}

fn read_sample_banks(split: &Fields, index: usize) -> Result<SampleBanks, ParseError> {
    match split.optional(index) {
        Some(field) => SampleBanks::parse(field),
        None => Ok(SampleBanks::default()),
    }
}

/// Parses a line with legacy playfield and limits
pub fn parse_hit_object<F>(line: &str, factory: &F) -> Result<HitObject, ParseError>
where
    F: HitObjectFactory + ?Sized,
{
    LegacyHitObjectParser::default().parse(line, factory)
}
