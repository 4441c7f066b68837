use crate::parser::{fields::Fields, ParseError};

bitflags::bitflags! {
    /// Hit sound bitmask from the fifth field of a legacy line.
    /// An empty mask is the legacy `None`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LegacySoundType: i32 {
        const NORMAL = 1;
        const WHISTLE = 1 << 1;
        const FINISH = 1 << 2;
        const CLAP = 1 << 3;
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(i32)]
pub enum LegacySampleBank {
    None = 0,
    Normal = 1,
    Soft = 2,
    Drum = 3,
}

impl LegacySampleBank {
    pub fn from_legacy(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Normal),
            2 => Some(Self::Soft),
            3 => Some(Self::Drum),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Soft => "soft",
            Self::Drum => "drum",
        }
    }

    /// Bank name as stored in [`SampleInfo`].
    ///
    /// `none` becomes no bank at all. Numbers without a named bank
    /// keep their decimal text, the way old loaders stringified them.
    pub fn bank_name(value: i32) -> Option<String> {
        match Self::from_legacy(value) {
            Some(Self::None) => None,
            Some(bank) => Some(bank.name().to_owned()),
            None => Some(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SampleInfo {
    /// `None` means the bank is resolved later from timing points
    pub bank: Option<String>,
    pub name: &'static str,
    /// `0` means default volume
    pub volume: i32,
}

impl SampleInfo {
    pub const HIT_NORMAL: &'static str = "hitnormal";
    pub const HIT_FINISH: &'static str = "hitfinish";
    pub const HIT_WHISTLE: &'static str = "hitwhistle";
    pub const HIT_CLAP: &'static str = "hitclap";
}

/// Banks and volume read from the hit sample field
/// `normalBank:additionBank[:customIndex][:volume][:filename]`
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SampleBanks {
    pub normal: Option<String>,
    pub addition: Option<String>,
    pub volume: i32,
}

impl SampleBanks {
    /// Custom index and filename are accepted but not kept,
    /// they don't fit into the bank structure.
    pub fn parse(field: &str) -> Result<Self, ParseError> {
        if field.is_empty() {
            return Ok(Self::default());
        }

        let split = Fields::split(field, ':');

        let normal = split.int(0, "normal sample bank")?;
        let addition = split.int(1, "addition sample bank")?;

        let volume = match split.optional(3) {
            Some(_) => split.int(3, "sample volume")?,
            None => 0,
        };

        Ok(Self {
            normal: LegacySampleBank::bank_name(normal),
            addition: LegacySampleBank::bank_name(addition),
            volume,
        })
    }

    /// Normal sample always comes first, additions follow
    /// in finish, whistle, clap order
    pub fn samples(&self, sound_type: LegacySoundType) -> Vec<SampleInfo> {
        let mut samples = Vec::with_capacity(4);

        samples.push(SampleInfo {
            bank: self.normal.clone(),
            name: SampleInfo::HIT_NORMAL,
            volume: self.volume,
        });

        let additions = [
            (LegacySoundType::FINISH, SampleInfo::HIT_FINISH),
            (LegacySoundType::WHISTLE, SampleInfo::HIT_WHISTLE),
            (LegacySoundType::CLAP, SampleInfo::HIT_CLAP),
        ];

        for (flag, name) in additions {
            if sound_type.contains(flag) {
                samples.push(SampleInfo {
                    bank: self.addition.clone(),
                    name,
                    volume: self.volume,
                });
            }
        }

        samples
    }
}

#[test]
fn test_sample_banks_parse() {
    let banks = SampleBanks::parse("1:0:0:50:").unwrap();
    assert_eq!(banks.normal.as_deref(), Some("normal"));
    assert_eq!(banks.addition, None);
    assert_eq!(banks.volume, 50);

    let banks = SampleBanks::parse("2:3").unwrap();
    assert_eq!(banks.normal.as_deref(), Some("soft"));
    assert_eq!(banks.addition.as_deref(), Some("drum"));
    assert_eq!(banks.volume, 0);

    let banks = SampleBanks::parse("3:2:1:70:custom.wav").unwrap();
    assert_eq!(banks.normal.as_deref(), Some("drum"));
    assert_eq!(banks.addition.as_deref(), Some("soft"));
    assert_eq!(banks.volume, 70);

    assert_eq!(SampleBanks::parse("").unwrap(), SampleBanks::default());
}

#[test]
fn test_sample_banks_unknown_number() {
    let banks = SampleBanks::parse("5:0").unwrap();
    assert_eq!(banks.normal.as_deref(), Some("5"));
    assert_eq!(banks.addition, None);
}

#[test]
fn test_sample_banks_errors() {
    assert_eq!(
        SampleBanks::parse("1"),
        Err(ParseError::field("addition sample bank", 1))
    );
    assert!(matches!(
        SampleBanks::parse("soft:0"),
        Err(ParseError::Format { field: "normal sample bank", .. })
    ));
    assert!(matches!(
        SampleBanks::parse("1:0:0:loud"),
        Err(ParseError::Format { field: "sample volume", .. })
    ));
}

#[test]
fn test_samples_order() {
    let banks = SampleBanks {
        normal: Some("soft".to_owned()),
        addition: Some("drum".to_owned()),
        volume: 40,
    };

    let samples = banks.samples(LegacySoundType::all());
    let names: Vec<_> = samples.iter().map(|s| s.name).collect();

    assert_eq!(
        names,
        [SampleInfo::HIT_NORMAL, SampleInfo::HIT_FINISH, SampleInfo::HIT_WHISTLE, SampleInfo::HIT_CLAP]
    );
    assert_eq!(samples[0].bank.as_deref(), Some("soft"));
    assert!(samples[1..].iter().all(|s| s.bank.as_deref() == Some("drum") && s.volume == 40));

    let samples = banks.samples(LegacySoundType::empty());
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].name, SampleInfo::HIT_NORMAL);
}
