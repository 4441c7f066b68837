pub mod config;
pub mod factory;
pub mod hit_objects;
pub mod math;
pub mod parser;
pub mod samples;

pub use config::ParserConfig;
pub use factory::{HitObjectFactory, StandardFactory};
pub use hit_objects::{HitObject, HitObjectKind, HitObjectType};
pub use parser::{parse_hit_object, LegacyHitObjectParser, ParseError};
