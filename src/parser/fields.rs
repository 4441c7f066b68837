use super::ParseError;

/// Legacy numbers are parsed culture-invariant, surrounding
/// whitespace and a leading sign are allowed
pub(crate) fn parse_int(value: &str, field: &'static str) -> Result<i32, ParseError> {
    value.trim().parse().map_err(|_| ParseError::format(field, value))
}

pub(crate) fn parse_decimal(value: &str, field: &'static str) -> Result<f64, ParseError> {
    value.trim().parse().map_err(|_| ParseError::format(field, value))
}

/// Positional fields of a delimited legacy string
pub(crate) struct Fields<'a> {
    inner: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn split(line: &'a str, separator: char) -> Self {
        Self {
            inner: line.split(separator).collect(),
        }
    }

    pub fn get(&self, index: usize, field: &'static str) -> Result<&'a str, ParseError> {
        self.inner
            .get(index)
            .copied()
            .ok_or_else(|| ParseError::field(field, index))
    }

    pub fn optional(&self, index: usize) -> Option<&'a str> {
        self.inner.get(index).copied()
    }

    pub fn int(&self, index: usize, field: &'static str) -> Result<i32, ParseError> {
        parse_int(self.get(index, field)?, field)
    }

    pub fn decimal(&self, index: usize, field: &'static str) -> Result<f64, ParseError> {
        parse_decimal(self.get(index, field)?, field)
    }
}

#[test]
fn test_numbers() {
    assert_eq!(parse_int(" 42 ", "x"), Ok(42));
    assert_eq!(parse_int("-7", "x"), Ok(-7));
    assert_eq!(parse_int("+7", "x"), Ok(7));
    assert_eq!(parse_int("4.5", "x"), Err(ParseError::format("x", "4.5")));
    assert_eq!(parse_int("", "x"), Err(ParseError::format("x", "")));

    assert_eq!(parse_decimal("1234.5", "time"), Ok(1234.5));
    assert_eq!(parse_decimal("12", "time"), Ok(12.0));
    assert_eq!(parse_decimal("1e3", "time"), Ok(1000.0));
    assert!(parse_decimal("12,5", "time").is_err());
}

#[test]
fn test_fields() {
    let fields = Fields::split("1,2,,abc", ',');

    assert_eq!(fields.int(1, "y"), Ok(2));
    assert_eq!(fields.optional(2), Some(""));
    assert_eq!(fields.optional(4), None);
    assert_eq!(fields.get(4, "extra"), Err(ParseError::field("extra", 4)));
    assert!(matches!(fields.int(3, "abc"), Err(ParseError::Format { .. })));
}
