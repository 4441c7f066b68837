use approx::assert_relative_eq;
use cgmath::Vector2;
use rosu_legacy::{
    hit_objects::{slider::CurveType, HitObjectKind},
    parser::curve::CurvePath,
    samples::SampleInfo,
    HitObject, LegacyHitObjectParser, ParseError, ParserConfig, StandardFactory,
};
use test_case::case;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn parse(line: &str) -> Result<HitObject, ParseError> {
    init_logging();
    LegacyHitObjectParser::default().parse(line, &StandardFactory)
}

fn sample(bank: Option<&str>, name: &'static str, volume: i32) -> SampleInfo {
    SampleInfo {
        bank: bank.map(str::to_owned),
        name,
        volume,
    }
}

#[case("100,200,1500,1,0", 100.0, 200.0, 1500.0, false ; "plain circle")]
#[case("100,200,1500.5,5,0", 100.0, 200.0, 1500.5, true ; "new combo")]
#[case("64,64,10,53,2", 64.0, 64.0, 10.0, true ; "new combo with colour skip")]
#[case("-5, 400 ,0,1,0,0:0", -5.0, 400.0, 0.0, false ; "whitespace and negative")]
fn test_circle(line: &str, x: f32, y: f32, start_time: f64, new_combo: bool) {
    let object = parse(line).unwrap();

    assert!(matches!(object.kind, HitObjectKind::Hit(_)));
    assert_eq!(object.pos(), Vector2::new(x, y));
    assert_relative_eq!(object.start_time, start_time);
    assert_eq!(object.new_combo, new_combo);
    assert!(!object.is_partial());
}

#[test]
fn test_circle_hit_sample() {
    let object = parse("100,200,1500,1,0,1:0:0:50:").unwrap();

    assert_eq!(object.samples, vec![sample(Some("normal"), SampleInfo::HIT_NORMAL, 50)]);
}

#[test]
fn test_circle_without_hit_sample() {
    let object = parse("100,200,1500,1,0").unwrap();

    assert_eq!(object.samples, vec![sample(None, SampleInfo::HIT_NORMAL, 0)]);

    let object = parse("100,200,1500,1,0,").unwrap();

    assert_eq!(object.samples, vec![sample(None, SampleInfo::HIT_NORMAL, 0)]);
}

#[test]
fn test_sound_type_normal_finish() {
    let object = parse("100,200,1500,1,5,2:3:0:30:").unwrap();

    assert_eq!(
        object.samples,
        vec![
            sample(Some("soft"), SampleInfo::HIT_NORMAL, 30),
            sample(Some("drum"), SampleInfo::HIT_FINISH, 30),
        ]
    );
}

#[test]
fn test_sound_type_all_additions() {
    let object = parse("100,200,1500,1,14,0:2").unwrap();

    assert_eq!(
        object.samples,
        vec![
            sample(None, SampleInfo::HIT_NORMAL, 0),
            sample(Some("soft"), SampleInfo::HIT_FINISH, 0),
            sample(Some("soft"), SampleInfo::HIT_WHISTLE, 0),
            sample(Some("soft"), SampleInfo::HIT_CLAP, 0),
        ]
    );
}

#[test]
fn test_slider() {
    let object = parse("0,0,1000,2,0,B|100:100|200:200,1,140").unwrap();

    let HitObjectKind::Slider(slider) = &object.kind else {
        panic!("should be slider")
    };

    assert_eq!(slider.curve_type, CurveType::Bezier);
    assert_eq!(
        slider.control_points,
        vec![Vector2::new(0.0, 0.0), Vector2::new(100.0, 100.0), Vector2::new(200.0, 200.0)]
    );
    assert_eq!(slider.repeat_count, 1);
    assert_relative_eq!(slider.length, 140.0);
    assert_relative_eq!(object.start_time, 1000.0);
}

#[test]
fn test_slider_first_point_is_position() {
    let object = parse("320,48,500,6,0,L|400:48,2").unwrap();

    let HitObjectKind::Slider(slider) = &object.kind else {
        panic!("should be slider")
    };

    assert_eq!(slider.control_points[0], Vector2::new(320.0, 48.0));
    assert_eq!(slider.control_points[0], slider.pos);
    assert_eq!(slider.curve_type, CurveType::Linear);
    assert_relative_eq!(slider.length, 0.0);
    assert!(object.new_combo);
}

#[test]
fn test_slider_hit_sample_skips_edge_fields() {
    let line = "0,0,1000,2,2,P|50:50|100:0,2,140.5,2|0|0,0:0|0:0|0:0,2:3:0:60:";
    let object = parse(line).unwrap();

    assert_eq!(
        object.samples,
        vec![
            sample(Some("soft"), SampleInfo::HIT_NORMAL, 60),
            sample(Some("drum"), SampleInfo::HIT_WHISTLE, 60),
        ]
    );

    // Edge fields alone don't count as a hit sample field
    let object = parse("0,0,1000,2,0,P|50:50|100:0,2,140.5,2|0|0,0:0|0:0|0:0").unwrap();
    assert_eq!(object.samples, vec![sample(None, SampleInfo::HIT_NORMAL, 0)]);
}

#[case(9000 ; "at limit")]
#[case(0 ; "zero")]
fn test_slider_repeat_count_allowed(repeats: u32) {
    let object = parse(&format!("0,0,1000,2,0,L|10:10,{repeats},10")).unwrap();

    let HitObjectKind::Slider(slider) = &object.kind else {
        panic!("should be slider")
    };

    assert_eq!(slider.repeat_count, repeats);
}

#[case(9001 ; "over limit")]
#[case(-1 ; "negative")]
fn test_slider_repeat_count_rejected(repeats: i32) {
    let result = parse(&format!("0,0,1000,2,0,L|10:10,{repeats},10"));

    assert_eq!(
        result,
        Err(ParseError::Range {
            field: "repeat count",
            value: repeats,
            max: 9000,
        })
    );
}

#[test]
fn test_spinner() {
    let object = parse("256,192,1000,12,0,3000").unwrap();

    let HitObjectKind::Spinner(spinner) = &object.kind else {
        panic!("should be spinner")
    };

    assert_eq!(spinner.pos, Vector2::new(256.0, 192.0));
    assert_relative_eq!(spinner.end_time, 3000.0);
    assert_relative_eq!(object.end_time(), 3000.0);
    assert_relative_eq!(spinner.duration(object.start_time), 2000.0);
}

#[test]
fn test_spinner_ignores_position_fields() {
    let object = parse("abc,def,1000,8,4,3000,1:1:0:20:").unwrap();

    assert_eq!(object.pos(), Vector2::new(256.0, 192.0));
    assert_eq!(
        object.samples,
        vec![
            sample(Some("normal"), SampleInfo::HIT_NORMAL, 20),
            sample(Some("normal"), SampleInfo::HIT_FINISH, 20),
        ]
    );
}

#[test]
fn test_hold_is_partial() {
    let object = parse("64,192,500,132,2,1000:0:0:0:0:").unwrap();

    assert!(matches!(object.kind, HitObjectKind::Hold(_)));
    assert!(object.is_partial());
    assert!(object.new_combo);
    assert_eq!(object.pos(), Vector2::new(64.0, 192.0));
    assert_relative_eq!(object.end_time(), 500.0);

    // Hit sample field isn't decoded for holds
    assert_eq!(
        object.samples,
        vec![
            sample(None, SampleInfo::HIT_NORMAL, 0),
            sample(None, SampleInfo::HIT_WHISTLE, 0),
        ]
    );
}

#[case("100,200,1500,0,0" ; "no kind bits")]
#[case("100,200,1500,4,0" ; "only new combo")]
#[case("100,200,1500,112,0" ; "only colour skip")]
#[case("100,200,1500,3,0" ; "two kinds")]
fn test_unsupported_type(line: &str) {
    assert!(matches!(parse(line), Err(ParseError::UnsupportedType(_))));
}

#[case("1,2,3", "type", 3 ; "no type")]
#[case("1,2,3,1", "sound type", 4 ; "no sound type")]
#[case("0,0,1000,2,0", "curve path", 5 ; "no curve path")]
#[case("0,0,1000,2,0,B|1:1", "repeat count", 6 ; "no repeat count")]
#[case("0,0,1000,8,0", "end time", 5 ; "no spinner end")]
#[case("0,0,1000,2,0,B|100,1", "control point y", 1 ; "half control point")]
#[case("0,0,1000,1,0,1", "addition sample bank", 1 ; "half hit sample")]
fn test_missing_field(line: &str, field: &'static str, index: usize) {
    assert_eq!(parse(line), Err(ParseError::MissingField { field, index }));
}

#[case("1,2,abc,1,0", "start time" ; "start time")]
#[case("x,2,abc,1,0", "x" ; "position before start time")]
#[case("1,2,3,circle,0", "type" ; "type")]
#[case("1,2,3,1,loud", "sound type" ; "sound type")]
#[case("0,0,1000,2,0,B|1:1,twice", "repeat count" ; "repeat count")]
#[case("0,0,1000,2,0,B|1:1,1,long", "length" ; "length")]
#[case("0,0,1000,8,0,later", "end time" ; "spinner end")]
#[case("0,0,1000,1,0,1:0:0:max", "sample volume" ; "volume")]
fn test_format_error(line: &str, field: &'static str) {
    match parse(line) {
        Err(ParseError::Format { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected format error for `{field}`, got {other:?}"),
    }
}

#[test]
fn test_parse_is_idempotent() {
    let parser = LegacyHitObjectParser::default();
    let line = "0,0,1000,6,2,B|100:100|200:200,3,140,2|0|0,0:0|0:0|0:0,1:2:0:70:";

    let first = parser.parse(line, &StandardFactory).unwrap();
    let second = parser.parse(line, &StandardFactory).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_slider_reserialize() {
    let line = "32,64,1000,2,0,C|64:96|L|128:256|X|300:10,17,250";
    let object = parse(line).unwrap();

    let HitObjectKind::Slider(slider) = &object.kind else {
        panic!("should be slider")
    };

    let path = CurvePath {
        curve_type: slider.curve_type,
        control_points: slider.control_points.clone(),
    };

    let reserialized = format!(
        "{},{},{},2,0,{},{},{}",
        slider.pos.x, slider.pos.y, object.start_time, path.to_legacy_string(), slider.repeat_count, slider.length
    );

    let reparsed = parse(&reserialized).unwrap();

    assert_eq!(reparsed, object);
}

#[test]
fn test_custom_config() {
    let config = ParserConfig {
        playfield_width: 640.0,
        playfield_height: 480.0,
        max_repeat_count: 10,
    };

    let parser = LegacyHitObjectParser::new(config);
    assert_eq!(parser.config(), &config);

    let spinner = parser.parse("0,0,0,8,0,100", &StandardFactory).unwrap();
    assert_eq!(spinner.pos(), Vector2::new(320.0, 240.0));

    let result = parser.parse("0,0,0,2,0,L|1:1,11", &StandardFactory);
    assert!(matches!(result, Err(ParseError::Range { max: 10, .. })));
}

#[test]
fn test_parse_from_threads() {
    let parser = LegacyHitObjectParser::default();
    let line = "100,200,1500,5,8,3:0:0:25:";
    let expected = parser.parse(line, &StandardFactory).unwrap();

    let parser = &parser;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || parser.parse(line, &StandardFactory)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn test_error_messages() {
    let err = parse("100,200,1500,0,0").unwrap_err();
    assert_eq!(err.to_string(), "unknown hit object type `None`");

    let err = parse("1,2,3").unwrap_err();
    assert_eq!(err.to_string(), "couldn't find a required field `type` at index 3");
}
