use serde_yamlite::{
    dump, dump_with_options, parse, yaml, DumpOptions, Dumper, Mapping, Result, TagCodec, Tagged,
    Value,
};

fn sample() -> Value {
    yaml!({
        "foo": "bar",
        "bar": ["foo", "bar"],
        "foobar": {
            "foo": "bar",
            "bar": {"a": 1}
        }
    })
}

#[test]
fn test_inline_threshold() {
    let value = sample();
    assert_eq!(
        dump(&value, 0, 0),
        "{ foo: bar, bar: [foo, bar], foobar: { foo: bar, bar: { a: 1 } } }"
    );
    assert_eq!(
        dump(&value, 1, 0),
        "foo: bar\nbar: [foo, bar]\nfoobar: { foo: bar, bar: { a: 1 } }\n"
    );
    assert_eq!(
        dump(&value, 2, 0),
        "foo: bar\nbar:\n  - foo\n  - bar\nfoobar:\n  foo: bar\n  bar: { a: 1 }\n"
    );
    assert_eq!(
        dump(&value, 3, 0),
        "foo: bar\nbar:\n  - foo\n  - bar\nfoobar:\n  foo: bar\n  bar:\n    a: 1\n"
    );
    assert_eq!(dump(&value, 3, 0), dump(&value, usize::MAX, 0));
}

#[test]
fn test_indentation_width() {
    let options = DumpOptions::expanded().with_indent(4);
    assert_eq!(
        dump_with_options(&sample(), &options),
        "foo: bar\nbar:\n    - foo\n    - bar\nfoobar:\n    foo: bar\n    bar:\n        a: 1\n"
    );
}

#[test]
fn test_base_indent() {
    assert_eq!(
        dump(&yaml!({"a": {"b": 1}}), 2, 4),
        "    a:\n      b: 1\n"
    );
    assert_eq!(dump(&Value::Int(1), 2, 3), "   1");
}

#[test]
fn test_scalars() {
    assert_eq!(dump(&Value::Null, 2, 0), "null");
    assert_eq!(dump(&Value::Bool(false), 2, 0), "false");
    assert_eq!(dump(&Value::Int(-17), 2, 0), "-17");
    assert_eq!(dump(&Value::Float(1.5), 2, 0), "1.5");
    assert_eq!(dump(&Value::Float(-0.25), 2, 0), "-0.25");
}

#[test]
fn test_whole_floats_keep_their_type() {
    assert_eq!(dump(&Value::Float(1.0), 2, 0), "!!float 1");
    assert_eq!(dump(&Value::Float(-3.0), 2, 0), "!!float -3");
    assert_eq!(parse("!!float 1").unwrap(), Value::Float(1.0));

    let value = yaml!({"ratio": 2.0});
    let text = dump(&value, 2, 0);
    assert_eq!(text, "ratio: !!float 2\n");
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn test_special_floats() {
    assert_eq!(dump(&Value::Float(f64::INFINITY), 2, 0), ".Inf");
    assert_eq!(dump(&Value::Float(f64::NEG_INFINITY), 2, 0), "-.Inf");
    assert_eq!(dump(&Value::Float(f64::NAN), 2, 0), ".NaN");

    let back = parse(".NaN").unwrap();
    assert!(back.as_f64().is_some_and(f64::is_nan));
    assert_eq!(parse("-.Inf").unwrap(), Value::Float(f64::NEG_INFINITY));
}

#[test]
fn test_string_quoting() {
    let cases = [
        ("plain", "plain"),
        ("", "''"),
        ("true", "'true'"),
        ("null", "'null'"),
        ("123", "'123'"),
        ("1.5", "'1.5'"),
        ("0x1F", "'0x1F'"),
        ("2001-12-14", "'2001-12-14'"),
        ("- item", "'- item'"),
        ("key: value", "'key: value'"),
        ("it's: here", "'it''s: here'"),
        (" padded", "' padded'"),
        ("a, b", "'a, b'"),
        ("a # b", "'a # b'"),
        ("a\tb", "\"a\\tb\""),
        ("bell\x07", "\"bell\\a\""),
        ("http://example.com", "http://example.com"),
        ("it's", "it's"),
    ];
    for (input, expected) in cases {
        assert_eq!(dump(&Value::from(input), 2, 0), expected, "input {:?}", input);
        assert_eq!(parse(expected).unwrap(), Value::from(input), "text {:?}", expected);
    }
}

#[test]
fn test_literal_block_for_multi_line_strings() {
    let value = yaml!({"text": "line1\nline2\n"});
    assert_eq!(dump(&value, 2, 0), "text: |\n  line1\n  line2\n");

    let value = yaml!({"text": "line1\nline2"});
    assert_eq!(dump(&value, 2, 0), "text: |-\n  line1\n  line2\n");

    let value = yaml!({"text": "line1\n\nline3"});
    assert_eq!(dump(&value, 2, 0), "text: |-\n  line1\n\n  line3\n");

    let value = yaml!({"text": "  indented\nbase"});
    assert_eq!(dump(&value, 2, 0), "text: |2-\n    indented\n  base\n");

    for text in ["line1\nline2\n", "line1\nline2", "line1\n\nline3", "  indented\nbase"] {
        let value = yaml!({"text": text});
        assert_eq!(parse(&dump(&value, 2, 0)).unwrap(), value, "text {:?}", text);
    }
}

#[test]
fn test_literal_block_nested() {
    let value = yaml!({"outer": {"text": "a\nb"}, "list": ["c\nd"]});
    let text = dump(&value, 4, 0);
    assert_eq!(
        text,
        "outer:\n  text: |-\n    a\n    b\nlist:\n  - |-\n    c\n    d\n"
    );
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn test_multi_line_strings_fall_back_to_double_quotes() {
    // flow position
    assert_eq!(dump(&yaml!(["a\nb"]), 0, 0), "[\"a\\nb\"]");
    // several trailing newlines
    assert_eq!(dump(&yaml!({"t": "a\n\n"}), 2, 0), "t: \"a\\n\\n\"\n");
    // whitespace-only line
    assert_eq!(dump(&yaml!({"t": "a\n  \nb"}), 2, 0), "t: \"a\\n  \\nb\"\n");
    // control characters
    assert_eq!(dump(&yaml!({"t": "a\tb\nc"}), 2, 0), "t: \"a\\tb\\nc\"\n");

    for text in ["a\n\n", "a\n  \nb", "a\tb\nc", "\n"] {
        let value = yaml!({"t": text});
        assert_eq!(parse(&dump(&value, 2, 0)).unwrap(), value, "text {:?}", text);
    }
}

#[test]
fn test_empty_containers() {
    let value = yaml!({"list": [], "map": {}, "nested": [[]]});
    assert_eq!(dump(&value, 3, 0), "list: []\nmap: {}\nnested:\n  - []\n");
    assert_eq!(dump(&Value::Sequence(vec![]), 2, 0), "[]");
    assert_eq!(dump(&Value::Mapping(Mapping::new()), 2, 0), "{}");
}

#[test]
fn test_nested_sequences() {
    let value = yaml!([[1, 2], {"a": 1, "b": 2}, 3]);
    let text = dump(&value, 3, 0);
    assert_eq!(text, "-\n  - 1\n  - 2\n-\n  a: 1\n  b: 2\n- 3\n");
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn test_non_string_keys() {
    let mut map = Mapping::new();
    map.insert(Value::Int(1), Value::from("one"));
    map.insert(Value::Bool(true), Value::from("yes"));
    map.insert(Value::from("a: b"), Value::from("quoted"));
    map.insert(Value::Float(1.5), Value::Null);
    let value = Value::Mapping(map);

    let text = dump(&value, 2, 0);
    assert_eq!(text, "1: one\ntrue: 'yes'\n'a: b': quoted\n1.5: null\n");
    assert_eq!(parse(&text).unwrap(), value);
}

#[test]
fn test_tagged_values() {
    let value = yaml!({"color": null});
    let mut map = value.as_mapping().cloned().unwrap();
    map.insert(
        Value::from("color"),
        Value::Tagged(Tagged::new("!color", "red")),
    );
    map.insert(
        Value::from("object"),
        Value::Tagged(Tagged::new("!!php/object", "O:8:\"stdClass\":0:{}")),
    );
    let value = Value::Mapping(map);

    let text = dump(&value, 2, 0);
    assert_eq!(
        text,
        "color: !color red\nobject: !!php/object O:8:\"stdClass\":0:{}\n"
    );
    assert_eq!(parse(&text).unwrap(), value);
}

struct DropTags;

impl TagCodec for DropTags {
    fn resolve_tag(&self, _tag: &str, payload: &str) -> Result<Value> {
        Ok(Value::from(payload))
    }

    fn render_tag(&self, _tagged: &Tagged) -> Option<(String, String)> {
        None
    }
}

#[test]
fn test_unrepresentable_tag_renders_null() {
    let value = Value::Sequence(vec![Value::Tagged(Tagged::new("!handle", "42"))]);
    let text = Dumper::new(DumpOptions::new()).with_codec(&DropTags).dump(&value);
    assert_eq!(text, "- null\n");
}

#[test]
fn test_dump_is_deterministic() {
    let value = sample();
    assert_eq!(dump(&value, 2, 0), dump(&value, 2, 0));
}

#[test]
fn test_dump_parse_dump_is_stable() {
    let input = "# settings\nname: demo # inline comment\nitems:\n  - { id: 1, tags: [a, b] }\n  - id: 2\ntext: |\n  hello\n  world\n";
    let first = dump(&parse(input).unwrap(), 2, 0);
    let second = dump(&parse(&first).unwrap(), 2, 0);
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_at_every_threshold() {
    let value = yaml!({
        "service": {
            "name": "api",
            "replicas": 3,
            "ratio": 0.75,
            "enabled": true,
            "owner": null,
            "ports": [80, 443],
            "env": {"LOG": "debug", "EMPTY": ""},
            "matrix": [[1, 2], [3, [4, {"deep": "yes"}]]],
            "script": "set -e\nmake\n"
        },
        "version": "1.0",
        "weight": 10.0
    });
    for inline in [0, 1, 2, 3, 4, 5, usize::MAX] {
        let text = dump(&value, inline, 0);
        assert_eq!(parse(&text).unwrap(), value, "inline {}:\n{}", inline, text);
    }
}
