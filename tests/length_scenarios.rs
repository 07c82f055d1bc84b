use serde_json::json;
use unicode_length::{
    InvalidInputError, LengthCalculator, LengthConfig, WidthMode, ansi_regex, get, strip, width,
};

#[test]
fn throws_if_no_input() {
    let err = get(None::<&str>).unwrap_err();
    assert!(err.to_string().contains("Missing input"));
    assert_eq!(get(&json!(null)), Err(InvalidInputError::Missing));
}

#[test]
fn throws_if_input_is_not_a_string() {
    let err = get(123).unwrap_err();
    assert!(err.to_string().contains("Invalid input: 123"));
    let err = get(&json!({"a": 1})).unwrap_err();
    assert_eq!(err, InvalidInputError::NotAString("{\"a\":1}".into()));
    assert!(matches!(get(false), Err(InvalidInputError::NotAString(v)) if v == "false"));
}

#[test]
fn zero_for_empty_string() {
    assert_eq!(get(""), Ok(0));
    assert_eq!(get(&json!("")), Ok(0));
}

#[test]
fn unicode_symbols() {
    assert_eq!(get("汉字"), Ok(2));
}

#[test]
fn unicode_symbols_and_colors() {
    let s = "\u{1b}[32m?\u{1b}[39m \u{1b}[1mWhat's your first name:\u{1b}[22m ";
    assert_eq!(get(s), Ok(26));
}

#[test]
fn hyperlink_counts_only_visible_text() {
    let s = "\u{1b}]8;k=v;https://example-a.com/?a_b=1&c=2#tit%20le\u{7}click\u{1b}]8;;\u{7}";
    assert_eq!(get(s), Ok(5));
    let matches: Vec<&str> = ansi_regex().find_iter(s).map(|m| m.as_str()).collect();
    assert_eq!(matches.len(), 2);
}

#[test]
fn window_title_and_prompt() {
    let s = "\u{1b}]0;sg@tota:~/git/\u{7}\u{1b}[01;32m[sg@tota\u{1b}[01;37m misc-tests\u{1b}[01;32m]$";
    assert_eq!(strip(s), "[sg@tota misc-tests]$");
    assert_eq!(get(s), Ok(21));
}

#[test]
fn clear_tabs_replaced() {
    assert_eq!(ansi_regex().replace_all("foo\u{1b}[0gbar", ""), "foobar");
    assert_eq!(get("foo\u{1b}[0gbar"), Ok(6));
}

#[test]
fn malformed_escapes_count_as_text() {
    // A lone ESC is kept and counted as a code point.
    assert_eq!(get("ab\u{1b}"), Ok(3));
    // In column mode it is a control character and takes no cell.
    assert_eq!(width("ab\u{1b}"), 2);
}

#[test]
fn configured_calculator() {
    let cfg = core_config::parse("[length]\nmode = \"columns\"\nambiguous = \"wide\"\n");
    let calc = LengthCalculator::from_config(&cfg);
    assert_eq!(calc.mode(), WidthMode::Columns);
    assert_eq!(calc.get("汉字"), Ok(4));
    assert_eq!(calc.get("\u{1b}[1m±\u{1b}[0m"), Ok(2));
    assert_eq!(calc.get(None::<&str>), Err(InvalidInputError::Missing));
}

#[test]
fn invalid_config_falls_back_to_code_points() {
    let cfg = core_config::parse("[length]\nmode = 7\n");
    assert_eq!(cfg, LengthConfig::default());
    assert_eq!(LengthCalculator::from_config(&cfg).get("汉字"), Ok(2));
}
