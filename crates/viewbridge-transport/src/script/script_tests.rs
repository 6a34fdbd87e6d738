#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// bootstrap_script tests

#[test]
fn bootstrap_script___webkit___posts_through_named_handler() {
    let script = bootstrap_script(TransportKind::Webkit, "main");

    assert!(script.contains(r#"webkit.messageHandlers["main"].postMessage(JSON.stringify(msg));"#));
    assert!(!script.contains("window.ipc"));
}

#[test]
fn bootstrap_script___ipc___posts_through_window_ipc() {
    let script = bootstrap_script(TransportKind::Ipc, "ignored");

    assert!(script.contains("window.ipc.postMessage(JSON.stringify(msg));"));
    assert!(!script.contains("ignored"));
}

#[test_case(TransportKind::Webkit)]
#[test_case(TransportKind::Ipc)]
fn bootstrap_script___any_variant___defines_global_surface(kind: TransportKind) {
    let script = bootstrap_script(kind, "main");

    assert!(script.contains("window.sendToPlugin = function (msg)"));
    assert!(script.contains("window.onPluginMessage = function () {};"));
    assert!(script.contains("window.onPluginMessageInternal = function (msg)"));
    assert!(!script.contains(DELIVER_PLACEHOLDER));
    assert!(GLOBALS.iter().all(|(placeholder, _)| !script.contains(placeholder)));
}

#[test]
fn bootstrap_script___hostile_handler_name___stays_inside_string_literal() {
    let script = bootstrap_script(TransportKind::Webkit, r#"x"]);alert(1);//"#);

    assert!(script.contains(r#"webkit.messageHandlers["x\"]);alert(1);//"].postMessage"#));
}

// inbound_call tests

#[test]
fn bootstrap_script___handler_name_like_placeholder___is_left_verbatim() {
    let script = bootstrap_script(TransportKind::Webkit, "__SEND__");

    assert!(script.contains(r#"webkit.messageHandlers["__SEND__"].postMessage"#));
    assert!(script.contains("window.sendToPlugin = function (msg)"));
}

#[test]
fn inbound_call___object_text___renders_quoted_call() {
    let script = inbound_call(r#"{"a":1}"#);

    assert_eq!(script, r#"onPluginMessageInternal("{\"a\":1}");"#);
}

#[test]
fn inbound_call___template_literal_syntax___is_not_interpolated() {
    let script = inbound_call(r#"{"s":"`${alert(1)}`"}"#);

    assert!(script.starts_with(r#"onPluginMessageInternal(""#));
    assert!(script.contains("`${alert(1)}`"));
}

#[test]
fn inbound_call___line_separators___are_escaped() {
    let script = inbound_call("\"a\u{2028}b\u{2029}c\"");

    assert!(!script.contains('\u{2028}'));
    assert!(!script.contains('\u{2029}'));
    assert!(script.contains("\\u2028"));
}

// parse_inbound_call tests

#[test_case(r#"{"a":1}"# ; "json object")]
#[test_case("not json at all" ; "plain text")]
#[test_case("\"quotes\" and \\ backslashes \n newlines" ; "escapes")]
#[test_case("\u{2028}\u{2029}" ; "line separators")]
fn parse_inbound_call___rendered_call___recovers_text(text: &str) {
    let script = inbound_call(text);

    assert_eq!(parse_inbound_call(&script).as_deref(), Some(text));
}

#[test_case("alert(1);" ; "other function")]
#[test_case("onPluginMessageInternal(1);" ; "non string argument")]
#[test_case("onPluginMessageInternal(\"a\")" ; "missing semicolon")]
#[test_case("" ; "empty script")]
fn parse_inbound_call___other_scripts___return_none(script: &str) {
    assert_eq!(parse_inbound_call(script), None);
}

// js_string_literal tests

#[test_case("plain", r#""plain""# ; "plain")]
#[test_case("say \"hi\"", r#""say \"hi\"""# ; "quotes")]
#[test_case("a\nb", r#""a\nb""# ; "newline")]
#[test_case("\u{2028}", r#""\u2028""# ; "line separator")]
fn js_string_literal___quotes_text(text: &str, expected: &str) {
    assert_eq!(js_string_literal(text), expected);
}
