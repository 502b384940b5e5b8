use super::*;

#[test]
fn block_and_line_comments_are_discarded() {
    let out = crate::repair_to_string("/*a*/[1,/*b*/2]//tail", &opts()).unwrap();
    assert_eq!(out, "[1,2]");
}

#[test]
fn interleaved_comments_and_whitespace() {
    let s = "/*a*/  //b\n  [1]";
    let out = crate::repair_to_string(s, &opts()).unwrap();
    assert_eq!(out, "  \n  [1]");
}

#[test]
fn line_comment_ends_before_newline() {
    // The newline itself is whitespace and survives; the comment body does not.
    let out = crate::repair_to_string("[1,//x\n2]", &opts()).unwrap();
    assert_eq!(out, "[1,\n2]");
}

#[test]
fn unterminated_block_comment_consumes_rest() {
    let out = crate::repair_to_string("[1 /* never closed", &opts()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!([1]));
}

#[test]
fn comment_between_key_and_colon() {
    let out = crate::repair_to_string("{\"a\"/*c*/:1}", &opts()).unwrap();
    assert_eq!(out, "{\"a\":1}");
}

#[test]
fn standard_whitespace_is_copied_verbatim() {
    let out = scan("\t{\r\n  \"a\": 1\r\n}\t").unwrap();
    assert_eq!(out, "\t{\r\n  \"a\": 1\r\n}\t");
}

#[test]
fn special_whitespace_normalizes_to_ascii_space() {
    let out = crate::repair_to_string("{\"a\":\u{00A0}1,\u{3000}\"b\":\u{2009}2}", &opts()).unwrap();
    assert_eq!(out, "{\"a\": 1, \"b\": 2}");
}

#[test]
fn comment_only_input_is_an_error() {
    let err = crate::repair_to_string("/* nothing here */", &opts()).unwrap_err();
    assert_eq!(err.kind, RepairErrorKind::UnexpectedEnd);
}
