use super::*;

#[test]
fn plain_numbers_pass_through() {
    let out = scan("[0,-1,42,3.25,-0.5,1e10,1E5,2e+3,2e-3,-0]").unwrap();
    assert_eq!(out, "[0,-1,42,3.25,-0.5,1e10,1E5,2e+3,2e-3,-0]");
}

#[test]
fn trailing_dot_is_dropped() {
    let out = crate::repair_to_string("[1.]", &opts()).unwrap();
    assert_eq!(out, "[1]");
}

#[test]
fn trailing_dot_then_exponent() {
    let out = crate::repair_to_string("[1.e3]", &opts()).unwrap();
    assert_eq!(out, "[1e3]");
}

#[test]
fn leading_plus_is_dropped() {
    let out = crate::repair_to_string("[+5,+0.5]", &opts()).unwrap();
    assert_eq!(out, "[5,0.5]");
}

#[test]
fn leading_zeros_pass_through() {
    // Deliberately not renormalized; strict readers may reject this token.
    let mut sc = crate::parser::Scanner::new("007", &opts());
    assert!(sc.parse_number());
    let (out, _) = sc.finish();
    assert_eq!(out, "007");
}

#[test]
fn bare_sign_is_not_a_number() {
    // The fallback picks it up as a string instead.
    let out = crate::repair_to_string("[-,+]", &opts()).unwrap();
    assert_eq!(out, r#"["-","+"]"#);
}

#[test]
fn incomplete_exponent_stops_before_the_marker() {
    // `e` with no digits cannot extend the token; it becomes a separate
    // (string) element after a synthesized comma.
    let out = crate::repair_to_string("[1e]", &opts()).unwrap();
    assert_eq!(out, r#"[1,"e"]"#);
}

#[test]
fn leading_dot_degrades_to_string() {
    let out = crate::repair_to_string("[.5]", &opts()).unwrap();
    assert_eq!(out, r#"[".5"]"#);
}

#[test]
fn numeric_garbage_degrades_to_string() {
    let out = crate::repair_to_string("[1.2.3]", &opts()).unwrap();
    assert_eq!(out, r#"[1.2,".3"]"#);
}
