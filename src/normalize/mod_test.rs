use proptest::prelude::*;

use super::*;

#[test]
fn line_comment_and_number() {
    assert_eq!(normalize("int x = 5; // set x\n"), "int var = num;");
}

#[test]
fn renamed_variables_normalize_identically() {
    assert_eq!(normalize("int a=1;"), "int var=num;");
    assert_eq!(normalize("int b=1;"), "int var=num;");
    assert_eq!(
        normalize("int total = count * 2;"),
        normalize("int sum   = n * 7;  // renamed")
    );
}

#[test]
fn c_program() {
    let src = "int main() {\n    printf(\"%d\\n\", 42); /* print */\n    return 0;\n}\n";
    assert_eq!(
        normalize(src),
        "int var() {\nvar(\"str\", num);\nreturn num;\n}"
    );
}

#[test]
fn python_function() {
    let src = "def add(a, b):\n    return a + b\n";
    assert_eq!(normalize(src), "def var(var, var):\nreturn var + var");
}

#[test]
fn javascript_snippet() {
    let src = "const greet = (name) => {\n  return 'Hi ' + name;\n};";
    assert_eq!(
        normalize(src),
        "const var = (var) => {\nreturn 'c' + var;\n};"
    );
}

#[test]
fn literal_tokens_are_not_renamed() {
    assert_eq!(normalize(r#"s = "hello";"#), r#"var = "str";"#);
    assert_eq!(normalize("c = 'x';"), "var = 'c';");
    assert_eq!(normalize("n = 3.14f;"), "var = num;");
}

#[test]
fn case_is_folded() {
    assert_eq!(normalize("INT X = 5;"), "int var = num;");
    assert_eq!(normalize("Return True"), "return true");
}

#[test]
fn comment_markers_inside_strings() {
    assert_eq!(
        normalize(r#"url = "http://example.com"; // home"#),
        r#"var = "str";"#
    );
}

#[test]
fn block_comment_keeps_tokens_apart() {
    assert_eq!(normalize("int/**/x;"), "int var;");
}

#[test]
fn blank_lines_collapse() {
    assert_eq!(normalize("a\n\n\n   b"), "var\nvar");
}

#[test]
fn unterminated_constructs_discard_trailing_content() {
    assert_eq!(normalize("x = \"open string"), "var =");
    assert_eq!(normalize("char c = 'x"), "char var =");
    assert_eq!(normalize("a /* open comment\nint b;"), "var");
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \n\t "), "");
    assert_eq!(normalize("// only a comment"), "");
}

#[test]
fn edge_literals_are_not_trimmed_away() {
    assert_eq!(normalize("  \"a\"  "), "\"str\"");
}

#[test]
fn custom_reserved_table() {
    static RUSTISH: ReservedWords = ReservedWords::new(&["fn", "let", "mut"]);
    let normalizer = Normalizer::new(&RUSTISH);
    assert_eq!(
        normalizer.normalize("fn f() { let mut x = 1; }"),
        "fn var() { let mut var = num; }"
    );
    assert_eq!(normalizer.normalize("int x;"), "var var;");
}

#[test]
fn idempotent_on_samples() {
    for src in [
        "int x = 5; // set x\n",
        "printf(\"%d\", 0x1F);",
        "a/**//b",
        "'\\'",
        "x = 1e-5 + .5",
        "\\\"q\"",
    ] {
        let once = normalize(src);
        assert_eq!(normalize(&once), once, "not idempotent for {src:?}");
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(src in "[a-zA-Z0-9_ \t\n\"'/*\\\\.;=(){}+-]{0,64}") {
        let once = normalize(&src);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn output_has_no_uppercase_or_digits(src in "[a-zA-Z0-9_ \t\n.;=+-]{0,64}") {
        let out = normalize(&src);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }
}
