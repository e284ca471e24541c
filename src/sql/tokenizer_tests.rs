#![cfg(test)]
use crate::*;

fn concat(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

#[rstest]
#[case("")]
#[case("SELECT * FROM users WHERE id = 1;")]
#[case("INSERT INTO t (a, b) VALUES ('x''y', 2.5);")]
#[case("/* multi\nline */ SELECT\n-- trailing")]
#[case("CREATE TABLE \"Tellimus\" (id SERIAL PRIMARY KEY)")]
#[case("DELIMITER //\nCREATE PROCEDURE p() BEGIN SELECT 1; END //")]
#[case("SELECT data->>'name', x::text FROM t")]
#[case("Tere, maailm! Õpetaja ütleb 'hei")]
fn reconstructs_input(#[case] sql: &str) {
    let tokens = tokenize_sql(sql);
    assert_eq!(concat(&tokens), sql);
}

#[test]
fn reconstructs_random_input() {
    crate::testing::common_init();
    for text in crate::testing::random_texts(0x5eed, 500) {
        let tokens = tokenize_sql(&text);
        assert_eq!(concat(&tokens), text, "lossy tokenization of {text:?}");
        assert!(tokens.iter().all(|t| !t.is_empty()), "empty token in {text:?}");
    }
}

#[test]
fn spans_are_contiguous_for_random_input() {
    for text in crate::testing::random_texts(7, 300) {
        let mut expected_start = 0;
        for token in tokenize_sql(&text) {
            assert_eq!(token.start, expected_start, "gap before {token} in {text:?}");
            assert_eq!(&text[token.start..token.end], token.text);
            expected_start = token.end;
        }
        assert_eq!(expected_start, text.len());
    }
}

#[test]
fn json_export_uses_camel_case_categories() {
    let tokens = tokenize_sql("x VARCHAR");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["category"], "identifier");
    assert_eq!(json[2]["category"], "dataType");
    assert_eq!(json[2]["text"], "VARCHAR");
    assert_eq!(json[2]["start"], 2);
}
