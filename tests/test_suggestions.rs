use filter_syntax::{
    FixedLengthNumberSyntax, FixedStringSyntax, StringOptionsSyntax, Suggestion, SyntaxPart,
};

fn concrete(text: &str) -> Suggestion {
    Suggestion {
        show_as: text.to_string(),
        value: Some(text.to_string()),
    }
}

fn template(show_as: &str) -> Suggestion {
    Suggestion {
        show_as: show_as.to_string(),
        value: None,
    }
}

#[test]
fn test_fixed_string_always_suggests_the_full_literal() {
    let get = FixedStringSyntax::new("GET");

    assert_eq!(get.suggestions("", 0), vec![concrete("GET")]);
    assert_eq!(get.suggestions("G", 0), vec![concrete("GET")]);
    assert_eq!(get.suggestions("GET", 0), vec![concrete("GET")]);
}

#[test]
fn test_number_suggests_template_until_digits_appear() {
    let number = SyntaxPart::number();

    assert_eq!(number.suggestions("", 0), vec![template("{number}")]);
    assert_eq!(number.suggestions("404", 0), vec![concrete("404")]);
    assert_eq!(number.suggestions("40x", 0), vec![concrete("40")]);
}

#[test]
fn test_fixed_length_number_suggestion_padding() {
    let status = FixedLengthNumberSyntax::new(3).unwrap();

    assert_eq!(
        status.suggestions("", 0),
        vec![template("{3-digit number}")]
    );
    assert_eq!(status.suggestions("1", 0), vec![concrete("100")]);
    assert_eq!(status.suggestions("12", 0), vec![concrete("120")]);
    assert_eq!(status.suggestions("123", 0), vec![concrete("123")]);
}

#[test]
fn test_string_options_suggests_every_live_branch_in_order() {
    let methods = StringOptionsSyntax::new(["GET", "POST", "PATCH"]).unwrap();

    // Empty input: every branch is live, longest first
    assert_eq!(
        methods.suggestions("", 0),
        vec![concrete("PATCH"), concrete("POST"), concrete("GET")]
    );

    // "P" narrows it to the two P-methods
    assert_eq!(
        methods.suggestions("P", 0),
        vec![concrete("PATCH"), concrete("POST")]
    );

    // "PA" narrows it to one
    assert_eq!(methods.suggestions("PA", 0), vec![concrete("PATCH")]);
}

#[test]
fn test_string_options_does_not_deduplicate_across_branches() {
    let options = StringOptionsSyntax::new(["POST", "PO", "POST"]).unwrap();

    // All three branches are live; the repeated literal is suggested
    // twice, deliberately
    assert_eq!(
        options.suggestions("PO", 0),
        vec![concrete("POST"), concrete("POST"), concrete("PO")]
    );
}

#[test]
fn test_suggestions_serialize_in_surface_shape() {
    let json = serde_json::to_value(concrete("GET")).unwrap();
    assert_eq!(json, serde_json::json!({ "showAs": "GET", "value": "GET" }));

    // Templates have no insertable value; the key is omitted entirely
    let json = serde_json::to_value(template("{number}")).unwrap();
    assert_eq!(json, serde_json::json!({ "showAs": "{number}" }));
}

// A composer threads one absolute cursor across a sequence of parts,
// then concatenates the suggestion strings of the part at the cursor
// onto the already-typed text.
#[test]
fn test_sequential_grammar_walk() {
    let grammar: Vec<SyntaxPart> = vec![
        StringOptionsSyntax::new(["GET", "POST"]).unwrap().into(),
        FixedStringSyntax::new("=").into(),
        FixedLengthNumberSyntax::new(3).unwrap().into(),
    ];

    let input = "POST=20";
    let mut index = 0;

    for part in &grammar {
        let matched = part.match_at(input, index).expect("grammar should match");
        if !matched.is_full() {
            // Cursor parked on the incomplete part: complete it from here
            let completions = part.suggestions(input, index);
            assert_eq!(completions, vec![concrete("200")]);
            let completed = format!("{}{}", &input[..index], completions[0].show_as);
            assert_eq!(completed, "POST=200");
            return;
        }
        index += matched.consumed;
    }

    panic!("expected the number part to be left incomplete");
}
