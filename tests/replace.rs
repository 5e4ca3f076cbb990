use regrep::{Error, Pattern, StrExt, replace_regex, substitute, try_replace_regex};

#[test]
fn test_replace_regex_single_group() {
    assert_eq!(
        "Winnie the Pooh".replace_regex("Winnie the ([a-zA-Z]+)", "Darth $1"),
        "Darth Pooh"
    );
    assert_eq!(
        Pattern::new_or_panic("Winnie the ([a-zA-Z]+)").replace("Winnie the Pooh", "Darth $1"),
        ("Darth Pooh".to_owned(), 1)
    );
}

#[test]
fn test_substitute_reordered_groups() {
    let result = Pattern::new_or_panic(r"([a-zA-Z]+)\s+(the)(.*)").search("Winnie the Pooh");
    assert_eq!(substitute(&result, "$2 $1"), "the Winnie");
    assert_eq!(result.substitute("$3|$2|$1"), " Pooh|the|Winnie");
}

#[test]
fn test_replace_no_match() {
    let pattern = Pattern::new_or_panic("zzz");
    assert_eq!(pattern.replace("abc", "x"), ("abc".to_owned(), 0));
    assert_eq!(replace_regex("abc", "zzz", "$0$0"), "abc");
}

#[test]
fn test_replace_all_occurrences() {
    assert_eq!(
        Pattern::new_or_panic(r"(\w+)=(\w+)").replace("name=John age=25", "$2 is $1"),
        ("John is name 25 is age".to_owned(), 2)
    );
    assert_eq!(
        replace_regex("hello 123 world 456", r"\d+", "<number>"),
        "hello <number> world <number>"
    );
}

#[test]
fn test_replace_whole_match_reference() {
    assert_eq!(
        Pattern::new_or_panic(r"(?s)\A.*\z").replace("line one\nline two", "$0"),
        ("line one\nline two".to_owned(), 1)
    );
    assert_eq!(replace_regex("abc", "b", "[$0]"), "a[b]c");
}

#[test]
fn test_replace_empty_pattern() {
    assert_eq!(
        Pattern::new_or_panic("").replace("hello", "-"),
        ("-h-e-l-l-o-".to_owned(), 6)
    );
}

#[test]
fn test_replace_escaped_dollar() {
    assert_eq!(replace_regex("price: 5", r"(\d+)", r"\$$1.00"), "price: $5.00");
    assert_eq!(replace_regex("a", "a", r"\\"), r"\");
    assert_eq!(replace_regex("a", "a", "$"), "$");
}

#[test]
fn test_replace_missing_and_absent_groups() {
    assert_eq!(replace_regex("ab", "(a)|(b)", "<$1|$2>"), "<a|><|b>");
    assert_eq!(replace_regex("ab", "a", "$5"), "b");
}

#[test]
fn test_replace_multi_digit_reference() {
    let pattern = (1..=10).map(|_| "(.)").collect::<String>();
    assert_eq!(replace_regex("abcdefghij", &pattern, "$10$1"), "ja");
    assert_eq!(replace_regex("ab", "(.)(.)", "$12"), "a2");
}

#[test]
fn test_replace_unicode() {
    assert_eq!(replace_regex("你好世界", "(好)(世)", "$2$1"), "你世好界");
    assert_eq!(replace_regex("ééé", "é", "e"), "eee");
}

#[test]
fn test_try_replace_regex() {
    assert_eq!(try_replace_regex("abc", "b", "x"), Ok("axc".to_owned()));
    assert!(matches!(
        "abc".try_replace_regex("(", "x"),
        Err(Error::Compile { .. })
    ));
}

#[test]
#[should_panic(expected = "invalid regex")]
fn test_replace_regex_invalid_panics() {
    let _ = replace_regex("abc", "[b", "x");
}
