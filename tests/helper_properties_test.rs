use proptest::prelude::*;
use small_utils::{add, format_output, to_upper, OutputFormatter};

#[test]
fn test_documented_examples() {
    assert_eq!(to_upper("abc"), "ABC");
    assert_eq!(to_upper("ABC"), "ABC");
    assert_eq!(format_output("hello"), "Result: hello");
    assert_eq!(format_output(42), "Result: 42");
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
    assert_eq!(add(0, 0), 0);
}

proptest! {
    #[test]
    fn test_upper_is_idempotent(s in "\\PC*") {
        let once = to_upper(&s);
        prop_assert_eq!(to_upper(&once), once);
    }

    #[test]
    fn test_format_prefixes_label(s in "\\PC*") {
        let formatted = format_output(&s);
        prop_assert!(formatted.starts_with("Result: "));
        prop_assert_eq!(&formatted["Result: ".len()..], s.as_str());
    }

    #[test]
    fn test_format_matches_default_formatter(n in any::<i64>()) {
        prop_assert_eq!(format_output(n), OutputFormatter::default().format(n));
    }

    #[test]
    fn test_add_has_zero_identity(n in any::<i32>()) {
        prop_assert_eq!(add(n, 0), n);
        prop_assert_eq!(add(0, n), n);
    }
}
