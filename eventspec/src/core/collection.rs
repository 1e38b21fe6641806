//! Membership and blankness checks over small slices.

/// True if `item` equals some element of `items`.
///
/// An absent slice never contains anything. Absent elements are modelled as
/// `Option` entries, so `contains(Some(&[None, Some("a")]), &None)` is true.
pub fn contains<T: PartialEq>(items: Option<&[T]>, item: &T) -> bool {
    match items {
        Some(items) => items.iter().any(|candidate| candidate == item),
        None => false,
    }
}

/// True if `items` holds no present, non-empty string.
///
/// Absent and zero-length slices are empty, as are slices made up only of
/// `None` and `""` entries.
pub fn is_empty<S: AsRef<str>>(items: Option<&[Option<S>]>) -> bool {
    let Some(items) = items else {
        return true;
    };
    items
        .iter()
        .flatten()
        .all(|value| value.as_ref().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_absent_slice_is_false() {
        assert!(!contains::<&str>(None, &"save"));
        assert!(!contains::<Option<&str>>(None, &None));
    }

    #[test]
    fn contains_empty_slice_is_false() {
        let items: [&str; 0] = [];
        assert!(!contains(Some(&items[..]), &"save"));
    }

    #[test]
    fn contains_matches_absent_element() {
        let items = [None, Some("a")];
        assert!(contains(Some(&items[..]), &None));
        assert!(contains(Some(&items[..]), &Some("a")));
        assert!(!contains(Some(&items[..]), &Some("b")));
    }

    #[test]
    fn contains_absent_item_without_absent_element_is_false() {
        let items = [Some("a"), Some("b")];
        assert!(!contains(Some(&items[..]), &None));
    }

    #[test]
    fn contains_compares_by_value() {
        let items = vec!["save".to_string(), "delete".to_string()];
        let probe = String::from("del") + "ete";
        assert!(contains(Some(items.as_slice()), &probe));
    }

    #[test]
    fn contains_every_element_of_slice() {
        let items = [1, 5, 9, 5, 2];
        for item in &items {
            assert!(contains(Some(&items[..]), item));
        }
        for missing in [0, 3, 4, 6] {
            assert!(!contains(Some(&items[..]), &missing));
        }
    }

    #[test]
    fn is_empty_absent_and_zero_length() {
        assert!(is_empty::<&str>(None));
        let items: [Option<&str>; 0] = [];
        assert!(is_empty(Some(&items[..])));
    }

    #[test]
    fn is_empty_only_blanks_and_absent() {
        assert!(is_empty(Some(&[Some("")][..])));
        assert!(is_empty(Some(&[None, Some("")][..])));
        assert!(is_empty(Some(&[None::<String>, None][..])));
    }

    #[test]
    fn is_empty_false_when_any_value_present() {
        assert!(!is_empty(Some(&[Some(""), Some("x")][..])));
        assert!(!is_empty(Some(&[Some("x".to_string()), None][..])));
    }

    #[test]
    fn is_empty_treats_whitespace_as_present() {
        assert!(!is_empty(Some(&[Some(" ")][..])));
    }
}
