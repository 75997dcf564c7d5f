//! Natural-order string comparison
//!
//! Orders names the way a file browser does: `file2` before `file10`.

use std::cmp::Ordering;

/// A maximal run of ASCII digits or of anything else
#[derive(Debug, Clone, Copy)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn runs(s: &str) -> impl Iterator<Item = Run<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits { Run::Digits(run) } else { Run::Text(run) })
    })
}

/// Compares digit strings by integer value without parsing them
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_caseless(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_run(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => cmp_numeric(x, y),
        (Run::Digits(x) | Run::Text(x), Run::Digits(y) | Run::Text(y)) => cmp_caseless(x, y),
    }
}

/// Compares two display names in natural order.
///
/// Names are split into digit and non-digit runs and compared run by run:
/// digit runs by value, other runs case-insensitively. When one run sequence
/// is a prefix of the other, the one with fewer runs sorts first; names with
/// equal runs fall back to their length.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match cmp_run(x, y) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return a.chars().count().cmp(&b.chars().count()),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Tracks the direction for a sort key that can be invoked repeatedly
///
/// The first invocation of a key sorts ascending; invoking the same key
/// again flips the direction.
#[derive(Debug, Clone)]
pub struct SortToggle<K> {
    key: Option<K>,
    direction: SortDirection,
}

impl<K> Default for SortToggle<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<K: PartialEq> SortToggle<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invoke(&mut self, key: K) -> SortDirection {
        if self.key.as_ref() == Some(&key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// Sorts `items` by the natural order of the name `key` extracts
pub fn sort_natural<T, F>(items: &mut [T], direction: SortDirection, key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| direction.apply(natural_cmp(key(a), key(b))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(natural_cmp("file2", "file10"), Ordering::Less);
        assert_eq!(natural_cmp("file10", "file2"), Ordering::Greater);
    }

    #[test]
    fn equal_input_is_equal() {
        assert_eq!(natural_cmp("a", "a"), Ordering::Equal);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn text_ignores_case() {
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Equal);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("file", "file1"), Ordering::Less);
        assert_eq!(natural_cmp("a0001", "a1b"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_tie_break_on_length() {
        assert_eq!(natural_cmp("img1", "img001"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp("x99999999999999999999999", "x100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn toggle_flips_on_same_key() {
        let mut toggle = SortToggle::new();
        assert_eq!(toggle.invoke("name"), SortDirection::Ascending);
        assert_eq!(toggle.invoke("name"), SortDirection::Descending);
        assert_eq!(toggle.invoke("name"), SortDirection::Ascending);
        assert_eq!(toggle.invoke("status"), SortDirection::Ascending);
    }

    #[test]
    fn sorts_descending() {
        let mut names = vec!["file1", "file10", "file2"];
        sort_natural(&mut names, SortDirection::Descending, |s| *s);
        assert_eq!(names, vec!["file10", "file2", "file1"]);
    }
}
