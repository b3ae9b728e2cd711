/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_natural() {
    assert_eq!(natural(&1, &2), Ordering::Less);
    assert_eq!(natural(&2, &1), Ordering::Greater);
    assert_eq!(natural(&2, &2), Ordering::Equal);
    assert_eq!(natural("abc", "abd"), Ordering::Less);
}

#[test]
fn test_natural_extremes() {
    // Subtraction would overflow here.
    assert_eq!(natural(&i64::MIN, &i64::MAX), Ordering::Less);
    assert_eq!(natural(&i64::MAX, &i64::MIN), Ordering::Greater);
    assert_eq!(Natural.compare(&u64::MAX, &0), Ordering::Greater);
}

#[test]
fn test_reverse() {
    let cmp = reverse(Natural);

    assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
    assert_eq!(cmp.compare(&2, &1), Ordering::Less);
    assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
}

#[test]
fn test_reverse_reverse() {
    let cmp = reverse(reverse(Natural));

    for (a, b) in [(1, 2), (2, 1), (3, 3)] {
        assert_eq!(cmp.compare(&a, &b), Natural.compare(&a, &b));
    }
}

#[test]
fn test_closure() {
    let by_len = |a: &String, b: &String| a.len().cmp(&b.len());

    assert_eq!(by_len.compare(&"aa".to_owned(), &"b".to_owned()), Ordering::Greater);
    assert_eq!(reverse(by_len).compare(&"aa".to_owned(), &"b".to_owned()), Ordering::Less);
}

#[test]
fn test_fn_item() {
    fn total(a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }

    assert_eq!(total.compare(&f64::NAN, &1.0), Ordering::Greater);
    assert_eq!(total.compare(&-0.0, &0.0), Ordering::Less);
}

#[test]
fn test_unsized_keys() {
    let words: [&str; 3] = ["pear", "apple", "fig"];
    let mut sorted = words;

    sorted.sort_by(|a, b| Natural.compare(*a, *b));

    assert_eq!(sorted, ["apple", "fig", "pear"]);
}
