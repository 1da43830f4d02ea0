//! Unit and property tests for Iso optics.
//!
//! Covers `FunctionIso`, `ReversedIso`, `ComposedIso`, the `iso!` macro, and
//! the round-trip laws:
//!
//! - **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! - **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`

use proptest::prelude::*;
use relens::iso;
use relens::optics::{FunctionIso, Iso, iso_identity, iso_swap};

fn string_chars_iso() -> impl Iso<String, Vec<char>> + Clone {
    FunctionIso::new(
        |s: String| s.chars().collect::<Vec<_>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
    )
}

// =============================================================================
// Basic conversions
// =============================================================================

#[test]
fn test_function_iso_get() {
    let chars = string_chars_iso().get("hello".to_string());
    assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
}

#[test]
fn test_function_iso_reverse_get() {
    let string = string_chars_iso().reverse_get(vec!['h', 'i']);
    assert_eq!(string, "hi");
}

#[test]
fn test_reversed_iso() {
    let chars_string_iso = string_chars_iso().reverse();

    assert_eq!(chars_string_iso.get(vec!['h', 'i']), "hi");
    assert_eq!(
        chars_string_iso.reverse_get("hi".to_string()),
        vec!['h', 'i']
    );
}

#[test]
fn test_reversing_twice_restores_directions() {
    let twice_reversed = string_chars_iso().reverse().reverse();
    assert_eq!(
        twice_reversed.get("hello".to_string()),
        vec!['h', 'e', 'l', 'l', 'o']
    );
}

#[test]
fn test_iso_modify() {
    let reversed = string_chars_iso().modify("hello".to_string(), |mut chars| {
        chars.reverse();
        chars
    });
    assert_eq!(reversed, "olleh");
}

#[test]
fn test_iso_compose() {
    let widen = FunctionIso::new(|x: i32| i64::from(x), |x: i64| i32::try_from(x).unwrap());
    let stringify = FunctionIso::new(|x: i64| x.to_string(), |s: String| {
        s.parse::<i64>().unwrap()
    });

    let composed = widen.compose(stringify);
    assert_eq!(composed.get(42), "42");
    assert_eq!(composed.reverse_get("42".to_string()), 42);
}

#[test]
fn test_iso_macro() {
    let swap = iso!(|(a, b): (i32, String)| (b, a), |(b, a): (String, i32)| (
        a, b
    ));

    let swapped = swap.get((42, "hello".to_string()));
    assert_eq!(swapped, ("hello".to_string(), 42));
    assert_eq!(swap.reverse_get(swapped), (42, "hello".to_string()));
}

// =============================================================================
// Round-trip laws
// =============================================================================

proptest! {
    #[test]
    fn prop_get_reverse_get_law_string_chars(source in ".*") {
        let iso = string_chars_iso();
        let intermediate = iso.get(source.clone());
        prop_assert_eq!(iso.reverse_get(intermediate), source);
    }

    #[test]
    fn prop_reverse_get_get_law_string_chars(
        chars in prop::collection::vec(any::<char>(), 0..100),
    ) {
        let iso = string_chars_iso();
        let intermediate = iso.reverse_get(chars.clone());
        prop_assert_eq!(iso.get(intermediate), chars);
    }

    #[test]
    fn prop_identity_iso_laws(value in any::<i32>()) {
        let identity_iso = iso_identity::<i32>();
        prop_assert_eq!(identity_iso.reverse_get(identity_iso.get(value)), value);
        prop_assert_eq!(identity_iso.get(identity_iso.reverse_get(value)), value);
    }

    #[test]
    fn prop_swap_iso_laws(a in any::<i32>(), b in ".*") {
        let swap_iso = iso_swap::<i32, String>();
        let tuple = (a, b);
        prop_assert_eq!(
            swap_iso.reverse_get(swap_iso.get(tuple.clone())),
            tuple
        );
    }

    #[test]
    fn prop_reversed_iso_preserves_laws(source in ".*") {
        let reversed = string_chars_iso().reverse();
        let intermediate = reversed.reverse_get(source.clone());
        prop_assert_eq!(reversed.get(intermediate), source);
    }
}
