//! End-to-end tests for field accessors adapted into lenses.
//!
//! Exercises the full pipeline: derived field accessors, adaptation through
//! the shape descriptor, composition across nesting levels, and default
//! substitution over optional fields.

use relens::field;
use relens::optics::{
    Field, Fields, FunctionIso, Lens, LensFieldExtension, OptionLensExtension,
};
use relens::shape::{LensError, Shape};

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
struct Inner {
    inner_value: String,
}

impl Inner {
    fn new(inner_value: impl Into<String>) -> Self {
        Self {
            inner_value: inner_value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
struct Outer {
    outer_value: String,
    inner: Option<Inner>,
}

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
struct Counter {
    count: i32,
}

// =============================================================================
// Direct field updates
// =============================================================================

#[test]
fn test_field_lens_set_leaves_siblings_untouched() {
    let outer_value_lens = Outer::outer_value_field().to_lens().unwrap();
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: None,
    };

    let updated = outer_value_lens.set(outer, "quux".to_string());

    assert_eq!(updated.outer_value, "quux");
    assert_eq!(updated.inner, None);
}

#[test]
fn test_field_one_shot_set() {
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: None,
    };

    let updated = Outer::outer_value_field()
        .set(outer, "quux".to_string())
        .unwrap();

    assert_eq!(updated.outer_value, "quux");
}

#[test]
fn test_field_macro_matches_derived_accessor() {
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: None,
    };

    assert_eq!(field!(Outer, outer_value).name(), "outer_value");
    assert_eq!(
        field!(Outer, outer_value).get(&outer),
        Outer::outer_value_field().get(&outer)
    );
}

// =============================================================================
// Default substitution over optional nesting
// =============================================================================

fn inner_or_xyzzy() -> impl Lens<Outer, Inner> {
    Outer::inner_field()
        .to_lens()
        .unwrap()
        .or_else(Inner::new("xyzzy"))
}

#[test]
fn test_absent_inner_reads_as_default() {
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: None,
    };

    assert_eq!(inner_or_xyzzy().get(&outer), Inner::new("xyzzy"));
}

#[test]
fn test_present_inner_wins_over_default() {
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: Some(Inner::new("plugh")),
    };

    assert_eq!(inner_or_xyzzy().get(&outer), Inner::new("plugh"));
}

#[test]
fn test_composed_defaulted_set_materializes_the_inner_value() {
    let inner_value_lens = inner_or_xyzzy().compose(Inner::inner_value_field().to_lens().unwrap());
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: None,
    };

    let updated = inner_value_lens.set(outer, "frobnitz".to_string());

    assert_eq!(updated.inner, Some(Inner::new("frobnitz")));
    assert_eq!(updated.outer_value, "foo");
}

#[test]
fn test_composed_defaulted_modify_transforms_the_substituted_value() {
    let inner_value_lens = inner_or_xyzzy().compose(Inner::inner_value_field().to_lens().unwrap());
    let outer = Outer {
        outer_value: "foo".to_string(),
        inner: None,
    };

    let updated = inner_value_lens.modify(outer, |value| value.to_uppercase());

    assert_eq!(updated.inner, Some(Inner::new("XYZZY")));
}

// =============================================================================
// Composition surfaces
// =============================================================================

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
struct Holder {
    counter: Counter,
}

#[test]
fn test_compose_field_chains_two_accessors() {
    let count_lens = Holder::counter_field()
        .compose_field(Counter::count_field())
        .unwrap();
    let holder = Holder {
        counter: Counter { count: 23 },
    };

    assert_eq!(count_lens.get(&holder), 23);
    let doubled = count_lens.modify(holder, |count| count * 2);
    assert_eq!(doubled.counter.count, 46);
}

#[test]
fn test_compose_lens_accepts_any_lens() {
    let halved_lens = Holder::counter_field()
        .compose_lens(
            Counter::count_field()
                .to_lens()
                .unwrap()
                .map_through(FunctionIso::new(
                    |count: i32| count / 2,
                    |half: i32| half * 2,
                )),
        )
        .unwrap();
    let holder = Holder {
        counter: Counter { count: 46 },
    };

    assert_eq!(halved_lens.get(&holder), 23);
    assert_eq!(halved_lens.set(holder, 5).counter.count, 10);
}

#[test]
fn test_lens_extension_composes_with_field() {
    let count_lens = Holder::counter_field()
        .to_lens()
        .unwrap()
        .compose_field(Counter::count_field())
        .unwrap();
    let holder = Holder {
        counter: Counter { count: 23 },
    };

    assert_eq!(count_lens.set(holder, 5).counter.count, 5);
}

#[test]
fn test_map_through_views_a_field_as_another_type() {
    let widened = Counter::count_field()
        .to_lens()
        .unwrap()
        .map_through(FunctionIso::new(
            |count: i32| i64::from(count),
            |count: i64| i32::try_from(count).unwrap(),
        ));
    let counter = Counter { count: 23 };

    assert_eq!(widened.get(&counter), 23_i64);
    assert_eq!(widened.set(counter, 46_i64), Counter { count: 46 });
}

// =============================================================================
// Collection-valued fields
// =============================================================================

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
struct Registry {
    entries: Vec<Inner>,
}

#[test]
fn test_modify_maps_over_a_collection_field() {
    let entries_lens = Registry::entries_field().to_lens().unwrap();
    let registry = Registry {
        entries: vec![Inner::new("xyzzy"), Inner::new("plugh")],
    };

    let shouted = entries_lens.modify(registry, |entries| {
        entries
            .into_iter()
            .map(|entry| Inner::new(entry.inner_value.to_uppercase()))
            .collect()
    });

    assert_eq!(
        shouted.entries,
        vec![Inner::new("XYZZY"), Inner::new("PLUGH")]
    );
}

// =============================================================================
// Failure surfaces
// =============================================================================

#[test]
fn test_misnamed_field_fails_to_adapt() {
    let ghost = Field::<Counter, i32>::new("total", |counter| &counter.count);
    let error = ghost.to_lens().unwrap_err();

    assert!(matches!(error, LensError::InvalidField(_)));
    assert!(error.to_string().contains("`total`"));
}
