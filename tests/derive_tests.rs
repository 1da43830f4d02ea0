//! Tests for the generated surface of `#[derive(Shape)]` and
//! `#[derive(Fields)]`.

use relens::optics::{Fields, Lens};
use relens::shape::{PropertyMapper, Shape};

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
struct Account {
    owner: String,
    balance: i64,
}

#[derive(Clone, Debug, PartialEq, Shape, Fields)]
#[shape(constructor = "open(owner)")]
#[shape(constructor = "with_balance(owner, balance)")]
struct Ledger {
    owner: String,
    balance: i64,
    #[shape(derived)]
    overdrawn: bool,
}

impl Ledger {
    fn open(owner: String) -> Self {
        Self::with_balance(owner, 0)
    }

    fn with_balance(owner: String, balance: i64) -> Self {
        Self {
            owner,
            balance,
            overdrawn: balance < 0,
        }
    }
}

// =============================================================================
// Fields derive
// =============================================================================

#[test]
fn test_fields_accessors_carry_declared_names() {
    assert_eq!(Account::owner_field().name(), "owner");
    assert_eq!(Account::balance_field().name(), "balance");
}

#[test]
fn test_fields_accessors_read_their_fields() {
    let account = Account {
        owner: "ada".to_string(),
        balance: 100,
    };

    assert_eq!(Account::owner_field().get(&account), "ada");
    assert_eq!(Account::balance_field().get(&account), 100);
}

#[test]
fn test_fields_accessors_are_copyable() {
    let balance_field = Account::balance_field();
    let copy = balance_field;

    let account = Account {
        owner: "ada".to_string(),
        balance: 100,
    };
    assert_eq!(balance_field.get(&account), copy.get(&account));
}

#[test]
fn test_fields_on_generic_struct() {
    #[derive(Clone, Debug, PartialEq, Shape, Fields)]
    struct Labeled<T: Clone + 'static> {
        label: String,
        value: T,
    }

    let labeled = Labeled {
        label: "answer".to_string(),
        value: 42_u8,
    };

    assert_eq!(Labeled::<u8>::value_field().get(&labeled), 42);

    let value_lens = Labeled::<u8>::value_field().to_lens().unwrap();
    assert_eq!(value_lens.set(labeled, 7).value, 7);
}

// =============================================================================
// Shape derive
// =============================================================================

#[test]
fn test_plain_struct_uses_the_struct_literal() {
    let mapper = PropertyMapper::<Account>::for_type().unwrap();
    assert_eq!(mapper.signature(), "Account(owner, balance)");
}

#[test]
fn test_widest_explicit_constructor_is_chosen() {
    let mapper = PropertyMapper::<Ledger>::for_type().unwrap();
    assert_eq!(mapper.signature(), "Ledger::with_balance(owner, balance)");
}

#[test]
fn test_updates_flow_through_the_chosen_constructor() {
    let mapper = PropertyMapper::<Ledger>::for_type().unwrap();
    let ledger = Ledger::with_balance("ada".to_string(), 100);

    let overdrawn = mapper.copy_with(&ledger, "balance", -5_i64).unwrap();

    assert_eq!(overdrawn.balance, -5);
    assert!(overdrawn.overdrawn);
}

#[test]
fn test_field_lens_over_constructor_backed_struct() {
    let balance_lens = Ledger::balance_field().to_lens().unwrap();
    let ledger = Ledger::open("ada".to_string());

    let updated = balance_lens.modify(ledger, |balance| balance - 50);

    assert_eq!(updated.balance, -50);
    assert!(updated.overdrawn);
}
