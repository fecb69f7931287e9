//! Integration tests for JoinSubstitutions.
//!
//! Covers construction and normalization of nested input, the algebraic
//! operators, separator changes, and describe-based equality.

use std::collections::{BTreeMap, HashMap};

use launch_substitutions::{JoinSubstitutions, LaunchConfiguration, SomeSubstitutions, Substitution};
use launch_types::{
    Context, ErrorCategory, LaunchContext, RepetitionFault, SubstitutionError,
};

const TEXT: &str = "Test";
const JOIN_SYMBOL: &str = " + ";

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn perform(join: &JoinSubstitutions) -> String {
    join.perform(&LaunchContext::new())
        .expect("join should perform against an empty context")
}

fn join(subs: impl Into<SomeSubstitutions>, symbol: &str) -> JoinSubstitutions {
    JoinSubstitutions::new(subs, symbol).expect("join should build")
}

// ══════════════════════════════════════════════════════════════════════════════
// Construction
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_join_performs_to_empty_string() {
    assert_eq!(perform(&JoinSubstitutions::default()), "");
    assert_eq!(perform(&JoinSubstitutions::empty(JOIN_SYMBOL)), "");
    assert!(JoinSubstitutions::empty(JOIN_SYMBOL).is_empty());
    assert_eq!(perform(&join(Vec::<String>::new(), "-")), "");
}

#[test]
fn join_one_text_object() {
    assert_eq!(perform(&join(TEXT, "")), TEXT);
}

#[test]
fn join_faulty_objects() {
    let faulty: Vec<SomeSubstitutions> = vec![
        SomeSubstitutions::from(SubstitutionError::UnknownConfiguration { name: TEXT.into() }),
        SomeSubstitutions::from(LaunchContext::new()),
        SomeSubstitutions::from(HashMap::<String, String>::new()),
        SomeSubstitutions::from(BTreeMap::<String, String>::new()),
    ];
    for mut input in faulty {
        for _ in 0..10 {
            let err = JoinSubstitutions::new(input.clone(), "").unwrap_err();
            assert!(
                matches!(err, SubstitutionError::CompositionFailure { .. }),
                "expected composition failure, got {err:?}"
            );
            assert_eq!(err.category(), ErrorCategory::Build);
            input = SomeSubstitutions::List(vec![TEXT.into(), input]);
        }
    }
}

#[test]
fn composition_failure_names_type_and_join() {
    let err = JoinSubstitutions::new(LaunchContext::new(), " + ").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("\"LaunchContext\""), "{msg}");
    assert!(msg.contains("JoinSubstitutions('')"), "{msg}");
}

#[test]
fn join_multiple_text_objects() {
    let mut text_list = vec![TEXT.to_string()];
    let mut result_text = TEXT.to_string();
    for _ in 0..10 {
        let mut sub = join(text_list.clone(), "");
        assert_eq!(perform(&sub), result_text);
        sub.extend(text_list.clone()).unwrap();
        for add_text in &text_list {
            result_text.push_str(add_text);
        }
        assert_eq!(perform(&sub), result_text);
        text_list.extend(text_list.clone());
    }
}

#[test]
fn extend_chains() {
    let mut sub = JoinSubstitutions::empty("-");
    sub.extend("a").unwrap().extend(["b", "c"]).unwrap();
    assert_eq!(perform(&sub), "a-b-c");
}

#[test]
fn join_text_with_join_symbol() {
    let sub = join([TEXT, TEXT, TEXT], JOIN_SYMBOL);
    assert_eq!(perform(&sub), "Test + Test + Test");
    assert_eq!(sub.join_symbol(), JOIN_SYMBOL);
}

#[test]
fn change_join_symbol() {
    let mut sub = join([TEXT, TEXT, TEXT], JOIN_SYMBOL);
    assert_eq!(perform(&sub), "Test + Test + Test");
    sub.set_join_symbol("_-_");
    assert_eq!(perform(&sub), "Test_-_Test_-_Test");
    assert_eq!(sub.join_symbol(), "_-_");
}

#[test]
fn two_texts_with_symbol() {
    assert_eq!(perform(&join([TEXT, TEXT], JOIN_SYMBOL)), "Test + Test");
}

#[test]
fn nested_list_groups_without_separator() {
    let input = SomeSubstitutions::List(vec![
        SomeSubstitutions::from([TEXT, TEXT]),
        SomeSubstitutions::from(TEXT),
    ]);
    assert_eq!(perform(&join(input, JOIN_SYMBOL)), "TestTest + Test");

    let input = SomeSubstitutions::List(vec![
        TEXT.into(),
        SomeSubstitutions::from([TEXT, TEXT]),
        TEXT.into(),
    ]);
    assert_eq!(
        perform(&join(input, JOIN_SYMBOL)),
        "Test + TestTest + Test"
    );
}

#[test]
fn children_may_reference_configurations() {
    let input = SomeSubstitutions::List(vec![
        "robot".into(),
        LaunchConfiguration::named("id").into(),
    ]);
    let sub = join(input, "_");
    let mut ctx = LaunchContext::new();
    assert_eq!(
        sub.perform(&ctx).unwrap_err(),
        SubstitutionError::UnknownConfiguration { name: "id".into() }
    );
    ctx.set_configuration("id", "7".into());
    assert_eq!(sub.perform(&ctx).unwrap(), "robot_7");
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn add_join() {
    let sub = join(TEXT, JOIN_SYMBOL);
    let sub = sub + TEXT;
    assert_eq!(perform(&sub), "Test + Test");
}

#[test]
fn radd_join() {
    let sub = join(TEXT, JOIN_SYMBOL);
    let sub = TEXT + sub;
    assert_eq!(perform(&sub), "Test + Test");
}

#[test]
fn iadd_join() {
    let mut sub = join(TEXT, JOIN_SYMBOL);
    let same = sub.clone();
    sub += same;
    assert_eq!(perform(&sub), "Test + Test");
}

#[test]
fn mul_join() {
    let sub = join(TEXT, JOIN_SYMBOL);
    let sub = sub * 2;
    assert_eq!(perform(&sub), "Test + Test");
}

#[test]
fn rmul_join() {
    let sub = join(TEXT, JOIN_SYMBOL);
    let tripled = 3 * &sub;
    assert_eq!(perform(&tripled), "Test + Test + Test");
    assert_eq!(perform(&(2 * sub)), "Test + Test");
    // Plain integer arithmetic is unaffected.
    let product = 3 * 4;
    let small: u8 = 2 * 5;
    assert_eq!((product, small), (12, 10));
}

#[test]
fn repeat_children_are_copies_of_self() {
    let sub = join(["a", "b"], "-");
    let repeated = sub.repeat(2).unwrap();
    assert_eq!(repeated.len(), 2);
    assert!(repeated
        .substitutions()
        .iter()
        .all(|child| *child == Substitution::from(sub.clone())));

    let added = sub.clone() + "c";
    let texts: Vec<String> = added.substitutions().iter().map(|s| s.describe()).collect();
    assert_eq!(texts, ["'a'", "'b'", "'c'"]);
}

#[test]
fn imul_join() {
    let mut sub = join(TEXT, JOIN_SYMBOL);
    sub *= 2;
    assert_eq!(perform(&sub), "Test + Test");
}

#[test]
fn repeat_three_times() {
    let sub = join(TEXT, JOIN_SYMBOL).repeat(3).unwrap();
    assert_eq!(perform(&sub), "Test + Test + Test");
}

#[test]
fn repeat_zero_times_keeps_separator() {
    let sub = join(TEXT, JOIN_SYMBOL).repeat(0).unwrap();
    assert!(sub.is_empty());
    assert_eq!(sub.join_symbol(), JOIN_SYMBOL);
    assert_eq!(perform(&sub), "");
}

#[test]
fn repeat_rejects_negative_and_fractional() {
    let sub = join(TEXT, JOIN_SYMBOL);
    match sub.repeat(-1).unwrap_err() {
        SubstitutionError::InvalidRepetition {
            reason,
            description,
        } => {
            assert_eq!(reason, RepetitionFault::Negative);
            assert_eq!(description, sub.describe());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let err = sub.repeat(2.5).unwrap_err();
    assert!(err.to_string().starts_with("Non-integer multiplications"));
    assert_eq!(perform(&sub.repeat(2.0).unwrap()), "Test + Test");
}

#[test]
fn concat_with_bad_input_fails() {
    let sub = join(TEXT, JOIN_SYMBOL);
    assert!(matches!(
        sub.concat(LaunchContext::new()),
        Err(SubstitutionError::CompositionFailure { .. })
    ));
    assert!(sub.rconcat(HashMap::<u8, u8>::new()).is_err());
}

#[test]
fn operators_do_not_touch_operands() {
    let base = join([TEXT, TEXT], "");
    let before = base.describe();
    let _ = &base + "x";
    let _ = "x" + &base;
    let _ = &base * 4;
    let _ = base.concat("y").unwrap();
    assert_eq!(base.describe(), before);
}

#[test]
fn concatenation_is_not_commutative() {
    let a = join("a", "");
    let b = join("b", "");
    assert_ne!(perform(&(&a + &b)), perform(&(&b + &a)));
}

// ══════════════════════════════════════════════════════════════════════════════
// Identity and equality
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn iadd_produces_a_new_value() {
    let sub1 = join([TEXT, TEXT], "");
    let mut sub2 = sub1.clone();
    assert_eq!(sub1, sub2);
    sub2 += "";
    assert_ne!(sub1, sub2);
    assert_eq!(sub1.len(), 2);
    assert_eq!(sub2.len(), 3);
}

#[test]
fn equality_is_structural() {
    let sub1 = join([TEXT, TEXT], "");
    let alias = &sub1;
    assert!(std::ptr::eq(alias, &sub1));
    assert_eq!(&sub1, alias);

    let sub2 = join([TEXT, TEXT], "");
    assert_eq!(sub1, sub2);

    assert_ne!(sub1, join([TEXT, TEXT], JOIN_SYMBOL));
    assert_ne!(sub1, join(format!("{TEXT}{JOIN_SYMBOL}"), JOIN_SYMBOL));
}

#[test]
fn equality_is_not_semantic() {
    let whole = join("ab", "");
    let parts = join(["a", "b"], "");
    assert_eq!(perform(&whole), perform(&parts));
    assert_ne!(whole, parts);

    let grouped = join(SomeSubstitutions::List(vec![SomeSubstitutions::from(["a", "b"])]), "");
    assert_eq!(perform(&grouped), "ab");
    assert_ne!(grouped, parts);
}

#[test]
fn join_is_not_equal_to_other_variants() {
    let joined = Substitution::Join(join(TEXT, ""));
    let text = Substitution::text(joined.describe());
    assert_eq!(joined.describe(), text.as_text().unwrap());
    assert_ne!(joined, text);
}
