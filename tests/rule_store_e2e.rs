use chainrule::{
    BackwardEngine, ChainError, IndexError, Rule, RuleStore, ValidationError,
};

fn snapshot(store: &RuleStore) -> Vec<Rule> {
    store.list().cloned().collect()
}

#[test]
fn add_with_unknown_feature_is_atomic() {
    let mut store = RuleStore::seeded();
    let before = snapshot(&store);

    let err = store.add_line("有毛发 会说话，鹦鹉").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownFeature {
            token: "会说话".to_string()
        }
    );
    assert_eq!(snapshot(&store), before);
}

#[test]
fn add_requires_exactly_one_separator() {
    let mut store = RuleStore::seeded();

    for line in ["有毛发 哺乳类", "有毛发，哺乳类，鸟类"] {
        let err = store.add_line(line).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedRule { .. }), "{line}");
    }
    assert_eq!(store.len(), 15);
}

#[test]
fn add_rejects_blank_sides() {
    let mut store = RuleStore::seeded();
    assert_eq!(store.add_line("").unwrap_err(), ValidationError::EmptyRule);
    assert_eq!(store.add_line("，哺乳类").unwrap_err(), ValidationError::EmptyPremises);
    assert_eq!(store.add_line("有毛发，  ").unwrap_err(), ValidationError::EmptyConclusion);
    assert_eq!(store.len(), 15);
}

#[test]
fn remove_out_of_range_is_atomic() {
    let mut store = RuleStore::seeded();
    let before = snapshot(&store);

    let err = store.remove_at(store.len()).unwrap_err();
    assert_eq!(err, IndexError::OutOfRange { index: 15, len: 15 });
    assert_eq!(snapshot(&store), before);

    let top: ChainError = err.into();
    assert!(top.is_index());
}

#[test]
fn remove_until_empty() {
    let mut store = RuleStore::seeded();
    while !store.is_empty() {
        store.remove_at(store.len() - 1).unwrap();
    }
    assert_eq!(store.remove_at(0).unwrap_err(), IndexError::EmptyStore);
}

#[test]
fn appended_rule_has_lowest_backward_priority() {
    let mut store = RuleStore::seeded();
    store.add_line("有羽毛 会游泳，企鹅").unwrap();

    // The seed rule for 企鹅 still wins first-match.
    let result = BackwardEngine::new(&store).prove("企鹅");
    assert_eq!(result.trace[0].rule_index, 13);
}

#[test]
fn custom_intermediate_needs_explicit_widening() {
    let mut store = RuleStore::seeded();
    store.add_line("哺乳类 有爪 有犬齿，猫科").unwrap();

    let err = store.add_line("猫科 有黑色条纹，虎").unwrap_err();
    assert!(matches!(err, ValidationError::UnknownFeature { .. }));

    store.allow_premise("猫科");
    store.add_line("猫科 有黑色条纹，虎").unwrap();
    assert_eq!(store.len(), 17);
}

#[test]
fn edit_is_remove_then_add() {
    let mut store = RuleStore::seeded();
    let old = store.remove_at(14).unwrap();
    assert_eq!(old.to_string(), "鸟类 ∧ 善飞 → 信天翁");

    store.add(["鸟类", "善飞", "长腿"], "信天翁").unwrap();
    let result = BackwardEngine::new(&store).prove("信天翁");
    assert!(result.required.contains("长腿"));
}
