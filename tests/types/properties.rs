use outcome_rail::{ErrorKind, Outcome, PropertyBag, PropertyKind, PropertyValue};

fn strings(values: &[PropertyValue]) -> Vec<&str> {
    values.iter().filter_map(|value| value.downcast_ref::<&str>()).copied().collect()
}

#[test]
fn repeated_sets_accumulate_in_order() {
    let outcome: Outcome = Outcome::success()
        .set_property(PropertyKind::Warning, "v1")
        .set_property(PropertyKind::Warning, "v2");

    assert_eq!(strings(outcome.properties(&PropertyKind::Warning).unwrap()), ["v1", "v2"]);
}

#[test]
fn unset_keys_are_absent() {
    let outcome: Outcome = Outcome::success().set_property(PropertyKind::Warning, "v1");

    assert!(outcome.has_properties_of(&PropertyKind::Warning));
    assert!(!outcome.has_properties_of(&PropertyKind::Notice));
    assert!(outcome.properties(&PropertyKind::Notice).is_none());
    assert!(!outcome.has_properties_of(&PropertyKind::custom("never")));
}

#[test]
fn keys_are_independent() {
    let outcome: Outcome = Outcome::success()
        .set_property(PropertyKind::Warning, "slow")
        .set_property(PropertyKind::custom("shard"), 3_u16)
        .set_property(PropertyKind::Warning, "retried");

    assert_eq!(outcome.property_bag().len(), 2);
    assert_eq!(strings(outcome.properties(&PropertyKind::Warning).unwrap()), ["slow", "retried"]);

    let shard = outcome.properties(&PropertyKind::custom("shard")).unwrap();
    assert_eq!(shard.len(), 1);
    assert_eq!(shard[0].downcast_ref::<u16>(), Some(&3));
}

#[test]
fn values_of_mixed_types_keep_order() {
    let outcome: Outcome = Outcome::success()
        .set_property(PropertyKind::Diagnostic, "text")
        .set_property(PropertyKind::Diagnostic, 12_i64)
        .set_property_value(PropertyKind::Diagnostic, PropertyValue::new(true));

    let values = outcome.properties(&PropertyKind::Diagnostic).unwrap();
    assert!(values[0].is::<&str>());
    assert!(values[1].is::<i64>());
    assert_eq!(values[2].downcast_ref::<bool>(), Some(&true));
    assert!(values[1].type_name().contains("i64"));
}

#[test]
fn properties_work_in_error_state_and_survive_transitions() {
    let outcome: Outcome<u32> = Outcome::error(ErrorKind::Timeout)
        .set_property(PropertyKind::CorrelationId, "req-1")
        .set_success(outcome_rail::SuccessKind::Ok)
        .set_output(1_u32)
        .set_error(ErrorKind::NotFound)
        .set_property(PropertyKind::CorrelationId, "req-2");

    assert!(outcome.is_error_of(ErrorKind::NotFound));
    assert_eq!(strings(outcome.properties(&PropertyKind::CorrelationId).unwrap()), ["req-1", "req-2"]);
}

#[test]
fn properties_survive_map_and_map_kind() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Code(u8);

    impl std::fmt::Display for Code {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "E{}", self.0)
        }
    }

    let outcome: Outcome<u8> =
        Outcome::ok(4).set_property(PropertyKind::Notice, "cached");
    let mapped: Outcome<String, Code> = outcome.map(|n| n.to_string()).map_kind(|_| Code(1));

    assert_eq!(mapped.output().map(String::as_str), Some("4"));
    assert!(mapped.has_properties_of(&PropertyKind::Notice));
}

#[test]
fn property_bag_iterates_all_keys() {
    let mut bag = PropertyBag::default();
    assert!(bag.is_empty());

    bag.push(PropertyKind::Warning, PropertyValue::new("a"));
    bag.push(PropertyKind::Notice, PropertyValue::new("b"));
    bag.push(PropertyKind::Warning, PropertyValue::new("c"));

    let mut counts: Vec<(String, usize)> =
        bag.iter().map(|(kind, values)| (kind.to_string(), values.len())).collect();
    counts.sort();
    assert_eq!(counts, [("Notice".to_string(), 1), ("Warning".to_string(), 2)]);
}

#[test]
fn cloned_outcome_shares_property_values() {
    let outcome: Outcome = Outcome::success().set_property(PropertyKind::Notice, vec![1, 2, 3]);
    let copy = outcome.clone();

    let original = outcome.properties(&PropertyKind::Notice).unwrap()[0].downcast_ref::<Vec<i32>>();
    let cloned = copy.properties(&PropertyKind::Notice).unwrap()[0].downcast_ref::<Vec<i32>>();
    assert!(core::ptr::eq(original.unwrap(), cloned.unwrap()));
}
