use super::test_utils::*;
use bindflow::engine::template::resolve;
use bindflow::engine::{
    Access, BindingContext, BindingData, BindingValue, ContainerNamePolicy, NamingPolicy,
    ResourceIdentifier, ResourceKind, ValueType,
};
use pretty_assertions::assert_eq;

#[test]
fn test_identity_law_for_static_templates() {
    let data: BindingData = [("env", "prod")].into_iter().collect();
    for template in ["orders", "table-prod", "a}b", ""] {
        assert_eq!(resolve(template, &data).unwrap(), template);
        assert_eq!(resolve(template, &BindingData::new()).unwrap(), template);
    }
}

#[test]
fn test_each_token_substituted_once() {
    let data: BindingData = [("a", "1"), ("b", "22")].into_iter().collect();
    assert_eq!(resolve("x{a}y{b}z{a}", &data).unwrap(), "x1y22z1");
    assert_eq!(resolve("{a}{b}", &data).unwrap(), "122");
}

#[test]
fn test_validation_is_idempotent() {
    let policy = ContainerNamePolicy::container();
    for name in ["table-prod", "abc", "0-1-2"] {
        let first = ResourceIdentifier::new(name, &policy).unwrap();
        let second = ResourceIdentifier::new(first.as_str(), &policy).unwrap();
        assert_eq!(first, second);
        assert!(policy.is_valid(second.as_str()));
    }
}

#[test]
fn test_both_paths_agree_on_type_and_access() {
    for value_type in [ValueType::Handle, ValueType::Reader, ValueType::Query] {
        let binding = binding("orders", "orders{env}", value_type, ResourceKind::Table);

        let from_context = binding
            .bind_from_context(&BindingContext::new("inv-1").with_datum("env", "prod"))
            .unwrap();
        let from_value = binding
            .bind_from_value(&BindingValue::from("ordersprod"), &BindingContext::new("inv-2"))
            .unwrap();

        assert_eq!(from_context.value().name(), from_value.value().name());
        assert_eq!(from_context.value_type(), value_type);
        assert_eq!(from_value.value_type(), value_type);
        assert_eq!(from_context.access(), from_value.access());
    }
}

#[test]
fn test_access_follows_declared_type() {
    let rw = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let ro = binding("orders", "orders", ValueType::Reader, ResourceKind::Table);

    assert_eq!(rw.to_parameter_descriptor().unwrap().access, Access::ReadWrite);
    assert_eq!(ro.to_parameter_descriptor().unwrap().access, Access::Read);
}

#[test]
fn test_concurrent_invocations_share_binding() {
    let binding = binding("orders", "orders{id}", ValueType::Handle, ResourceKind::Table);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let binding = &binding;
                scope.spawn(move || {
                    let ctx = BindingContext::new(format!("inv-{i}")).with_datum("id", i.to_string());
                    binding.bind_from_context(&ctx).unwrap().value().name().to_string()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("orders{i}"));
        }
    });
}
