use super::test_utils::*;
use bindflow::engine::{
    BindingContext, BindingValue, ConverterChain, IdentityConverter, ResourceBinding,
    ResourceKind, StringToHandleConverter, ValueType,
};
use bindflow::engine::BindingDescriptor;
use bindflow::error::{BindingError, ConversionError};

#[test]
fn test_string_falls_through_identity() {
    let binding = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let provider = binding
        .bind_from_value(&BindingValue::from("myTable"), &BindingContext::new("inv-1"))
        .unwrap();
    assert_eq!(provider.value().name(), "myTable");
}

#[test]
fn test_existing_handle_passes_through() {
    let binding = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let existing = handle(ResourceKind::Table, "ledger");

    let provider = binding
        .bind_from_value(&BindingValue::from(existing.clone()), &BindingContext::new("inv-1"))
        .unwrap();
    assert_eq!(provider.value().as_handle(), Some(&existing));
}

#[test]
fn test_handle_of_other_kind_is_unconvertible() {
    let binding = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let queue = handle(ResourceKind::Queue, "jobs");

    let err = binding
        .bind_from_value(&BindingValue::from(queue), &BindingContext::new("inv-1"))
        .unwrap_err();
    assert!(matches!(
        err,
        BindingError::UnconvertibleValue { value_kind: "handle", .. }
    ));
}

#[test]
fn test_non_string_values_are_unconvertible() {
    let binding = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let ctx = BindingContext::new("inv-1");

    for value in [
        BindingValue::from(42),
        BindingValue::from(true),
        BindingValue::Null,
        BindingValue::from(serde_json::json!(["orders"])),
    ] {
        let err = binding.bind_from_value(&value, &ctx).unwrap_err();
        assert!(
            matches!(err, BindingError::UnconvertibleValue { .. }),
            "expected unconvertible for {value:?}, got {err}"
        );
    }
}

#[test]
fn test_malformed_string_fails_without_fallthrough() {
    let binding = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let err = binding
        .bind_from_value(&BindingValue::from("my_table"), &BindingContext::new("inv-1"))
        .unwrap_err();

    match err {
        BindingError::ConversionFailed { parameter, source } => {
            assert_eq!(parameter, "orders");
            assert!(matches!(source, ConversionError::Naming { converter: "string", .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_chain_without_string_converter() {
    let kind = ResourceKind::Table;
    let descriptor = BindingDescriptor::new("orders", "orders", ValueType::Handle).unwrap();
    let chain = ConverterChain::builder()
        .with_converter(IdentityConverter::new(kind))
        .build();
    let binding = ResourceBinding::builder(descriptor, client(kind))
        .with_converter_chain(chain)
        .build()
        .unwrap();

    let err = binding
        .bind_from_value(&BindingValue::from("myTable"), &BindingContext::new("inv-1"))
        .unwrap_err();
    assert!(matches!(err, BindingError::UnconvertibleValue { .. }));
}

#[test]
fn test_custom_chain_string_first() {
    let kind = ResourceKind::Queue;
    let descriptor = BindingDescriptor::new("jobs", "jobs", ValueType::Reader).unwrap();
    let chain = ConverterChain::builder()
        .with_converter(StringToHandleConverter::new(client(kind), kind.default_policy()))
        .with_converter(IdentityConverter::new(kind))
        .build();
    let binding = ResourceBinding::builder(descriptor, client(kind))
        .with_converter_chain(chain)
        .build()
        .unwrap();

    let provider = binding
        .bind_from_value(&BindingValue::from("work-items"), &BindingContext::new("inv-1"))
        .unwrap();
    assert_eq!(provider.value_type(), ValueType::Reader);
    assert_eq!(provider.value().name(), "work-items");
}
