use super::test_utils::*;
use bindflow::engine::{BindingContext, BindingValue, ResourceKind, ValueType};
use bindflow::error::BindingError;

#[test]
fn test_missing_datum_builds_no_handle() {
    let (binding, client) = counted_binding("table-{env}", ValueType::Handle, ResourceKind::Container);

    let err = binding
        .bind_from_context(&BindingContext::new("inv-1"))
        .unwrap_err();
    assert!(matches!(err, BindingError::Template { .. }));
    assert_eq!(client.handles_built(), 0);
}

#[test]
fn test_invalid_resolved_name_builds_no_handle() {
    let (binding, client) = counted_binding("table-{env}", ValueType::Handle, ResourceKind::Container);
    let ctx = BindingContext::new("inv-1").with_datum("env", "BAD");

    let err = binding.bind_from_context(&ctx).unwrap_err();
    assert!(matches!(err, BindingError::Naming { .. }));
    assert_eq!(client.handles_built(), 0);
}

#[test]
fn test_rejected_conversion_builds_no_handle() {
    let (binding, client) = counted_binding("orders", ValueType::Handle, ResourceKind::Table);

    let err = binding
        .bind_from_value(&BindingValue::from("Bad_"), &BindingContext::new("inv-1"))
        .unwrap_err();
    assert!(matches!(err, BindingError::ConversionFailed { .. }));
    assert_eq!(client.handles_built(), 0);
}

#[test]
fn test_unconvertible_value_builds_no_handle() {
    let (binding, client) = counted_binding("orders", ValueType::Reader, ResourceKind::Table);

    let err = binding
        .bind_from_value(&BindingValue::from(42i64), &BindingContext::new("inv-1"))
        .unwrap_err();
    assert!(matches!(err, BindingError::UnconvertibleValue { .. }));
    assert_eq!(client.handles_built(), 0);
}

#[test]
fn test_successful_bind_builds_one_handle() {
    let (binding, client) = counted_binding("table-{env}", ValueType::Handle, ResourceKind::Container);
    let ctx = BindingContext::new("inv-1").with_datum("env", "prod");

    let provider = binding.bind_from_context(&ctx).unwrap();
    let handle = provider.value().as_handle().cloned().unwrap();
    assert_eq!(handle.identifier().as_str(), "table-prod");
    assert_eq!(client.handles_built(), 1);
}
