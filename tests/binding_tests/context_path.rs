use super::test_utils::*;
use bindflow::engine::{
    Access, BindingContext, BindingData, BoundValue, ResourceKind, ValueType,
};
use bindflow::error::{BindingError, NamingError, TemplateError};

#[test]
fn test_token_resolved_and_validated() {
    let binding = binding("orders", "table-{env}", ValueType::Handle, ResourceKind::Container);
    let ctx = BindingContext::new("inv-1").with_datum("env", "prod");

    let provider = binding.bind_from_context(&ctx).unwrap();
    match provider.value() {
        BoundValue::Handle(handle) => {
            assert_eq!(handle.name(), "table-prod");
            assert_eq!(handle.account_name(), ACCOUNT);
            assert_eq!(handle.kind(), ResourceKind::Container);
        }
        BoundValue::View(_) => panic!("handle parameter produced a view"),
    }
}

#[test]
fn test_missing_datum_aborts_before_handle() {
    let binding = binding("orders", "table-{env}", ValueType::Handle, ResourceKind::Container);

    let err = binding
        .bind_from_context(&BindingContext::new("inv-1"))
        .unwrap_err();
    match err {
        BindingError::Template {
            parameter,
            source: TemplateError::MissingBindingDatum { template, token },
        } => {
            assert_eq!(parameter, "orders");
            assert_eq!(template, "table-{env}");
            assert_eq!(token, "env");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unrelated_data_is_ignored() {
    let binding = binding("orders", "orders", ValueType::Handle, ResourceKind::Table);
    let data: BindingData = [("env", "prod"), ("id", "7")].into_iter().collect();
    let ctx = BindingContext::new("inv-1").with_binding_data(data);

    let provider = binding.bind_from_context(&ctx).unwrap();
    assert_eq!(provider.to_invoke_string(), "orders");
}

#[test]
fn test_resolved_name_violating_policy() {
    let binding = binding("orders", "orders{env}", ValueType::Handle, ResourceKind::Table);
    let ctx = BindingContext::new("inv-1").with_datum("env", "-prod");

    let err = binding.bind_from_context(&ctx).unwrap_err();
    match err {
        BindingError::Naming {
            parameter,
            source: NamingError::InvalidResourceIdentifier { identifier, kind, .. },
        } => {
            assert_eq!(parameter, "orders");
            assert_eq!(identifier, "orders-prod");
            assert_eq!(kind, "table");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_template_resolves_differently_per_invocation() {
    let binding = binding("orders", "orders{env}", ValueType::Handle, ResourceKind::Table);

    let dev = binding
        .bind_from_context(&BindingContext::new("inv-1").with_datum("env", "dev"))
        .unwrap();
    let prod = binding
        .bind_from_context(&BindingContext::new("inv-2").with_datum("env", "prod"))
        .unwrap();
    let bad = binding.bind_from_context(&BindingContext::new("inv-3").with_datum("env", "_"));

    assert_eq!(dev.value().name(), "ordersdev");
    assert_eq!(prod.value().name(), "ordersprod");
    assert!(bad.is_err());
}

#[test]
fn test_read_only_parameter_gets_view() {
    let binding = binding("history", "history", ValueType::Reader, ResourceKind::Table);
    let provider = binding
        .bind_from_context(&BindingContext::new("inv-1"))
        .unwrap();

    assert_eq!(provider.value_type(), ValueType::Reader);
    assert_eq!(provider.access(), Access::Read);
    assert!(provider.value().as_handle().is_none());
}
