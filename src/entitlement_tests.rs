use super::*;

#[test]
fn starts_without_entitlement() {
    let provider = SimulatedEntitlement::default();
    assert!(!provider.is_entitled());
}

#[test]
fn purchase_unconditionally_grants() {
    let provider = SimulatedEntitlement::default();

    let granted = provider.purchase().unwrap();

    assert!(granted);
    assert!(provider.is_entitled());
}
