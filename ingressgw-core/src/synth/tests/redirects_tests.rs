use super::fixtures::*;
use crate::graph::{ListenerKey, RedirectSet, RedirectTarget};
use crate::model::{ExternalRedirect, IngressResource, RedirectKind, SecretContent, SecretIdentifier};
use crate::secrets::InMemorySecretStore;
use crate::synth::certificates::synthesize_all;
use crate::synth::{
    HostToSecretMap, Stage, SynthOptions, SynthesisReport, WarningReason, listeners, ports,
    redirects,
};
use pretty_assertions::assert_eq;

fn build(
    resources: &[IngressResource],
    store: &InMemorySecretStore,
) -> (RedirectSet, SynthesisReport) {
    let options = SynthOptions::default();
    let mut report = SynthesisReport::default();
    let map = HostToSecretMap::build(resources);
    let resolved = synthesize_all(&map, store, &mut report).unwrap();
    let ports = ports::build(resources, &options);
    let listeners = listeners::build(resources, &resolved, &ports, &options, &mut report);
    let redirects = redirects::build(resources, &listeners, &options, &mut report);
    (redirects, report)
}

fn ssl_redirect_ingress() -> IngressResource {
    let mut ingress = resource("ns", "web");
    ingress.rules = vec![rule("a.com")];
    ingress.tls = vec![tls(&["a.com"], "a-tls")];
    ingress.intent.ssl_redirect = true;
    ingress
}

#[test]
fn ssl_redirect_points_http_listener_at_https_listener() {
    // Arrange
    let store = InMemorySecretStore::new()
        .with_secret(SecretIdentifier::new("ns", "a-tls"), SecretContent::new("a", "k"));

    // Act
    let (redirects, report) = build(&[ssl_redirect_ingress()], &store);

    // Assert
    assert_eq!(redirects.len(), 1);
    let redirect = &redirects[&ListenerKey::new(80, "a.com")];
    assert_eq!(redirect.name, "sslr-fl-a.com-80");
    assert_eq!(
        redirect.target,
        RedirectTarget::Listener("fl-a.com-443".to_string())
    );
    assert_eq!(redirect.kind, RedirectKind::Permanent);
    assert!(redirect.include_path);
    assert!(redirect.include_query_string);
    assert!(report.is_empty());
}

#[test]
fn redirect_is_dropped_when_https_listener_is_missing() {
    // Arrange
    let store = InMemorySecretStore::new();

    // Act
    let (redirects, report) = build(&[ssl_redirect_ingress()], &store);

    // Assert
    assert!(redirects.is_empty());
    let warning = report
        .for_stage(Stage::Redirects)
        .next()
        .expect("expected a redirect warning");
    assert_eq!(
        warning.reason,
        WarningReason::UnresolvedRedirectTarget {
            source_listener: "fl-a.com-80".to_string(),
            host: "a.com".to_string(),
            port: 443,
        }
    );
}

#[test]
fn no_intent_means_no_redirects() {
    // Arrange
    let store = secret_store_fixture();

    // Act
    let (redirects, _) = build(&[ingress_fixture()], &store);

    // Assert
    assert!(redirects.is_empty());
}

#[test]
fn external_redirect_is_passed_through_for_every_listener() {
    // Arrange
    let mut ingress = resource("ns", "moved");
    ingress.rules = vec![rule("old.com")];
    ingress.intent.external_redirect = Some(ExternalRedirect {
        url: "https://new.example.com".to_string(),
        kind: RedirectKind::Found,
        include_path: true,
        include_query_string: false,
    });
    let store = InMemorySecretStore::new();

    // Act
    let (redirects, report) = build(&[ingress], &store);

    // Assert
    assert_eq!(redirects.len(), 1);
    let redirect = &redirects[&ListenerKey::new(80, "old.com")];
    assert_eq!(redirect.name, "rdr-fl-old.com-80");
    assert_eq!(
        redirect.target,
        RedirectTarget::Url("https://new.example.com".to_string())
    );
    assert_eq!(redirect.kind, RedirectKind::Found);
    assert!(!redirect.include_query_string);
    assert!(report.is_empty());
}

#[test]
fn first_resource_in_canonical_order_owns_a_shared_source() {
    // Arrange
    let mut first = resource("a", "first");
    first.intent.external_redirect = Some(ExternalRedirect {
        url: "https://first.example.com".to_string(),
        kind: RedirectKind::Permanent,
        include_path: false,
        include_query_string: false,
    });
    let mut second = resource("b", "second");
    second.intent.external_redirect = Some(ExternalRedirect {
        url: "https://second.example.com".to_string(),
        kind: RedirectKind::Permanent,
        include_path: false,
        include_query_string: false,
    });
    let store = InMemorySecretStore::new();

    // Act
    let (redirects, report) = build(&[second, first], &store);

    // Assert
    assert_eq!(
        redirects[&ListenerKey::new(80, "")].target,
        RedirectTarget::Url("https://first.example.com".to_string())
    );
    assert_eq!(report.for_stage(Stage::Redirects).count(), 1);
    assert!(matches!(
        report.warnings[0].reason,
        WarningReason::ConflictingRedirect { .. }
    ));
}

#[test]
fn wildcard_and_lookalike_hosts_keep_separate_redirects() {
    // Arrange
    let moved = |namespace: &str, host: &str, url: &str| {
        let mut ingress = resource(namespace, "moved");
        ingress.rules = vec![rule(host)];
        ingress.intent.external_redirect = Some(ExternalRedirect {
            url: url.to_string(),
            kind: RedirectKind::Found,
            include_path: true,
            include_query_string: true,
        });
        ingress
    };
    let wild = moved("a", "*.x.com", "https://wild.example.com");
    let literal = moved("b", "wildcard.x.com", "https://literal.example.com");
    let store = InMemorySecretStore::new();

    // Act
    let (redirects, report) = build(&[wild, literal], &store);

    // Assert
    assert_eq!(redirects.len(), 2);
    let wild = &redirects[&ListenerKey::new(80, "*.x.com")];
    let literal = &redirects[&ListenerKey::new(80, "wildcard.x.com")];
    assert_ne!(wild.source_listener, literal.source_listener);
    assert_ne!(wild.name, literal.name);
    assert_eq!(
        literal.target,
        RedirectTarget::Url("https://literal.example.com".to_string())
    );
    assert!(report.is_empty());
}
