use super::fixtures::*;
use crate::synth::{SynthOptions, ports};
use pretty_assertions::assert_eq;

#[test]
fn plain_rules_need_only_the_http_port() {
    // Arrange
    let mut ingress = resource("ns", "web");
    ingress.rules = vec![rule("a.com")];

    // Act
    let ports = ports::build(&[ingress], &SynthOptions::default());

    // Assert
    assert_eq!(ports.keys().copied().collect::<Vec<_>>(), vec![80]);
    assert_eq!(ports[&80].name, "fp-80");
}

#[test]
fn tls_only_resource_needs_only_the_https_port() {
    // Arrange
    let mut ingress = resource("ns", "web");
    ingress.rules = vec![rule("a.com")];
    ingress.tls = vec![tls(&["a.com"], "a-tls")];

    // Act
    let ports = ports::build(&[ingress], &SynthOptions::default());

    // Assert
    assert_eq!(ports.keys().copied().collect::<Vec<_>>(), vec![443]);
}

#[test]
fn custom_ports_are_deduplicated_across_resources() {
    // Arrange
    let mut a = resource("ns", "a");
    a.rules = vec![rule("a.com")];
    a.intent.frontend_ports = vec![8080, 8443];
    let mut b = resource("ns", "b");
    b.rules = vec![rule("b.com")];
    b.intent.frontend_ports = vec![8080];

    // Act
    let ports = ports::build(&[a, b], &SynthOptions::default());

    // Assert
    assert_eq!(ports.keys().copied().collect::<Vec<_>>(), vec![80, 8080, 8443]);
    assert_eq!(ports[&8443].name, "fp-8443");
}

#[test]
fn configured_default_ports_are_honoured() {
    // Arrange
    let options = SynthOptions {
        http_port: 8000,
        https_port: 8443,
        ..Default::default()
    };

    // Act
    let ports = ports::build(&[ingress_fixture()], &options);

    // Assert
    assert_eq!(ports.keys().copied().collect::<Vec<_>>(), vec![8443]);
}

#[test]
fn no_resources_need_no_ports() {
    assert!(ports::build(&[], &SynthOptions::default()).is_empty());
}
