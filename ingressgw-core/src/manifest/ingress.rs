use crate::manifest::annotations::{decode_intent, keys};
use crate::model::{BackendRef, IngressResource, IngressRule, PathRule, TlsBlock};
use k8s_openapi::api::networking::v1::{HTTPIngressPath, Ingress};
use std::collections::BTreeMap;

const DEFAULT_NAMESPACE: &str = "default";

/// Class the ingress asks for, from `spec.ingressClassName` or the legacy
/// annotation.
pub fn ingress_class(ingress: &Ingress) -> Option<&str> {
    ingress
        .spec
        .as_ref()
        .and_then(|spec| spec.ingress_class_name.as_deref())
        .or_else(|| {
            ingress
                .metadata
                .annotations
                .as_ref()
                .and_then(|a| a.get(keys::INGRESS_CLASS))
                .map(String::as_str)
        })
}

pub fn is_managed(ingress: &Ingress, class: &str) -> bool {
    ingress_class(ingress) == Some(class)
}

/// Converts an Ingress object into an [`IngressResource`].
///
/// Returns `None` for objects without a name. Annotation problems are logged
/// and the offending values ignored.
pub fn into_resource(ingress: &Ingress) -> Option<IngressResource> {
    let Some(name) = ingress.metadata.name.clone() else {
        tracing::warn!("skipping ingress without metadata.name");
        return None;
    };
    let namespace = ingress
        .metadata
        .namespace
        .clone()
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    let empty = BTreeMap::new();
    let annotations = ingress.metadata.annotations.as_ref().unwrap_or(&empty);
    let (intent, errors) = decode_intent(annotations);
    for err in errors {
        tracing::warn!(ingress = %format!("{namespace}/{name}"), "{err}");
    }

    let spec = ingress.spec.clone().unwrap_or_default();

    let rules = spec
        .rules
        .unwrap_or_default()
        .into_iter()
        .map(|rule| IngressRule {
            host: rule.host.unwrap_or_default(),
            paths: rule
                .http
                .map(|http| http.paths.iter().map(path_rule).collect())
                .unwrap_or_default(),
        })
        .collect();

    let tls = spec
        .tls
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match entry.secret_name {
            Some(secret_name) => Some(TlsBlock {
                hosts: entry.hosts.unwrap_or_default(),
                secret_name,
            }),
            None => {
                tracing::debug!(ingress = %name, "ignoring tls entry without secretName");
                None
            }
        })
        .collect();

    Some(IngressResource {
        namespace,
        name,
        rules,
        tls,
        intent,
    })
}

fn path_rule(path: &HTTPIngressPath) -> PathRule {
    let service = path.backend.service.as_ref();
    let port = service
        .and_then(|s| s.port.as_ref())
        .and_then(|p| {
            p.number
                .map(|n| n.to_string())
                .or_else(|| p.name.clone())
        })
        .unwrap_or_default();

    PathRule {
        path: path.path.clone().unwrap_or_else(|| "/".to_string()),
        backend: BackendRef {
            service: service.map(|s| s.name.clone()).unwrap_or_default(),
            port,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r#"
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: storefront
  namespace: shop
  annotations:
    ingressgw.io/ssl-redirect: "true"
    ingressgw.io/frontend-ports: "8443"
spec:
  ingressClassName: ingressgw
  tls:
    - hosts: [shop.com]
      secretName: shop-tls
    - hosts: [nosecret.com]
  rules:
    - host: shop.com
      http:
        paths:
          - path: /api
            pathType: Prefix
            backend:
              service:
                name: api
                port:
                  number: 8080
          - pathType: Prefix
            backend:
              service:
                name: web
                port:
                  name: http
"#;

    fn parse(manifest: &str) -> Ingress {
        serde_yaml::from_str(manifest).unwrap()
    }

    #[test]
    fn converts_rules_tls_and_intent() {
        // Arrange
        let ingress = parse(MANIFEST);

        // Act
        let resource = into_resource(&ingress).unwrap();

        // Assert
        assert_eq!(resource.key(), "shop/storefront");
        assert_eq!(
            resource.tls,
            vec![TlsBlock {
                hosts: vec!["shop.com".to_string()],
                secret_name: "shop-tls".to_string(),
            }]
        );
        assert_eq!(resource.rules.len(), 1);
        assert_eq!(
            resource.rules[0].paths,
            vec![
                PathRule {
                    path: "/api".to_string(),
                    backend: BackendRef {
                        service: "api".to_string(),
                        port: "8080".to_string(),
                    },
                },
                PathRule {
                    path: "/".to_string(),
                    backend: BackendRef {
                        service: "web".to_string(),
                        port: "http".to_string(),
                    },
                },
            ]
        );
        assert!(resource.intent.ssl_redirect);
        assert_eq!(resource.intent.frontend_ports, vec![8443]);
    }

    #[test]
    fn class_is_read_from_spec_or_annotation() {
        // Arrange
        let by_spec = parse(MANIFEST);
        let by_annotation = parse(
            "apiVersion: networking.k8s.io/v1\n\
             kind: Ingress\n\
             metadata:\n  name: legacy\n  annotations:\n    kubernetes.io/ingress.class: ingressgw\n",
        );
        let other = parse(
            "apiVersion: networking.k8s.io/v1\nkind: Ingress\nmetadata:\n  name: other\nspec:\n  ingressClassName: nginx\n",
        );

        // Act / Assert
        assert!(is_managed(&by_spec, "ingressgw"));
        assert!(is_managed(&by_annotation, "ingressgw"));
        assert!(!is_managed(&other, "ingressgw"));
    }

    #[test]
    fn missing_namespace_defaults() {
        let ingress = parse("apiVersion: networking.k8s.io/v1\nkind: Ingress\nmetadata:\n  name: web\n");

        let resource = into_resource(&ingress).unwrap();

        assert_eq!(resource.namespace, "default");
        assert_eq!(resource.rule_hosts(), vec![""]);
    }
}
