//! Stable names for generated gateway objects. A name only depends on the
//! identity of the object it names, and distinct identities never share a
//! name.
//!
//! Characters outside `[a-z0-9.-]` are written as `_` plus two lowercase hex
//! digits per UTF-8 byte, so `*.x.com` becomes `_2a.x.com` and can never
//! meet a literal host. `_` itself is always escaped.

use crate::model::SecretIdentifier;
use std::fmt::Write;

/// `cert-<namespace>.<name>`. The namespace part escapes `.` as well, so the
/// first `.` always ends it.
pub(crate) fn certificate_name(id: &SecretIdentifier) -> String {
    format!(
        "cert-{}.{}",
        escape(&id.namespace, |c| matches!(c, 'a'..='z' | '0'..='9' | '-')),
        escape(&id.name, host_safe)
    )
}

pub(crate) fn port_name(port: u16) -> String {
    format!("fp-{port}")
}

/// The port is the text after the last `-`.
pub(crate) fn listener_name(port: u16, host: &str) -> String {
    if host.is_empty() {
        format!("fl-{port}")
    } else {
        format!("fl-{}-{port}", escape(host, host_safe))
    }
}

pub(crate) fn ssl_redirect_name(source_listener: &str) -> String {
    format!("sslr-{source_listener}")
}

pub(crate) fn external_redirect_name(source_listener: &str) -> String {
    format!("rdr-{source_listener}")
}

fn host_safe(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '-')
}

fn escape(value: &str, keep: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for c in value.chars() {
        if keep(c) {
            out.push(c);
        } else {
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "_{byte:02x}");
            }
        }
    }
    out
}
