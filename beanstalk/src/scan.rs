use alloc::{string::ToString as _, vec::Vec};
use tracing::{debug, warn};

use crate::{component::ComponentDescriptor, entries::__COMPONENT_ENTRIES, errors::ScanErrorKind};

/// Collects every component registered under `namespace`.
///
/// A namespace is a `::`-separated module path; entries declared in the
/// namespace itself or in any module nested below it are matched. Finding
/// nothing is not an error — only a namespace that cannot name a module path
/// at all is.
///
/// The returned descriptors are in scan order: lexicographic by module path,
/// then by type name. Registration replays this order, so when two components
/// declare the same capability, the one later in scan order wins.
///
/// # Errors
/// - Returns [`ScanErrorKind::EmptyNamespace`] for an empty namespace
/// - Returns [`ScanErrorKind::InvalidNamespace`] if any segment is not an identifier
pub fn scan(namespace: &str) -> Result<Vec<ComponentDescriptor>, ScanErrorKind> {
    validate_namespace(namespace)?;

    let mut descriptors = Vec::new();
    for entry in __COMPONENT_ENTRIES.iter() {
        if validate_namespace(entry.module_path).is_err() {
            warn!(module_path = entry.module_path, "Skipped entry with malformed module path");
            continue;
        }
        if !in_namespace(entry.module_path, namespace) {
            continue;
        }

        let descriptor = (entry.descriptor)();
        debug!(
            component = descriptor.type_info.short_name(),
            module_path = entry.module_path,
            "Discovered component"
        );
        descriptors.push((entry.module_path, descriptor));
    }

    descriptors.sort_by(|(path_a, a), (path_b, b)| (path_a, a.type_info.name).cmp(&(path_b, b.type_info.name)));

    Ok(descriptors.into_iter().map(|(_, descriptor)| descriptor).collect())
}

fn validate_namespace(namespace: &str) -> Result<(), ScanErrorKind> {
    if namespace.is_empty() {
        return Err(ScanErrorKind::EmptyNamespace);
    }
    if !namespace.split("::").all(is_identifier) {
        return Err(ScanErrorKind::InvalidNamespace {
            namespace: namespace.to_string(),
        });
    }
    Ok(())
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

fn in_namespace(module_path: &str, namespace: &str) -> bool {
    match module_path.strip_prefix(namespace) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}
