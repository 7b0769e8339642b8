//! Import usage tracking.

use indexmap::IndexMap;

use crate::ir::{Import, Type, qualifiers};

/// Mark imports referenced from `code` as used, then drop the rest.
///
/// Used flags are sticky, so sweeping an already swept table changes nothing.
pub fn sweep(code: &[Type], imports: &mut IndexMap<String, Import>) {
    for ty in code {
        for referenced in ty.referenced_types() {
            for qualifier in qualifiers(referenced) {
                if let Some(import) = imports.get_mut(qualifier) {
                    import.used = true;
                }
            }
        }
    }

    imports.retain(|key, import| {
        if !import.used {
            tracing::debug!(key = %key, path = %import.path, "dropping unused import");
        }
        import.used
    });
}
