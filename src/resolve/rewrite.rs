//! Benchmark path re-targeting for the currently selected machine.

use crate::schema::PropertyDescriptor;

/// Rewrite a descriptor path so it targets the selected machine under the
/// `metrics` root.
///
/// A segment that already names a known machine is replaced in place;
/// otherwise the machine is prepended. The rewrite is idempotent: running it
/// on an already-rewritten path yields the same path.
#[must_use]
pub fn retarget(path: &str, machine: &str, known_machines: &[&str]) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut parts: Vec<&str> = path.split('.').collect();

    let machine_segment = parts
        .iter()
        .position(|part| known_machines.iter().any(|known| part.contains(known)));
    match machine_segment {
        Some(index) => parts[index] = machine,
        None => parts.insert(0, machine),
    }

    if !parts.contains(&"metrics") {
        parts.insert(0, "metrics");
    }

    parts.join(".")
}

/// Re-target every descriptor in a schema, once per render pass.
///
/// Descriptors are immutable; this returns adjusted copies rather than
/// rewriting in place.
#[must_use]
pub fn retarget_all(descriptors: &[PropertyDescriptor], machine: &str, known_machines: &[&str]) -> Vec<PropertyDescriptor> {
    descriptors
        .iter()
        .map(|descriptor| {
            let mut adjusted = descriptor.clone();
            adjusted.path = descriptor
                .path
                .as_deref()
                .map(|path| retarget(path, machine, known_machines));
            adjusted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MACHINES: [&str; 2] = ["16CPU-64GB-CUDA", "64CPU-128GB-None"];

    #[test]
    fn test_prepends_machine_and_metrics_root() {
        let rewritten = retarget("mnist.$framework.proofSize", "16CPU-64GB-CUDA", &MACHINES);
        assert_eq!(rewritten, "metrics.16CPU-64GB-CUDA.mnist.$framework.proofSize");
    }

    #[test]
    fn test_replaces_existing_machine_segment() {
        let rewritten = retarget(
            "metrics.16CPU-64GB-CUDA.mnist.$framework.proofSize",
            "64CPU-128GB-None",
            &MACHINES,
        );
        assert_eq!(rewritten, "metrics.64CPU-128GB-None.mnist.$framework.proofSize");
    }

    #[test]
    fn test_idempotent() {
        let once = retarget("mnist.$framework.proofSize", "16CPU-64GB-CUDA", &MACHINES);
        let twice = retarget(&once, "16CPU-64GB-CUDA", &MACHINES);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_path_stays_empty() {
        assert_eq!(retarget("", "16CPU-64GB-CUDA", &MACHINES), "");
    }

    #[test]
    fn test_retarget_all_leaves_headers_alone() {
        let descriptors = vec![
            PropertyDescriptor::header("Mnist"),
            PropertyDescriptor::new("Proof Size", "mnist.$framework.proofSize"),
        ];
        let adjusted = retarget_all(&descriptors, "16CPU-64GB-CUDA", &MACHINES);
        assert_eq!(adjusted[0].path, None);
        assert_eq!(
            adjusted[1].path.as_deref(),
            Some("metrics.16CPU-64GB-CUDA.mnist.$framework.proofSize")
        );
    }
}
