//! Active view variables substituted into templated paths.

/// The user-selected view dimensions.
///
/// Rebuilt whenever a selection changes; the per-subject `framework` binding
/// is added with [`ActiveVars::for_framework`] rather than by mutation.
#[derive(Debug, Clone, Default)]
pub struct ActiveVars {
    machine: Option<String>,
    metric: Option<String>,
    method: Option<String>,
    framework: Option<String>,
    cost: bool,
}

impl ActiveVars {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = Some(machine.into());
        self
    }

    /// Bind `$metric` to a literal key or a dotted sub-path.
    #[must_use]
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Mark the cost view, which routes time values through the cost estimator.
    #[must_use]
    pub const fn with_cost(mut self, cost: bool) -> Self {
        self.cost = cost;
        self
    }

    /// A copy of these variables with `$framework` bound to a subject id.
    #[must_use]
    pub fn for_framework(&self, id: impl Into<String>) -> Self {
        let mut vars = self.clone();
        vars.framework = Some(id.into());
        vars
    }

    /// Look up a placeholder by name, as written after the `$` sigil.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "machine" => self.machine.as_deref(),
            "metric" => self.metric.as_deref(),
            "method" => self.method.as_deref(),
            "framework" => self.framework.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn machine(&self) -> Option<&str> {
        self.machine.as_deref()
    }

    #[must_use]
    pub fn metric(&self) -> Option<&str> {
        self.metric.as_deref()
    }

    #[must_use]
    pub const fn cost(&self) -> bool {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let vars = ActiveVars::new().with_machine("16CPU-64GB-CUDA").with_method("python");
        assert_eq!(vars.lookup("machine"), Some("16CPU-64GB-CUDA"));
        assert_eq!(vars.lookup("method"), Some("python"));
        assert_eq!(vars.lookup("metric"), None);
        assert_eq!(vars.lookup("bogus"), None);
    }

    #[test]
    fn test_for_framework_leaves_original_untouched() {
        let vars = ActiveVars::new().with_machine("64CPU-128GB-None");
        let bound = vars.for_framework("ezkl");
        assert_eq!(bound.lookup("framework"), Some("ezkl"));
        assert_eq!(vars.lookup("framework"), None);
        assert_eq!(bound.lookup("machine"), Some("64CPU-128GB-None"));
    }
}
