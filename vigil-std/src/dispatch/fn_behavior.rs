//! Behaviors assembled from closures at runtime.

use std::fmt;
use vigil_core::{Behavior, BehaviorError, Operation, Sink};

type OperationFn = Box<dyn Fn(&dyn Sink) + Send + Sync>;

/// A behavior whose operations are closures.
///
/// Only [`FnBehaviorBuilder::build`] creates one, and it refuses to do so
/// unless both operations were supplied.
///
/// # Example
/// ```ignore
/// let lasso = FnBehavior::builder("LassoTool")
///     .primary_line("Lasso Tool: Mouse down - Tracing outline.")
///     .secondary_line("Lasso Tool: Mouse up - Outline closed.")
///     .build()?;
/// cursor.switch_to(lasso);
/// ```
pub struct FnBehavior {
    name: String,
    primary: OperationFn,
    secondary: OperationFn,
}

impl FnBehavior {
    /// Start assembling a behavior with the given variant name.
    pub fn builder(name: impl Into<String>) -> FnBehaviorBuilder {
        FnBehaviorBuilder {
            name: name.into(),
            primary: None,
            secondary: None,
        }
    }
}

impl Behavior for FnBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn primary(&self, sink: &dyn Sink) {
        (self.primary)(sink)
    }

    fn secondary(&self, sink: &dyn Sink) {
        (self.secondary)(sink)
    }
}

impl fmt::Debug for FnBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBehavior")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FnBehavior`].
pub struct FnBehaviorBuilder {
    name: String,
    primary: Option<OperationFn>,
    secondary: Option<OperationFn>,
}

impl FnBehaviorBuilder {
    /// Run `f` on the primary operation.
    pub fn on_primary<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Sink) + Send + Sync + 'static,
    {
        self.primary = Some(Box::new(f));
        self
    }

    /// Run `f` on the secondary operation.
    pub fn on_secondary<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Sink) + Send + Sync + 'static,
    {
        self.secondary = Some(Box::new(f));
        self
    }

    /// Emit a fixed line on the primary operation.
    pub fn primary_line(self, line: impl Into<String>) -> Self {
        let line = line.into();
        self.on_primary(move |sink| sink.emit(&line))
    }

    /// Emit a fixed line on the secondary operation.
    pub fn secondary_line(self, line: impl Into<String>) -> Self {
        let line = line.into();
        self.on_secondary(move |sink| sink.emit(&line))
    }

    /// Build the behavior.
    ///
    /// Fails with [`BehaviorError::UnimplementedOperation`] naming the first
    /// missing operation.
    pub fn build(self) -> Result<FnBehavior, BehaviorError> {
        let missing = |operation: Operation| BehaviorError::UnimplementedOperation {
            variant: self.name.clone(),
            operation,
        };
        let primary = self.primary.ok_or_else(|| missing(Operation::Primary))?;
        let secondary = self
            .secondary
            .ok_or_else(|| missing(Operation::Secondary))?;
        Ok(FnBehavior {
            name: self.name,
            primary,
            secondary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Transcript;

    #[test]
    fn test_complete_behavior_runs_closures() {
        let transcript = Transcript::new();
        let lasso = FnBehavior::builder("LassoTool")
            .primary_line("lasso down")
            .on_secondary(|sink| sink.emit("lasso up"))
            .build()
            .unwrap();

        lasso.primary(&transcript);
        lasso.secondary(&transcript);

        assert_eq!(lasso.name(), "LassoTool");
        assert_eq!(transcript.lines(), vec!["lasso down", "lasso up"]);
    }

    #[test]
    fn test_missing_secondary_is_rejected() {
        let err = FnBehavior::builder("HalfTool")
            .primary_line("down")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            BehaviorError::UnimplementedOperation {
                variant: "HalfTool".into(),
                operation: Operation::Secondary,
            }
        );
        assert_eq!(
            err.to_string(),
            "behavior `HalfTool` does not implement the secondary operation"
        );
    }

    #[test]
    fn test_missing_both_reports_primary_first() {
        let err = FnBehavior::builder("EmptyTool").build().unwrap_err();
        assert!(matches!(
            err,
            BehaviorError::UnimplementedOperation {
                operation: Operation::Primary,
                ..
            }
        ));
    }
}
