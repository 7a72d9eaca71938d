//! Task-set validation.
//!
//! Checks structural integrity of a task set before simulation. Detects:
//! - Empty task sets (the hyperperiod is undefined)
//! - Duplicate or reserved task ids
//! - Zero execution times or periods (which would corrupt the hyperperiod
//!   computation and loop bounds)
//!
//! `exec_time > period` is deliberately NOT an error: over-subscription is
//! legal input and produces deadline misses during the run.

use std::collections::HashSet;

use crate::models::TaskDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No tasks were supplied.
    EmptyTaskSet,
    /// Two tasks share the same id.
    DuplicateId,
    /// Task id 0 is reserved; ids start at 1.
    ReservedId,
    /// A task requires zero CPU ticks.
    ZeroExecTime,
    /// A task has a zero period.
    ZeroPeriod,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a task set before simulation.
///
/// Checks:
/// 1. At least one task is supplied
/// 2. No duplicate task ids
/// 3. No task uses the reserved id 0
/// 4. Every execution time is positive
/// 5. Every period is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_task_set(tasks: &[TaskDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskSet,
            "Task set is empty",
        ));
    }

    let mut seen_ids = HashSet::new();
    for task in tasks {
        if task.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                "Task id 0 is reserved; ids start at 1",
            ));
        }

        if !seen_ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task id: {}", task.id),
            ));
        }

        if task.exec_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroExecTime,
                format!("Task {} has zero execution time", task.id),
            ));
        }

        if task.period == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPeriod,
                format!("Task {} has zero period", task.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_task_set() {
        let tasks = vec![
            TaskDescriptor::new(1, 1, 2),
            TaskDescriptor::new(2, 1, 5),
        ];
        assert!(validate_task_set(&tasks).is_ok());
    }

    #[test]
    fn test_oversubscription_is_legal() {
        // exec_time > period produces deadline misses, not a validation error.
        let tasks = vec![TaskDescriptor::new(1, 10, 2)];
        assert!(validate_task_set(&tasks).is_ok());
    }

    #[test]
    fn test_empty_task_set() {
        let errors = validate_task_set(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTaskSet));
    }

    #[test]
    fn test_duplicate_id() {
        let tasks = vec![
            TaskDescriptor::new(1, 1, 2),
            TaskDescriptor::new(1, 2, 4),
        ];
        let errors = validate_task_set(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_reserved_id() {
        let tasks = vec![TaskDescriptor::new(0, 1, 2)];
        let errors = validate_task_set(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ReservedId));
    }

    #[test]
    fn test_zero_exec_time() {
        let tasks = vec![TaskDescriptor::new(1, 0, 2)];
        let errors = validate_task_set(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroExecTime));
    }

    #[test]
    fn test_zero_period() {
        let tasks = vec![TaskDescriptor::new(1, 1, 0)];
        let errors = validate_task_set(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroPeriod));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let tasks = vec![
            TaskDescriptor::new(0, 0, 2),
            TaskDescriptor::new(2, 1, 0),
        ];
        let errors = validate_task_set(&tasks).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
