//! Input validation for simulation runs.
//!
//! Checks a process set and algorithm parameters before any simulation
//! starts. Detects:
//! - Empty process lists
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate process IDs
//! - Time spans too large to simulate exactly
//! - Missing or non-positive Round Robin quantum
//!
//! All problems are collected in one pass so the caller can report every
//! offending field at once.

use std::collections::HashSet;

use crate::models::{Algorithm, ProcessRecord};

/// Largest accepted `sum(burst) + max(arrival)`.
///
/// Every clock value of a run stays at or below this bound, so clock
/// arithmetic cannot overflow and selection scores (`f64`) hold every
/// time value exactly.
pub const MAX_TIME_SPAN: i64 = 1 << 53;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, when the error concerns one.
    pub process_id: Option<u32>,
    /// Offending input field (e.g. `"burst_time"`, `"quantum"`).
    pub field: Option<&'static str>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// Two processes share the same ID.
    DuplicateId,
    /// `sum(burst) + max(arrival)` exceeds [`MAX_TIME_SPAN`], or the
    /// per-process totals over that span would overflow.
    TimeSpanOverflow,
    /// Round Robin was selected without a quantum.
    MissingQuantum,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            process_id: None,
            field: None,
            message: message.into(),
        }
    }

    fn for_process(mut self, process_id: u32, field: &'static str) -> Self {
        self.process_id = Some(process_id);
        self.field = Some(field);
        self
    }

    fn for_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub(crate) fn missing_quantum(algorithm: Algorithm) -> Self {
        Self::new(
            ValidationErrorKind::MissingQuantum,
            format!("{algorithm} requires a time quantum"),
        )
        .for_field("quantum")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the process set only.
///
/// Checks:
/// 1. At least one process
/// 2. `arrival_time >= 0` for every process
/// 3. `burst_time > 0` for every process
/// 4. No duplicate process IDs
/// 5. `sum(burst) + max(arrival) <= MAX_TIME_SPAN`, and
///    `process_count * span` fits in `i64`
pub fn validate_processes(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);
    finish(errors)
}

/// Validates a full simulation request.
///
/// Runs [`validate_processes`] and additionally requires a positive
/// `quantum` when `algorithm` is Round Robin. The quantum is ignored for
/// every other algorithm.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    processes: &[ProcessRecord],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);

    if algorithm.requires_quantum() {
        match quantum {
            None => errors.push(ValidationError::missing_quantum(algorithm)),
            Some(q) if q <= 0 => errors.push(
                ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    format!("Time quantum must be positive, got {q}"),
                )
                .for_field("quantum"),
            ),
            Some(_) => {}
        }
    }

    finish(errors)
}

fn check_processes(processes: &[ProcessRecord], errors: &mut Vec<ValidationError>) {
    if processes.is_empty() {
        errors.push(
            ValidationError::new(
                ValidationErrorKind::EmptyProcessList,
                "At least one process is required",
            )
            .for_field("processes"),
        );
        return;
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate process ID: {}", p.id),
                )
                .for_process(p.id, "id"),
            );
        }

        if p.arrival_time < 0 {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::NegativeArrival,
                    format!(
                        "Process '{}' has negative arrival time {}",
                        p.name, p.arrival_time
                    ),
                )
                .for_process(p.id, "arrival_time"),
            );
        }

        if p.burst_time <= 0 {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::NonPositiveBurst,
                    format!(
                        "Process '{}' has non-positive burst time {}",
                        p.name, p.burst_time
                    ),
                )
                .for_process(p.id, "burst_time"),
            );
        }
    }

    if errors.is_empty() {
        check_time_span(processes, errors);
    }
}

/// Bounds the clock of a run. Assumes every burst and arrival is
/// non-negative.
fn check_time_span(processes: &[ProcessRecord], errors: &mut Vec<ValidationError>) {
    let last_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let span = processes
        .iter()
        .try_fold(last_arrival, |acc, p| acc.checked_add(p.burst_time));
    let fits = span
        .filter(|&span| span <= MAX_TIME_SPAN)
        .and_then(|span| span.checked_mul(processes.len() as i64))
        .is_some();

    if !fits {
        errors.push(
            ValidationError::new(
                ValidationErrorKind::TimeSpanOverflow,
                format!(
                    "Total burst time plus last arrival must not exceed {MAX_TIME_SPAN} \
                     across {} processes",
                    processes.len()
                ),
            )
            .for_field("burst_time"),
        );
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
