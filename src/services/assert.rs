//! Assertion context a case runner reports through.
//!
//! Mirrors the expect/equal/done protocol: a runner declares how many
//! assertions it will make, performs equality checks carrying a diagnostic
//! message, and signals completion to obtain the case outcome.

use crate::models::{AssertionFailure, CaseOutcome};
use std::fmt::Debug;
use std::time::Instant;

pub struct TestContext {
    name: String,
    expected: Option<usize>,
    performed: usize,
    failures: Vec<AssertionFailure>,
    started: Instant,
}

impl TestContext {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: None,
            performed: 0,
            failures: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Declare how many assertions the case will perform.
    pub fn expect(&mut self, count: usize) {
        self.expected = Some(count);
    }

    /// Record an equality assertion. Returns whether it held.
    pub fn equal<T>(&mut self, label: &str, actual: &T, expected: &T, message: &str) -> bool
    where
        T: PartialEq + Debug + ?Sized,
    {
        self.performed += 1;
        if actual == expected {
            return true;
        }

        log::debug!("{}: assertion '{label}' failed", self.name);
        self.failures.push(AssertionFailure {
            label: label.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
            message: message.to_string(),
        });
        false
    }

    /// Finish the case. A declared count that differs from the number of
    /// assertions performed fails the case.
    #[must_use]
    pub fn done(mut self) -> CaseOutcome {
        if let Some(expected) = self.expected.filter(|&expected| expected != self.performed) {
            self.failures.push(AssertionFailure {
                label: "assertion count".to_string(),
                expected: expected.to_string(),
                actual: self.performed.to_string(),
                message: format!("Expected {expected} assertions, {} ran", self.performed),
            });
        }

        CaseOutcome {
            passed: self.failures.is_empty(),
            name: self.name,
            expected_assertions: self.expected,
            performed_assertions: self.performed,
            failures: self.failures,
            duration: self.started.elapsed(),
        }
    }
}
