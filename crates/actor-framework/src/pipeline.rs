//! # Validation Pipeline
//!
//! A [`Pipeline`] is an ordered, static list of pure validation steps over a context `C`.
//! Each step either passes (`Ok(())`) or rejects with a typed error.
//!
//! ## Contract: first error wins
//!
//! Steps run strictly in declaration order and evaluation stops at the first rejection.
//! Errors are never aggregated, so a given input always reports the same error. The terminal
//! handler passed to [`Pipeline::then`] runs only when every step passed.
//!
//! ```rust
//! use actor_framework::pipeline::{Pipeline, Step};
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! enum FormError {
//!     #[error("missing name")]
//!     MissingName,
//!     #[error("name too long")]
//!     TooLong,
//! }
//!
//! fn has_name(form: &String) -> Result<(), FormError> {
//!     if form.is_empty() { Err(FormError::MissingName) } else { Ok(()) }
//! }
//! fn short(form: &String) -> Result<(), FormError> {
//!     if form.len() > 8 { Err(FormError::TooLong) } else { Ok(()) }
//! }
//!
//! const STEPS: &[Step<String, FormError>] = &[has_name, short];
//! const FORM: Pipeline<String, FormError> = Pipeline::new("form", STEPS);
//!
//! assert_eq!(FORM.run(&String::new()), Err(FormError::MissingName));
//! assert_eq!(FORM.then(&"taco".to_string(), |f| Ok(f.to_uppercase())), Ok("TACO".to_string()));
//! ```

use std::fmt::Display;
use tracing::debug;

/// A single validation step.
pub type Step<C, E> = fn(&C) -> Result<(), E>;

/// Ordered sequence of validation steps with short-circuit evaluation.
pub struct Pipeline<C: 'static, E: 'static> {
    name: &'static str,
    steps: &'static [Step<C, E>],
}

impl<C: 'static, E: 'static> Pipeline<C, E> {
    pub const fn new(name: &'static str, steps: &'static [Step<C, E>]) -> Self {
        Self { name, steps }
    }
}

impl<C: 'static, E: Display + 'static> Pipeline<C, E> {
    /// Runs every step in order, stopping at the first rejection.
    pub fn run(&self, ctx: &C) -> Result<(), E> {
        for (index, step) in self.steps.iter().enumerate() {
            if let Err(e) = step(ctx) {
                debug!(pipeline = self.name, step = index, error = %e, "Rejected");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Runs the steps, then the terminal handler if all of them passed.
    pub fn then<T>(&self, ctx: &C, terminal: impl FnOnce(&C) -> Result<T, E>) -> Result<T, E> {
        self.run(ctx)?;
        terminal(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq, thiserror::Error)]
    enum TestError {
        #[error("step {0} failed")]
        Step(u8),
    }

    struct Probe {
        fail_at: Option<u8>,
        visited: Cell<u8>,
    }

    fn visit(probe: &Probe, n: u8) -> Result<(), TestError> {
        probe.visited.set(probe.visited.get() + 1);
        if probe.fail_at == Some(n) {
            Err(TestError::Step(n))
        } else {
            Ok(())
        }
    }

    fn one(p: &Probe) -> Result<(), TestError> {
        visit(p, 1)
    }
    fn two(p: &Probe) -> Result<(), TestError> {
        visit(p, 2)
    }
    fn three(p: &Probe) -> Result<(), TestError> {
        visit(p, 3)
    }

    const STEPS: &[Step<Probe, TestError>] = &[one, two, three];
    const PIPELINE: Pipeline<Probe, TestError> = Pipeline::new("probe", STEPS);

    fn probe(fail_at: Option<u8>) -> Probe {
        Probe {
            fail_at,
            visited: Cell::new(0),
        }
    }

    #[test]
    fn test_all_steps_pass() {
        let p = probe(None);
        assert_eq!(PIPELINE.run(&p), Ok(()));
        assert_eq!(p.visited.get(), 3);
    }

    #[test]
    fn test_first_rejection_short_circuits() {
        let p = probe(Some(2));
        assert_eq!(PIPELINE.run(&p), Err(TestError::Step(2)));
        assert_eq!(p.visited.get(), 2, "step three must not run");
    }

    #[test]
    fn test_terminal_runs_only_after_success() {
        let terminal_ran = Cell::new(false);
        let rejected = PIPELINE.then(&probe(Some(1)), |_| {
            terminal_ran.set(true);
            Ok(())
        });
        assert_eq!(rejected, Err(TestError::Step(1)));
        assert!(!terminal_ran.get());

        let accepted = PIPELINE.then(&probe(None), |p| Ok(p.visited.get()));
        assert_eq!(accepted, Ok(3));
    }
}
