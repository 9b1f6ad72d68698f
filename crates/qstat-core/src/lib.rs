//! Quantum statistical distribution evaluation.
//!
//! One evaluator type, two closed-form statistics, scalar and grid forms.

pub mod distribution;

pub use distribution::{replace_non_finite, QuantumStatistics, Statistics};
