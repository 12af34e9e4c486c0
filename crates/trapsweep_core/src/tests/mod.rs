//! Integration tests for the trapsweep analysis core
//!
//! Tests are organized by topic:
//! - `fixtures` - Synthetic binding library, thresholds and a mock simulation controller
//! - `ranges` - Drug-anchored, population-wide and uniform range construction
//! - `gap_filling` - Gap filling on generated ranges
//! - `comparison` - Single-point comparison evaluation and divergence handling
//! - `sweeps` - Multi-point sweeps over the evaluator

mod sweeps;
