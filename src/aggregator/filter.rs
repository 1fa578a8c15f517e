//! State filtering and duplicate removal.
//!
//! Filters only drop records from the sequence; they never modify a record.

use crate::parser::Goroutine;
use log::debug;

/// Keep the goroutines whose state is one of `states`
///
/// **Public** - used by the filter and flamegraph commands
///
/// An empty `states` slice means no filter was requested and every
/// goroutine is kept.
pub fn filter_by_state<S: AsRef<str>>(goroutines: Vec<Goroutine>, states: &[S]) -> Vec<Goroutine> {
    if states.is_empty() {
        return goroutines;
    }

    let before = goroutines.len();
    let kept: Vec<Goroutine> = goroutines
        .into_iter()
        .filter(|g| states.iter().any(|s| s.as_ref() == g.state()))
        .collect();

    debug!("State filter kept {} of {} goroutines", kept.len(), before);
    kept
}

/// Drop goroutines whose stack equals the stack of an earlier goroutine
///
/// **Public** - used by the filter command
///
/// The first goroutine of each group of identical stacks is kept, in
/// original order. Each candidate is compared against every goroutine kept
/// so far, which is quadratic in the number of distinct stacks.
pub fn remove_duplicates(goroutines: Vec<Goroutine>) -> Vec<Goroutine> {
    let before = goroutines.len();
    let mut kept: Vec<Goroutine> = Vec::with_capacity(before);

    for goroutine in goroutines {
        if !kept.iter().any(|k| k.same_stack(&goroutine)) {
            kept.push(goroutine);
        }
    }

    debug!("Removed {} duplicate stacks", before - kept.len());
    kept
}

/// Distinct states in first-seen order
pub fn distinct_states(goroutines: &[Goroutine]) -> Vec<&str> {
    let mut states: Vec<&str> = Vec::new();
    for goroutine in goroutines {
        if !states.contains(&goroutine.state()) {
            states.push(goroutine.state());
        }
    }
    states
}

/// Number of goroutines per state, states in first-seen order
pub fn state_counts(goroutines: &[Goroutine]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for goroutine in goroutines {
        match counts.iter_mut().find(|(state, _)| *state == goroutine.state()) {
            Some((_, count)) => *count += 1,
            None => counts.push((goroutine.state(), 1)),
        }
    }
    counts
}
