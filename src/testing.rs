// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles that count and optionally fail element operations.
//!
//! Counters are thread-local; call [`reset`] at the start of every test.

// Std imports
use std::cell::Cell;

#[derive(Default)]
struct Stats {
    clones: Cell<usize>,
    drops: Cell<usize>,
    defaults: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
    default_budget: Cell<Option<usize>>,
}

thread_local! {
    static STATS: Stats = Stats::default();
}

pub(crate) fn reset() {
    STATS.with(|s| {
        s.clones.set(0);
        s.drops.set(0);
        s.defaults.set(0);
        s.clone_budget.set(None);
        s.default_budget.set(None);
    });
}

pub(crate) fn clones() -> usize {
    STATS.with(|s| s.clones.get())
}

pub(crate) fn drops() -> usize {
    STATS.with(|s| s.drops.get())
}

pub(crate) fn defaults() -> usize {
    STATS.with(|s| s.defaults.get())
}

/// Lets `n` more clones succeed, then panics on the next one.
pub(crate) fn fail_clone_after(n: usize) {
    STATS.with(|s| s.clone_budget.set(Some(n)));
}

/// Lets `n` more default constructions succeed, then panics on the next one.
pub(crate) fn fail_default_after(n: usize) {
    STATS.with(|s| s.default_budget.set(Some(n)));
}

/// The payloads of `values`, for comparisons that must not create and drop
/// extra `Tracked` temporaries.
pub(crate) fn values(values: &[Tracked]) -> Vec<i32> {
    values.iter().map(|t| t.0).collect()
}

fn spend(budget: &Cell<Option<usize>>, what: &str) {
    match budget.get() {
        Some(0) => panic!("{what} budget exhausted"),
        Some(n) => budget.set(Some(n - 1)),
        None => {}
    }
}

/// An `i32` wrapper whose clones, drops and default constructions are counted.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Tracked(pub(crate) i32);

impl Clone for Tracked {
    fn clone(&self) -> Self {
        STATS.with(|s| {
            spend(&s.clone_budget, "clone");
            s.clones.set(s.clones.get() + 1);
        });
        Tracked(self.0)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        STATS.with(|s| {
            spend(&s.default_budget, "default");
            s.defaults.set(s.defaults.get() + 1);
        });
        Tracked(0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        // `try_with` so a value dropped during thread teardown stays quiet.
        let _ = STATS.try_with(|s| s.drops.set(s.drops.get() + 1));
    }
}

/// Move-only value: no `Clone`, no `Default`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MoveOnly(pub(crate) String);
