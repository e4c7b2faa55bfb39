//! First-class invariants for the Tower of Hanoi.
//!
//! Invariants are properties of the peg store that must hold after every
//! move. The traversal checks the full set in debug builds.

use derive_more::{Display, Error};

/// A property of the peg store, checked against a whole state.
pub trait Invariant<S> {
    /// What the property asserts, in words.
    const RULE: &'static str;

    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// `Err` naming the rule when `state` breaks it.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation { rule: Self::RULE })
        }
    }
}

/// A broken invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{rule}")]
pub struct InvariantViolation {
    /// The rule that no longer holds.
    pub rule: &'static str,
}

/// Several invariants checked as one, each reporting independently.
pub trait InvariantSet<S> {
    /// Every rule `state` breaks, in declaration order.
    fn violations(state: &S) -> Vec<InvariantViolation>;

    /// `Err` with every broken rule, or `Ok` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations = Self::violations(state);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

macro_rules! invariant_tuple {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn violations(state: &S) -> Vec<InvariantViolation> {
                [$($inv::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect()
            }
        }
    };
}

invariant_tuple!(A);
invariant_tuple!(A, B);
invariant_tuple!(A, B, C);

pub mod pegs_descending;
pub mod rings_conserved;

pub use pegs_descending::PegsDescendingInvariant;
pub use rings_conserved::RingsConservedInvariant;

/// All Hanoi invariants as a composable set.
pub type HanoiInvariants = (PegsDescendingInvariant, RingsConservedInvariant);
