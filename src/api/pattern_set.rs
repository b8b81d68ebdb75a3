/*!

The interface shared by both matching strategies. A `PatternSet` matches one term
against many patterns at once, lazily producing every `(pattern, substitution)` pair
that matches. Dropping the iterator abandons the search; there is no other cancellation
protocol.

*/

use std::{
  fmt::{Debug, Formatter},
  sync::Arc
};

use crate::core::substitution::Substitution;

use super::{context::TermContext, pattern::Pattern};

/// One successful match: the pattern that matched and the substitution realizing it.
/// Applying the substitution to the pattern's term reproduces the matched term.
pub struct Match<'s, C: TermContext> {
  pub pattern:      &'s Pattern<C>,
  pub substitution: Substitution<C>,
}

impl<'s, C: TermContext> Debug for Match<'s, C> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Match")
     .field("pattern", self.pattern)
     .field("substitution", &self.substitution)
     .finish()
  }
}

pub trait PatternSet<C: TermContext> {
  /// The context shared by every pattern in the set.
  fn context(&self) -> &Arc<C>;

  /// The patterns in the set, in insertion order.
  fn patterns(&self) -> &[Pattern<C>];

  /// Lazily produce every `(pattern, substitution)` pair matching `term`, in the
  /// deterministic order fixed by the strategy. Yields nothing when no pattern matches.
  fn match_iter<'s>(&'s self, term: &'s C::Term) -> Box<dyn Iterator<Item = Match<'s, C>> + 's>;

  /// Every match for `term`, eagerly. Equivalent to materializing `match_iter`.
  fn match_all<'s>(&'s self, term: &'s C::Term) -> Vec<Match<'s, C>> {
    self.match_iter(term).collect()
  }

  /// The first match for `term`, or `None` when nothing matches.
  fn match_one<'s>(&'s self, term: &'s C::Term) -> Option<Match<'s, C>> {
    self.match_iter(term).next()
  }
}
