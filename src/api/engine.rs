/*!

Main entry point. An `Engine` binds a context once, so patterns and pattern sets can be
built without threading the context through every call.

*/

use std::sync::Arc;

use crate::core::error::MatchError;

use super::{
  context::TermContext,
  discrimination_net::DynamicPatternSet,
  matching_automaton::StaticPatternSet,
  pattern::Pattern,
  pattern_set::PatternSet,
};

/// Which matching strategy a pattern set compiles to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PatternSetKind {
  /// A deterministic matching automaton, frozen at construction.
  Static,
  /// A discrimination net that can keep growing under `add`.
  Dynamic,
}

pub struct Engine<C: TermContext> {
  context: Arc<C>,
}

impl<C: TermContext + 'static> Engine<C> {
  pub fn new(context: C) -> Self {
    Engine { context: Arc::new(context) }
  }

  #[inline(always)]
  pub fn context(&self) -> &Arc<C> {
    &self.context
  }

  /// Build a pattern over this engine's context.
  pub fn pattern(&self, term: C::Term, variables: impl Into<Vec<C::Term>>) -> Pattern<C> {
    Pattern::new(&self.context, term, variables)
  }

  /// Compile the patterns into a set with the chosen matching strategy.
  pub fn pattern_set(
    &self,
    patterns: Vec<Pattern<C>>,
    kind:     PatternSetKind,
  ) -> Result<Box<dyn PatternSet<C>>, MatchError> {
    match kind {
      PatternSetKind::Static => {
        Ok(Box::new(StaticPatternSet::new(Arc::clone(&self.context), patterns)?))
      }
      PatternSetKind::Dynamic => {
        Ok(Box::new(DynamicPatternSet::new(Arc::clone(&self.context), patterns)?))
      }
    }
  }
}
