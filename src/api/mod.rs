/*!

The public API of the library.

*/

pub mod built_in;
pub mod context;
pub mod discrimination_net;
pub mod engine;
pub mod matching_automaton;
pub mod pattern;
pub mod pattern_set;

#[cfg(test)]
pub(crate) mod test_support;

// Engine internals that are part of the public surface.
pub use crate::core::{
  error::MatchError,
  net_symbol::NetSymbol,
  substitution::Substitution,
  traversal::{Preorder, PreorderWithArity, PreorderWithPath},
  traverser::Traverser,
  Path,
};

pub use context::TermContext;
pub use discrimination_net::{DynamicMatchIter, DynamicPatternSet};
pub use engine::{Engine, PatternSetKind};
pub use matching_automaton::{StaticMatchIter, StaticPatternSet};
pub use pattern::{Pattern, PatternAttribute, PatternAttributes};
pub use pattern_set::{Match, PatternSet};
