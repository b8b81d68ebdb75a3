/*!

The sentinel sum type shared by both matching strategies. Sentinels must be
distinguishable from every user symbol by construction, so they are variants rather than
reserved values: anything at all may appear as a head or an argument in a user term.

*/

use std::fmt::{Display, Formatter};

/// An edge label or traversal token. `Concrete` wraps a user value: a head symbol in the
/// edge maps of a discrimination net or matching automaton, a subterm in the cursor of a
/// [`Traverser`](crate::core::traverser::Traverser). `AnyVar` is the wildcard edge that
/// stands for every pattern variable. `End` marks an exhausted traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NetSymbol<T> {
  Concrete(T),
  AnyVar,
  End,
}

impl<T> NetSymbol<T> {
  #[inline(always)]
  pub fn is_end(&self) -> bool {
    matches!(self, NetSymbol::End)
  }
}

impl<T: Display> Display for NetSymbol<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      NetSymbol::Concrete(value) => write!(f, "{}", value),
      NetSymbol::AnyVar          => write!(f, "?"),
      NetSymbol::End             => write!(f, "end"),
    }
  }
}
