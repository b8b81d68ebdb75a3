/*!

Stack based preorder traversal of terms. Unlike the recursive walks in
[`traversal`](crate::core::traversal), a `Traverser` keeps its whole state in an explicit
stack, so cloning it snapshots the traversal. Backtracking matchers push these snapshots
as choice points.

*/

use crate::api::context::TermContext;

use super::net_symbol::NetSymbol;

/// A copyable preorder walk. The cursor is `Concrete(subterm)` while the walk is live and
/// `End` once it is exhausted; the stack holds deferred right siblings, bottomed by the
/// `End` sentinel.
pub struct Traverser<'c, 't, C: TermContext> {
  context: &'c C,
  cursor:  NetSymbol<&'t C::Term>,
  stack:   Vec<NetSymbol<&'t C::Term>>,
}

impl<'c, 't, C: TermContext> Clone for Traverser<'c, 't, C> {
  /// Snapshot the traversal in its current state. The copy shares no mutable state with
  /// the original, so either can advance without disturbing the other.
  fn clone(&self) -> Self {
    Traverser {
      context: self.context,
      cursor:  self.cursor,
      stack:   self.stack.clone(),
    }
  }
}

impl<'c, 't, C: TermContext> Traverser<'c, 't, C> {
  pub fn new(context: &'c C, term: &'t C::Term) -> Self {
    Traverser {
      context,
      cursor: NetSymbol::Concrete(term),
      stack:  vec![NetSymbol::End],
    }
  }

  /// The whole subterm at the cursor, or `None` once the walk is exhausted.
  #[inline(always)]
  pub fn term(&self) -> Option<&'t C::Term> {
    match self.cursor {
      NetSymbol::Concrete(term) => Some(term),
      _ => None,
    }
  }

  /// The head of the subterm at the cursor.
  #[inline(always)]
  pub fn current(&self) -> Option<C::Head> {
    self.term().map(|term| self.context.head(term))
  }

  /// The number of children of the subterm at the cursor; zero once exhausted.
  #[inline(always)]
  pub fn arity(&self) -> usize {
    self.term().map(|term| self.context.children(term).len()).unwrap_or(0)
  }

  #[inline(always)]
  pub fn is_exhausted(&self) -> bool {
    self.cursor.is_end()
  }

  /// Proceed to the next subterm in preorder: descend to the first child if there is
  /// one, otherwise pop the next deferred sibling.
  pub fn advance(&mut self) {
    let NetSymbol::Concrete(term) = self.cursor else {
      return;
    };
    let subterms = self.context.children(term);
    match subterms.first() {
      None => {
        self.cursor = self.stack.pop().unwrap_or(NetSymbol::End);
      }
      Some(first) => {
        // Defer right-to-left so the leftmost sibling is popped first.
        for sibling in subterms[1..].iter().rev() {
          self.stack.push(NetSymbol::Concrete(sibling));
        }
        self.cursor = NetSymbol::Concrete(first);
      }
    }
  }

  /// Step past the entire subtree at the cursor. The cursor's children were never
  /// deferred, so popping the stack lands on the next sibling (or `End`).
  pub fn skip(&mut self) {
    if !self.cursor.is_end() {
      self.cursor = self.stack.pop().unwrap_or(NetSymbol::End);
    }
  }
}

impl<'c, 't, C: TermContext> Iterator for Traverser<'c, 't, C> {
  type Item = &'t C::Term;

  fn next(&mut self) -> Option<&'t C::Term> {
    let term = self.term()?;
    self.advance();
    Some(term)
  }
}
