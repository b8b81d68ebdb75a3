/*!

A pattern set backed by a nondeterministic discrimination net, supporting incremental
insertion.

The net is a trie over the preorder head sequence of each pattern, with every variable
position collapsed onto the single wildcard edge. Patterns that differ only in variable
names therefore share a path through the net; the non-linearity post-pass tells them
apart afterwards. Matching walks the subject with a copyable
[`Traverser`](crate::core::traverser::Traverser) and backtracks over the choice between
a concrete edge and the wildcard edge, concrete first, so more-specific matches are
produced before more-general ones.

*/

use std::{
  collections::HashMap,
  sync::Arc
};

use crate::{
  core::{
    error::MatchError,
    net_symbol::NetSymbol,
    substitution::bind_ordered,
    traversal::Preorder,
    traverser::Traverser,
  },
  trace,
};

use super::{
  context::TermContext,
  pattern::Pattern,
  pattern_set::{Match, PatternSet}
};

/// A discrimination net node: the outgoing edges and the patterns terminating here.
pub(crate) struct NetNode<H> {
  edges:    HashMap<NetSymbol<H>, NetNode<H>>,
  patterns: Vec<usize>,
}

impl<H: Eq + std::hash::Hash> NetNode<H> {
  fn new() -> Self {
    NetNode {
      edges:    HashMap::new(),
      patterns: Vec::new(),
    }
  }
}

pub struct DynamicPatternSet<C: TermContext> {
  context:  Arc<C>,
  patterns: Vec<Pattern<C>>,
  net:      NetNode<C::Head>,
}

impl<C: TermContext> DynamicPatternSet<C> {
  pub fn new(
    context:  Arc<C>,
    patterns: impl IntoIterator<Item = Pattern<C>>,
  ) -> Result<Self, MatchError> {
    let mut set = DynamicPatternSet {
      context,
      patterns: Vec::new(),
      net:      NetNode::new(),
    };
    for pattern in patterns {
      set.add(pattern)?;
    }
    Ok(set)
  }

  /// Insert one more pattern. Fails without modifying the set when the pattern was
  /// built against a different context.
  pub fn add(&mut self, pattern: Pattern<C>) -> Result<(), MatchError> {
    if !Arc::ptr_eq(&self.context, pattern.context()) {
      return Err(MatchError::ContextMismatch);
    }

    let index = self.patterns.len();
    let mut node = &mut self.net;
    {
      let mut walk = self.context.traverse(pattern.term());
      while let Some(subterm) = walk.next() {
        let label = if pattern.is_variable(subterm) {
          Preorder::skip(&mut walk);
          NetSymbol::AnyVar
        } else {
          NetSymbol::Concrete(self.context.head(subterm))
        };
        node = node.edges.entry(label).or_insert_with(NetNode::new);
      }
    }
    // The walk visited at least the pattern term itself, so `node` is the node the
    // last edge landed on.
    node.patterns.push(index);
    trace!(2, "inserted pattern {} into the discrimination net", index);

    self.patterns.push(pattern);
    Ok(())
  }

  /// Matching iterator with a concrete type; `PatternSet::match_iter` boxes this.
  pub fn matches<'s>(&'s self, term: &'s C::Term) -> DynamicMatchIter<'s, C> {
    DynamicMatchIter::new(self, term)
  }

  #[cfg(test)]
  pub(crate) fn net(&self) -> &NetNode<C::Head> {
    &self.net
  }
}

impl<C: TermContext> PatternSet<C> for DynamicPatternSet<C> {
  fn context(&self) -> &Arc<C> {
    &self.context
  }

  fn patterns(&self) -> &[Pattern<C>] {
    &self.patterns
  }

  fn match_iter<'s>(&'s self, term: &'s C::Term) -> Box<dyn Iterator<Item = Match<'s, C>> + 's> {
    Box::new(self.matches(term))
  }
}

/// A backtracking choice point: the walker, the net node, and the bindings collected so
/// far, all as they were before a concrete edge was taken.
struct Frame<'s, C: TermContext> {
  walker:   Traverser<'s, 's, C>,
  node:     &'s NetNode<C::Head>,
  bindings: Vec<&'s C::Term>,
}

/// Lazy backtracking search over the net. Between yields the iterator suspends with its
/// whole search state intact, so dropping it abandons the search cleanly.
pub struct DynamicMatchIter<'s, C: TermContext> {
  set:      &'s DynamicPatternSet<C>,
  walker:   Traverser<'s, 's, C>,
  node:     &'s NetNode<C::Head>,
  bindings: Vec<&'s C::Term>,
  stack:    Vec<Frame<'s, C>>,
  /// Set after restoring a frame; suppresses retaking the concrete edge that the frame
  /// recorded, so the wildcard edge is tried instead.
  restored: bool,
  done:     bool,

  /// Candidates from the most recently reached terminal, drained before the search
  /// resumes, paired with the binding tuple they share.
  pending:          Vec<usize>,
  pending_bindings: Vec<&'s C::Term>,
  pending_position: usize,
}

impl<'s, C: TermContext> DynamicMatchIter<'s, C> {
  fn new(set: &'s DynamicPatternSet<C>, term: &'s C::Term) -> Self {
    DynamicMatchIter {
      set,
      walker:   set.context.traverser(term),
      node:     &set.net,
      bindings: Vec::new(),
      stack:    Vec::new(),
      restored: false,
      done:     false,

      pending:          Vec::new(),
      pending_bindings: Vec::new(),
      pending_position: 0,
    }
  }

  /// Restore the most recent choice point, or report that the search space is spent.
  fn backtrack(&mut self) -> bool {
    match self.stack.pop() {
      Some(frame) => {
        self.walker   = frame.walker;
        self.node     = frame.node;
        self.bindings = frame.bindings;
        self.restored = true;
        true
      }
      None => false,
    }
  }

  /// Run the search until the next terminal emission or exhaustion.
  fn step(&mut self) {
    loop {
      let Some(current) = self.walker.term() else {
        // The walker is spent. Every pattern terminating here is a candidate; emit them
        // with the shared binding tuple, then resume from the last choice point.
        if !self.node.patterns.is_empty() {
          self.pending = self.node.patterns.clone();
          self.pending_bindings = self.bindings.clone();
          self.pending_position = 0;
          if !self.backtrack() {
            self.done = true;
          }
          return;
        }
        if !self.backtrack() {
          self.done = true;
          return;
        }
        continue;
      };

      // The concrete edge is preferred, unless this state was just restored from the
      // stack (in which case the concrete edge has already been explored).
      if !self.restored {
        let head = self.set.context.head(current);
        if let Some(child) = self.node.edges.get(&NetSymbol::Concrete(head)) {
          self.stack.push(Frame {
            walker:   self.walker.clone(),
            node:     self.node,
            bindings: self.bindings.clone(),
          });
          self.node = child;
          self.walker.advance();
          continue;
        }
      }

      // The wildcard edge binds the whole subterm and steps past it.
      if let Some(child) = self.node.edges.get(&NetSymbol::AnyVar) {
        self.restored = false;
        self.bindings.push(current);
        Traverser::skip(&mut self.walker);
        self.node = child;
        continue;
      }

      if !self.backtrack() {
        self.done = true;
        return;
      }
    }
  }
}

impl<'s, C: TermContext> Iterator for DynamicMatchIter<'s, C> {
  type Item = Match<'s, C>;

  fn next(&mut self) -> Option<Match<'s, C>> {
    loop {
      // Drain candidates from the last terminal before searching further.
      while self.pending_position < self.pending.len() {
        let index = self.pending[self.pending_position];
        self.pending_position += 1;
        let pattern = &self.set.patterns[index];
        if let Some(substitution) = bind_ordered(pattern, &self.pending_bindings) {
          return Some(Match { pattern, substitution });
        }
      }
      if self.done {
        return None;
      }
      self.step();
    }
  }
}
