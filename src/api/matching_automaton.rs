/*!

A pattern set compiled once into a minimal deterministic left-to-right matching
automaton, after:

  Nedjah, Nadia. "Minimal deterministic left-to-right pattern-matching automata."
  ACM SIGPLAN Notices 33.1 (1998): 40-47.

Each pattern is linearized into its preorder sequence of `(symbol, arity)` positions,
with variables contributing the wildcard at arity 0. Construction works over matching
sets of *items* — an item is the not-yet-consumed suffix of a linearization tagged with
the rule it came from. The transition function advances the items that carry the consumed
symbol and, whenever an item's variable could instead swallow a whole concrete subtree,
synthesizes a fused item that spells the swallowing out position by position. States
reached through equivalent matching sets are shared, which is what makes the automaton
minimal. The automaton is frozen once built; matching is a single deterministic walk
with no backtracking.

*/

use std::{
  collections::HashMap,
  sync::Arc
};

use bit_set::BitSet;

use crate::{
  core::{
    error::MatchError,
    net_symbol::NetSymbol,
    substitution::bind_paths,
    traversal::PreorderWithPath,
    traverser::Traverser,
    Path,
  },
  debug,
};

use super::{
  context::TermContext,
  pattern::Pattern,
  pattern_set::{Match, PatternSet}
};

/// One linearized pattern position: an edge symbol and the arity of the subterm that
/// produced it.
type LinearSymbol<H> = (NetSymbol<H>, usize);

type StateIndex = usize;

/// The not-yet-consumed suffix of one pattern's linearization, tagged with the rule
/// (pattern index) it belongs to.
#[derive(Clone, PartialEq, Eq)]
struct MItem<H> {
  suffix: Vec<LinearSymbol<H>>,
  rule:   usize,
}

/// An unordered collection of `MItem`s: a state of the automaton under construction.
struct MSet<H> {
  items: Vec<MItem<H>>,
}

impl<H: Clone + Eq> MSet<H> {
  /// Duplicate items carry no information; dropping them on construction lets
  /// equivalence be decided by mutual containment.
  fn new(items: Vec<MItem<H>>) -> Self {
    let mut deduped: Vec<MItem<H>> = Vec::with_capacity(items.len());
    for item in items {
      if !deduped.contains(&item) {
        deduped.push(item);
      }
    }
    MSet { items: deduped }
  }

  /// Equivalence is equality as an unordered collection.
  fn is_equivalent(&self, other: &MSet<H>) -> bool {
    self.items.len() == other.items.len()
      && self.items.iter().all(|item| other.items.contains(item))
  }

  /// The distinct symbols at the matching position, in first-appearance order so that
  /// construction (and hence state numbering) is deterministic.
  fn next_symbols(&self) -> Vec<NetSymbol<H>> {
    let mut symbols: Vec<NetSymbol<H>> = Vec::new();
    for item in &self.items {
      if let Some((symbol, _)) = item.suffix.first() {
        if !symbols.contains(symbol) {
          symbols.push(symbol.clone());
        }
      }
    }
    symbols
  }
}

/// The transition function: the matching set reached from `mset` by consuming `symbol`.
fn delta<H: Clone + Eq>(mset: &MSet<H>, symbol: &NetSymbol<H>) -> MSet<H> {
  // Advance every item whose matching position carries the consumed symbol. An item
  // whose variable must swallow the subtree rooted at a concrete symbol advances
  // through a fused item synthesized at the previous transition instead.
  let mut advanced: Vec<MItem<H>> = mset
      .items
      .iter()
      .filter(|item| item.suffix.first().map(|(s, _)| s == symbol).unwrap_or(false))
      .map(|item| MItem { suffix: item.suffix[1..].to_vec(), rule: item.rule })
      .collect();

  // Fuse each variable continuation with each concrete continuation: the variable may
  // match a subtree rooted at that symbol, in which case it consumes the symbol and
  // then one wildcard per argument before resuming its own suffix.
  let mut fused: Vec<MItem<H>> = Vec::new();
  for var_item in advanced.iter().filter(|item| {
    matches!(item.suffix.first(), Some((NetSymbol::AnyVar, _)))
  }) {
    for concrete in &advanced {
      let Some((NetSymbol::Concrete(func), arity)) = concrete.suffix.first() else {
        continue;
      };
      let mut suffix = Vec::with_capacity(arity + var_item.suffix.len());
      suffix.push((NetSymbol::Concrete(func.clone()), *arity));
      suffix.extend(std::iter::repeat((NetSymbol::AnyVar, 0)).take(*arity));
      suffix.extend(var_item.suffix[1..].iter().cloned());
      fused.push(MItem { suffix, rule: var_item.rule });
    }
  }

  advanced.extend(fused);
  MSet::new(advanced)
}

/// A frozen automaton state.
struct State<H> {
  edges: HashMap<NetSymbol<H>, StateIndex>,
  /// The rules whose linearization is completely consumed at this state. These are the
  /// match candidates when the input is exhausted here; iteration is in ascending rule
  /// index, i.e. insertion order.
  complete: BitSet,
}

impl<H> State<H> {
  fn new() -> Self {
    State {
      edges:    HashMap::new(),
      complete: BitSet::new(),
    }
  }
}

pub(crate) struct MatchingAutomaton<H> {
  states: Vec<State<H>>,
}

/// Linearize a pattern into its preorder `(symbol, arity)` sequence. A declared
/// variable is atomic: it contributes the wildcard at arity 0 and its subtree is
/// stepped over.
fn linearize<C: TermContext>(context: &C, pattern: &Pattern<C>) -> Vec<LinearSymbol<C::Head>> {
  let mut linear = Vec::new();
  let mut walk = context.traverser(pattern.term());
  while let Some(subterm) = walk.term() {
    if pattern.is_variable(subterm) {
      linear.push((NetSymbol::AnyVar, 0));
      Traverser::skip(&mut walk);
    } else {
      linear.push((NetSymbol::Concrete(context.head(subterm)), walk.arity()));
      walk.advance();
    }
  }
  linear
}

fn compile<C: TermContext>(context: &C, patterns: &[Pattern<C>]) -> MatchingAutomaton<C::Head> {
  let items = patterns
      .iter()
      .enumerate()
      .map(|(rule, pattern)| MItem { suffix: linearize(context, pattern), rule })
      .collect();
  let mut msets:  Vec<MSet<C::Head>>  = vec![MSet::new(items)];
  let mut states: Vec<State<C::Head>> = vec![State::new()];

  let mut index = 0;
  while index < msets.len() {
    for symbol in msets[index].next_symbols() {
      let next = delta(&msets[index], &symbol);
      let target = match msets.iter().position(|mset| mset.is_equivalent(&next)) {
        Some(existing) => existing,
        None => {
          msets.push(next);
          states.push(State::new());
          msets.len() - 1
        }
      };
      states[index].edges.insert(symbol, target);
    }
    index += 1;
  }

  for (state, mset) in states.iter_mut().zip(&msets) {
    for item in &mset.items {
      if item.suffix.is_empty() {
        state.complete.insert(item.rule);
      }
    }
  }

  debug!(
    2,
    "compiled matching automaton: {} patterns, {} states",
    patterns.len(),
    states.len()
  );
  MatchingAutomaton { states }
}

pub struct StaticPatternSet<C: TermContext> {
  context:   Arc<C>,
  patterns:  Vec<Pattern<C>>,
  automaton: MatchingAutomaton<C::Head>,
}

impl<C: TermContext> StaticPatternSet<C> {
  pub fn new(context: Arc<C>, patterns: Vec<Pattern<C>>) -> Result<Self, MatchError> {
    for pattern in &patterns {
      if !Arc::ptr_eq(&context, pattern.context()) {
        return Err(MatchError::ContextMismatch);
      }
    }
    let automaton = compile(&*context, &patterns);
    Ok(StaticPatternSet { context, patterns, automaton })
  }

  /// The deterministic walk. Returns the state reached when the input is exhausted,
  /// together with the subterms cached at every position where a wildcard edge was
  /// available (those subterms may be needed for a substitution), or `None` as soon as
  /// a position has no edge to take.
  fn run<'s>(&'s self, term: &'s C::Term) -> Option<(StateIndex, HashMap<Path, &'s C::Term>)> {
    let mut state: StateIndex = 0;
    let mut cache: HashMap<Path, &'s C::Term> = HashMap::new();
    let mut walk = self.context.traverse_with_path(term);

    while let Some((subterm, path)) = walk.next() {
      let edges = &self.automaton.states[state].edges;
      let wildcard = edges.get(&NetSymbol::AnyVar).copied();
      if let Some(&next) = edges.get(&NetSymbol::Concrete(self.context.head(subterm))) {
        state = next;
        if wildcard.is_some() {
          cache.insert(path, subterm);
        }
      } else if let Some(next) = wildcard {
        state = next;
        PreorderWithPath::skip(&mut walk);
        cache.insert(path, subterm);
      } else {
        return None;
      }
    }
    Some((state, cache))
  }

  /// Matching iterator with a concrete type; `PatternSet::match_iter` boxes this.
  pub fn matches<'s>(&'s self, term: &'s C::Term) -> StaticMatchIter<'s, C> {
    match self.run(term) {
      Some((state, cache)) => StaticMatchIter {
        set:        self,
        candidates: self.automaton.states[state].complete.iter().collect(),
        position:   0,
        cache,
      },
      None => StaticMatchIter {
        set:        self,
        candidates: Vec::new(),
        position:   0,
        cache:      HashMap::new(),
      },
    }
  }

  #[cfg(test)]
  pub(crate) fn automaton(&self) -> &MatchingAutomaton<C::Head> {
    &self.automaton
  }
}

impl<C: TermContext> PatternSet<C> for StaticPatternSet<C> {
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

/// Drains the candidate rules of the terminal state reached by the deterministic walk,
/// applying the non-linearity post-pass to each.
pub struct StaticMatchIter<'s, C: TermContext> {
  set:        &'s StaticPatternSet<C>,
  candidates: Vec<usize>,
  position:   usize,
  cache:      HashMap<Path, &'s C::Term>,
}

impl<'s, C: TermContext> Iterator for StaticMatchIter<'s, C> {
  type Item = Match<'s, C>;

  fn next(&mut self) -> Option<Match<'s, C>> {
    while self.position < self.candidates.len() {
      let index = self.candidates[self.position];
      self.position += 1;
      let pattern = &self.set.patterns[index];
      if let Some(substitution) = bind_paths(pattern, &self.cache) {
        return Some(Match { pattern, substitution });
      }
    }
    None
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use crate::api::built_in::sexpr::{app, int, sym, SexprContext, SexprHead};
  use crate::api::pattern::Pattern;
  use crate::api::pattern_set::PatternSet;
  use crate::api::test_support::{check_seed_scenarios, seed_patterns, seed_variables};
  use crate::core::error::MatchError;
  use crate::core::net_symbol::NetSymbol;

  use super::StaticPatternSet;

  #[test]
  fn seed_scenarios() {
    let context = Arc::new(SexprContext);
    let set = StaticPatternSet::new(Arc::clone(&context), seed_patterns(&context)).unwrap();
    check_seed_scenarios(&set);
  }

  #[test]
  fn root_state_branches_on_the_root_symbols() {
    let context = Arc::new(SexprContext);
    let set = StaticPatternSet::new(Arc::clone(&context), seed_patterns(&context)).unwrap();
    let root = &set.automaton().states[0];
    assert_eq!(root.edges.len(), 3);
    assert!(root.edges.contains_key(&NetSymbol::Concrete(SexprHead::Function("add".into()))));
    assert!(root.edges.contains_key(&NetSymbol::Concrete(SexprHead::Function("sum".into()))));
    assert!(root.edges.contains_key(&NetSymbol::Concrete(SexprHead::List)));
    assert!(root.complete.is_empty());
  }

  #[test]
  fn a_variable_swallows_a_concrete_subtree() {
    let context = Arc::new(SexprContext);
    let set = StaticPatternSet::new(Arc::clone(&context), seed_patterns(&context)).unwrap();

    // (add (inc 5) 1): the variable of (add a 1) must absorb the whole (inc 5) subtree
    // while the automaton continues deterministically through it.
    let term = app("add", vec![app("inc", vec![int(5)]), int(1)]);
    let matches = set.match_all(&term);
    assert_eq!(matches.len(), 1);
    assert!(std::ptr::eq(matches[0].pattern, &set.patterns()[0]));
    assert_eq!(
      matches[0].substitution.get(&sym("a")),
      Some(&app("inc", vec![int(5)]))
    );
  }

  #[test]
  fn match_all_is_idempotent() {
    let context = Arc::new(SexprContext);
    let set = StaticPatternSet::new(Arc::clone(&context), seed_patterns(&context)).unwrap();
    let term = app("add", vec![app("inc", vec![int(1)]), app("inc", vec![int(1)])]);

    let first = set.match_all(&term);
    let second = set.match_all(&term);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
      assert!(std::ptr::eq(a.pattern, b.pattern));
      assert_eq!(a.substitution, b.substitution);
    }
  }

  #[test]
  fn foreign_context_is_rejected() {
    let context = Arc::new(SexprContext);
    let other = Arc::new(SexprContext);
    let mut patterns = seed_patterns(&context);
    patterns.push(Pattern::new(&other, app("inc", vec![sym("a")]), seed_variables()));

    let result = StaticPatternSet::new(Arc::clone(&context), patterns);
    assert!(matches!(result, Err(MatchError::ContextMismatch)));
  }
}
