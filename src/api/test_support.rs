//! Fixtures shared by the pattern set test suites: the six seed patterns and the
//! scenarios every strategy must agree on.

use std::sync::Arc;

use super::built_in::sexpr::{app, int, list, sym, Sexpr, SexprContext};
use super::context::TermContext;
use super::pattern::Pattern;
use super::pattern_set::{Match, PatternSet};

pub(crate) fn seed_variables() -> Vec<Sexpr> {
  vec![sym("a"), sym("b"), sym("c")]
}

/// The six seed patterns, in index order:
/// `(add a 1)`, `(add (inc a) (inc a))`, `(add (inc b) (inc a))`, `(add a a)`,
/// `(sum [c b a])`, `[a]`.
pub(crate) fn seed_patterns(context: &Arc<SexprContext>) -> Vec<Pattern<SexprContext>> {
  let vars = seed_variables();
  vec![
    Pattern::new(context, app("add", vec![sym("a"), int(1)]), vars.clone()),
    Pattern::new(
      context,
      app("add", vec![app("inc", vec![sym("a")]), app("inc", vec![sym("a")])]),
      vars.clone(),
    ),
    Pattern::new(
      context,
      app("add", vec![app("inc", vec![sym("b")]), app("inc", vec![sym("a")])]),
      vars.clone(),
    ),
    Pattern::new(context, app("add", vec![sym("a"), sym("a")]), vars.clone()),
    Pattern::new(
      context,
      app("sum", vec![list(vec![sym("c"), sym("b"), sym("a")])]),
      vars.clone(),
    ),
    Pattern::new(context, list(vec![sym("a")]), vars),
  ]
}

fn assert_pattern(found: &Match<SexprContext>, set: &dyn PatternSet<SexprContext>, index: usize) {
  assert!(
    std::ptr::eq(found.pattern, &set.patterns()[index]),
    "expected pattern {} but matched {:?}",
    index,
    found.pattern
  );
}

/// Every emitted substitution must map the pattern back onto the matched term.
fn assert_substitutions_reproduce(
  set:     &dyn PatternSet<SexprContext>,
  term:    &Sexpr,
  matches: &[Match<SexprContext>],
) {
  for found in matches {
    let applied = set.context().substitute(found.pattern.term(), &found.substitution);
    assert_eq!(&applied, term);
  }
}

/// The seed scenarios every strategy must reproduce, including ordering.
pub(crate) fn check_seed_scenarios(set: &dyn PatternSet<SexprContext>) {
  // (add 2 1) matches only (add a 1).
  let term = app("add", vec![int(2), int(1)]);
  let matches = set.match_all(&term);
  assert_eq!(matches.len(), 1);
  assert_pattern(&matches[0], set, 0);
  assert_eq!(matches[0].substitution.get(&sym("a")), Some(&int(2)));
  assert_substitutions_reproduce(set, &term, &matches);

  // (add 1 1): the specific pattern precedes the general one.
  let term = app("add", vec![int(1), int(1)]);
  let matches = set.match_all(&term);
  assert_eq!(matches.len(), 2);
  assert_pattern(&matches[0], set, 0);
  assert_eq!(matches[0].substitution.get(&sym("a")), Some(&int(1)));
  assert_pattern(&matches[1], set, 3);
  assert_eq!(matches[1].substitution.get(&sym("a")), Some(&int(1)));
  assert_substitutions_reproduce(set, &term, &matches);

  // (add (inc 1) (inc 1)): matches at depth, non-linear candidates validated.
  let term = app("add", vec![app("inc", vec![int(1)]), app("inc", vec![int(1)])]);
  let matches = set.match_all(&term);
  assert_eq!(matches.len(), 3);
  assert_pattern(&matches[0], set, 1);
  assert_eq!(matches[0].substitution.get(&sym("a")), Some(&int(1)));
  assert_pattern(&matches[1], set, 2);
  assert_eq!(matches[1].substitution.get(&sym("a")), Some(&int(1)));
  assert_eq!(matches[1].substitution.get(&sym("b")), Some(&int(1)));
  assert_pattern(&matches[2], set, 3);
  assert_eq!(
    matches[2].substitution.get(&sym("a")),
    Some(&app("inc", vec![int(1)]))
  );
  assert_substitutions_reproduce(set, &term, &matches);

  // (add [1] [1]): list heads have no concrete edge under add, so only the wildcard
  // fallback applies, and the repeated variable binds equal lists.
  let term = app("add", vec![list(vec![int(1)]), list(vec![int(1)])]);
  let matches = set.match_all(&term);
  assert_eq!(matches.len(), 1);
  assert_pattern(&matches[0], set, 3);
  assert_eq!(
    matches[0].substitution.get(&sym("a")),
    Some(&list(vec![int(1)]))
  );
  assert_substitutions_reproduce(set, &term, &matches);

  // (add 2 3): the agreement check rejects the only candidate.
  let term = app("add", vec![int(2), int(3)]);
  assert!(set.match_all(&term).is_empty());
  assert!(set.match_one(&term).is_none());

  // [7] matches the singleton list pattern; (sum [1 2 3]) binds right to left.
  let term = list(vec![int(7)]);
  let matches = set.match_all(&term);
  assert_eq!(matches.len(), 1);
  assert_pattern(&matches[0], set, 5);
  assert_eq!(matches[0].substitution.get(&sym("a")), Some(&int(7)));
  assert_substitutions_reproduce(set, &term, &matches);

  let term = app("sum", vec![list(vec![int(1), int(2), int(3)])]);
  let matches = set.match_all(&term);
  assert_eq!(matches.len(), 1);
  assert_pattern(&matches[0], set, 4);
  assert_eq!(matches[0].substitution.get(&sym("c")), Some(&int(1)));
  assert_eq!(matches[0].substitution.get(&sym("b")), Some(&int(2)));
  assert_eq!(matches[0].substitution.get(&sym("a")), Some(&int(3)));
  assert_substitutions_reproduce(set, &term, &matches);
}
