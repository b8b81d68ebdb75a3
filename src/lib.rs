/*!

Simultaneous matching of one term against a set of patterns.

A term is any tree-structured value for which head and children are defined; the engine
observes terms only through a [`TermContext`](api::TermContext). Patterns are terms in
which designated subterms act as variables, and a variable may occur more than once
(a non-linear pattern), in which case its occurrences must bind equal subterms.

Two interchangeable strategies implement the [`PatternSet`](api::PatternSet) interface:

 - [`DynamicPatternSet`](api::DynamicPatternSet), a discrimination net that grows under
   incremental insertion and matches by backtracking;
 - [`StaticPatternSet`](api::StaticPatternSet), a deterministic left-to-right matching
   automaton compiled once from a fixed pattern list.

```
use termnet::api::{Engine, PatternSetKind, PatternSet};
use termnet::api::built_in::sexpr::{app, int, sym, SexprContext};

let engine = Engine::new(SexprContext);
let pattern = engine.pattern(app("add", vec![sym("a"), int(1)]), vec![sym("a")]);
let set = engine.pattern_set(vec![pattern], PatternSetKind::Static).unwrap();

let term = app("add", vec![int(2), int(1)]);
let found = set.match_one(&term).unwrap();
assert_eq!(found.substitution.get(&sym("a")), Some(&int(2)));
```

*/

pub mod abstractions;
pub mod api;
mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};
