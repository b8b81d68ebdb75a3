use termnet::api::{Engine, PatternSet, PatternSetKind};
use termnet::api::built_in::sexpr::{app, int, list, sym, Sexpr};
use termnet::api::built_in::sexpr::SexprContext;

fn main() {
  let engine = Engine::new(SexprContext);
  let vars = vec![sym("a"), sym("b"), sym("c")];

  let patterns = vec![
    engine.pattern(app("add", vec![sym("a"), int(1)]), vars.clone()),
    engine.pattern(
      app("add", vec![app("inc", vec![sym("a")]), app("inc", vec![sym("a")])]),
      vars.clone(),
    ),
    engine.pattern(app("add", vec![sym("a"), sym("a")]), vars.clone()),
    engine.pattern(app("sum", vec![list(vec![sym("c"), sym("b"), sym("a")])]), vars.clone()),
  ];

  let subjects: Vec<Sexpr> = vec![
    app("add", vec![int(2), int(1)]),
    app("add", vec![app("inc", vec![int(1)]), app("inc", vec![int(1)])]),
    app("sum", vec![list(vec![int(1), int(2), int(3)])]),
    app("add", vec![int(2), int(3)]),
  ];

  for kind in [PatternSetKind::Static, PatternSetKind::Dynamic] {
    let set = engine
        .pattern_set(patterns.clone(), kind)
        .expect("patterns share the engine's context");
    println!("== {:?} matching ==", kind);
    for subject in &subjects {
      let matches = set.match_all(subject);
      if matches.is_empty() {
        println!("{}  matches nothing", subject);
        continue;
      }
      for found in matches {
        let bindings: Vec<String> = found
            .substitution
            .iter()
            .map(|(variable, value)| format!("{} -> {}", variable, value))
            .collect();
        println!("{}  matches  {}  with {{{}}}", subject, found.pattern.term(), bindings.join(", "));
      }
    }
    println!();
  }
}
