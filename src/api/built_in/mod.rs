/*!

Bundled term representations. These exist so the engine can be exercised out of the box;
any representation satisfying [`TermContext`](crate::api::TermContext) works the same
way.

*/

pub mod sexpr;
