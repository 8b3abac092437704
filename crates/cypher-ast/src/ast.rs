mod clause;
mod condition;
mod pattern;
mod statement;

pub use clause::{Clause, GuardAction, Pattern};
pub use condition::{Comparison, Condition, Quantifier};
pub use pattern::{Direction, NodePattern, RelPattern};
pub use statement::{Params, Statement};
