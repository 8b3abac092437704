//! A typed AST for a Cypher-like graph query language, together with a
//! renderer that serializes a [`Statement`](ast::Statement) into the final
//! query text and its flat parameter map in a single pass.
//!
//! Query builders construct clause values and thread parameters through
//! [`ast::Statement`] accumulators; nothing is turned into text until
//! [`renderer::Cypher::build`] runs. Embedding a statement inside a quoted
//! string argument (the `apoc.do.when` conditional-execution primitive) is
//! handled by the renderer, including quote escaping, so builders never do
//! textual find/replace.

pub mod ast;
pub mod renderer;
