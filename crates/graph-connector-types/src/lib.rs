//! The typed schema model behind the translation layer.
//!
//! The schema-building subsystem parses directives out of the SDL and feeds
//! the result into a [`graph_definition::GraphDefinition`]; translation only
//! ever reads it back through walkers and the name-indexed `find` methods.

pub mod graph_definition;
