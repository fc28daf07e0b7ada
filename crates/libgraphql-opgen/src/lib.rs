//! Generates one GraphQL operation document per root field of a schema.
//!
//! A [`Schema`](schema::Schema) is loaded with a
//! [`SchemaBuilder`](schema::SchemaBuilder), then handed to a
//! [`Generator`](generator::Generator) which selects root fields, builds a
//! selection tree for each one and assembles the final document text.

pub mod ast;
mod file_reader;
pub mod generator;
pub mod loc;
pub mod operation;
pub mod schema;
pub mod types;

pub use file_reader::ReadContentError;
pub(crate) use file_reader::read_content;
