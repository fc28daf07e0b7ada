//! Turns a [`Schema`](crate::schema::Schema) into one operation document per
//! selected root field.

mod customized_operations;
mod document_assembler;
mod field_selector;
#[allow(clippy::module_inception)]
mod generator;
mod generator_config;
mod output_sink;
mod query_builder;
mod variable_registry;

pub use customized_operations::CustomizedOperationsError;
pub use customized_operations::load_customized_operation_names;
pub use customized_operations::parse_operation_names;
pub use document_assembler::DocumentAssembler;
pub use field_selector::ExclusionReason;
pub use field_selector::FieldSelector;
pub use generator::GeneratedDocument;
pub use generator::Generator;
pub use generator_config::GeneratorConfig;
pub use output_sink::OutputError;
pub use output_sink::OutputSink;
pub use query_builder::BuiltSelection;
pub use query_builder::QueryBuildError;
pub use query_builder::QueryBuilder;
pub use variable_registry::VariableRegistry;

#[cfg(test)]
mod tests;
