mod customized_operations_tests;
mod document_assembler_tests;
mod field_selector_tests;
mod output_sink_tests;
mod traversal_property_tests;
mod variable_registry_tests;
