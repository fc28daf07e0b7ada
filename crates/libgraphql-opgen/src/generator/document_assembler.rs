use crate::generator::VariableRegistry;
use crate::operation::OperationKind;

/// Wraps a root field's selection in an operation definition.
///
/// ```text
/// query user($first: Int, $id: ID!){
///     user(id: $id){
///         ...
///     }
/// }
/// ```
pub struct DocumentAssembler;
impl DocumentAssembler {
    pub fn assemble(
        kind: OperationKind,
        field_name: &str,
        fragment: &str,
        variables: &VariableRegistry<'_>,
    ) -> String {
        format!(
            "{} {field_name}{}{{\n{fragment}\n}}",
            kind.keyword(),
            Self::variable_definitions(variables),
        )
    }

    /// Renders `($name: Type, ...)` in registration order, or an empty string
    /// when there are no variables.
    pub fn variable_definitions(variables: &VariableRegistry<'_>) -> String {
        if variables.is_empty() {
            return String::new();
        }

        let definitions = variables.iter()
            .map(|(variable_name, param)| format!(
                "${variable_name}: {}",
                param.type_annotation(),
            ))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({definitions})")
    }
}
