use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined field on an
/// [`ObjectOrInterfaceType`](crate::types::ObjectOrInterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) owner_type_name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The free-text audience annotation attached to this field.
    ///
    /// This is the field's description (the string literal preceding it in
    /// the schema) with surrounding whitespace removed. It is only used as a
    /// tagging convention (`"admin"`, `"mobile"`, ...) and is never
    /// interpreted by the type system.
    pub fn annotation(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim)
    }

    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        owner_type_name: &str,
        ast_field: &ast::schema::Field,
    ) -> Self {
        let parameters = ast_field.arguments.iter()
            .map(|input_val| (
                input_val.name.to_owned(),
                Parameter::from_ast(
                    file_path,
                    owner_type_name,
                    ast_field.name.as_str(),
                    input_val,
                ),
            ))
            .collect();

        Self {
            def_location: loc::FilePosition::from_pos(
                file_path,
                ast_field.position,
            ),
            deprecation_state: (&ast_field.directives).into(),
            description: ast_field.description.to_owned(),
            name: ast_field.name.to_owned(),
            owner_type_name: owner_type_name.to_string(),
            parameters,
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_state.is_deprecated()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn owner_type_name(&self) -> &str {
        self.owner_type_name.as_str()
    }

    /// The arguments of this field, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
