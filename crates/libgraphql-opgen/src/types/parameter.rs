use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field).
///
/// Two `Parameter`s compare equal only when they are the same argument of the
/// same field on the same type.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) field_name: String,
    pub(crate) name: String,
    pub(crate) owner_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// Name of the field this argument is declared on.
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        owner_type_name: &str,
        field_name: &str,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Parameter {
            def_location: loc::FilePosition::from_pos(
                file_path,
                input_val.position,
            ),
            field_name: field_name.to_string(),
            name: input_val.name.to_owned(),
            owner_type_name: owner_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name of the type whose field declares this argument.
    pub fn owner_type_name(&self) -> &str {
        self.owner_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
