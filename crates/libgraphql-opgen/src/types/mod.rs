mod deprecation_state;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_or_interface_type::ObjectOrInterfaceType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type::BUILTIN_SCALAR_NAMES;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
