use crate::loc;

pub(crate) const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Represents a scalar type, either one of the built-in GraphQL scalars or a
/// custom `scalar` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: name.to_string(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SchemaDefLocation::GraphQLBuiltIn
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
