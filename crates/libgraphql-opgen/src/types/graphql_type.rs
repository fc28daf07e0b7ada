use crate::loc;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a defined GraphQL type. The kind is resolved once while the
/// [`Schema`](crate::schema::Schema) is built so that traversal code can
/// dispatch on it directly.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(ObjectOrInterfaceType),
    Object(ObjectOrInterfaceType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    /// Returns the fielded type if this is an Object or Interface type.
    pub fn as_object_or_interface(&self) -> Option<&ObjectOrInterfaceType> {
        match self {
            Self::Interface(t) | Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => &t.def_location,
            Self::InputObject(t) => &t.def_location,
            Self::Interface(t) | Self::Object(t) => &t.def_location,
            Self::Scalar(t) => &t.def_location,
            Self::Union(t) => &t.def_location,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) | Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
