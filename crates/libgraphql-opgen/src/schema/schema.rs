use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use indexmap::IndexMap;

/// An immutable GraphQL schema whose type references have all been resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns all types defined within this [`Schema`], including the
    /// implicitly-defined built-in scalars, in definition order.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns the root operation type for the given [`OperationKind`], if the
    /// schema defines one.
    ///
    /// Root types named in a `schema { ... }` block take precedence over the
    /// default `Query`/`Mutation`/`Subscription` names.
    pub fn root_operation_type(
        &self,
        kind: OperationKind,
    ) -> Option<&ObjectOrInterfaceType> {
        self.root_operation_type_name(kind)
            .and_then(|name| self.types.get(name))
            .and_then(|graphql_type| graphql_type.as_object_or_interface())
    }

    pub fn root_operation_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }
}
