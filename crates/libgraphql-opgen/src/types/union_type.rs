use crate::loc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order retains the order members were listed on the union
    /// definition, followed by members added from type extensions.
    pub fn member_type_names(&self) -> &[String] {
        &self.members
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
