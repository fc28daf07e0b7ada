use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// The data shared by
/// [object](https://spec.graphql.org/October2021/#sec-Objects) and
/// [interface](https://spec.graphql.org/October2021/#sec-Interfaces) types:
/// a name and an ordered map of selectable fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectOrInterfaceType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The fields of this type keyed by name.
    ///
    /// The order of this map is the order the fields were defined in the
    /// schema, followed by fields added by type extensions in the order the
    /// extensions were loaded.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
