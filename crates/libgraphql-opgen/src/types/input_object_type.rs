use crate::loc;

/// Input object types only ever appear in argument positions, so only their
/// identity is retained.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
