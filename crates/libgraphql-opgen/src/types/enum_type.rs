use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Names of the enum's values in definition order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
