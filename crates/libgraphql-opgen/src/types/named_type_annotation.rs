#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
