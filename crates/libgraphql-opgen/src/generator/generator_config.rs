/// Options controlling which root fields get a document and how deep each
/// document's selection tree may grow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum nesting level of selections within one document.
    pub depth_limit: usize,

    /// Extension (without a leading `.`) of the written document files.
    pub file_extension: String,

    /// Re-expand a `Type.field` edge that already appears on the current
    /// path. Cycles are then bounded only by `depth_limit`.
    pub include_cross_references: bool,

    pub include_deprecated_fields: bool,

    /// Generate only root fields annotated `"admin"`. When unset, such fields
    /// are skipped.
    pub is_admin: bool,

    /// Generate only root fields whose annotation contains `"mobile"`.
    pub is_mobile: bool,

    /// Generate only root fields annotated `"shared"`.
    pub is_shared: bool,

    /// Generate only root fields annotated `"website"`. When unset, such
    /// fields are skipped.
    pub is_website: bool,
}
impl GeneratorConfig {
    pub const DEFAULT_DEPTH_LIMIT: usize = 100;
    pub const DEFAULT_FILE_EXTENSION: &'static str = "gql";
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            depth_limit: Self::DEFAULT_DEPTH_LIMIT,
            file_extension: Self::DEFAULT_FILE_EXTENSION.to_string(),
            include_cross_references: false,
            include_deprecated_fields: false,
            is_admin: false,
            is_mobile: false,
            is_shared: false,
            is_website: false,
        }
    }
}
