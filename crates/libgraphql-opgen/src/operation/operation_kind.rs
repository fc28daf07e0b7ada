/// The kind of a root operation type. Each kind owns its own keyword in the
/// generated documents and its own output subdirectory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// Every kind, in the order documents are generated.
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// Name of the directory that documents of this kind are written to.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutations",
            Self::Query => "queries",
            Self::Subscription => "subscriptions",
        }
    }

    /// Maps a root type name onto the kind whose keyword it matches, ignoring
    /// case (`Query`, `query` and `QUERY` all map to
    /// [`OperationKind::Query`]).
    pub fn from_root_type_name(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(type_name))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
