use crate::ast;

/// Whether a schema element carries a `@deprecated` annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState {
    Deprecated(Option<String>),
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    /// The `reason` argument passed to `@deprecated`, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => reason.as_deref(),
            Self::NotDeprecated => None,
        }
    }
}

impl std::convert::From<&Vec<ast::schema::Directive>> for DeprecationState {
    fn from(value: &Vec<ast::schema::Directive>) -> DeprecationState {
        let directive = value.iter().find(|directive| {
            directive.name == "deprecated"
        });
        match directive {
            Some(directive) => {
                let reason = directive.arguments.iter()
                    .find(|(arg_name, _)| arg_name == "reason")
                    .and_then(|(_, value)| match value {
                        ast::schema::Value::String(reason) => Some(reason.to_owned()),
                        _ => None,
                    });
                DeprecationState::Deprecated(reason)
            },
            None => DeprecationState::NotDeprecated,
        }
    }
}
