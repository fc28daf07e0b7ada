use crate::generator::GeneratorConfig;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use std::collections::HashSet;

const ADMIN_TAG: &str = "admin";
const MOBILE_TAG: &str = "mobile";
const SHARED_TAG: &str = "shared";
const WEBSITE_TAG: &str = "website";

/// Why a root field was left out of generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExclusionReason {
    AdminOnly,
    Customized,
    Deprecated,
    NotAdmin,
    NotMobile,
    NotShared,
    NotWebsite,
    WebsiteOnly,
}
impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::AdminOnly => "annotated `admin` but admin mode is off",
            Self::Customized => "listed as a customized operation",
            Self::Deprecated => "deprecated",
            Self::NotAdmin => "admin mode is on but not annotated `admin`",
            Self::NotMobile => "mobile mode is on but not annotated `mobile`",
            Self::NotShared => "shared mode is on but not annotated `shared`",
            Self::NotWebsite => "website mode is on but not annotated `website`",
            Self::WebsiteOnly => "annotated `website` but website mode is off",
        })
    }
}

/// Decides which fields of a root operation type get a generated document.
pub struct FieldSelector<'a> {
    config: &'a GeneratorConfig,
    customized_operations: &'a HashSet<String>,
}
impl<'a> FieldSelector<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        customized_operations: &'a HashSet<String>,
    ) -> Self {
        Self {
            config,
            customized_operations,
        }
    }

    /// Returns the first rule that excludes `field`, or `None` if the field
    /// should be generated.
    pub fn exclusion_reason(&self, field: &Field) -> Option<ExclusionReason> {
        let annotation = field.annotation();
        let tagged = |tag: &str| annotation == Some(tag);

        if self.config.is_admin != tagged(ADMIN_TAG) {
            return Some(if self.config.is_admin {
                ExclusionReason::NotAdmin
            } else {
                ExclusionReason::AdminOnly
            });
        }

        if self.config.is_website != tagged(WEBSITE_TAG) {
            return Some(if self.config.is_website {
                ExclusionReason::NotWebsite
            } else {
                ExclusionReason::WebsiteOnly
            });
        }

        if self.config.is_mobile
            && !annotation.is_some_and(|annot| annot.contains(MOBILE_TAG)) {
            return Some(ExclusionReason::NotMobile);
        }

        if self.config.is_shared && !tagged(SHARED_TAG) {
            return Some(ExclusionReason::NotShared);
        }

        if self.customized_operations.contains(field.name()) {
            return Some(ExclusionReason::Customized);
        }

        if field.is_deprecated() && !self.config.include_deprecated_fields {
            return Some(ExclusionReason::Deprecated);
        }

        None
    }

    /// The fields of `root_type` to generate, in schema order.
    pub fn select<'schema>(
        &self,
        root_type: &'schema ObjectOrInterfaceType,
    ) -> Vec<&'schema Field> {
        root_type.fields()
            .values()
            .filter(|field| match self.exclusion_reason(field) {
                Some(reason) => {
                    log::debug!(
                        "Skipping `{}.{}`: {reason}.",
                        root_type.name(),
                        field.name(),
                    );
                    false
                },
                None => true,
            })
            .collect()
    }
}
