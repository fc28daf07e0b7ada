use crate::generator::DocumentAssembler;
use crate::generator::FieldSelector;
use crate::generator::GeneratorConfig;
use crate::generator::QueryBuildError;
use crate::generator::QueryBuilder;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use rayon::prelude::*;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// A fully assembled operation document for one root field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub content: String,
    pub kind: OperationKind,
    pub name: String,
}

/// Generates a document for every selected field of every root operation
/// type in a [`Schema`].
pub struct Generator<'schema> {
    config: GeneratorConfig,
    customized_operations: HashSet<String>,
    schema: &'schema Schema,
}
impl<'schema> Generator<'schema> {
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the documents for all root operation kinds, queries first,
    /// then mutations, then subscriptions. Within a kind, documents follow
    /// the order fields are defined on the root type.
    ///
    /// Documents are independent of one another and are built in parallel.
    pub fn generate(&self) -> Result<Vec<GeneratedDocument>> {
        let mut documents = vec![];
        for kind in OperationKind::ALL {
            documents.append(&mut self.generate_kind(kind)?);
        }
        Ok(documents)
    }

    pub fn generate_document(
        &self,
        kind: OperationKind,
        root_type: &ObjectOrInterfaceType,
        field: &Field,
    ) -> Result<Option<GeneratedDocument>> {
        let built = QueryBuilder::new(self.schema, &self.config)
            .build(root_type, field.name())?;

        let Some(fragment) = built.fragment else {
            log::warn!(
                "Skipping `{}.{}`: no selectable fields within the depth limit.",
                root_type.name(),
                field.name(),
            );
            return Ok(None);
        };

        Ok(Some(GeneratedDocument {
            content: DocumentAssembler::assemble(
                kind,
                field.name(),
                fragment.as_str(),
                &built.variables,
            ),
            kind,
            name: field.name().to_string(),
        }))
    }

    pub fn generate_kind(&self, kind: OperationKind) -> Result<Vec<GeneratedDocument>> {
        let Some(root_type) = self.schema.root_operation_type(kind) else {
            log::debug!("Schema has no {kind} root type; skipping.");
            return Ok(vec![]);
        };

        let selector = FieldSelector::new(&self.config, &self.customized_operations);
        let fields = selector.select(root_type);
        log::debug!(
            "Generating {} {kind} documents from `{}`.",
            fields.len(),
            root_type.name(),
        );

        let documents = fields.par_iter()
            .map(|field| self.generate_document(kind, root_type, field))
            .collect::<Result<Vec<_>>>()?;
        Ok(documents.into_iter().flatten().collect())
    }

    pub fn new(
        schema: &'schema Schema,
        config: GeneratorConfig,
        customized_operations: HashSet<String>,
    ) -> Self {
        Self {
            config,
            customized_operations,
            schema,
        }
    }
}
