use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::read_content;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceType;
use crate::types::ScalarType;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::types::UnionType;
use crate::ReadContentError;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema].
///
/// SDL from any number of files or strings may be loaded before calling
/// [`SchemaBuilder::build()`]. Type extensions are merged after all sources
/// are loaded, so an extension may appear before the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    root_types: IndexMap<OperationKind, (String, loc::FilePosition)>,
    str_load_counter: u16,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_scalars();

        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(file_path.as_path(), ext)?;
        }

        self.check_type_references()?;

        Ok(Schema {
            mutation_type: self.resolve_root_type(OperationKind::Mutation)?,
            query_type: self.resolve_root_type(OperationKind::Query)?,
            subscription_type: self.resolve_root_type(OperationKind::Subscription)?,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            root_types: IndexMap::new(),
            str_load_counter: 0,
            types: IndexMap::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            log::debug!("Loading schema from {file_path:#?}.");
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn check_type_references(&self) -> Result<()> {
        for graphql_type in self.types.values() {
            if let Some(fielded_type) = graphql_type.as_object_or_interface() {
                for field in fielded_type.fields().values() {
                    self.check_type_reference(
                        field.type_annotation().innermost_type_name(),
                        field.def_location(),
                    )?;
                    for param in field.parameters().values() {
                        self.check_type_reference(
                            param.type_annotation().innermost_type_name(),
                            param.def_location(),
                        )?;
                    }
                }
            }

            if let GraphQLType::Union(union_type) = graphql_type {
                for member_name in union_type.member_type_names() {
                    match self.types.get(member_name) {
                        Some(GraphQLType::Object(_)) => (),
                        Some(non_object_type) =>
                            return Err(SchemaBuildError::InvalidUnionMemberType {
                                member_type_kind: non_object_type.type_kind(),
                                member_type_name: member_name.to_string(),
                                union_type_name: union_type.name().to_string(),
                            }),
                        None =>
                            return Err(SchemaBuildError::UndefinedUnionMember {
                                member_type_name: member_name.to_string(),
                                union_type_name: union_type.name().to_string(),
                            }),
                    }
                }
            }
        }
        Ok(())
    }

    fn check_type_reference(
        &self,
        type_name: &str,
        location: &loc::FilePosition,
    ) -> Result<()> {
        if self.types.contains_key(type_name) {
            Ok(())
        } else {
            Err(SchemaBuildError::UndefinedTypeReference {
                location: location.to_owned(),
                type_name: type_name.to_string(),
            })
        }
    }

    fn inject_missing_builtin_scalars(&mut self) {
        for scalar_name in BUILTIN_SCALAR_NAMES {
            if !self.types.contains_key(scalar_name) {
                self.types.insert(
                    scalar_name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(scalar_name)),
                );
            }
        }
    }

    fn insert_type(
        &mut self,
        file_path: &Path,
        position: graphql_parser::Pos,
        graphql_type: GraphQLType,
    ) -> Result<()> {
        let type_name = graphql_type.name().to_string();
        if let Some(existing_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: existing_type.def_location().to_owned(),
                def2: loc::FilePosition::from_pos(file_path, position),
                type_name,
            });
        }
        log::trace!("Defined `{type_name}` ({}).", graphql_type.type_kind());
        self.types.insert(type_name, graphql_type);
        Ok(())
    }

    fn merge_fields(
        file_path: &Path,
        fielded_type: &mut ObjectOrInterfaceType,
        ast_fields: &[ast::schema::Field],
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field = Field::from_ast(file_path, fielded_type.name(), ast_field);
            if let Some(existing_field) = fielded_type.fields.get(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    def1: existing_field.def_location().to_owned(),
                    def2: field.def_location().to_owned(),
                    field_name: field.name().to_string(),
                    type_name: fielded_type.name().to_string(),
                });
            }
            fielded_type.fields.insert(field.name().to_string(), field);
        }
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position, expected_kind) = match &ext {
            TypeExtension::Interface(ext) =>
                (ext.name.as_str(), ext.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(ext) =>
                (ext.name.as_str(), ext.position, GraphQLTypeKind::Object),
            TypeExtension::Union(ext) =>
                (ext.name.as_str(), ext.position, GraphQLTypeKind::Union),
            TypeExtension::Enum(_)
                | TypeExtension::InputObject(_)
                | TypeExtension::Scalar(_) => {
                log::trace!(
                    "Ignoring extension of a type that is never selected \
                    ({file_path:#?})."
                );
                return Ok(());
            },
        };
        let extension_location = loc::FilePosition::from_pos(file_path, position);

        let Some(extended_type) = self.types.get_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                extension_location,
                type_name: type_name.to_string(),
            });
        };
        if extended_type.type_kind() != expected_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                extension_location,
                type_kind: extended_type.type_kind(),
                type_name: type_name.to_string(),
            });
        }

        match (extended_type, &ext) {
            (GraphQLType::Interface(fielded_type), TypeExtension::Interface(ext)) =>
                Self::merge_fields(file_path, fielded_type, &ext.fields),

            (GraphQLType::Object(fielded_type), TypeExtension::Object(ext)) =>
                Self::merge_fields(file_path, fielded_type, &ext.fields),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                for member_name in &ext.types {
                    if union_type.members.contains(member_name) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            location: extension_location,
                            member_type_name: member_name.to_string(),
                            union_type_name: union_type.name().to_string(),
                        });
                    }
                    union_type.members.push(member_name.to_string());
                }
                Ok(())
            },

            _ => Ok(()),
        }
    }

    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<String>> {
        if let Some((type_name, location)) = self.root_types.get(&kind) {
            return match self.types.get(type_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(type_name.to_string())),
                Some(non_object_type) => Err(SchemaBuildError::InvalidOperationType {
                    location: location.to_owned(),
                    operation_kind: kind,
                    type_kind: non_object_type.type_kind(),
                    type_name: type_name.to_string(),
                }),
                None => Err(SchemaBuildError::UndefinedTypeReference {
                    location: location.to_owned(),
                    type_name: type_name.to_string(),
                }),
            };
        }

        if !self.root_types.is_empty() {
            log::debug!("No {kind} root type listed in the schema definition.");
            return Ok(None);
        }

        // Without an explicit `schema { ... }` mapping the root type is the
        // object type whose name matches the operation keyword, ignoring case.
        let matched_type = self.types.values()
            .filter(|graphql_type| matches!(graphql_type, GraphQLType::Object(_)))
            .map(|graphql_type| graphql_type.name())
            .find(|name| OperationKind::from_root_type_name(name) == Some(kind));
        match matched_type {
            Some(type_name) => {
                log::debug!("Using `{type_name}` as the {kind} root type.");
                Ok(Some(type_name.to_string()))
            },
            None => {
                log::debug!("No {kind} root type defined.");
                Ok(None)
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = loc::FilePosition::from_pos(file_path, schema_def.position);
        let operation_types = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];
        for (kind, type_name) in operation_types {
            let Some(type_name) = type_name else {
                continue
            };
            if let Some((_, def1)) = self.root_types.get(&kind) {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    def1: def1.to_owned(),
                    def2: location,
                    operation_kind: kind,
                });
            }
            self.root_types.insert(kind, (type_name, location.clone()));
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let def_location = |pos| loc::SchemaDefLocation::Schema(
            loc::FilePosition::from_pos(file_path, pos),
        );
        match type_def {
            TypeDefinition::Enum(def) => self.insert_type(
                file_path,
                def.position,
                GraphQLType::Enum(EnumType {
                    def_location: def_location(def.position),
                    name: def.name,
                    values: def.values.into_iter()
                        .map(|value| value.name)
                        .collect(),
                }),
            ),

            TypeDefinition::InputObject(def) => self.insert_type(
                file_path,
                def.position,
                GraphQLType::InputObject(InputObjectType {
                    def_location: def_location(def.position),
                    name: def.name,
                }),
            ),

            TypeDefinition::Interface(def) => {
                let mut fielded_type = ObjectOrInterfaceType {
                    def_location: def_location(def.position),
                    description: def.description,
                    fields: IndexMap::new(),
                    name: def.name,
                };
                Self::merge_fields(file_path, &mut fielded_type, &def.fields)?;
                self.insert_type(
                    file_path,
                    def.position,
                    GraphQLType::Interface(fielded_type),
                )
            },

            TypeDefinition::Object(def) => {
                let mut fielded_type = ObjectOrInterfaceType {
                    def_location: def_location(def.position),
                    description: def.description,
                    fields: IndexMap::new(),
                    name: def.name,
                };
                Self::merge_fields(file_path, &mut fielded_type, &def.fields)?;
                self.insert_type(
                    file_path,
                    def.position,
                    GraphQLType::Object(fielded_type),
                )
            },

            TypeDefinition::Scalar(def) => self.insert_type(
                file_path,
                def.position,
                GraphQLType::Scalar(ScalarType {
                    def_location: def_location(def.position),
                    name: def.name,
                }),
            ),

            TypeDefinition::Union(def) => {
                let mut members: Vec<String> = vec![];
                for member_name in def.types {
                    if members.contains(&member_name) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            location: loc::FilePosition::from_pos(
                                file_path,
                                def.position,
                            ),
                            member_type_name: member_name,
                            union_type_name: def.name,
                        });
                    }
                    members.push(member_name);
                }
                self.insert_type(
                    file_path,
                    def.position,
                    GraphQLType::Union(UnionType {
                        def_location: def_location(def.position),
                        description: def.description,
                        members,
                        name: def.name,
                    }),
                )
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple fields named `{field_name}` defined on `{type_name}`")]
    DuplicateFieldDefinition {
        def1: loc::FilePosition,
        def2: loc::FilePosition,
        field_name: String,
        type_name: String,
    },

    #[error("Multiple {operation_kind} root types defined")]
    DuplicateOperationDefinition {
        def1: loc::FilePosition,
        def2: loc::FilePosition,
        operation_kind: OperationKind,
    },

    #[error("Multiple types named `{type_name}` defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        def1: loc::SchemaDefLocation,
        def2: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "`{member_type_name}` is listed more than once as a member of the \
        `{union_type_name}` union"
    )]
    DuplicateUnionMember {
        location: loc::FilePosition,
        member_type_name: String,
        union_type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, but no such type is defined")]
    ExtensionOfUndefinedType {
        extension_location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` with an extension of a different \
        kind than its {type_kind} definition"
    )]
    InvalidExtensionType {
        extension_location: loc::FilePosition,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "The {operation_kind} root type must be an object type, but \
        `{type_name}` is a {type_kind} type"
    )]
    InvalidOperationType {
        location: loc::FilePosition,
        operation_kind: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Union members must be object types, but `{member_type_name}` (a \
        member of `{union_type_name}`) is a {member_type_kind} type"
    )]
    InvalidUnionMemberType {
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error("Error parsing schema from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Error loading schema file: {0}")]
    SchemaFileReadError(Box<ReadContentError>),

    #[error(
        "`{union_type_name}` lists `{member_type_name}` as a member, but no \
        such type is defined"
    )]
    UndefinedUnionMember {
        member_type_name: String,
        union_type_name: String,
    },

    #[error("Reference to undefined type `{type_name}` at {location}")]
    UndefinedTypeReference {
        location: loc::FilePosition,
        type_name: String,
    },
}
