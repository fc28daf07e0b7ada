use crate::generator::GeneratorConfig;
use crate::generator::VariableRegistry;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceType;
use std::collections::VecDeque;
use thiserror::Error;

type Result<T> = std::result::Result<T, QueryBuildError>;

const INDENT: &str = "    ";

/// Union member selections sit two levels below the union field (one level
/// for the `... on Member` fragment, one for the member's fields). Depth
/// checks beneath a union discount this synthetic level.
const UNION_DEPTH_STEP: usize = 2;

/// The selection built for one root field, along with every variable its
/// arguments introduced.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltSelection<'schema> {
    /// The rendered field selection, or `None` if the field was pruned or
    /// had nothing left to select.
    pub fragment: Option<String>,
    pub variables: VariableRegistry<'schema>,
}

/// Builds the selection tree beneath a root field.
///
/// Every reachable field is selected, subject to:
///
/// * `depth_limit`: a composite or union field nested deeper than the limit
///   is omitted;
/// * cycle pruning: a `Type.field` edge already expanded on the path from the
///   root is not expanded again (unless `include_cross_references` is set);
/// * deprecation: deprecated fields are skipped unless
///   `include_deprecated_fields` is set.
///
/// A composite or union field whose children were all omitted is omitted as
/// well, so the output never contains an empty selection set.
pub struct QueryBuilder<'schema> {
    config: &'schema GeneratorConfig,
    schema: &'schema Schema,
}
impl<'schema> QueryBuilder<'schema> {
    pub fn build(
        &self,
        root_type: &'schema ObjectOrInterfaceType,
        field_name: &str,
    ) -> Result<BuiltSelection<'schema>> {
        let field = root_type.fields().get(field_name).ok_or_else(
            || QueryBuildError::UndefinedField {
                field_name: field_name.to_string(),
                parent_type_name: root_type.name().to_string(),
            },
        )?;

        let mut traversal = Traversal {
            config: self.config,
            schema: self.schema,
            stack: vec![],
            variables: VariableRegistry::new(),
        };
        let fragment = traversal.run(FieldRequest {
            depth: 1,
            field,
            from_union: false,
            parent: root_type,
            slot: Slot::Direct,
        })?;

        Ok(BuiltSelection {
            fragment,
            variables: traversal.variables,
        })
    }

    pub fn new(schema: &'schema Schema, config: &'schema GeneratorConfig) -> Self {
        Self {
            config,
            schema,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryBuildError {
    #[error("`{parent_type_name}` has no field named `{field_name}`")]
    UndefinedField {
        field_name: String,
        parent_type_name: String,
    },

    #[error(
        "`{parent_type_name}.{field_name}` refers to `{type_name}`, which is \
        not defined in the schema"
    )]
    UndefinedType {
        field_name: String,
        parent_type_name: String,
        type_name: String,
    },
}

/// Where a child's rendered selection lands within its parent frame.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Direct,
    Member(usize),
}

#[derive(Debug)]
struct FieldRequest<'schema> {
    depth: usize,
    field: &'schema Field,
    from_union: bool,
    parent: &'schema ObjectOrInterfaceType,
    slot: Slot,
}

#[derive(Debug)]
struct MemberSelections<'schema> {
    selections: Vec<String>,
    type_name: &'schema str,
}

#[derive(Debug)]
enum FrameBody<'schema> {
    Fields(Vec<String>),
    Union(Vec<MemberSelections<'schema>>),
}

/// An open composite or union field whose children are still being built.
#[derive(Debug)]
struct Frame<'schema> {
    body: FrameBody<'schema>,
    depth: usize,
    edge_key: String,
    field: &'schema Field,
    pending: VecDeque<FieldRequest<'schema>>,
    slot: Slot,
}
impl Frame<'_> {
    fn record(&mut self, slot: Slot, rendered: String) {
        match (&mut self.body, slot) {
            (FrameBody::Fields(selections), _) => selections.push(rendered),
            (FrameBody::Union(members), Slot::Member(idx)) =>
                members[idx].selections.push(rendered),
            (FrameBody::Union(_), Slot::Direct) =>
                unreachable!("union frames only schedule member selections"),
        }
    }
}

enum Opened<'schema> {
    Frame(Frame<'schema>),
    Leaf(String),
    Pruned,
}

/// Per-document traversal state.
///
/// The frame stack doubles as the current path from the root: a frame is
/// only ever on the stack while one of its descendants is being built, so
/// the cycle check scans the stack rather than a separately maintained
/// visited set. Sibling subtrees therefore never observe each other's edges.
struct Traversal<'schema> {
    config: &'schema GeneratorConfig,
    schema: &'schema Schema,
    stack: Vec<Frame<'schema>>,
    variables: VariableRegistry<'schema>,
}
impl<'schema> Traversal<'schema> {
    fn finish(&mut self, frame: Frame<'schema>) -> Option<String> {
        let body = match frame.body {
            FrameBody::Fields(selections) => {
                if selections.is_empty() {
                    None
                } else {
                    Some(selections.join("\n"))
                }
            },

            FrameBody::Union(members) => {
                let fragment_indent = INDENT.repeat(frame.depth + 1);
                let fragments: Vec<String> = members.into_iter()
                    .filter(|member| !member.selections.is_empty())
                    .map(|member| format!(
                        "{fragment_indent}... on {} {{\n{}\n{fragment_indent}}}",
                        member.type_name,
                        member.selections.join("\n"),
                    ))
                    .collect();
                if fragments.is_empty() {
                    None
                } else {
                    Some(format!(
                        "{fragment_indent}__typename\n{}",
                        fragments.join("\n"),
                    ))
                }
            },
        };

        match body {
            Some(body) => Some(self.render_field(frame.field, frame.depth, Some(body))),
            None => {
                log::trace!(
                    "Omitting `{}`: nothing left to select beneath it.",
                    frame.edge_key,
                );
                None
            },
        }
    }

    fn is_pruned(&self, depth: usize, from_union: bool, edge_key: &str) -> bool {
        let effective_depth =
            if from_union {
                depth.saturating_sub(UNION_DEPTH_STEP)
            } else {
                depth
            };
        if effective_depth > self.config.depth_limit {
            log::trace!("Pruning `{edge_key}`: depth limit reached.");
            return true;
        }

        if !self.config.include_cross_references
            && self.stack.iter().any(|frame| frame.edge_key == edge_key) {
            log::trace!("Pruning `{edge_key}`: already expanded on this path.");
            return true;
        }

        false
    }

    fn open(&mut self, request: FieldRequest<'schema>) -> Result<Opened<'schema>> {
        let FieldRequest { depth, field, from_union, parent, slot } = request;
        let type_name = field.type_annotation().innermost_type_name();
        let result_type = self.schema.get_type(type_name).ok_or_else(
            || QueryBuildError::UndefinedType {
                field_name: field.name().to_string(),
                parent_type_name: parent.name().to_string(),
                type_name: type_name.to_string(),
            },
        )?;

        if let GraphQLType::Enum(_)
            | GraphQLType::InputObject(_)
            | GraphQLType::Scalar(_) = result_type {
            return Ok(Opened::Leaf(self.render_field(field, depth, None)));
        }

        let edge_key = format!("{}To{}", parent.name(), field.name());
        if self.is_pruned(depth, from_union, edge_key.as_str()) {
            return Ok(Opened::Pruned);
        }

        let mut pending = VecDeque::new();
        let body = match result_type {
            GraphQLType::Union(union_type) => {
                let mut members = vec![];
                for (idx, member_name) in union_type.member_type_names().iter().enumerate() {
                    let member_type = self.schema.get_type(member_name)
                        .and_then(|member_type| member_type.as_object_or_interface())
                        .ok_or_else(|| QueryBuildError::UndefinedType {
                            field_name: field.name().to_string(),
                            parent_type_name: union_type.name().to_string(),
                            type_name: member_name.to_string(),
                        })?;
                    members.push(MemberSelections {
                        selections: vec![],
                        type_name: member_type.name(),
                    });
                    pending.extend(
                        self.selectable_fields(member_type).map(|child| FieldRequest {
                            depth: depth + UNION_DEPTH_STEP,
                            field: child,
                            from_union: true,
                            parent: member_type,
                            slot: Slot::Member(idx),
                        }),
                    );
                }
                FrameBody::Union(members)
            },

            fielded_type => {
                if let Some(fielded_type) = fielded_type.as_object_or_interface() {
                    pending.extend(
                        self.selectable_fields(fielded_type).map(|child| FieldRequest {
                            depth: depth + 1,
                            field: child,
                            from_union,
                            parent: fielded_type,
                            slot: Slot::Direct,
                        }),
                    );
                }
                FrameBody::Fields(vec![])
            },
        };

        Ok(Opened::Frame(Frame {
            body,
            depth,
            edge_key,
            field,
            pending,
            slot,
        }))
    }

    fn record(&mut self, slot: Slot, rendered: String) {
        if let Some(parent) = self.stack.last_mut() {
            parent.record(slot, rendered);
        }
    }

    /// Renders `field` at `depth`, registering its arguments as variables.
    ///
    /// Arguments are registered here rather than when the field is opened, so
    /// a field's descendants claim their variable names before the field
    /// itself does and omitted fields never claim any.
    fn render_field(
        &mut self,
        field: &'schema Field,
        depth: usize,
        body: Option<String>,
    ) -> String {
        let indent = INDENT.repeat(depth);
        let mut rendered = format!("{indent}{}", field.name());

        if !field.parameters().is_empty() {
            let args = field.parameters()
                .values()
                .map(|param| {
                    let variable_name = self.variables.register(param);
                    format!("{}: ${variable_name}", param.name())
                })
                .collect::<Vec<_>>()
                .join(", ");
            rendered.push('(');
            rendered.push_str(args.as_str());
            rendered.push(')');
        }

        if let Some(body) = body {
            rendered.push_str(format!("{{\n{body}\n{indent}}}").as_str());
        }

        rendered
    }

    fn run(&mut self, root: FieldRequest<'schema>) -> Result<Option<String>> {
        match self.open(root)? {
            Opened::Frame(frame) => self.stack.push(frame),
            Opened::Leaf(rendered) => return Ok(Some(rendered)),
            Opened::Pruned => return Ok(None),
        }

        loop {
            let next_request = self.stack.last_mut()
                .and_then(|frame| frame.pending.pop_front());
            if let Some(request) = next_request {
                let slot = request.slot;
                match self.open(request)? {
                    Opened::Frame(frame) => self.stack.push(frame),
                    Opened::Leaf(rendered) => self.record(slot, rendered),
                    Opened::Pruned => (),
                }
                continue;
            }

            let Some(frame) = self.stack.pop() else {
                return Ok(None);
            };
            let slot = frame.slot;
            let rendered = self.finish(frame);
            if self.stack.is_empty() {
                return Ok(rendered);
            }
            if let Some(rendered) = rendered {
                self.record(slot, rendered);
            }
        }
    }

    fn selectable_fields(
        &self,
        fielded_type: &'schema ObjectOrInterfaceType,
    ) -> impl Iterator<Item = &'schema Field> {
        let include_deprecated_fields = self.config.include_deprecated_fields;
        fielded_type.fields()
            .values()
            .filter(move |field| include_deprecated_fields || !field.is_deprecated())
    }
}
