use crate::generator::Generator;
use crate::generator::GeneratorConfig;
use crate::generator::tests::test_utils::build_schema;
use crate::operation::OperationKind;
use proptest::prelude::*;
use std::collections::HashSet;

const ARGUMENTS: [(&str, &str); 3] = [
    ("id", "ID!"),
    ("first", "Int"),
    ("filter", "[String!]"),
];

/// (target, is_list, argument) per field, per type. A target of 0 is a
/// scalar; anything else points (modulo the type count) at another type.
type SchemaShape = Vec<Vec<(usize, bool, Option<usize>)>>;

fn schema_shape() -> impl Strategy<Value = SchemaShape> {
    prop::collection::vec(
        prop::collection::vec(
            (0usize..5, any::<bool>(), prop::option::of(0usize..ARGUMENTS.len())),
            1..4,
        ),
        1..5,
    )
}

fn type_name(idx: usize) -> String {
    if idx == 0 {
        "Query".to_string()
    } else {
        format!("T{idx}")
    }
}

fn render_sdl(shape: &SchemaShape) -> String {
    let mut sdl = String::new();
    for (type_idx, fields) in shape.iter().enumerate() {
        sdl.push_str(format!("type {} {{\n", type_name(type_idx)).as_str());
        for (field_idx, (target, is_list, argument)) in fields.iter().enumerate() {
            let result_type =
                if *target == 0 {
                    "String".to_string()
                } else {
                    type_name((target - 1) % shape.len())
                };
            let result_type =
                if *is_list {
                    format!("[{result_type}!]")
                } else {
                    result_type
                };
            let arguments = argument.as_ref()
                .map(|idx| format!("({}: {})", ARGUMENTS[*idx].0, ARGUMENTS[*idx].1))
                .unwrap_or_default();
            sdl.push_str(
                format!("  f{field_idx}{arguments}: {result_type}\n").as_str(),
            );
        }
        sdl.push_str("}\n");
    }
    sdl
}

/// Splits `query name($a: T, $b: U){` into `["a", "b"]`.
fn declared_variables(header: &str) -> Vec<String> {
    let Some(start) = header.find('(') else {
        return vec![];
    };
    let Some(end) = header.rfind(')') else {
        return vec![];
    };
    header[start + 1..end]
        .split(", ")
        .filter_map(|definition| definition.split(':').next())
        .map(|name| name.trim_start_matches('$').to_string())
        .collect()
}

fn used_variables(body: &str) -> Vec<String> {
    body.split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
                .collect()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn documents_are_well_formed(shape in schema_shape(), depth_limit in 0usize..6) {
        let schema = build_schema(render_sdl(&shape).as_str());
        let config = GeneratorConfig {
            depth_limit,
            ..Default::default()
        };
        let documents = Generator::new(&schema, config, HashSet::new())
            .generate_kind(OperationKind::Query)
            .unwrap();

        for document in documents {
            let (header, body) = document.content.split_once('\n').unwrap();

            let declared = declared_variables(header);
            let declared_set: HashSet<&String> = declared.iter().collect();
            prop_assert_eq!(declared.len(), declared_set.len());
            for used in used_variables(body) {
                prop_assert!(declared_set.contains(&used), "undeclared ${}", used);
            }

            let lines: Vec<&str> = document.content.lines().collect();
            for pair in lines.windows(2) {
                prop_assert!(
                    !(pair[0].ends_with('{') && pair[1].trim() == "}"),
                    "empty selection set in:\n{}",
                    document.content,
                );
            }

            // Selection lines are indented four spaces per level; the deepest
            // composite sits at `depth_limit`, its leaves one level below.
            let deepest_indent = lines.iter()
                .map(|line| line.len() - line.trim_start().len())
                .max()
                .unwrap_or(0);
            prop_assert!(deepest_indent <= 4 * (depth_limit + 1));
        }
    }

    #[test]
    fn cycles_terminate_without_a_depth_limit(shape in schema_shape()) {
        let schema = build_schema(render_sdl(&shape).as_str());
        let config = GeneratorConfig {
            depth_limit: usize::MAX,
            ..Default::default()
        };
        let result = Generator::new(&schema, config, HashSet::new())
            .generate_kind(OperationKind::Query);

        prop_assert!(result.is_ok());
    }

    #[test]
    fn field_count_grows_with_depth_limit(shape in schema_shape()) {
        let schema = build_schema(render_sdl(&shape).as_str());
        let mut previous_count = 0;
        for depth_limit in 0..5 {
            let config = GeneratorConfig {
                depth_limit,
                ..Default::default()
            };
            let count: usize = Generator::new(&schema, config, HashSet::new())
                .generate_kind(OperationKind::Query)
                .unwrap()
                .iter()
                .map(|document| document.content.lines().count())
                .sum();
            prop_assert!(count >= previous_count);
            previous_count = count;
        }
    }
}
