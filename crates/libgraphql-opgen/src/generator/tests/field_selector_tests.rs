use crate::generator::ExclusionReason;
use crate::generator::FieldSelector;
use crate::generator::GeneratorConfig;
use crate::generator::tests::test_utils::build_schema;
use crate::operation::OperationKind;
use crate::schema::Schema;
use std::collections::HashSet;

const AUDIENCE_SCHEMA: &str = concat!(
    "type Query {\n",
    "  \"admin\"\n",
    "  adminStats: Int\n",
    "  publicStats: Int\n",
    "  \"website\"\n",
    "  landing: Int\n",
    "  \"mobile-home\"\n",
    "  mobileHome: Int\n",
    "  \"\"\"\n",
    "  shared\n",
    "  \"\"\"\n",
    "  sharedThing: Int\n",
    "  oldStats: Int @deprecated(reason: \"use publicStats\")\n",
    "}\n",
);

fn selected_names(
    schema: &Schema,
    config: &GeneratorConfig,
    customized: &HashSet<String>,
) -> Vec<String> {
    let root_type = schema.root_operation_type(OperationKind::Query).unwrap();
    FieldSelector::new(config, customized)
        .select(root_type)
        .into_iter()
        .map(|field| field.name().to_string())
        .collect()
}

#[test]
fn default_config_skips_admin_website_and_deprecated() {
    let schema = build_schema(AUDIENCE_SCHEMA);
    let names = selected_names(
        &schema,
        &GeneratorConfig::default(),
        &HashSet::new(),
    );

    assert_eq!(names, vec!["publicStats", "mobileHome", "sharedThing"]);
}

#[test]
fn each_audience_flag_keeps_only_its_fields() {
    let schema = build_schema(AUDIENCE_SCHEMA);
    let customized = HashSet::new();

    let admin = GeneratorConfig { is_admin: true, ..Default::default() };
    assert_eq!(selected_names(&schema, &admin, &customized), vec!["adminStats"]);

    let website = GeneratorConfig { is_website: true, ..Default::default() };
    assert_eq!(selected_names(&schema, &website, &customized), vec!["landing"]);

    let mobile = GeneratorConfig { is_mobile: true, ..Default::default() };
    assert_eq!(selected_names(&schema, &mobile, &customized), vec!["mobileHome"]);

    let shared = GeneratorConfig { is_shared: true, ..Default::default() };
    assert_eq!(selected_names(&schema, &shared, &customized), vec!["sharedThing"]);
}

#[test]
fn audience_flags_combine() {
    let schema = build_schema(AUDIENCE_SCHEMA);
    let config = GeneratorConfig {
        is_admin: true,
        is_mobile: true,
        ..Default::default()
    };

    assert!(selected_names(&schema, &config, &HashSet::new()).is_empty());
}

#[test]
fn customized_operations_are_skipped() {
    let schema = build_schema(AUDIENCE_SCHEMA);
    let customized = HashSet::from(["publicStats".to_string()]);
    let names = selected_names(&schema, &GeneratorConfig::default(), &customized);

    assert_eq!(names, vec!["mobileHome", "sharedThing"]);
}

#[test]
fn deprecated_fields_can_be_included() {
    let schema = build_schema(AUDIENCE_SCHEMA);
    let config = GeneratorConfig {
        include_deprecated_fields: true,
        ..Default::default()
    };
    let names = selected_names(&schema, &config, &HashSet::new());

    assert_eq!(names, vec!["publicStats", "mobileHome", "sharedThing", "oldStats"]);
}

#[test]
fn reports_the_first_excluding_rule() {
    let schema = build_schema(AUDIENCE_SCHEMA);
    let root_type = schema.root_operation_type(OperationKind::Query).unwrap();
    let fields = root_type.fields();
    let customized = HashSet::from(["publicStats".to_string()]);

    let default_config = GeneratorConfig::default();
    let selector = FieldSelector::new(&default_config, &customized);
    assert_eq!(
        selector.exclusion_reason(&fields["adminStats"]),
        Some(ExclusionReason::AdminOnly),
    );
    assert_eq!(
        selector.exclusion_reason(&fields["landing"]),
        Some(ExclusionReason::WebsiteOnly),
    );
    assert_eq!(
        selector.exclusion_reason(&fields["publicStats"]),
        Some(ExclusionReason::Customized),
    );
    assert_eq!(
        selector.exclusion_reason(&fields["oldStats"]),
        Some(ExclusionReason::Deprecated),
    );
    assert_eq!(selector.exclusion_reason(&fields["mobileHome"]), None);

    let mobile_config = GeneratorConfig { is_mobile: true, ..Default::default() };
    let selector = FieldSelector::new(&mobile_config, &customized);
    assert_eq!(
        selector.exclusion_reason(&fields["sharedThing"]),
        Some(ExclusionReason::NotMobile),
    );
}
