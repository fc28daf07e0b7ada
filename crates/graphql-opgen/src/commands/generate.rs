use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_opgen::generator::Generator;
use libgraphql_opgen::generator::GeneratorConfig;
use libgraphql_opgen::generator::OutputSink;
use libgraphql_opgen::generator::load_customized_operation_names;
use libgraphql_opgen::operation::OperationKind;
use libgraphql_opgen::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Directory of hand-written operations. Root fields whose names \
             match an operation declared in any file beneath it are skipped.",
        long,
    )]
    customized_operations_dir: Option<PathBuf>,

    #[arg(
        default_value_t=GeneratorConfig::DEFAULT_DEPTH_LIMIT,
        help="Maximum nesting level of selections within a document.",
        long,
    )]
    depth_limit: usize,

    #[arg(
        help="Directory the documents are written to. It is cleared before \
             anything is written.",
        long,
        required=true,
    )]
    dest_dir: PathBuf,

    #[arg(
        default_value_t=GeneratorConfig::DEFAULT_FILE_EXTENSION.to_string(),
        help="File extension of the written documents.",
        long,
    )]
    ext: String,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Expand a type's field again even when it was already expanded \
             on the way down. Cycles are then bounded by --depth-limit only.",
        long,
    )]
    include_cross_references: bool,

    #[arg(
        help="Select deprecated fields too.",
        long,
    )]
    include_deprecated_fields: bool,

    #[arg(help="Only generate root fields annotated \"admin\".", long)]
    is_admin: bool,

    #[arg(help="Only generate root fields whose annotation mentions \"mobile\".", long)]
    is_mobile: bool,

    #[arg(help="Only generate root fields annotated \"shared\".", long)]
    is_shared: bool,

    #[arg(help="Only generate root fields annotated \"website\".", long)]
    is_website: bool,

    #[arg(
        help="A GraphQL schema file, or a directory containing GraphQL schema \
             files.",
        long,
        required=true,
    )]
    schema_path: PathBuf,
}
impl GenerateCmd {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            depth_limit: self.depth_limit,
            file_extension: self.ext.to_owned(),
            include_cross_references: self.include_cross_references,
            include_deprecated_fields: self.include_deprecated_fields,
            is_admin: self.is_admin,
            is_mobile: self.is_mobile,
            is_shared: self.is_shared,
            is_website: self.is_website,
        }
    }

    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // An explicitly named file is loaded regardless of its extension.
        if self.schema_path.is_file() {
            return Ok(vec![self.schema_path.to_owned()]);
        }
        if !self.schema_path.is_dir() {
            anyhow::bail!("{:#?} is neither a file nor a directory", self.schema_path);
        }

        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!("Scanning {:#?} for schema files...", self.schema_path);
        let mut file_paths = vec![];
        for entry in WalkDir::new(self.schema_path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!(
                "Failed to scan {:#?} for schema files",
                self.schema_path,
            ))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                && graphql_file_exts.contains(&*ext) {
                log::trace!("Found schema file at {path:#?}.");
                file_paths.push(path.to_path_buf());
            }
        }
        file_paths.sort();

        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found under {:#?} (searched for {}).",
                self.schema_path,
                self.graphql_file_exts.join(", "),
            );
        }
        Ok(file_paths)
    }

    fn generate(&self) -> anyhow::Result<GenerateSummary> {
        let schema_files = self.find_schema_files()?;
        log::debug!("Found {} schema files.", schema_files.len());

        let schema = SchemaBuilder::new()
            .load_files(schema_files.iter().collect::<Vec<_>>())
            .and_then(|builder| builder.build())
            .context("Failed to load schema")?;

        let customized_operations = match &self.customized_operations_dir {
            Some(dir) => load_customized_operation_names(dir.as_path())
                .with_context(|| format!(
                    "Failed to load customized operations from {dir:#?}",
                ))?,
            None => HashSet::new(),
        };

        let generator = Generator::new(&schema, self.config(), customized_operations);
        let documents = generator.generate()
            .context("Failed to build operation documents")?;

        let sink = OutputSink::prepare(
            self.dest_dir.as_path(),
            generator.config().file_extension.as_str(),
        )?;
        let mut summary = GenerateSummary {
            dest_dir: sink.dest_dir().to_path_buf(),
            documents_per_kind: vec![],
            num_schema_files: schema_files.len(),
        };
        for document in &documents {
            sink.write(document)?;
        }
        for kind in OperationKind::ALL {
            let count = documents.iter()
                .filter(|document| document.kind == kind)
                .count();
            summary.documents_per_kind.push((kind, count));
        }

        Ok(summary)
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let result = tokio::task::spawn_blocking(move || self.generate()).await;
        match result {
            Ok(Ok(summary)) => CommandResult::stdout(format_args!(
                "{} {summary}",
                output_utils::GREEN_CHECK,
            )),

            Ok(Err(err)) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Generation task failed: {err}",
                output_utils::RED_X,
            )),
        }
    }
}

#[derive(Debug)]
struct GenerateSummary {
    dest_dir: PathBuf,
    documents_per_kind: Vec<(OperationKind, usize)>,
    num_schema_files: usize,
}
impl std::fmt::Display for GenerateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generated operations in {}:\n  * Loaded {} schema files.",
            self.dest_dir.display(),
            self.num_schema_files,
        )?;
        for (kind, count) in &self.documents_per_kind {
            write!(f, "\n  * Wrote {count} {} documents.", kind.keyword())?;
        }
        Ok(())
    }
}
