use crate::ReadContentError;
use crate::read_content;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, CustomizedOperationsError>;

const OPERATION_KEYWORDS: [&str; 2] = ["query ", "mutation "];

/// Collects the names of operations a user has already written by hand, so
/// that generation can leave them alone.
///
/// Every file at or below `dir` is scanned with [`parse_operation_names`]. A
/// missing directory yields an empty set; any other failure to walk or read
/// it is an error.
pub fn load_customized_operation_names(dir: &Path) -> Result<HashSet<String>> {
    if !dir.exists() {
        log::debug!(
            "Customized operations directory {dir:#?} does not exist; \
            nothing to exclude."
        );
        return Ok(HashSet::new());
    }

    let mut names = HashSet::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|err| CustomizedOperationsError::WalkError {
            err: Box::new(err),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let content = read_content(entry.path())
            .map_err(|err| CustomizedOperationsError::ReadError(Box::new(err)))?;
        for name in parse_operation_names(content.as_str()) {
            log::trace!("Found customized operation `{name}` in {:#?}.", entry.path());
            names.insert(name);
        }
    }

    log::debug!("Found {} customized operations.", names.len());
    Ok(names)
}

/// Extracts operation names from lines starting with `query ` or
/// `mutation `.
///
/// The name is the first whitespace-delimited token after the keyword, cut at
/// the first `(` or `{`, so both `query user($id: ID!){` and `query viewer{`
/// are recognized.
pub fn parse_operation_names(content: &str) -> Vec<String> {
    content.lines()
        .filter_map(|line| {
            OPERATION_KEYWORDS.iter()
                .find_map(|keyword| line.strip_prefix(keyword))
        })
        .filter_map(|rest| rest.split_whitespace().next())
        .filter_map(|token| token.split(['(', '{']).next())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Error)]
pub enum CustomizedOperationsError {
    #[error("Failed to read customized operations: {0}")]
    ReadError(Box<ReadContentError>),

    #[error("Failed to scan customized operations directory: {err}")]
    WalkError {
        err: Box<walkdir::Error>,
    },
}
