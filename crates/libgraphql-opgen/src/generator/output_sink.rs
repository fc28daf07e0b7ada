use crate::generator::GeneratedDocument;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, OutputError>;

/// Writes generated documents to `<dest_dir>/<kind dir>/<name>.<ext>`.
///
/// The destination is wiped when the sink is prepared so that documents for
/// fields which no longer exist do not linger from an earlier run.
#[derive(Debug)]
pub struct OutputSink {
    dest_dir: PathBuf,
    file_extension: String,
}
impl OutputSink {
    pub fn dest_dir(&self) -> &Path {
        self.dest_dir.as_path()
    }

    /// Removes `dest_dir` (if present) and recreates it empty.
    pub fn prepare(
        dest_dir: impl AsRef<Path>,
        file_extension: &str,
    ) -> Result<Self> {
        let dest_dir = dest_dir.as_ref().to_path_buf();
        if dest_dir.exists() {
            log::debug!("Clearing {dest_dir:#?}.");
            std::fs::remove_dir_all(dest_dir.as_path())
                .map_err(|err| OutputError::ClearDirError {
                    dir_path: dest_dir.to_owned(),
                    err,
                })?;
        }
        std::fs::create_dir_all(dest_dir.as_path())
            .map_err(|err| OutputError::CreateDirError {
                dir_path: dest_dir.to_owned(),
                err,
            })?;

        Ok(Self {
            dest_dir,
            file_extension: file_extension.trim_start_matches('.').to_string(),
        })
    }

    /// Writes `document` and returns the path it was written to.
    pub fn write(&self, document: &GeneratedDocument) -> Result<PathBuf> {
        let kind_dir = self.dest_dir.join(document.kind.dir_name());
        std::fs::create_dir_all(kind_dir.as_path())
            .map_err(|err| OutputError::CreateDirError {
                dir_path: kind_dir.to_owned(),
                err,
            })?;

        let file_path = kind_dir.join(format!(
            "{}.{}",
            document.name,
            self.file_extension,
        ));
        std::fs::write(file_path.as_path(), document.content.as_bytes())
            .map_err(|err| OutputError::FileWriteError {
                file_path: file_path.to_owned(),
                err,
            })?;
        log::trace!("Wrote {file_path:#?}.");

        Ok(file_path)
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to clear output directory {dir_path:?}: {err}")]
    ClearDirError {
        dir_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to create output directory {dir_path:?}: {err}")]
    CreateDirError {
        dir_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to write {file_path:?}: {err}")]
    FileWriteError {
        file_path: PathBuf,
        err: std::io::Error,
    },
}
