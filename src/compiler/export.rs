//! Writing compiled documents to disk.

use std::path::{Path, PathBuf};

use super::CompiledDocument;

/// Content type of exported documents.
pub const CONTENT_TYPE: &str = "text/markdown;charset=utf-8";

/// `<title with whitespace runs replaced by underscores>_<revision>.<extension>`
pub fn export_filename(title: &str, revision: &str, extension: &str) -> String {
    let stem = title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_{revision}.{}", extension.trim_start_matches('.'))
}

/// Write one document into `dir`, creating the directory if needed.
pub fn write_document(
    dir: &Path,
    document: &CompiledDocument,
    extension: &str,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(document.filename(extension));
    std::fs::write(&path, &document.content)?;
    tracing::info!(id = document.definition.id, path = %path.display(), "Exported document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QUALITY_MANUAL;
    use crate::compiler::compile;
    use crate::core::AnswerStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Quality Manual", "Rev 0", "md"), "Quality_Manual_Rev 0.md");
        assert_eq!(
            export_filename("Code of  Conduct and Business Ethics", "Rev 1", ".txt"),
            "Code_of_Conduct_and_Business_Ethics_Rev 1.txt"
        );
    }

    #[test]
    fn test_write_document_creates_dir() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("nested").join("docs");

        let store = AnswerStore::new();
        let doc = CompiledDocument {
            definition: &QUALITY_MANUAL,
            content: compile(&QUALITY_MANUAL, &store),
        };

        let path = write_document(&out_dir, &doc, "md").unwrap();
        assert_eq!(path.file_name().unwrap(), "Quality_Manual_Rev 0.md");
        assert_eq!(std::fs::read_to_string(path).unwrap(), doc.content);
    }
}
