//! Tipos de erro da conversão CSV → JSON.
//!
//! [`ConvertError`] cobre as duas interrupções previstas (arquivo de origem
//! ausente e colunas obrigatórias faltando) e as falhas de execução não
//! classificadas (leitura, parsing, serialização e escrita).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// O arquivo de origem não existe.
    #[error("The file {} was not found.", path.display())]
    SourceNotFound { path: PathBuf },

    /// O cabeçalho não contém todas as colunas obrigatórias.
    /// `columns` segue a ordem da lista de colunas obrigatórias.
    #[error("The CSV file is missing one or more required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// O arquivo de origem não tem linha de cabeçalho.
    #[error("The CSV file {} is empty (no header line).", path.display())]
    EmptySource { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Falha ao criar, gravar ou renomear o arquivo de destino.
    #[error("Failed to write {}: {source}", path.display())]
    DestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Verdadeiro para as interrupções previstas (origem ausente, colunas
    /// faltando); falso para falhas de execução não classificadas.
    pub fn is_reported_abort(&self) -> bool {
        matches!(
            self,
            ConvertError::SourceNotFound { .. } | ConvertError::MissingColumns { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_display() {
        let err = ConvertError::SourceNotFound {
            path: PathBuf::from("scripts/cursos.csv"),
        };
        assert_eq!(err.to_string(), "The file scripts/cursos.csv was not found.");
        assert!(err.is_reported_abort());
    }

    #[test]
    fn missing_columns_display_lists_every_column() {
        let err = ConvertError::MissingColumns {
            columns: vec!["SG_IES".into(), "TP_MODALIDADE_ENSINO".into()],
        };
        assert_eq!(
            err.to_string(),
            "The CSV file is missing one or more required columns: SG_IES, TP_MODALIDADE_ENSINO"
        );
        assert!(err.is_reported_abort());
    }

    #[test]
    fn write_failure_is_unclassified() {
        let err = ConvertError::DestWrite {
            path: PathBuf::from("out/cursos.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write out/cursos.json: denied");
        assert!(!err.is_reported_abort());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvertError>();
    }

    #[test]
    fn messages_use_sentence_case() {
        let errors = [
            ConvertError::SourceNotFound {
                path: PathBuf::from("a.csv"),
            },
            ConvertError::MissingColumns {
                columns: vec!["CO_IES".into()],
            },
            ConvertError::EmptySource {
                path: PathBuf::from("a.csv"),
            },
            ConvertError::SourceRead {
                path: PathBuf::from("a.csv"),
                source: std::io::Error::other("boom"),
            },
            ConvertError::DestWrite {
                path: PathBuf::from("b.json"),
                source: std::io::Error::other("boom"),
            },
        ];
        for err in errors {
            let msg = err.to_string();
            assert!(
                msg.chars().next().is_some_and(char::is_uppercase),
                "{msg}"
            );
        }
    }
}
