//! Leitura do arquivo de microdados em Latin-1.
//!
//! O arquivo é lido de uma vez e decodificado de ISO-8859-1 para UTF-8;
//! cada byte vira o code point de mesmo valor, então a decodificação
//! nunca falha.

use std::path::Path;

use csv::{Reader, ReaderBuilder};

use crate::error::ConvertError;

/// Separador de campos dos arquivos de microdados.
pub const DELIMITER: u8 = b';';

/// Lê `path` e decodifica o conteúdo como ISO-8859-1.
///
/// Caminho inexistente vira [`ConvertError::SourceNotFound`]; qualquer
/// outra falha de I/O vira [`ConvertError::SourceRead`].
pub fn read_latin1(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConvertError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConvertError::SourceRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(encoding_rs::mem::decode_latin1(&bytes).into_owned())
}

/// Leitor CSV sobre o texto já decodificado.
///
/// Com `flexible`, linhas de dados podem ter mais ou menos campos que o
/// cabeçalho; aspas seguem as regras usuais de `"` e linhas vazias são ignoradas.
pub fn csv_reader(text: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes())
}
