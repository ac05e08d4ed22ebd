//! Conversão dos microdados de cursos para JSON.
//!
//! [`run`] executa a passada única: lê e decodifica a origem, valida o
//! cabeçalho, filtra as linhas EAD, projeta os campos fixos e grava o
//! array JSON no destino. Nada é gravado antes de o resultado estar
//! completo, e a gravação troca o arquivo de destino de forma atômica.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::ConvertError;
use crate::reader::{csv_reader, read_latin1};
use crate::record::{CourseRecord, Header, RawRow};
use crate::schema::missing_columns;

/// Contadores e destino de uma execução bem-sucedida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dest: PathBuf,
    /// Colunas declaradas no cabeçalho da origem.
    pub columns: usize,
    /// Linhas de dados lidas (sem contar linhas vazias).
    pub rows_read: usize,
    /// Linhas mantidas pelo filtro EAD, ou seja, objetos gravados.
    pub rows_kept: usize,
}

/// Cursos extraídos do texto de origem já decodificado.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub columns: usize,
    pub rows_read: usize,
    pub courses: Vec<CourseRecord>,
}

/// Converte o arquivo de microdados `source` no array JSON `dest`.
pub fn run(source: &Path, dest: &Path) -> Result<RunSummary, ConvertError> {
    let text = read_latin1(source)?;
    let extraction = extract(&text, source)?;
    write_json(dest, &extraction.courses)?;

    Ok(RunSummary {
        dest: dest.to_path_buf(),
        columns: extraction.columns,
        rows_read: extraction.rows_read,
        rows_kept: extraction.courses.len(),
    })
}

/// Valida o cabeçalho e coleta os cursos EAD na ordem da origem.
///
/// `source` serve apenas para nomear o arquivo nos erros.
pub fn extract(text: &str, source: &Path) -> Result<Extraction, ConvertError> {
    let mut rdr = csv_reader(text);
    let header = Header::new(rdr.headers()?);
    if header.is_empty() {
        return Err(ConvertError::EmptySource {
            path: source.to_path_buf(),
        });
    }

    let missing = missing_columns(header.names());
    if !missing.is_empty() {
        return Err(ConvertError::MissingColumns { columns: missing });
    }

    let mut courses = Vec::new();
    let mut rows_read = 0;
    for result in rdr.records() {
        let values = result?;
        rows_read += 1;
        let row = RawRow::new(&header, &values);
        if row.is_ead() {
            courses.push(CourseRecord::from_row(&row));
        }
    }

    Ok(Extraction {
        columns: header.len(),
        rows_read,
        courses,
    })
}

/// Serializa `courses` como array JSON com indentação de 4 espaços.
/// Caracteres não-ASCII são gravados sem escape.
pub fn to_pretty_json(courses: &[CourseRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    courses.serialize(&mut ser)?;
    Ok(buf)
}

/// Grava o array JSON em `dest`, substituindo o conteúdo existente.
///
/// Os bytes vão para um arquivo temporário no diretório do destino, que
/// depois é renomeado por cima dele; uma falha deixa `dest` intacto. Se
/// `dest` é um link simbólico, o alvo do link é que recebe o conteúdo.
/// Um destino existente mantém suas permissões; um novo segue a umask.
/// O diretório pai precisa existir.
pub fn write_json(dest: &Path, courses: &[CourseRecord]) -> Result<(), ConvertError> {
    let bytes = to_pretty_json(courses)?;
    let write_err = |source: std::io::Error| ConvertError::DestWrite {
        path: dest.to_path_buf(),
        source,
    };

    let (target, existing) = match std::fs::canonicalize(dest) {
        Ok(real) => {
            let permissions = std::fs::metadata(&real).map_err(write_err)?.permissions();
            (real, Some(permissions))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (dest.to_path_buf(), None),
        Err(e) => return Err(write_err(e)),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // OpenOptions cria o temporário com o modo padrão (0666 & !umask).
    let mut tmp = tempfile::Builder::new()
        .prefix(".ead-cursos-")
        .suffix(".tmp")
        .make_in(dir, |path| {
            OpenOptions::new().write(true).create_new(true).open(path)
        })
        .map_err(write_err)?;
    tmp.write_all(&bytes).map_err(write_err)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}
