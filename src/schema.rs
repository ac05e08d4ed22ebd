//! Colunas do arquivo de microdados usadas pela extração.
//!
//! O conjunto de colunas e o valor do filtro são fixos: o arquivo do Censo
//! tem layout estável e a saída alimenta o catálogo de cursos EAD.

/// Coluna que decide se a linha é mantida.
pub const DISCRIMINATOR: &str = "TP_MODALIDADE_ENSINO";

/// Valor de [`DISCRIMINATOR`] para cursos a distância (EAD).
pub const EAD_MODALITY: &str = "1";

/// Campos copiados para cada objeto de saída, na ordem das chaves.
pub const PROJECTED_FIELDS: [&str; 11] = [
    "CO_CURSO",
    "NO_CURSO",
    "TP_GRAU_ACADEMICO",
    "NO_CINE_ROTULO",
    "NO_CINE_AREA_GERAL",
    "NO_CINE_AREA_ESPECIFICA",
    "NO_CINE_AREA_DETALHADA",
    "NO_IES",
    "SG_UF_IES",
    "NO_MUNICIPIO_IES",
    "IN_GRATUITO",
];

/// Colunas que o cabeçalho precisa declarar. As colunas faltando são
/// relatadas nesta ordem.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "CO_CURSO",
    "NO_CURSO",
    "TP_GRAU_ACADEMICO",
    "NO_CINE_ROTULO",
    "NO_CINE_AREA_GERAL",
    "NO_CINE_AREA_ESPECIFICA",
    "NO_CINE_AREA_DETALHADA",
    "CO_IES",
    "NO_IES",
    "SG_IES",
    "NO_MUNICIPIO_IES",
    "SG_UF_IES",
    "IN_GRATUITO",
    DISCRIMINATOR,
];

/// Retorna as colunas obrigatórias ausentes de `header`, na ordem da lista.
/// A comparação é exata (sem trim, diferencia maiúsculas).
pub fn missing_columns<'a, I>(header: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = header.into_iter().collect();
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(*col))
        .map(|col| (*col).to_string())
        .collect()
}
