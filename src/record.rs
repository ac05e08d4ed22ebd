//! Linhas brutas do CSV e o registro de curso projetado a partir delas.
//!
//! [`RawRow`] é uma visão emprestada de uma linha alinhada ao cabeçalho;
//! [`CourseRecord`] é o objeto emitido no JSON, com as 11 chaves sempre
//! presentes e na ordem fixa de saída.

use std::collections::HashMap;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::schema::{DISCRIMINATOR, EAD_MODALITY, PROJECTED_FIELDS};

/// Nomes das colunas do cabeçalho com índice nome → posição.
#[derive(Debug, Clone)]
pub struct Header {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Header {
    /// Monta o índice. Se um nome se repete, vale a última ocorrência.
    pub fn new(record: &StringRecord) -> Self {
        let names: Vec<String> = record.iter().map(str::to_string).collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { names, positions }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

/// Uma linha de dados alinhada por posição ao cabeçalho.
///
/// Linhas mais curtas deixam as colunas finais ausentes; campos extras no
/// fim não têm nome de coluna e nunca são consultados.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    header: &'a Header,
    values: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    pub fn new(header: &'a Header, values: &'a StringRecord) -> Self {
        Self { header, values }
    }

    /// Valor bruto de `column`, ou `None` se o cabeçalho não tem a coluna
    /// ou a linha é curta demais para alcançá-la.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.header.position(column)?;
        self.values.get(idx)
    }

    /// Valor bruto de `column`, com `""` como padrão.
    pub fn get_or_empty(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    /// Verdadeiro quando a coluna discriminadora contém exatamente o valor EAD.
    pub fn is_ead(&self) -> bool {
        self.get(DISCRIMINATOR) == Some(EAD_MODALITY)
    }
}

/// Curso como gravado no JSON de saída.
///
/// A ordem dos campos define a ordem das chaves no objeto serializado e
/// acompanha [`PROJECTED_FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CourseRecord {
    pub co_curso: String,
    pub no_curso: String,
    pub tp_grau_academico: String,
    pub no_cine_rotulo: String,
    pub no_cine_area_geral: String,
    pub no_cine_area_especifica: String,
    pub no_cine_area_detalhada: String,
    pub no_ies: String,
    pub sg_uf_ies: String,
    pub no_municipio_ies: String,
    pub in_gratuito: String,
}

impl CourseRecord {
    /// Projeta o conjunto fixo de campos da linha; valores ausentes viram `""`.
    pub fn from_row(row: &RawRow<'_>) -> Self {
        let [
            co_curso,
            no_curso,
            tp_grau_academico,
            no_cine_rotulo,
            no_cine_area_geral,
            no_cine_area_especifica,
            no_cine_area_detalhada,
            no_ies,
            sg_uf_ies,
            no_municipio_ies,
            in_gratuito,
        ] = PROJECTED_FIELDS.map(|name| row.get_or_empty(name).to_string());
        Self {
            co_curso,
            no_curso,
            tp_grau_academico,
            no_cine_rotulo,
            no_cine_area_geral,
            no_cine_area_especifica,
            no_cine_area_detalhada,
            no_ies,
            sg_uf_ies,
            no_municipio_ies,
            in_gratuito,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cols: &[&str]) -> Header {
        Header::new(&StringRecord::from(cols.to_vec()))
    }

    #[test]
    fn lookup_by_name_follows_position() {
        let h = header(&["A", "B", "C"]);
        let values = StringRecord::from(vec!["1", "2", "3"]);
        let row = RawRow::new(&h, &values);
        assert_eq!(row.get("B"), Some("2"));
        assert_eq!(row.get("Z"), None);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn short_line_defaults_to_empty() {
        let h = header(&["A", "B", "C"]);
        let values = StringRecord::from(vec!["1"]);
        let row = RawRow::new(&h, &values);
        assert_eq!(row.get("C"), None);
        assert_eq!(row.get_or_empty("C"), "");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let h = header(&["A"]);
        let values = StringRecord::from(vec!["1", "extra", "more"]);
        let row = RawRow::new(&h, &values);
        assert_eq!(row.get("A"), Some("1"));
    }

    #[test]
    fn duplicate_column_uses_last_occurrence() {
        let h = header(&["A", "A"]);
        let values = StringRecord::from(vec!["first", "second"]);
        assert_eq!(RawRow::new(&h, &values).get("A"), Some("second"));
    }

    #[test]
    fn discriminator_requires_exact_match() {
        let h = header(&[DISCRIMINATOR]);
        let cases = [("1", true), ("2", false), ("", false), (" 1", false), ("01", false)];
        for (value, expected) in cases {
            let values = StringRecord::from(vec![value]);
            assert_eq!(RawRow::new(&h, &values).is_ead(), expected, "value {value:?}");
        }
        let empty = StringRecord::new();
        assert!(!RawRow::new(&h, &empty).is_ead());
    }

    #[test]
    fn projection_keys_follow_fixed_order() {
        let h = header(&["CO_CURSO", "NO_CURSO"]);
        let values = StringRecord::from(vec!["101", "Administração"]);
        let record = CourseRecord::from_row(&RawRow::new(&h, &values));

        assert_eq!(record.co_curso, "101");
        assert_eq!(record.no_curso, "Administração");
        assert_eq!(record.in_gratuito, "");

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), PROJECTED_FIELDS.len());

        // Key order is checked on the serialized text.
        let text = serde_json::to_string(&record).unwrap();
        let mut last = 0;
        for field in PROJECTED_FIELDS {
            let pos = text.find(&format!("\"{field}\"")).unwrap();
            assert!(pos >= last, "{field} out of order");
            last = pos;
        }
    }
}
