//! Configuração carregada a partir de `ead-cursos.toml`.
//!
//! A struct [`CursosConfig`] guarda os caminhos de origem e destino.
//! Chaves ausentes no arquivo usam os caminhos padrão do projeto; os
//! argumentos posicionais da CLI têm precedência sobre o arquivo.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Nome do arquivo de configuração procurado no diretório atual.
pub const CONFIG_FILE: &str = "ead-cursos.toml";

/// Configuração de nível superior carregada de `ead-cursos.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CursosConfig {
    /// Arquivo de microdados (CSV em Latin-1).
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Arquivo JSON gerado.
    #[serde(default = "default_dest_path")]
    pub dest_path: PathBuf,
}

// Microdados do Censo 2024 colocados em `scripts/`.
fn default_source_path() -> PathBuf {
    PathBuf::from("scripts/MICRODADOS_CADASTRO_CURSOS_2024.CSV")
}

fn default_dest_path() -> PathBuf {
    PathBuf::from("scripts/cursos.json")
}

impl Default for CursosConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            dest_path: default_dest_path(),
        }
    }
}

impl CursosConfig {
    /// Carrega `ead-cursos.toml` do diretório atual, ou os defaults se o
    /// arquivo não existir.
    pub fn load() -> Result<Self> {
        Self::load_optional(Path::new(CONFIG_FILE))
    }

    /// Carrega um arquivo que precisa existir (passado via `--config`).
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    fn load_optional(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Aplica os caminhos vindos da CLI por cima da configuração.
    pub fn with_overrides(mut self, source: Option<PathBuf>, dest: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source_path = source;
        }
        if let Some(dest) = dest {
            self.dest_path = dest;
        }
        self
    }
}
