//! Interface de linha de comando do ead-cursos baseada em clap.
//!
//! Define a struct [`Cli`] com os caminhos opcionais de origem e destino
//! e as flags globais (--config, --verbose).

use std::path::PathBuf;

use clap::Parser;

/// Extrai os cursos EAD dos microdados do Censo da Educação Superior para JSON.
#[derive(Debug, Parser)]
#[command(name = "ead-cursos", version, about)]
pub struct Cli {
    /// Arquivo de microdados (CSV separado por `;`, em Latin-1).
    pub source: Option<PathBuf>,

    /// Arquivo JSON de saída (sobrescrito se existir).
    pub dest: Option<PathBuf>,

    /// Caminho para um arquivo TOML de configuração.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
