//! Interface de terminal do ead-cursos: spinner e saída colorida.
//!
//! Usa `indicatif` para o spinner durante a conversão e `console` para
//! as mensagens de resultado. Não há framework de logging: o status vai
//! direto para o console.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::convert::RunSummary;
use crate::error::ConvertError;

/// Indicador visual de uma execução de conversão no terminal.
pub struct RunProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl RunProgress {
    /// Inicia o spinner com o arquivo de origem.
    pub fn start(source: &std::path::Path) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Processing {}", source.display()));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    /// Finaliza o spinner e mostra o destino gravado.
    ///
    /// Com `verbose`, mostra também as contagens de linhas.
    pub fn complete(&self, summary: &RunSummary, verbose: bool) {
        self.pb.finish_and_clear();
        println!(
            "  {} Successfully created {} ({} courses)",
            self.green.apply_to("✓"),
            summary.dest.display(),
            summary.rows_kept
        );
        if verbose {
            println!(
                "  {}",
                self.dim.apply_to(format!(
                    "{} columns, {} rows read, {} EAD rows kept",
                    summary.columns, summary.rows_read, summary.rows_kept
                ))
            );
        }
    }

    /// Finaliza o spinner e relata a falha.
    ///
    /// Colunas faltando são listadas uma por linha; demais erros
    /// não previstos recebem o prefixo "An error occurred".
    pub fn fail(&self, err: &ConvertError) {
        self.pb.finish_and_clear();
        match err {
            ConvertError::MissingColumns { columns } => {
                println!(
                    "  {} Error: The CSV file is missing one or more required columns.",
                    self.red.apply_to("✗")
                );
                println!("  Missing columns:");
                for col in columns {
                    println!("    {} {col}", self.yellow.apply_to("-"));
                }
            }
            e if e.is_reported_abort() => {
                println!("  {} Error: {e}", self.red.apply_to("✗"));
            }
            e => {
                println!("  {} An error occurred: {e}", self.red.apply_to("✗"));
            }
        }
    }
}

/// Relata uma falha anterior à conversão (configuração inválida).
pub fn report_setup_error(err: &anyhow::Error) {
    let red = Style::new().red().bold();
    println!("  {} An error occurred: {err:#}", red.apply_to("✗"));
}
