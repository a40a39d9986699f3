use anyhow::Result;
use bench_chart::{render, RenderConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bench-chart")]
#[command(about = "Render a comparison line chart from sorting benchmark results")]
struct Cli {
    /// Path to the benchmark results CSV
    #[arg(short, long, default_value = "results/tempos.csv")]
    input: PathBuf,

    /// Path where the comparison chart PNG is written
    #[arg(short, long, default_value = "results/grafico_comparacao.png")]
    output: PathBuf,

    /// Open the rendered chart in the system image viewer
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    render(&RenderConfig {
        input: cli.input,
        output: cli.output,
        show: cli.show,
    })?;

    Ok(())
}
