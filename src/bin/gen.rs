//! srsgen: compile the latest vendor geo catalogs into rule-set files.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use srsgen::catalog::{CatalogDecoder, DatDecoder};
use srsgen::remote::ReleaseClient;
use srsgen::{Compiler, Config, Result, SrsWriter};

#[derive(Parser)]
#[command(name = "srsgen")]
#[command(version = "0.1.0")]
#[command(about = "Compile geoip/geosite catalogs into binary rule-set files", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    // Catalogs land in a temp dir that is dropped with the run.
    let tmp_dir = tempfile::tempdir()?;
    let catalogs = ReleaseClient::new().download_latest(tmp_dir.path())?;

    fs::create_dir_all(&config.output_dir)?;
    let compiler = Compiler::new(SrsWriter::new(), &config.output_dir);
    let decoder = DatDecoder::new();

    let mut written = 0;
    let mut missing = 0;

    if !config.geoip.is_empty() {
        log::info!("compiling {} geoip categories", config.geoip.len());
        let entries = decoder.decode_geoip(&fs::read(&catalogs.geoip)?)?;
        let report = compiler.compile_geoip(&entries, &config.geoip)?;
        written += report.written;
        missing += report.missing;
    }

    if !config.geosite.is_empty() {
        log::info!("compiling {} geosite categories", config.geosite.len());
        let entries = decoder.decode_geosite(&fs::read(&catalogs.geosite)?)?;
        let report = compiler.compile_geosite(&entries, &config.geosite)?;
        written += report.written;
        missing += report.missing;
    }

    log::info!(
        "done: {} rule-set files in {} ({} categories missing)",
        written,
        config.output_dir.display(),
        missing
    );

    Ok(())
}
