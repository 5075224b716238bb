//! Hatchery Build Binary Entry Point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use hatchery_build::{run_concurrent, Cli, Commands, GrammarArgs};
use hatchery_core::vfs::PhysicalFileSystem;
use hatchery_core::{link_path_segment, link_path_y_max, ConversionReport, Converter, Result};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let result = match Cli::parse().into_command() {
        Commands::Grammars(args) => build_grammars(args).await,
        Commands::LinkPath { x1, y1, x2, y2 } => {
            println!("{}", link_path_segment(x1, y1, x2, y2));
            println!("y max: {}", link_path_y_max(x1, y1, x2, y2));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn build_grammars(args: GrammarArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let show_summary = config.logging.show_summary;

    eprintln!(
        "🚀 Converting grammars {:?} -> {:?}",
        config.grammars.source_dir, config.grammars.out_dir
    );

    let converter = Converter::new(config.grammars, Arc::new(PhysicalFileSystem));
    let report = if args.single {
        converter.run_single()?
    } else if args.sequential {
        converter.run()?
    } else {
        run_concurrent(&converter).await?
    };

    if show_summary {
        print_summary(&report);
    }
    eprintln!(
        "✅ Wrote {} grammar(s), {} bytes",
        report.len(),
        report.total_bytes()
    );

    Ok(())
}

fn print_summary(report: &ConversionReport) {
    for artifact in &report.artifacts {
        eprintln!(
            "📝 {} ({} bytes, sha256 {})",
            artifact.path.display(),
            artifact.bytes,
            &artifact.digest[..12]
        );
    }
}
