use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory for the artifact
    #[arg(short, long, default_value = ".")]
    pub out: String,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let mut app = super::bootstrap(cwd)?;

    let out = PathBuf::from(cwd).join(&args.out);
    let path = app.export(&out)?;

    println!("{} exported {}", "✓".green(), path.display());
    Ok(())
}
