use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct NavArgs {}

pub fn nav(_args: NavArgs, cwd: &str) -> Result<()> {
    let app = super::bootstrap(cwd)?;

    for item in app.nav_items() {
        if item.active {
            println!("{} {} ({})", "▶".green(), item.label.bold(), item.key);
        } else {
            println!("  {} ({})", item.label, item.key);
        }
    }

    Ok(())
}
