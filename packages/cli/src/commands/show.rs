use anyhow::Result;
use clap::Args;
use lectern_renderer::frame_to_html;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Page key to render (defaults to the start page)
    #[arg(short, long)]
    pub page: Option<String>,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let mut app = super::bootstrap(cwd)?;

    if let Some(page) = &args.page {
        app.select_page(page)?;
    }

    print!("{}", frame_to_html(app.frame()));
    Ok(())
}
