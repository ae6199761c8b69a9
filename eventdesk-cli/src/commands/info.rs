use anyhow::Result;

use super::Context;
use crate::render::format_storage;

pub fn run(ctx: &Context) -> Result<()> {
    let palette = ctx.palette()?;
    let repo = ctx.repository()?;

    println!("{}", palette.title("eventdesk"));
    println!("  Data directory: {}", ctx.config.display_path().display());
    println!("  Events: {}", repo.len());
    println!("  {}", format_storage(repo.storage_usage()?));
    println!("  Theme: {}", ctx.theme()?);

    Ok(())
}
