use anyhow::Result;

use super::Context;
use crate::utils::prompt;

pub fn run(ctx: &Context, id: &str, yes: bool) -> Result<()> {
    let palette = ctx.palette()?;
    let mut repo = ctx.repository()?;

    let Some(event) = repo.get(id) else {
        println!("{}", palette.muted(&format!("Event '{}' not found", id)));
        return Ok(());
    };

    if !yes {
        let confirmed = prompt::confirm(&format!(
            "Delete \"{}\"? This cannot be undone.",
            event.name
        ))?;
        if !confirmed {
            println!("{}", palette.muted("Cancelled"));
            return Ok(());
        }
    }

    if let Some(removed) = repo.remove(id)? {
        println!("{}", palette.error(&format!("  Deleted: {}", removed.name)));
    }

    Ok(())
}
