use anyhow::Result;

use super::Context;

pub fn run(ctx: &Context, id: &str) -> Result<()> {
    let palette = ctx.palette()?;
    let mut repo = ctx.repository()?;

    match repo.duplicate(id)? {
        Some(copy) => {
            println!("{}", palette.success(&format!("  Created: {}", copy.name)));
            println!("  {}", palette.muted(&copy.id));
        }
        None => println!("{}", palette.muted(&format!("Event '{}' not found", id))),
    }

    Ok(())
}
