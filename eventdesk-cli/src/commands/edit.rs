use anyhow::Result;
use eventdesk_core::EventDraft;

use super::{Context, today};
use crate::utils::form::{self, EventFields};

pub fn run(ctx: &Context, id: &str, fields: EventFields) -> Result<()> {
    let palette = ctx.palette()?;
    let mut repo = ctx.repository()?;

    let Some(existing) = repo.get(id) else {
        println!("{}", palette.muted(&format!("Event '{}' not found", id)));
        return Ok(());
    };

    let mut draft = EventDraft::from(existing);

    // Without flags, walk through every field like the edit dialog
    let interactive = fields.is_empty();
    if interactive {
        form::prompt_fields(&mut draft, false)?;
    } else {
        fields.apply(&mut draft);
    }

    let event = form::submit(draft, today(), interactive, &palette)?;
    repo.update(id, event.clone())?;

    println!("{}", palette.success(&format!("  Updated: {}", event.name)));

    Ok(())
}
