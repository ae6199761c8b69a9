use anyhow::{Result, bail};
use eventdesk_core::EventDraft;
use eventdesk_core::auth;

use super::{Context, today};
use crate::utils::form::{self, EventFields};

pub fn run(ctx: &Context, fields: EventFields) -> Result<()> {
    let Some(user) = auth::current_user(&ctx.store)? else {
        bail!(
            "Log in to add events.\n\n\
            Create an account with:\n  \
            eventdesk register <username> <email>\n\n\
            or log in with:\n  \
            eventdesk login <username>"
        );
    };

    let palette = ctx.palette()?;
    let today = today();

    // New events default to today, like the empty form
    let mut draft = EventDraft {
        date: today.format("%Y-%m-%d").to_string(),
        ..Default::default()
    };

    let interactive = fields.name.is_none()
        || fields.email.is_none()
        || fields.time.is_none()
        || fields.capacity.is_none()
        || fields.venue.is_none();

    fields.apply(&mut draft);

    if interactive {
        form::prompt_fields(&mut draft, true)?;
    }

    let event = form::submit(draft, today, interactive, &palette)?;

    let mut repo = ctx.repository()?;
    let added = repo.add(event)?;
    tracing::info!(user = %user.username, id = %added.id, "event added");

    if interactive {
        println!();
    }
    println!("{}", palette.success(&format!("  Added: {}", added.name)));
    println!("  {}", palette.muted(&added.id));

    Ok(())
}
