use anyhow::Result;
use eventdesk_core::{DateFilter, Query, SortKey};

use super::{Context, today};
use crate::render::render_events;

pub fn run(ctx: &Context, search: String, when: DateFilter, sort: SortKey, json: bool) -> Result<()> {
    let repo = ctx.repository()?;
    let today = today();

    let query = Query::new(search, when, sort);
    let events = repo.query(&query, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{}", render_events(&events, today, &ctx.palette()?));

    Ok(())
}
