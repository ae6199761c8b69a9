use anyhow::Result;
use eventdesk_core::debounce::Debouncer;
use eventdesk_core::{DateFilter, EventRepository, Query, SortKey};
use eventdesk_core::store::FileStore;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{Context, today};
use crate::render::{Palette, render_events};

pub async fn run(ctx: &Context, when: DateFilter, sort: SortKey) -> Result<()> {
    let palette = ctx.palette()?;
    let repo = ctx.repository()?;
    let mut query = Query::new("", when, sort);

    println!(
        "{}",
        palette.muted("Type to search, one line at a time. Ctrl-D to quit.")
    );
    show(&repo, &query, &palette);

    let mut debouncer = Debouncer::new(ctx.config.debounce_window());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_typed: Option<String> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(text) => {
                    last_typed = Some(text.clone());
                    debouncer.push(text);
                }
                None => break,
            },
            Some(text) = debouncer.next() => {
                query.text = text;
                show(&repo, &query, &palette);
            }
        }
    }

    // Input ended inside the quiet window; apply what was typed last
    if let Some(text) = last_typed
        && text != query.text
    {
        query.text = text;
        show(&repo, &query, &palette);
    }

    Ok(())
}

fn show(repo: &EventRepository<FileStore>, query: &Query, palette: &Palette) {
    let mut heading = match query.date_filter {
        DateFilter::All => "All events".to_string(),
        DateFilter::Upcoming => "Upcoming events".to_string(),
        DateFilter::Past => "Past events".to_string(),
    };
    if !query.text.trim().is_empty() {
        heading.push_str(&format!(" matching \"{}\"", query.text.trim()));
    }
    if query.sort != SortKey::None {
        heading.push_str(&format!(", sorted by {}", query.sort));
    }

    let today = today();
    println!();
    println!("{}", palette.title(&heading));
    println!("{}", render_events(&repo.query(query, today), today, palette));
}
