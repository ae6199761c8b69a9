//! Terminal rendering for eventdesk types.
//!
//! Colors come from a [`Palette`] picked by the current theme: the dark
//! theme uses the bright variants, the light theme the regular ones.

use chrono::NaiveDate;
use eventdesk_core::theme::Theme;
use eventdesk_core::{Event, ValidationErrors};
use owo_colors::OwoColorize;

/// Width of the date/time column.
const WHEN_WIDTH: usize = 18;

pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Palette { theme }
    }

    pub fn title(&self, text: &str) -> String {
        match self.theme {
            Theme::Dark => text.bright_white().bold().to_string(),
            Theme::Light => text.bold().to_string(),
        }
    }

    pub fn accent(&self, text: &str) -> String {
        match self.theme {
            Theme::Dark => text.bright_cyan().to_string(),
            Theme::Light => text.blue().to_string(),
        }
    }

    pub fn success(&self, text: &str) -> String {
        match self.theme {
            Theme::Dark => text.bright_green().to_string(),
            Theme::Light => text.green().to_string(),
        }
    }

    pub fn error(&self, text: &str) -> String {
        match self.theme {
            Theme::Dark => text.bright_red().to_string(),
            Theme::Light => text.red().to_string(),
        }
    }

    pub fn muted(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

/// Render a query result, or a placeholder when it is empty.
pub fn render_events(events: &[&Event], today: NaiveDate, palette: &Palette) -> String {
    if events.is_empty() {
        return palette.muted("No events found");
    }

    let blocks: Vec<String> = events
        .iter()
        .map(|event| render_event(event, today, palette))
        .collect();

    let footer = palette.muted(&format!(
        "{} {}",
        events.len(),
        pluralize("event", events.len())
    ));

    format!("{}\n\n{}", blocks.join("\n\n"), footer)
}

pub fn render_event(event: &Event, today: NaiveDate, palette: &Palette) -> String {
    let when = format!(
        "{} {}",
        format_date_label(event.date, today),
        event.time.format("%H:%M")
    );
    let indent = " ".repeat(WHEN_WIDTH);

    let mut lines = vec![format!(
        "  {} {}",
        palette.accent(&format!("{:<width$}", when, width = WHEN_WIDTH)),
        palette.title(&event.name)
    )];

    lines.push(format!(
        "  {} {} · {} {} · {}",
        indent,
        event.venue,
        event.capacity,
        pluralize("seat", event.capacity as usize),
        event.organizer_email
    ));

    if let Some(description) = &event.description {
        lines.push(format!("  {} {}", indent, palette.muted(description)));
    }

    lines.push(format!("  {} {}", indent, palette.muted(&event.id)));

    lines.join("\n")
}

/// One line per invalid field.
pub fn render_errors(errors: &ValidationErrors, palette: &Palette) -> String {
    errors
        .iter()
        .map(|(field, message)| {
            format!("  {} {}: {}", palette.error("✗"), field, palette.error(message))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A date relative to today ("Today", "Tomorrow") or e.g. "Fri Jun 20, 2025".
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d, %Y").to_string(),
    }
}

pub fn format_storage(bytes: usize) -> String {
    format!("Local storage used: {:.1} KB", bytes as f64 / 1024.0)
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
