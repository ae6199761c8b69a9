use anyhow::Result;
use clap::Subcommand;
use eventdesk_core::theme;

use super::Context;

#[derive(Subcommand, Debug, Clone, Copy, Default)]
pub enum ThemeAction {
    /// Show the current theme
    #[default]
    Show,
    /// Switch between light and dark, and remember the choice
    Toggle,
    /// Forget the saved choice and follow the system setting
    System,
}

pub fn run(ctx: &Context, action: ThemeAction) -> Result<()> {
    let mut store = ctx.store.clone();

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            theme::toggle(&mut store, ctx.theme()?)?;
        }
        ThemeAction::System => theme::clear(&mut store)?,
    }

    let current = ctx.theme()?;
    let source = if theme::saved(&ctx.store)?.is_some() {
        "saved"
    } else {
        "following system"
    };

    println!("Theme: {} ({})", ctx.palette()?.accent(current.as_str()), source);

    Ok(())
}
