use anyhow::{Result, bail};
use eventdesk_core::auth;

use super::Context;
use crate::utils::prompt;

pub fn register(ctx: &Context, username: &str, email: &str) -> Result<()> {
    let password = prompt::password("Password: ")?;
    let again = prompt::password("Confirm password: ")?;
    if password != again {
        bail!("Passwords do not match");
    }

    let mut store = ctx.store.clone();
    let profile = auth::register(&mut store, username, email, &password)?;

    let palette = ctx.palette()?;
    println!("{}", palette.success(&format!("Registered and logged in as {}", profile.username)));

    Ok(())
}

pub fn login(ctx: &Context, username: &str) -> Result<()> {
    let password = prompt::password("Password: ")?;

    let mut store = ctx.store.clone();
    let profile = auth::login(&mut store, username, &password)?;

    let palette = ctx.palette()?;
    println!("{}", palette.success(&format!("Logged in as {}", profile.username)));

    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    let mut store = ctx.store.clone();
    auth::logout(&mut store)?;

    println!("{}", ctx.palette()?.muted("Logged out"));

    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    let palette = ctx.palette()?;

    match auth::current_user(&ctx.store)? {
        Some(user) => println!("{} <{}>", palette.title(&user.username), user.email),
        None => println!("{}", palette.muted("Not logged in")),
    }

    Ok(())
}
