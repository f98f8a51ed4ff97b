//! Interactive shopping session.
//!
//! Each line is one intent in the short command syntax (`search mug`,
//! `add 2`, `toggle`, ...). Lines come from the terminal, a script file, or
//! piped stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};

use anyhow::{Context as _, Result};
use dialoguer::Input;
use storefront_core::{Intent, Outcome, Session};
use tracing::info;

use super::{open_session, ShopArgs};
use crate::context::Context;
use crate::render::{self, Snapshot};

const HELP: &[(&str, &str)] = &[
    ("search <text>", "filter titles (empty clears)"),
    ("category <name>", "filter by category, \"all\" for every one"),
    ("reset", "clear search and category"),
    ("list", "show the visible products"),
    ("add <id>", "add one unit to the cart"),
    ("remove <id>", "drop a cart entry"),
    ("qty <id> <n>", "set a quantity (0 removes)"),
    ("dec <id>", "remove one unit"),
    ("clear", "empty the cart"),
    ("open / close / toggle", "show or hide the cart"),
    ("quit", "leave"),
];

/// Where command lines come from.
enum Lines {
    Prompt,
    Reader(Box<dyn BufRead>),
}

impl Lines {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self {
            Lines::Prompt => {
                let line = Input::<String>::new()
                    .with_prompt("storefront")
                    .allow_empty(true)
                    .interact_text()?;
                Ok(Some(line))
            }
            Lines::Reader(reader) => {
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(line))
            }
        }
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut session = open_session(ctx).await?;
    info!(session = %session.id(), "shop session started");

    let mut lines = match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Lines::Reader(Box::new(BufReader::new(file)))
        }
        None if io::stdin().is_terminal() && !ctx.output.is_json() => Lines::Prompt,
        None => Lines::Reader(Box::new(io::stdin().lock())),
    };

    if matches!(lines, Lines::Prompt) {
        ctx.output.info("Type \"help\" for commands, \"quit\" to leave.");
        show_products(ctx, &session);
        render::badge(&ctx.output, &session)?;
    }

    while let Some(line) = lines.next_line()? {
        let command = line.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }

        match command {
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                show_help(ctx);
                continue;
            }
            "list" | "ls" => {
                show_products(ctx, &session);
                continue;
            }
            _ => {}
        }

        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(e) => {
                ctx.output.warn(&e.to_string());
                continue;
            }
        };

        match session.apply(intent) {
            Ok(outcome) => show_outcome(ctx, &session, &outcome)?,
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }

    if ctx.output.is_json() {
        let visible = session.catalog.visible_products();
        ctx.output.json(&Snapshot::capture(&session, &visible)?);
    } else {
        render::badge(&ctx.output, &session)?;
    }

    info!(
        session = %session.id(),
        items = session.cart.item_count(),
        "shop session ended"
    );
    Ok(())
}

fn show_outcome(ctx: &Context, session: &Session, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Filter { .. } => show_products(ctx, session),
        Outcome::Cart { .. } => {
            render::badge(&ctx.output, session)?;
            if session.cart.is_open() {
                render::cart(&ctx.output, session)?;
            }
        }
        Outcome::Overlay { open: true } => render::cart(&ctx.output, session)?,
        Outcome::Overlay { open: false } => ctx.output.info("Cart closed."),
        Outcome::Unchanged => ctx.output.info("Nothing to change."),
    }
    Ok(())
}

fn show_products(ctx: &Context, session: &Session) {
    let catalog = &session.catalog;
    let visible = catalog.visible_products();
    let mut heading = format!("Products ({} of {})", visible.len(), catalog.products().len());
    if !catalog.search_term().is_empty() {
        heading.push_str(&format!(" matching \"{}\"", catalog.search_term()));
    }
    if !catalog.selected_category().is_all() {
        heading.push_str(&format!(" in {}", catalog.selected_category()));
    }
    ctx.output.header(&heading);
    render::products(&ctx.output, &visible, &ctx.config.display);
}

fn show_help(ctx: &Context) {
    ctx.output.header("Commands");
    for (command, description) in HELP {
        ctx.output.kv(command, description);
    }
}
