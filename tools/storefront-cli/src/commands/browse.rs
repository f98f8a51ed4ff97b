//! One-shot catalog listing.

use anyhow::Result;
use storefront_core::Intent;

use super::{open_session, BrowseArgs};
use crate::context::Context;
use crate::render::{self, Snapshot};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut session = open_session(ctx).await?;

    if let Some(term) = args.search {
        session.apply(Intent::Search(term))?;
    }
    if let Some(category) = args.category {
        session.apply(Intent::SelectCategory(category))?;
    }

    let visible = session.catalog.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&Snapshot::capture(&session, &visible)?);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {})",
        visible.len(),
        session.catalog.products().len()
    ));
    render::products(&ctx.output, &visible, &ctx.config.display);
    Ok(())
}
