//! Category listing.

use anyhow::Result;
use storefront_core::catalog::CategoryFilter;

use super::open_session;
use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let session = open_session(ctx).await?;
    let categories = session.catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for name in categories {
        let filter = CategoryFilter::parse(name.as_str());
        let count = session
            .catalog
            .products()
            .iter()
            .filter(|p| filter.matches(p))
            .count();
        ctx.output.list_item(&format!("{} ({})", name, count));
    }
    Ok(())
}
