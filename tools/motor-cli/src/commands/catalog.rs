//! Catalog listing.

use anyhow::Result;
use serde::Serialize;

use super::CatalogArgs;
use crate::context::Context;
use crate::render;
use motor_commerce::catalog::{FacetSelection, Listing};

#[derive(Serialize)]
struct CatalogView<'a> {
    brands: &'a [FacetSelection],
    displacements: &'a [FacetSelection],
    listings: Vec<&'a Listing>,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.new_session()?;
    session.select_brand(args.brand.as_str());
    session.select_displacement(args.displacement.as_str());

    if ctx.output.is_json() {
        ctx.output.json(&CatalogView {
            brands: session.brands(),
            displacements: session.displacements(),
            listings: session.visible_listings(),
        });
        return Ok(());
    }

    ctx.output.header(&format!("Каталог {}", session.config().name));
    render::facet(&ctx.output, "Марка", session.brands(), &session.filter().brand);
    render::facet(
        &ctx.output,
        "Объём",
        session.displacements(),
        &session.filter().displacement,
    );
    ctx.output.info("");
    render::listings(
        &ctx.output,
        &session.visible_listings(),
        session.config().currency,
    );

    Ok(())
}
