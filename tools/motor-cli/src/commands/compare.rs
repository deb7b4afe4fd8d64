//! Side-by-side comparison.

use anyhow::{bail, Result};

use super::CompareArgs;
use crate::context::Context;
use crate::render;
use motor_commerce::compare::{ToggleOutcome, MAX_COMPARED, MIN_TO_COMPARE};
use motor_commerce::ListingId;

/// Run the compare command.
pub fn run(args: CompareArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.new_session()?;

    for id in args.ids.into_iter().map(ListingId::new) {
        match session.toggle_compare(id) {
            None => ctx.output.warn(&format!("Двигатель {} не найден", id)),
            Some(ToggleOutcome::LimitReached) => ctx.output.warn(&format!(
                "Двигатель {} пропущен: сравнить можно не больше {}",
                id, MAX_COMPARED
            )),
            Some(outcome) => ctx.output.debug(&format!("{}: {:?}", id, outcome)),
        }
    }

    if !session.compare_is_enabled() {
        bail!(
            "Для сравнения нужно хотя бы {} двигателя, выбрано {}",
            MIN_TO_COMPARE,
            session.comparison().len()
        );
    }

    let table = session.comparison_table();
    if ctx.output.is_json() {
        ctx.output.json(&table);
        return Ok(());
    }

    ctx.output.header("Сравнение двигателей");
    render::comparison(&ctx.output, &table);
    Ok(())
}
