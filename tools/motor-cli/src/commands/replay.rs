//! Scripted session replay.
//!
//! A script is JSON lines, one [`Event`] per line. Blank lines and lines
//! starting with `#` are skipped.

use std::io::Read;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use super::ReplayArgs;
use crate::context::Context;
use crate::render;
use motor_commerce::prelude::*;

/// Final state printed after a replay.
#[derive(Serialize)]
struct ReplaySummary<'a> {
    applied: usize,
    rejected: usize,
    visible: Vec<ListingId>,
    compared: &'a [ListingId],
    cart: &'a [CartLine],
    totals: CartTotals,
    order: &'a OrderState,
    notices: Vec<Notice>,
}

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let script = read_script(&args.file)?;
    let events = parse_script(&script)?;
    let mut session = ctx.new_session()?;

    let pb = ctx.output.progress(events.len() as u64, "Replaying");
    let mut applied = 0;
    let mut rejected = 0;

    for (line, event) in events {
        pb.set_message(event.name());
        match session.apply(event) {
            Ok(()) => applied += 1,
            Err(e) if args.keep_going => {
                rejected += 1;
                pb.suspend(|| ctx.output.warn(&format!("line {}: {}", line, e)));
            }
            Err(e) => {
                pb.abandon();
                return Err(e).with_context(|| format!("Event on line {} was rejected", line));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let notices = session.drain_notices();
    let summary = ReplaySummary {
        applied,
        rejected,
        visible: session.visible_listings().iter().map(|l| l.id).collect(),
        compared: session.comparison().ids(),
        cart: session.cart_lines(),
        totals: session.cart_totals(),
        order: session.order_state(),
        notices,
    };

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Applied {} event(s), {} rejected",
        summary.applied, summary.rejected
    ));

    ctx.output.header("Notices");
    if summary.notices.is_empty() {
        ctx.output.info("None.");
    }
    for notice in &summary.notices {
        ctx.output.notice(notice);
    }

    ctx.output.header("Cart");
    render::cart(&ctx.output, summary.cart, &summary.totals);

    ctx.output.header("Session");
    let ids = |ids: &[ListingId]| {
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    ctx.output.kv("Visible", &ids(&summary.visible));
    ctx.output.kv("Compared", &ids(summary.compared));
    render::order_state(&ctx.output, summary.order);

    Ok(())
}

fn read_script(file: &str) -> Result<String> {
    if file == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read events from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read event file: {}", file))
}

/// Parse a script into events tagged with their 1-based line numbers.
fn parse_script(script: &str) -> Result<Vec<(usize, Event)>> {
    let mut events = Vec::new();
    for (index, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: Event = serde_json::from_str(line)
            .with_context(|| format!("Invalid event on line {}", index + 1))?;
        events.push((index + 1, event));
    }
    if events.is_empty() {
        bail!("No events to replay");
    }
    Ok(events)
}
