//! Interactive storefront session.

use std::io::{BufRead, Write};

use anyhow::{bail, Context as _, Result};
use console::style;
use dialoguer::{Confirm, Input};

use super::ShopArgs;
use crate::context::Context;
use crate::render;
use motor_commerce::cart::AddOutcome;
use motor_commerce::compare::{ToggleOutcome, MAX_COMPARED};
use motor_commerce::prelude::*;

/// One line of shop input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShopCommand {
    List,
    Brand(String),
    Displacement(String),
    Compare(ListingId),
    Table,
    Add(ListingId),
    Remove(ListingId),
    Quantity(ListingId, u32),
    Cart,
    Clear,
    Checkout,
    Help,
    Quit,
}

impl ShopCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err("пустая команда".to_string());
        };
        let rest: Vec<&str> = words.collect();

        let id = |index: usize| -> Result<ListingId, String> {
            let raw = rest
                .get(index)
                .ok_or_else(|| format!("`{}`: укажите номер двигателя", name))?;
            raw.parse::<ListingId>()
                .map_err(|_| format!("неверный номер двигателя: {}", raw))
        };
        let value = || -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("`{}`: укажите значение (или \"all\")", name))
            } else {
                Ok(rest.join(" "))
            }
        };

        match name.to_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "brand" => Ok(Self::Brand(value()?)),
            "disp" | "displacement" => Ok(Self::Displacement(value()?)),
            "compare" | "cmp" => Ok(Self::Compare(id(0)?)),
            "table" => Ok(Self::Table),
            "add" => Ok(Self::Add(id(0)?)),
            "rm" | "remove" => Ok(Self::Remove(id(0)?)),
            "qty" => {
                let listing = id(0)?;
                let raw = rest.get(1).ok_or("`qty`: укажите количество")?;
                let quantity = raw
                    .parse::<u32>()
                    .map_err(|_| format!("неверное количество: {}", raw))?;
                Ok(Self::Quantity(listing, quantity.max(1)))
            }
            "cart" => Ok(Self::Cart),
            "clear" => Ok(Self::Clear),
            "checkout" | "order" => Ok(Self::Checkout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("неизвестная команда: {} (см. `help`)", other)),
        }
    }
}

const HELP: [(&str, &str); 13] = [
    ("list", "фильтры и подходящие двигатели"),
    ("brand <name|all>", "фильтр по марке"),
    ("disp <value|all>", "фильтр по объёму"),
    ("compare <id>", "добавить в сравнение или убрать из него"),
    ("table", "таблица сравнения"),
    ("add <id>", "добавить в корзину"),
    ("rm <id>", "удалить из корзины"),
    ("qty <id> <n>", "изменить количество (не меньше 1)"),
    ("cart", "показать корзину"),
    ("clear", "очистить корзину"),
    ("checkout", "оформить заказ"),
    ("help", "эта справка"),
    ("quit", "выход"),
];

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("`shop` is interactive; use `replay` for scripted sessions");
    }

    let mut session = ctx.new_session()?;
    if let Some(brand) = args.brand {
        session.select_brand(brand.as_str());
    }

    ctx.output.header(&format!("Добро пожаловать в {}", session.config().name));
    ctx.output.info("Введите `help`, чтобы увидеть команды.");
    show_catalog(ctx, &session);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{} ", prompt(&session));
        std::io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShopCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                ctx.output.warn(&msg);
                continue;
            }
        };
        if command == ShopCommand::Quit {
            break;
        }
        execute(command, ctx, &mut session)?;
        render::notices(&ctx.output, &mut session);
    }

    ctx.output.info("До свидания!");
    Ok(())
}

fn prompt(session: &Session) -> String {
    let lines = session.cart().line_count();
    let badge = if lines > 0 {
        style(format!("корзина:{}", lines)).green().to_string()
    } else {
        style("корзина:0".to_string()).dim().to_string()
    };
    format!("{} [{}]>", style(&session.config().name).bold(), badge)
}

fn show_catalog(ctx: &Context, session: &Session) {
    render::facet(&ctx.output, "Марка", session.brands(), &session.filter().brand);
    render::facet(
        &ctx.output,
        "Объём",
        session.displacements(),
        &session.filter().displacement,
    );
    render::listings(
        &ctx.output,
        &session.visible_listings(),
        session.config().currency,
    );
}

fn execute(command: ShopCommand, ctx: &Context, session: &mut Session) -> Result<()> {
    let out = &ctx.output;
    match command {
        ShopCommand::List => show_catalog(ctx, session),
        ShopCommand::Brand(value) => {
            session.select_brand(value.as_str());
            show_catalog(ctx, session);
        }
        ShopCommand::Displacement(value) => {
            session.select_displacement(value.as_str());
            show_catalog(ctx, session);
        }
        ShopCommand::Compare(id) => match session.toggle_compare(id) {
            None => out.warn(&format!("Двигатель {} не найден", id)),
            Some(ToggleOutcome::Added) => out.success(&format!(
                "В сравнении {} из {}",
                session.comparison().len(),
                MAX_COMPARED
            )),
            Some(ToggleOutcome::Removed) => {
                out.info(&format!("Двигатель {} убран из сравнения", id))
            }
            Some(ToggleOutcome::LimitReached) => out.debug(&format!(
                "В сравнении уже {} двигателя",
                MAX_COMPARED
            )),
        },
        ShopCommand::Table => {
            if session.open_comparison() {
                render::comparison(out, &session.comparison_table());
                session.close_comparison();
            } else {
                out.info("Выберите хотя бы два двигателя командой `compare <id>`.");
            }
        }
        ShopCommand::Add(id) => match session.add_to_cart(id) {
            Some(AddOutcome::Added) | Some(AddOutcome::Incremented { .. }) => {}
            None => out.warn(&format!("Двигатель {} не найден", id)),
        },
        ShopCommand::Remove(id) => {
            if session.remove_from_cart(id).is_none() {
                out.info(&format!("Двигателя {} нет в корзине", id));
            }
        }
        ShopCommand::Quantity(id, quantity) => {
            if session.set_quantity(id, quantity) {
                out.success(&format!("Количество для {}: {} шт.", id, quantity));
            } else {
                out.info(&format!("Двигателя {} нет в корзине", id));
            }
        }
        ShopCommand::Cart => {
            session.open_cart();
            render::cart(out, session.cart_lines(), &session.cart_totals());
        }
        ShopCommand::Clear => session.clear_cart(),
        ShopCommand::Checkout => checkout(ctx, session)?,
        ShopCommand::Help => {
            for (usage, about) in HELP {
                out.kv(usage, about);
            }
        }
        ShopCommand::Quit => {}
    }
    Ok(())
}

/// Collect the order form and place the order.
fn checkout(ctx: &Context, session: &mut Session) -> Result<()> {
    let out = &ctx.output;
    if let Err(e) = session.open_checkout() {
        out.rejected(&e);
        return Ok(());
    }

    out.header("Оформление заказа");
    render::cart(out, session.cart_lines(), &session.cart_totals());

    let mut fields: Vec<FormField> = FormField::ALL.to_vec();
    loop {
        for field in fields {
            let current = draft_value(session, field);
            let label = if field.is_required() {
                format!("{} *", field.display_name())
            } else {
                field.display_name().to_string()
            };
            let value: String = Input::new()
                .with_prompt(label)
                .with_initial_text(current)
                .allow_empty(!field.is_required())
                .interact_text()
                .context("Failed to read order form")?;
            session.update_form(field, value)?;
        }

        let place = Confirm::new()
            .with_prompt(format!(
                "Подтвердить заказ на сумму {}?",
                session.cart_totals().total_price.display()
            ))
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if !place {
            session.cancel_checkout();
            out.info("Оформление отменено, корзина сохранена.");
            return Ok(());
        }

        match session.submit_draft() {
            Ok(_) => break,
            Err(CommerceError::CheckoutIncomplete { missing }) => {
                let names: Vec<&str> = missing.iter().map(|f| f.display_name()).collect();
                out.warn(&format!("Заполните поля: {}", names.join(", ")));
                fields = missing;
            }
            Err(e) => {
                out.rejected(&e);
                session.cancel_checkout();
                return Ok(());
            }
        }
    }

    render::notices(out, session);
    render::order_state(out, session.order_state());
    session.dismiss_confirmation();
    Ok(())
}

fn draft_value(session: &Session, field: FormField) -> String {
    match session.order_state() {
        OrderState::FormOpen(form) => form.get(field).to_string(),
        _ => String::new(),
    }
}
