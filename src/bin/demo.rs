//! Scripted run of the table view layer against an in-memory surface.
//!
//! Usage:
//!   cardtable-demo [--config PATH] [--debug]

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use rand::seq::SliceRandom;
use std::path::PathBuf;

use cardtable::config::TableConfig;
use cardtable::{
    Action, Card, Controller, JsonBetSink, MemorySurface, SlotId, TableCard, TableView,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "cardtable-demo", version, about = "Poker table view demo")]
struct Cli {
    /// Path to config file
    #[arg(long, default_value = "cardtable.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "cardtable=info,warn".to_string()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .init();

    let cfg = TableConfig::load_or_create(&cli.config)
        .with_context(|| format!("loading or creating config '{}'", cli.config.display()))?;
    tracing::info!(seats = cfg.seats, sheet = %cfg.sprite_sheet, "table configured");

    let mut deck = cardtable::cards::deck();
    deck.shuffle(&mut rand::rng());
    let hole = [deck[0], deck[1]];
    let flop = [deck[2], deck[3], deck[4]];

    let mut view = TableView::new(MemorySurface::new(), cfg.seats)?;
    view.start_round(hole)?;

    // One scripted interaction: open the dialog, change our mind once,
    // then bet and call through to the river.
    let mut ctl = Controller::new();
    let mut sink = JsonBetSink::new(std::io::stdout());
    ctl.handle(Action::OpenBetDialog, &mut view, &mut sink)?;
    ctl.handle(Action::EnterAmount(80), &mut view, &mut sink)?;
    ctl.handle(Action::CancelBet, &mut view, &mut sink)?;
    ctl.handle(Action::OpenBetDialog, &mut view, &mut sink)?;
    ctl.handle(Action::EnterAmount(40), &mut view, &mut sink)?;
    ctl.handle(Action::ConfirmBet, &mut view, &mut sink)?;
    ctl.handle(Action::Call { flop }, &mut view, &mut sink)?;
    view.show_turn(TableCard::Open(deck[5]));
    view.show_river(TableCard::Open(deck[6]));
    view.set_pot(120);
    view.set_status(0, 960, "your turn")?;

    print_cards("Your cards", &hole);
    print_cards("Board", &deck[2..7]);
    dump_surface(view.surface(), cfg.seats);
    Ok(())
}

fn card_label(c: Card) -> String {
    if c.is_red() {
        c.to_string().red().to_string()
    } else {
        c.to_string()
    }
}

fn print_cards(title: &str, cards: &[Card]) {
    let labels: Vec<String> = cards.iter().map(|&c| card_label(c)).collect();
    println!("{}: {}", title.bold(), labels.join(" "));
}

fn dump_surface(surface: &MemorySurface, seats: usize) {
    println!("{}", "visual tree".bold());
    for (slot, off) in surface.sprites() {
        println!("  {:<18} background {}px {}px", slot.to_string(), off.x, off.y);
    }
    for (slot, text) in surface.texts() {
        println!("  {:<18} text {:?}", slot.to_string(), text);
    }
    for seat in 0..seats {
        if surface.has_class(SlotId::DealerMarker(seat), cardtable::view::DEALER_CLASS) {
            println!("  {:<18} class \"dealer\"", SlotId::DealerMarker(seat).to_string());
        }
    }
}
