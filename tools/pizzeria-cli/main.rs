use clap::{Parser, Subcommand};
use pizzeria::logging::setup_tracing;
use pizzeria::prelude::*;
use tracing::info;

/// Order a pizza or browse the menu
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed the random source for reproducible order ids and wait times
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Shortest simulated wait in minutes
    #[arg(long, global = true, default_value_t = 1)]
    min_minutes: u32,

    /// Longest simulated wait in minutes
    #[arg(long, global = true, default_value_t = 30)]
    max_minutes: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place an order, bake it, and arrange pickup or delivery
    Order {
        /// Name of the pizza (case-insensitive)
        pizza: String,

        /// Pizza size (L or XL)
        #[arg(long)]
        size: String,

        /// Delivery address; without it the order is picked up
        #[arg(long)]
        delivery: Option<String>,
    },
    /// Print the menu, or ingredient quantities for one size
    Menu {
        /// Show ingredient quantities for this size (L or XL)
        #[arg(long)]
        values: Option<String>,

        /// Print the menu as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    setup_tracing();
    let cli = Cli::parse();

    let settings = NarratorSettings::default()
        .with_minutes(cli.min_minutes, cli.max_minutes)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
        .with_seed(cli.seed);
    let catalog = Catalog::standard();

    let result = match cli.command {
        Command::Order {
            pizza,
            size,
            delivery,
        } => run_order(&catalog, settings, &pizza, &size, delivery),
        Command::Menu { values, json } => run_menu(&catalog, values.as_deref(), json),
    };

    if let Err(e) = result {
        exit_with_error(&e.to_string());
    }
}

/// Resolves the pizza, then prints the accept, bake and fulfilment lines.
fn run_order(
    catalog: &Catalog,
    settings: NarratorSettings,
    pizza: &str,
    size: &str,
    delivery: Option<String>,
) -> Result<(), PizzaError> {
    let pizza = catalog.order_pizza(pizza, &size.to_uppercase())?;
    let mut narrator = Narrator::new(settings.rng(), settings)?;
    let mut order = narrator.place(pizza, delivery);

    for line in narrator.fulfil(&mut order)? {
        println!("{}", line);
    }
    let settings = narrator.settings();
    info!(
        order_id = order.id(),
        min_minutes = settings.min_minutes,
        max_minutes = settings.max_minutes,
        seeded = settings.seed.is_some(),
        "done"
    );
    Ok(())
}

fn run_menu(catalog: &Catalog, values: Option<&str>, json: bool) -> Result<(), PizzaError> {
    let size = values
        .map(|size| size.to_uppercase().parse::<SizeLabel>())
        .transpose()?;

    if json {
        let rendered = match size {
            Some(size) => {
                let pizzas: Vec<PizzaInstance> = catalog
                    .variants()
                    .iter()
                    .map(|variant| PizzaInstance::with_size(*variant, size))
                    .collect();
                serde_json::to_string_pretty(&pizzas)
            }
            None => serde_json::to_string_pretty(catalog.variants()),
        };
        let rendered =
            rendered.unwrap_or_else(|e| exit_with_error(&format!("Failed to encode menu: {}", e)));
        println!("{}", rendered);
        return Ok(());
    }

    match size {
        Some(size) => println!("{}", MenuFormatter::detailed_menu(catalog, size)),
        None => println!("{}", MenuFormatter::short_menu(catalog)),
    }
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
