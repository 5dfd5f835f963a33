//! Prelude module for convenient imports
//!
//! Re-exports the catalog, narrator, settings and error types so a caller can
//! place and narrate an order with a single `use`.
//!
//! # Example
//!
//! ```rust
//! use pizzeria::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn run_example() -> Result<(), PizzaError> {
//! let catalog = Catalog::standard();
//! let pizza = catalog.order_pizza("pepperoni", "XL")?;
//!
//! let mut narrator = Narrator::new(StdRng::seed_from_u64(7), NarratorSettings::default())?;
//! let mut order = narrator.place(pizza, Some("Baker Street 221b".to_string()));
//! for line in narrator.fulfil(&mut order)? {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Menu
pub use crate::catalog::{
    Catalog, MenuEntry, MenuFormatter, PizzaInstance, PizzaKind, PizzaVariant, QuantityStyle,
    SizeLabel,
};

// Orders
pub use crate::narrator::{MessageTemplate, Narrator, Order, OrderStage, TemplateDescriptor};
pub use crate::settings::NarratorSettings;

// Error types
pub use crate::error::{ComparisonTypeError, PizzaError, TemplateError, ValidationError};
