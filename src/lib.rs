//! # Pizzeria - Menu and Order Simulator
//!
//! **Pizzeria** models a small fixed pizza menu and narrates the lifecycle of an
//! order (accepted, baked, picked up or delivered) with randomized wait times.
//!
//! ## Core Workflow
//!
//! 1.  **Build the menu**: [`Catalog::standard`](catalog::Catalog::standard) creates the
//!     immutable table of variants. Pass it wherever pizzas need to be looked up.
//! 2.  **Resolve a pizza**: [`Catalog::order_pizza`](catalog::Catalog::order_pizza) finds a
//!     variant by name and binds it to a size, resolving ingredient quantities.
//! 3.  **Render the menu**: [`MenuFormatter`](catalog::MenuFormatter) turns variants and
//!     sized pizzas into text.
//! 4.  **Narrate the order**: a [`Narrator`](narrator::Narrator) places the order and
//!     produces one status line per lifecycle step.
//!
//! ## Quick Start
//!
//! ```rust
//! use pizzeria::prelude::*;
//!
//! let catalog = Catalog::standard();
//! let pizza = catalog.order_pizza("margherita", "L").unwrap();
//!
//! assert_eq!(pizza.quantity("mozzarella"), Some(500));
//! assert_eq!(
//!     MenuFormatter::format_quantities(&pizza, QuantityStyle::Compact),
//!     "tomato sauce: 250,\nmozzarella: 500,\ntomatoes: 300"
//! );
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod narrator;
pub mod prelude;
pub mod settings;
