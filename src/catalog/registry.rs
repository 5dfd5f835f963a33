use super::instance::PizzaInstance;
use super::variant::{HAWAIIAN, MARGHERITA, PEPPERONI, PizzaVariant};
use crate::error::{PizzaError, ValidationError};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

/// The immutable table of every pizza on the menu.
///
/// Built once at startup and handed to whatever needs to look pizzas up;
/// nothing in the crate reaches for a global menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    variants: Vec<&'static PizzaVariant>,
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// The standard menu: Margherita, Pepperoni, Hawaiian, in that order.
    pub fn standard() -> Self {
        Self::from_variants(vec![&MARGHERITA, &PEPPERONI, &HAWAIIAN])
    }

    pub fn from_variants(variants: Vec<&'static PizzaVariant>) -> Self {
        let by_name = variants
            .iter()
            .enumerate()
            .map(|(idx, variant)| (variant.name.to_lowercase(), idx))
            .collect();
        Self { variants, by_name }
    }

    /// Variants in menu order.
    pub fn variants(&self) -> &[&'static PizzaVariant] {
        &self.variants
    }

    /// Case-insensitive lookup by pizza name.
    pub fn find(&self, name: &str) -> Result<&'static PizzaVariant, PizzaError> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| self.variants[idx])
            .ok_or_else(|| {
                ValidationError::UnknownPizza {
                    requested: name.to_string(),
                    available: self.available(),
                }
                .into()
            })
    }

    /// Looks up `name` and binds it to `size`.
    pub fn order_pizza(&self, name: &str, size: &str) -> Result<PizzaInstance, PizzaError> {
        let variant = self.find(name)?;
        debug!(pizza = variant.name, size, "ordering pizza");
        PizzaInstance::resolve(variant, size)
    }

    /// Comma-joined pizza names in menu order.
    pub fn available(&self) -> String {
        self.variants.iter().map(|variant| variant.name).join(", ")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
