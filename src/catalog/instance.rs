use super::variant::{PizzaKind, PizzaVariant, SizeLabel};
use crate::error::{ComparisonTypeError, PizzaError};
use serde::Serialize;
use std::any::Any;
use tracing::debug;

/// One ingredient of a sized pizza, with its grams already looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIngredient {
    pub name: &'static str,
    pub grams: u32,
}

/// A pizza variant bound to a size.
#[derive(Debug, Clone, Serialize)]
pub struct PizzaInstance {
    #[serde(skip)]
    variant: &'static PizzaVariant,
    name: &'static str,
    size: SizeLabel,
    ingredients: Vec<ResolvedIngredient>,
}

impl PizzaInstance {
    /// Validates `size` against [`SizeLabel::ALL`] and resolves every ingredient's grams.
    ///
    /// # Errors
    ///
    /// Returns [`PizzaError::Validation`] listing the available sizes when `size`
    /// is not one of them. No size is ever substituted silently.
    pub fn resolve(variant: &'static PizzaVariant, size: &str) -> Result<Self, PizzaError> {
        let size: SizeLabel = size.parse()?;
        Ok(Self::with_size(variant, size))
    }

    /// Infallible counterpart of [`PizzaInstance::resolve`] for an already-parsed size.
    pub fn with_size(variant: &'static PizzaVariant, size: SizeLabel) -> Self {
        let ingredients = variant
            .ingredients
            .iter()
            .map(|ingredient| ResolvedIngredient {
                name: ingredient.name,
                grams: ingredient.grams.get(size),
            })
            .collect();
        debug!(pizza = variant.name, %size, "resolved pizza");

        Self {
            variant,
            name: variant.name,
            size,
            ingredients,
        }
    }

    pub fn variant(&self) -> &'static PizzaVariant {
        self.variant
    }

    pub fn kind(&self) -> PizzaKind {
        self.variant.kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> SizeLabel {
        self.size
    }

    pub fn ingredients(&self) -> &[ResolvedIngredient] {
        &self.ingredients
    }

    /// Grams of `ingredient` for this size, if the pizza uses it.
    pub fn quantity(&self, ingredient: &str) -> Option<u32> {
        self.ingredients
            .iter()
            .find(|resolved| resolved.name == ingredient)
            .map(|resolved| resolved.grams)
    }

    /// Compares against an arbitrary value.
    ///
    /// A pizza is never "unequal" to a non-pizza; the comparison itself is rejected.
    pub fn compare(&self, other: &dyn Any) -> Result<bool, ComparisonTypeError> {
        other
            .downcast_ref::<PizzaInstance>()
            .map(|pizza| self == pizza)
            .ok_or(ComparisonTypeError)
    }
}

impl PartialEq for PizzaInstance {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.size == other.size
    }
}

impl Eq for PizzaInstance {}
