use crate::error::ValidationError;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The sizes a pizza can be ordered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SizeLabel {
    L,
    XL,
}

impl SizeLabel {
    /// All sizes, in menu order.
    pub const ALL: [SizeLabel; 2] = [SizeLabel::L, SizeLabel::XL];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
        }
    }

    /// Comma-joined list of every size, e.g. `L, XL`.
    pub fn available() -> String {
        Self::ALL.iter().map(SizeLabel::as_str).join(", ")
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeLabel {
    type Err = ValidationError;

    /// Matches the label exactly; callers normalize case at the input boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSize {
                requested: s.to_string(),
                available: Self::available(),
            })
    }
}

/// Grams of one ingredient for each size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeQuantities {
    pub l: u32,
    pub xl: u32,
}

impl SizeQuantities {
    pub fn get(&self, size: SizeLabel) -> u32 {
        match size {
            SizeLabel::L => self.l,
            SizeLabel::XL => self.xl,
        }
    }
}

/// An ingredient with its per-size quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: &'static str,
    pub grams: SizeQuantities,
}

impl Ingredient {
    const fn new(name: &'static str, l: u32, xl: u32) -> Self {
        Self {
            name,
            grams: SizeQuantities { l, xl },
        }
    }

    /// The name as shown to customers (`tomato_sauce` -> `tomato sauce`).
    pub fn display_name(&self) -> String {
        display_name(self.name)
    }
}

pub(crate) fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Identity of a pizza variant. Two instances are the same pizza iff kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PizzaKind {
    Margherita,
    Pepperoni,
    Hawaiian,
}

/// Static definition of a pizza on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaVariant {
    pub kind: PizzaKind,
    pub name: &'static str,
    pub icon: &'static str,
    pub ingredients: &'static [Ingredient],
}

impl PizzaVariant {
    /// Ingredient names in recipe order.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ingredients.iter().map(|ingredient| ingredient.name)
    }
}

pub static MARGHERITA: PizzaVariant = PizzaVariant {
    kind: PizzaKind::Margherita,
    name: "Margherita",
    icon: "\u{1F9C0}",
    ingredients: &[
        Ingredient::new("tomato_sauce", 250, 400),
        Ingredient::new("mozzarella", 500, 800),
        Ingredient::new("tomatoes", 300, 500),
    ],
};

pub static PEPPERONI: PizzaVariant = PizzaVariant {
    kind: PizzaKind::Pepperoni,
    name: "Pepperoni",
    icon: "\u{1F355}",
    ingredients: &[
        Ingredient::new("tomato_sauce", 250, 400),
        Ingredient::new("mozzarella", 400, 600),
        Ingredient::new("pepperoni", 700, 1000),
    ],
};

pub static HAWAIIAN: PizzaVariant = PizzaVariant {
    kind: PizzaKind::Hawaiian,
    name: "Hawaiian",
    icon: "\u{1F34D}",
    ingredients: &[
        Ingredient::new("tomato_sauce", 250, 400),
        Ingredient::new("mozzarella", 300, 500),
        Ingredient::new("chicken", 400, 700),
        Ingredient::new("pineapples", 200, 500),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_parsing_is_exact() {
        assert_eq!("L".parse::<SizeLabel>(), Ok(SizeLabel::L));
        assert_eq!("XL".parse::<SizeLabel>(), Ok(SizeLabel::XL));
        assert!("xl".parse::<SizeLabel>().is_err());
        assert!("ML".parse::<SizeLabel>().is_err());
    }

    #[test]
    fn display_name_replaces_underscores() {
        assert_eq!(MARGHERITA.ingredients[0].display_name(), "tomato sauce");
    }
}
