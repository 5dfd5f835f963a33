use super::instance::PizzaInstance;
use super::registry::Catalog;
use super::variant::{PizzaVariant, SizeLabel, display_name};
use itertools::Itertools;

/// The data a pizza must expose to be rendered on the menu.
pub trait MenuEntry {
    fn name(&self) -> &str;
    fn icon(&self) -> &str;
    /// Raw ingredient names in recipe order.
    fn ingredients(&self) -> Vec<&str>;
    fn sizes(&self) -> &[SizeLabel];
}

impl MenuEntry for PizzaVariant {
    fn name(&self) -> &str {
        self.name
    }

    fn icon(&self) -> &str {
        self.icon
    }

    fn ingredients(&self) -> Vec<&str> {
        self.ingredient_names().collect()
    }

    fn sizes(&self) -> &[SizeLabel] {
        &SizeLabel::ALL
    }
}

// A sized pizza still lists every size it could have been ordered in.
impl MenuEntry for PizzaInstance {
    fn name(&self) -> &str {
        PizzaInstance::name(self)
    }

    fn icon(&self) -> &str {
        self.variant().icon
    }

    fn ingredients(&self) -> Vec<&str> {
        PizzaInstance::ingredients(self)
            .iter()
            .map(|resolved| resolved.name)
            .collect()
    }

    fn sizes(&self) -> &[SizeLabel] {
        &SizeLabel::ALL
    }
}

/// How ingredient quantities are phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityStyle {
    /// `tomato sauce: 250`
    #[default]
    Compact,
    /// `You need 250 grams of tomato sauce`
    Verbose,
}

/// Renders menu entries and sized pizzas as text.
pub struct MenuFormatter;

impl MenuFormatter {
    /// `- {name} {icon}: {ingredients}. Available sizes: {sizes}`
    pub fn describe_short(entry: &impl MenuEntry) -> String {
        let ingredients = entry.ingredients().into_iter().map(display_name).join(", ");
        let sizes = entry.sizes().iter().map(SizeLabel::as_str).join(", ");
        format!(
            "- {} {}: {}. Available sizes: {}",
            entry.name(),
            entry.icon(),
            ingredients,
            sizes
        )
    }

    /// Header line followed by the compact quantity list.
    pub fn describe_detailed(pizza: &PizzaInstance) -> String {
        format!(
            "- {} {}:\n{}",
            pizza.name(),
            pizza.variant().icon,
            Self::format_quantities(pizza, QuantityStyle::Compact)
        )
    }

    /// One line per ingredient, lines joined by `,\n` with no trailing separator.
    pub fn format_quantities(pizza: &PizzaInstance, style: QuantityStyle) -> String {
        PizzaInstance::ingredients(pizza)
            .iter()
            .map(|resolved| {
                let name = display_name(resolved.name);
                match style {
                    QuantityStyle::Compact => format!("{}: {}", name, resolved.grams),
                    QuantityStyle::Verbose => {
                        format!("You need {} grams of {}", resolved.grams, name)
                    }
                }
            })
            .join(",\n")
    }

    /// Short descriptions of every variant, one per line.
    pub fn short_menu(catalog: &Catalog) -> String {
        catalog
            .variants()
            .iter()
            .map(|variant| Self::describe_short(*variant))
            .join("\n")
    }

    /// Detailed descriptions of every variant at `size`, separated by blank lines.
    pub fn detailed_menu(catalog: &Catalog, size: SizeLabel) -> String {
        catalog
            .variants()
            .iter()
            .map(|variant| Self::describe_detailed(&PizzaInstance::with_size(*variant, size)))
            .join("\n\n")
    }
}
