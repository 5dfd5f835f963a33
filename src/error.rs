use crate::narrator::OrderStage;
use thiserror::Error;

/// Top-level error for every fallible operation in the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PizzaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ComparisonType(#[from] ComparisonTypeError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Order #{order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: u32,
        from: OrderStage,
        to: OrderStage,
    },
}

/// Rejected user input. The message always lists the accepted values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No such size! Available sizes: {available}.")]
    UnknownSize { requested: String, available: String },

    #[error("We have not this pizza, sorry: '{requested}'. Available pizzas: {available}.")]
    UnknownPizza { requested: String, available: String },

    #[error("Invalid time range {min}..={max}: expected 1 <= min <= max")]
    InvalidTimeRange { min: u32, max: u32 },
}

/// Raised when a pizza is compared with something that is not a pizza.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Alas, the object on the right is not a pizza!")]
pub struct ComparisonTypeError;

/// Errors from parsing or rendering a message template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unclosed placeholder starting at byte {position} in pattern '{pattern}'")]
    UnclosedPlaceholder { pattern: String, position: usize },

    #[error("Invalid placeholder '{{{placeholder}}}' in pattern '{pattern}'")]
    InvalidPlaceholder { pattern: String, placeholder: String },

    #[error("Placeholder {{{index}}} has no matching field (only {available} supplied)")]
    MissingField { index: usize, available: usize },
}
