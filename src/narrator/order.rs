use crate::catalog::PizzaInstance;
use crate::error::PizzaError;
use crate::settings::NarratorSettings;
use rand::Rng;
use std::fmt;

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStage {
    Placed,
    Baked,
    PickedUp,
    Delivered,
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStage::Placed => "placed",
            OrderStage::Baked => "baked",
            OrderStage::PickedUp => "picked up",
            OrderStage::Delivered => "delivered",
        };
        f.write_str(name)
    }
}

/// A single customer order. Lives for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Order {
    id: u32,
    pizza: PizzaInstance,
    delivery: Option<String>,
    stage: OrderStage,
}

impl Order {
    /// Places an order with a random id. Ids are not guaranteed unique.
    pub fn place<R: Rng>(
        pizza: PizzaInstance,
        delivery: Option<String>,
        rng: &mut R,
        settings: &NarratorSettings,
    ) -> Self {
        let id = rng.random_range(0..=settings.max_order_id);
        Self::with_id(id, pizza, delivery)
    }

    pub fn with_id(id: u32, pizza: PizzaInstance, delivery: Option<String>) -> Self {
        Self {
            id,
            pizza,
            delivery,
            stage: OrderStage::Placed,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pizza(&self) -> &PizzaInstance {
        &self.pizza
    }

    /// Delivery address; `None` means the customer picks the order up.
    pub fn delivery(&self) -> Option<&str> {
        self.delivery.as_deref()
    }

    pub fn stage(&self) -> OrderStage {
        self.stage
    }

    /// The stage this order ends in once fulfilled.
    pub fn final_stage(&self) -> OrderStage {
        if self.delivery.is_some() {
            OrderStage::Delivered
        } else {
            OrderStage::PickedUp
        }
    }

    /// Moves to `next`, rejecting anything but `Placed -> Baked -> final_stage()`.
    pub(crate) fn advance(&mut self, next: OrderStage) -> Result<(), PizzaError> {
        self.check_transition(next)?;
        self.stage = next;
        Ok(())
    }

    /// Fails with `InvalidTransition` if `next` is not reachable from the current stage.
    pub fn check_transition(&self, next: OrderStage) -> Result<(), PizzaError> {
        let allowed = match (self.stage, next) {
            (OrderStage::Placed, OrderStage::Baked) => true,
            (OrderStage::Baked, stage) => stage == self.final_stage(),
            _ => false,
        };
        if !allowed {
            return Err(PizzaError::InvalidTransition {
                order_id: self.id,
                from: self.stage,
                to: next,
            });
        }
        Ok(())
    }
}
