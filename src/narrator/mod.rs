//! Turns an order's lifecycle into the status lines a customer sees.

pub mod order;
pub mod template;

pub use order::{Order, OrderStage};
pub use template::{DELIVERY_PATTERN, MessageTemplate, PICKUP_PATTERN, Segment, TemplateDescriptor};

use crate::catalog::PizzaInstance;
use crate::error::PizzaError;
use crate::settings::NarratorSettings;
use rand::Rng;
use tracing::{debug, info};

/// Produces status messages for orders, drawing a fresh wait time for every step.
pub struct Narrator<R: Rng> {
    rng: R,
    settings: NarratorSettings,
    bake: TemplateDescriptor,
    pickup: TemplateDescriptor,
    delivery: TemplateDescriptor,
}

impl<R: Rng> Narrator<R> {
    /// Fails if `settings` describe an invalid wait range.
    pub fn new(rng: R, settings: NarratorSettings) -> Result<Self, PizzaError> {
        settings.validate()?;
        Ok(Self {
            rng,
            settings,
            bake: TemplateDescriptor::Default { label: "bake" },
            pickup: TemplateDescriptor::Pattern(MessageTemplate::parse(PICKUP_PATTERN)?),
            delivery: TemplateDescriptor::Pattern(MessageTemplate::parse(DELIVERY_PATTERN)?),
        })
    }

    pub fn settings(&self) -> &NarratorSettings {
        &self.settings
    }

    /// Places a new order using this narrator's random source.
    pub fn place(&mut self, pizza: PizzaInstance, delivery: Option<String>) -> Order {
        let order = Order::place(pizza, delivery, &mut self.rng, &self.settings);
        info!(order_id = order.id(), pizza = order.pizza().name(), "order placed");
        order
    }

    /// `Order #{id} (pizza {name}) accepted. Wait...`
    pub fn accept(&self, order: &Order) -> String {
        format!(
            "Order #{} (pizza {}) accepted. Wait...",
            order.id(),
            order.pizza().name()
        )
    }

    pub fn bake(&mut self, order: &mut Order) -> Result<String, PizzaError> {
        order.check_transition(OrderStage::Baked)?;
        let fields = [order.id().to_string(), order.pizza().name().to_string()];
        let minutes = self.draw_minutes();
        let line = self.bake.render(&fields, minutes)?;
        order.advance(OrderStage::Baked)?;
        Ok(line)
    }

    pub fn pickup(&mut self, order: &mut Order) -> Result<String, PizzaError> {
        order.check_transition(OrderStage::PickedUp)?;
        let fields = [order.id().to_string()];
        let minutes = self.draw_minutes();
        let line = self.pickup.render(&fields, minutes)?;
        order.advance(OrderStage::PickedUp)?;
        Ok(line)
    }

    /// Fails unless the order carries a delivery address.
    pub fn deliver(&mut self, order: &mut Order) -> Result<String, PizzaError> {
        let refused = PizzaError::InvalidTransition {
            order_id: order.id(),
            from: order.stage(),
            to: OrderStage::Delivered,
        };
        let address = order.delivery().ok_or(refused)?;
        order.check_transition(OrderStage::Delivered)?;
        let fields = [order.id().to_string(), address.to_string()];
        let minutes = self.draw_minutes();
        let line = self.delivery.render(&fields, minutes)?;
        order.advance(OrderStage::Delivered)?;
        Ok(line)
    }

    /// Runs the whole lifecycle: accept, bake, then pickup or delivery.
    pub fn fulfil(&mut self, order: &mut Order) -> Result<Vec<String>, PizzaError> {
        let mut lines = vec![self.accept(order), self.bake(order)?];
        let last = match order.final_stage() {
            OrderStage::Delivered => self.deliver(order)?,
            _ => self.pickup(order)?,
        };
        lines.push(last);
        info!(order_id = order.id(), stage = %order.stage(), "order fulfilled");
        Ok(lines)
    }

    /// Renders `descriptor` with its own freshly drawn wait time.
    pub fn narrate(
        &mut self,
        descriptor: &TemplateDescriptor,
        fields: &[String],
    ) -> Result<String, PizzaError> {
        let minutes = self.draw_minutes();
        Ok(descriptor.render(fields, minutes)?)
    }

    fn draw_minutes(&mut self) -> u32 {
        let minutes = self
            .rng
            .random_range(self.settings.min_minutes..=self.settings.max_minutes);
        debug!(minutes, "drew wait time");
        minutes
    }
}
