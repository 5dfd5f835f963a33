//! Tests for order placement, lifecycle transitions, and status messages.
mod common;
use common::*;
use pizzeria::prelude::*;
use rand::SeedableRng;

#[test]
fn test_accept_message() {
    let narrator = seeded_narrator(1);
    let order = Order::with_id(42, pizza("Pepperoni", "L"), None);
    assert_eq!(
        narrator.accept(&order),
        "Order #42 (pizza Pepperoni) accepted. Wait..."
    );
}

#[test]
fn test_pickup_lifecycle() {
    let mut narrator = seeded_narrator(2);
    let mut order = narrator.place(pizza("pepperoni", "L"), None);
    assert_eq!(order.stage(), OrderStage::Placed);

    let lines = narrator.fulfil(&mut order).unwrap();
    let masked: Vec<String> = lines.iter().map(|line| mask_digits(line)).collect();
    assert_eq!(
        masked,
        vec![
            "Order ## (pizza Pepperoni) accepted. Wait...",
            "bake - # min!",
            "🏠 Please pick your order ## within # minutes!",
        ]
    );
    assert_eq!(order.stage(), OrderStage::PickedUp);
    assert!(lines[2].contains(&format!("#{} ", order.id())));
}

#[test]
fn test_delivery_lifecycle() {
    let mut narrator = seeded_narrator(3);
    let mut order = narrator.place(
        pizza("hawaiian", "XL"),
        Some("Russia Moscow Avito".to_string()),
    );

    let lines = narrator.fulfil(&mut order).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        mask_digits(&lines[2]),
        "🚚 Deliver your order ## to Russia Moscow Avito in # minutes!"
    );
    assert_eq!(order.stage(), OrderStage::Delivered);
}

#[test]
fn test_times_stay_in_range() {
    let mut narrator = seeded_narrator(4);
    for _ in 0..200 {
        let mut order = narrator.place(pizza("margherita", "XL"), None);
        assert!(order.id() <= 10_000);
        let bake = narrator.bake(&mut order).unwrap();
        let pickup = narrator.pickup(&mut order).unwrap();
        assert!((1..=30).contains(&number_before(&bake, " min!")));
        assert!((1..=30).contains(&number_before(&pickup, " minutes!")));
    }
}

#[test]
fn test_custom_time_range() {
    let settings = NarratorSettings::default().with_minutes(5, 5).unwrap();
    let mut narrator = Narrator::new(rand::rngs::StdRng::from_seed([7; 32]), settings).unwrap();
    let mut order = Order::with_id(9, pizza("Margherita", "L"), Some("Home".to_string()));
    assert_eq!(narrator.bake(&mut order).unwrap(), "bake - 5 min!");
    assert_eq!(
        narrator.deliver(&mut order).unwrap(),
        "🚚 Deliver your order #9 to Home in 5 minutes!"
    );
}

#[test]
fn test_invalid_time_range() {
    assert_eq!(
        NarratorSettings::default().with_minutes(10, 3),
        Err(ValidationError::InvalidTimeRange { min: 10, max: 3 })
    );
    assert!(NarratorSettings::default().with_minutes(0, 3).is_err());
}

#[test]
fn test_narrator_rejects_bad_settings() {
    let reversed = NarratorSettings {
        min_minutes: 10,
        max_minutes: 3,
        ..Default::default()
    };
    assert!(matches!(
        Narrator::new(rand::rngs::StdRng::seed_from_u64(1), reversed),
        Err(PizzaError::Validation(ValidationError::InvalidTimeRange { min: 10, max: 3 }))
    ));

    let zero = NarratorSettings {
        min_minutes: 0,
        max_minutes: 0,
        ..Default::default()
    };
    assert!(matches!(
        Narrator::new(rand::rngs::StdRng::seed_from_u64(1), zero),
        Err(PizzaError::Validation(ValidationError::InvalidTimeRange { min: 0, max: 0 }))
    ));
}

#[test]
fn test_narrator_keeps_its_settings() {
    let settings = NarratorSettings::default()
        .with_minutes(2, 4)
        .unwrap()
        .with_seed(Some(3));
    let narrator = Narrator::new(settings.rng(), settings).unwrap();
    assert_eq!(narrator.settings(), &settings);
}

#[test]
fn test_same_seed_same_story() {
    let run = |seed| {
        let mut narrator = seeded_narrator(seed);
        let mut order = narrator.place(pizza("Hawaiian", "L"), None);
        narrator.fulfil(&mut order).unwrap()
    };
    assert_eq!(run(11), run(11));
}

#[test]
fn test_cannot_skip_baking() {
    let mut narrator = seeded_narrator(5);
    let mut order = Order::with_id(1, pizza("Pepperoni", "XL"), None);
    let err = narrator.pickup(&mut order).unwrap_err();
    assert_eq!(
        err,
        PizzaError::InvalidTransition {
            order_id: 1,
            from: OrderStage::Placed,
            to: OrderStage::PickedUp,
        }
    );
    assert_eq!(order.stage(), OrderStage::Placed);
}

#[test]
fn test_fulfilment_matches_address() {
    let mut narrator = seeded_narrator(6);

    let mut pickup_order = Order::with_id(1, pizza("Pepperoni", "XL"), None);
    narrator.bake(&mut pickup_order).unwrap();
    assert!(narrator.deliver(&mut pickup_order).is_err());

    let mut delivery_order = Order::with_id(2, pizza("Pepperoni", "XL"), Some("Moscow".into()));
    narrator.bake(&mut delivery_order).unwrap();
    assert!(narrator.pickup(&mut delivery_order).is_err());
}

#[test]
fn test_refused_delivery_leaves_stage_untouched() {
    let mut narrator = seeded_narrator(10);
    let mut order = Order::with_id(4, pizza("Hawaiian", "L"), None);

    let err = narrator.deliver(&mut order).unwrap_err();
    assert_eq!(
        err,
        PizzaError::InvalidTransition {
            order_id: 4,
            from: OrderStage::Placed,
            to: OrderStage::Delivered,
        }
    );
    assert_eq!(order.stage(), OrderStage::Placed);

    narrator.bake(&mut order).unwrap();
    assert!(narrator.deliver(&mut order).is_err());
    assert_eq!(order.stage(), OrderStage::Baked);
}

#[test]
fn test_no_stage_is_revisited() {
    let mut narrator = seeded_narrator(7);
    let mut order = Order::with_id(3, pizza("Margherita", "L"), None);
    narrator.fulfil(&mut order).unwrap();
    assert!(narrator.bake(&mut order).is_err());
    assert!(narrator.pickup(&mut order).is_err());
    assert_eq!(order.stage(), OrderStage::PickedUp);
}

#[test]
fn test_custom_template() {
    let mut narrator = seeded_narrator(8);
    let template = MessageTemplate::parse("Order {0} for {1}: ready in {} min").unwrap();
    let line = narrator
        .narrate(
            &TemplateDescriptor::Pattern(template),
            &["7".to_string(), "Alice".to_string()],
        )
        .unwrap();
    assert_eq!(mask_digits(&line), "Order # for Alice: ready in # min");
    assert!(line.starts_with("Order 7 for Alice"));
}

#[test]
fn test_default_descriptor_uses_label() {
    let mut narrator = seeded_narrator(9);
    let line = narrator
        .narrate(&TemplateDescriptor::Default { label: "deliv" }, &[])
        .unwrap();
    assert_eq!(mask_digits(&line), "deliv - # min!");
}
