use proptest::prelude::*;

use boxes_level::sim::{
    AssetVariant, BoxSize, IgnoreReason, Level, PresentationMode, PressOutcome, SensorEvent,
};
use boxes_level::{LevelConfig, Peripherals, SimHost};

fn started_level(seed: u64, score: i64) -> Level<SimHost> {
    let mut level = Level::new(
        LevelConfig::default(),
        SimHost::playing(),
        Peripherals::logging(),
        seed,
    );
    level.start();
    level.host_mut().score = score;
    level
}

/// One host interaction: wait, tick, then deliver a sensor reading
#[derive(Debug, Clone)]
struct Step {
    wait_ms: u64,
    sensor_id: i32,
    value: i64,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (0u64..3000, -2i32..13, 0i64..3).prop_map(|(wait_ms, sensor_id, value)| Step {
        wait_ms,
        sensor_id,
        value,
    })
}

proptest! {
    #[test]
    fn mode_follows_score_tier(score in -100i64..200) {
        let mode = PresentationMode::for_score(score);
        let expected = if score < 25 {
            PresentationMode::Symbol
        } else if score < 50 {
            PresentationMode::Color
        } else {
            PresentationMode::Mixed
        };
        prop_assert_eq!(mode, expected);
    }

    #[test]
    fn generated_targets_belong_to_their_box(seed in any::<u64>(), score in 0i64..100) {
        let mut level = started_level(seed, score);
        let generation = level.generate();
        prop_assert_eq!(generation.mode, PresentationMode::for_score(score));

        let sizes = [BoxSize::Large, BoxSize::Small];
        for (size, target) in sizes.into_iter().zip(&generation.targets) {
            let b = level.button_box(size);
            let id = b.correct_sensor_id();
            prop_assert_eq!(id, Some(target.sensor_id));
            prop_assert!(b.contains(target.sensor_id));

            let button = b.button_by_sensor(target.sensor_id);
            let expected = match target.variant {
                AssetVariant::Symbol => &button.symbol_image,
                AssetVariant::Color => &button.color_image,
            };
            prop_assert_eq!(level.displayed_image(size), expected.as_str());
        }
    }

    #[test]
    fn score_never_negative(
        seed in any::<u64>(),
        score in 0i64..10,
        steps in prop::collection::vec(step_strategy(), 1..60),
    ) {
        let mut level = started_level(seed, score);
        for step in &steps {
            level.host_mut().advance_ms(step.wait_ms);
            level.tick();
            level.on_sensor(&SensorEvent::digital(step.sensor_id, step.value));
            prop_assert!(level.host().score >= 0);
            prop_assert!(level.host().end_reasons.len() <= 1);
        }
    }

    #[test]
    fn repeated_press_scores_once(seed in any::<u64>(), sensor_id in 1i32..10) {
        let mut level = started_level(seed, 10);
        level.generate();

        let first = level.on_sensor(&SensorEvent::digital(sensor_id, 1));
        let score_after_first = level.host().score;
        prop_assert!(!matches!(first, PressOutcome::Ignored(_)));

        let second = level.on_sensor(&SensorEvent::digital(sensor_id, 1));
        prop_assert_eq!(second, PressOutcome::Ignored(IgnoreReason::AlreadyLatched));
        prop_assert_eq!(level.host().score, score_after_first);
    }
}
