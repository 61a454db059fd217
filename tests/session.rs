use boxes_level::consts::MAX_POINTS_REASON;
use boxes_level::sim::{BoxSize, Level, PressOutcome, SensorEvent};
use boxes_level::{GameHost, LevelConfig, Peripherals, SimHost};

fn level_with(config: LevelConfig, seed: u64) -> Level<SimHost> {
    let mut level = Level::new(config, SimHost::playing(), Peripherals::logging(), seed);
    level.start();
    level
}

#[test]
fn test_perfect_session_reaches_max_points() {
    // One extra latch slot so every sensor id 1..=10 is in range
    let config = LevelConfig {
        sensor_flags: 11,
        ..LevelConfig::default()
    };
    let mut level = level_with(config, 2024);

    let mut generations = 0;
    while !level.host().has_game_ended() && level.host().now_ms < 30 * 60 * 1000 {
        level.host_mut().advance_ms(1000);
        if !level.tick() {
            continue;
        }
        generations += 1;
        for size in [BoxSize::Large, BoxSize::Small] {
            if let Some(id) = level.button_box(size).correct_sensor_id() {
                assert_eq!(
                    level.on_sensor(&SensorEvent::digital(id, 1)),
                    PressOutcome::Correct(size)
                );
            }
        }
    }

    assert_eq!(level.host().score, 100);
    assert_eq!(level.host().end_reasons, vec![MAX_POINTS_REASON.to_string()]);
    assert_eq!(generations, 25);
    assert!(!level.tick());
}

#[test]
fn test_solving_both_brings_next_target_sooner() {
    let config = LevelConfig {
        sensor_flags: 11,
        ..LevelConfig::default()
    };
    let mut level = level_with(config, 7);
    level.host_mut().advance_ms(2000);
    assert!(level.tick());

    for size in [BoxSize::Large, BoxSize::Small] {
        let id = level.button_box(size).correct_sensor_id().unwrap();
        level.on_sensor(&SensorEvent::digital(id, 1));
    }
    // Solved at 2s: next generation at 3s instead of 8s
    assert_eq!(level.schedule().due_at_s(), 3);
    level.host_mut().advance_ms(1000);
    assert!(level.tick());
}

#[test]
fn test_unsolved_targets_expire_after_interval() {
    let mut level = level_with(LevelConfig::default(), 99);
    level.host_mut().advance_ms(2000);
    assert!(level.tick());
    let first = level.schedule().due_at_s();
    assert_eq!(first, 8);

    level.host_mut().advance_ms(5000);
    assert!(!level.tick());
    level.host_mut().advance_ms(1000);
    assert!(level.tick());
    assert_eq!(level.schedule().due_at_s(), 14);
}

#[test]
fn test_wrong_press_costs_points() {
    let mut level = level_with(LevelConfig::default(), 3);
    level.host_mut().advance_ms(2000);
    level.tick();
    level.host_mut().score = 20;

    let large = level.button_box(BoxSize::Large).correct_sensor_id().unwrap();
    let small = level.button_box(BoxSize::Small).correct_sensor_id().unwrap();
    let wrong = (1..=9).find(|id| *id != large && *id != small).unwrap();

    assert_eq!(level.on_sensor(&SensorEvent::digital(wrong, 1)), PressOutcome::Wrong);
    assert_eq!(level.host().score, 18);
}

#[test]
fn test_config_from_json_drives_level() {
    let config = LevelConfig::from_json_str(
        r#"{
            "smallBoxSensors": [1, 2, 3],
            "largeBoxSensors": [4, 5, 6],
            "smallBoxSymbolMap": [0, 1, 2],
            "smallBoxColorMap": [0, 1, 2],
            "largeBoxSymbolMap": [2, 1, 0],
            "largeBoxColorMap": [2, 1, 0],
            "sensorFlags": 7,
            "maxPoints": 4
        }"#,
    )
    .unwrap();
    let mut level = level_with(config, 11);
    assert_eq!(level.button_box(BoxSize::Small).buttons().len(), 3);

    level.host_mut().advance_ms(2000);
    assert!(level.tick());
    for size in [BoxSize::Large, BoxSize::Small] {
        let id = level.button_box(size).correct_sensor_id().unwrap();
        level.on_sensor(&SensorEvent::digital(id, 1));
    }
    assert_eq!(level.host().score, 4);
    assert!(level.host().has_game_ended());
}
