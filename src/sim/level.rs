//! The Boxes level
//!
//! Two boxes each show a target; players press the matching button before the next
//! target is generated. The host drives the level through four hooks:
//! - [`Level::start`] once per session
//! - [`Level::tick`] periodically
//! - [`Level::on_sensor`] once per raw sensor event
//! - [`Level::end`] when the session is over
//!
//! All hooks take `&mut self`, so generation and input handling can never interleave.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::SensorId;
use super::boxes::{BoxSize, ButtonBox};
use super::input::SensorEvent;
use super::latch::SensorLatches;
use super::schedule::GenerationSchedule;
use super::target::{self, Generation};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::host::{GameHost, GamePhase};
use crate::peripherals::{PeripheralResult, Peripherals, best_effort};
use crate::settings::LevelConfig;
use crate::strip_ext;

/// Why a sensor event did not count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Value did not read as a press
    NotPressed,
    /// Sensor id outside the latch range
    OutOfRange,
    /// Sensor already pressed since the last generation
    AlreadyLatched,
}

/// What a sensor event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    Ignored(IgnoreReason),
    /// Solved the target of this box
    Correct(BoxSize),
    /// Pressed a button that is not a current target
    Wrong,
}

pub struct Level<H: GameHost> {
    config: LevelConfig,
    host: H,
    peripherals: Peripherals,
    rng: Pcg32,
    large_box: ButtonBox,
    small_box: ButtonBox,
    latches: SensorLatches,
    schedule: GenerationSchedule,
    /// Image currently shown for each box
    large_image: String,
    small_image: String,
    /// Host time at session start
    start_ms: u64,
}

impl<H: GameHost> Level<H> {
    /// Build the boxes, size the latches and prepare the drawing surface.
    pub fn new(config: LevelConfig, host: H, peripherals: Peripherals, seed: u64) -> Self {
        let defaults = LevelConfig::default();
        let large_sensors = non_empty_or(
            &config.large_box_sensors,
            &defaults.large_box_sensors,
            "largeBoxSensors",
        );
        let small_sensors = non_empty_or(
            &config.small_box_sensors,
            &defaults.small_box_sensors,
            "smallBoxSensors",
        );

        let large_box = ButtonBox::from_tables(
            large_sensors,
            &config.button_symbol_images,
            &config.button_color_images,
            &config.large_box_symbol_map,
            &config.large_box_color_map,
            BoxSize::Large,
        );
        let small_box = ButtonBox::from_tables(
            small_sensors,
            &config.button_symbol_images,
            &config.button_color_images,
            &config.small_box_symbol_map,
            &config.small_box_color_map,
            BoxSize::Small,
        );

        let latches = SensorLatches::new(config.sensor_flags);
        let schedule = GenerationSchedule::new(
            config.first_generation_delay_s,
            config.time_between_buttons,
            config.solved_grace_s,
        );

        log::info!(
            "Boxes level initialized: {} large + {} small buttons, {} latches, seed {}",
            large_box.buttons().len(),
            small_box.buttons().len(),
            latches.len(),
            seed
        );

        let mut level = Self {
            large_image: config.start_image.clone(),
            small_image: config.start_image.clone(),
            config,
            host,
            peripherals,
            rng: Pcg32::seed_from_u64(seed),
            large_box,
            small_box,
            latches,
            schedule,
            start_ms: 0,
        };
        level.prepare_surface();
        level
    }

    // === Hooks ===

    /// Begin a session: zero the score, restart the clock, show placeholders.
    ///
    /// Both boxes lose any target left from a previous session, so a press before the
    /// first generation counts as wrong.
    pub fn start(&mut self) {
        self.host.adjust_score(0, false);
        self.start_ms = self.host.current_time_ms();
        self.schedule.restart();

        self.large_box.set_correct_sensor_id(None);
        self.small_box.set_correct_sensor_id(None);
        self.large_image = self.config.start_image.clone();
        self.small_image = self.config.start_image.clone();

        self.prepare_surface();
        self.draw_images();

        self.latches.reset();
        self.light_all_buttons();

        log::info!("Boxes level started at {} ms", self.start_ms);
    }

    /// Periodic poll. Generates new targets when due; returns true if it did.
    pub fn tick(&mut self) -> bool {
        if self.host.has_game_ended() || self.host.phase() != GamePhase::Playing {
            return false;
        }
        let elapsed_s = self.elapsed_s();
        if !self.schedule.poll(elapsed_s) {
            return false;
        }
        self.generate();
        log::debug!("Next generation due at {}s", self.schedule.due_at_s());
        true
    }

    /// Handle one raw sensor event
    pub fn on_sensor(&mut self, event: &SensorEvent) -> PressOutcome {
        if !event.value.is_pressed() {
            return PressOutcome::Ignored(IgnoreReason::NotPressed);
        }

        let sensor_id = event.sensor_id;
        if self.latches.slot(sensor_id).is_none() {
            log::debug!("Sensor {sensor_id} out of range, ignored");
            return PressOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        if !self.latches.try_latch(sensor_id) {
            return PressOutcome::Ignored(IgnoreReason::AlreadyLatched);
        }

        let outcome = if Some(sensor_id) == self.large_box.correct_sensor_id() {
            self.solve(BoxSize::Large);
            PressOutcome::Correct(BoxSize::Large)
        } else if Some(sensor_id) == self.small_box.correct_sensor_id() {
            self.solve(BoxSize::Small);
            PressOutcome::Correct(BoxSize::Small)
        } else {
            self.peripherals.audio.play(SoundEffect::Error);
            if self.host.score() > 1 {
                self.host.adjust_score(-POINTS_PER_MISS, true);
            }
            PressOutcome::Wrong
        };
        log::debug!("Sensor {sensor_id}: {outcome:?}, score {}", self.host.score());

        if self.large_box.is_solved() && self.small_box.is_solved() {
            let elapsed_s = self.elapsed_s();
            self.schedule.pull_forward(elapsed_s);
            log::debug!("Both boxes solved, next generation at {}s", self.schedule.due_at_s());
        }

        if self.host.score() >= self.config.max_points && !self.host.has_game_ended() {
            log::info!("Max points reached ({})", self.host.score());
            self.host.end_game(MAX_POINTS_REASON);
        }

        if self.host.score() < 0 {
            self.host.adjust_score(0, false);
        }

        outcome
    }

    /// Session over: clear the info label
    pub fn end(&mut self) {
        let label = self.config.layout.info_label.clone();
        best_effort("set_text", self.peripherals.display.set_text(&label, ""));
        log::info!("Boxes level ended with score {}", self.host.score());
    }

    // === Generation ===

    /// Assign fresh targets to both boxes, show them, clear latches and relight buttons.
    pub fn generate(&mut self) -> Generation {
        let score = self.host.score();
        let generation = target::generate(
            &mut [&mut self.large_box, &mut self.small_box],
            score,
            &mut self.rng,
        );
        self.large_image = generation.targets[0].image.clone();
        self.small_image = generation.targets[1].image.clone();

        log::debug!(
            "Generated targets large={} small={} ({:?}, score {score})",
            generation.targets[0].sensor_id,
            generation.targets[1].sensor_id,
            generation.mode
        );

        self.draw_images();
        self.latches.reset();
        self.light_all_buttons();
        self.update_debug_text();

        generation
    }

    fn solve(&mut self, size: BoxSize) {
        self.peripherals.audio.play(SoundEffect::Positive);
        self.host.adjust_score(POINTS_PER_HIT, true);
        let start_image = self.config.start_image.clone();
        match size {
            BoxSize::Large => {
                self.large_image = start_image;
                self.large_box.set_correct_sensor_id(None);
            }
            BoxSize::Small => {
                self.small_image = start_image;
                self.small_box.set_correct_sensor_id(None);
            }
        }
        self.draw_images();
    }

    // === Presentation ===

    fn prepare_surface(&mut self) {
        let region = &self.config.layout.region;
        best_effort("clear", self.peripherals.display.clear(region));
    }

    fn draw_images(&mut self) {
        best_effort("draw_images", self.try_draw_images());
    }

    fn try_draw_images(&mut self) -> PeripheralResult {
        let layout = &self.config.layout;
        let display = &mut self.peripherals.display;
        display.clear(&layout.region)?;

        let large = &layout.large_image;
        display.draw_asset(
            &layout.region,
            strip_ext(&self.large_image),
            large.position,
            large.centered,
            large.scale,
        )?;
        let small = &layout.small_image;
        display.draw_asset(
            &layout.region,
            strip_ext(&self.small_image),
            small.position,
            small.centered,
            small.scale,
        )
    }

    fn light_all_buttons(&mut self) {
        let ids: Vec<u32> = self.config.led_outputs().collect();
        self.peripherals.set_all_outputs(ids, 1);
    }

    fn update_debug_text(&mut self) {
        if !self.config.debug_text_on_screen {
            return;
        }
        let text = debug_text(
            self.small_box.correct_sensor_id(),
            self.large_box.correct_sensor_id(),
        );
        let label = &self.config.layout.info_label;
        best_effort("set_text", self.peripherals.display.set_text(label, &text));
    }

    // === Accessors ===

    /// Whole seconds since the session started
    pub fn elapsed_s(&self) -> u64 {
        self.host.current_time_ms().saturating_sub(self.start_ms) / 1000
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn button_box(&self, size: BoxSize) -> &ButtonBox {
        match size {
            BoxSize::Large => &self.large_box,
            BoxSize::Small => &self.small_box,
        }
    }

    /// Image currently displayed for a box
    pub fn displayed_image(&self, size: BoxSize) -> &str {
        match size {
            BoxSize::Large => &self.large_image,
            BoxSize::Small => &self.small_image,
        }
    }

    pub fn latches(&self) -> &SensorLatches {
        &self.latches
    }

    pub fn schedule(&self) -> &GenerationSchedule {
        &self.schedule
    }
}

fn non_empty_or<'a>(wiring: &'a [SensorId], fallback: &'a [SensorId], key: &str) -> &'a [SensorId] {
    if wiring.is_empty() {
        log::warn!("{key} is empty; using default wiring");
        fallback
    } else {
        wiring
    }
}

fn debug_text(small: Option<SensorId>, large: Option<SensorId>) -> String {
    match (small, large) {
        (None, None) => "No active target".to_string(),
        (small, large) => format!(
            "Correct sensors → Small: {}, Large: {}",
            small.unwrap_or(-1),
            large.unwrap_or(-1)
        ),
    }
}
