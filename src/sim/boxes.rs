//! Button panels ("boxes") and their buttons

use super::SensorId;

/// Physical size of a box, used only for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxSize {
    Small,
    Large,
}

impl BoxSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxSize::Small => "small",
            BoxSize::Large => "large",
        }
    }
}

/// One physical button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub sensor_id: SensorId,
    pub symbol_image: String,
    pub color_image: String,
}

impl Button {
    pub fn new(
        sensor_id: SensorId,
        symbol_image: impl Into<String>,
        color_image: impl Into<String>,
    ) -> Self {
        Self {
            sensor_id,
            symbol_image: symbol_image.into(),
            color_image: color_image.into(),
        }
    }
}

/// A panel of buttons with at most one active target
#[derive(Debug, Clone)]
pub struct ButtonBox {
    buttons: Vec<Button>,
    size: BoxSize,
    /// Sensor the players must press; `None` when the box has no active target
    correct_sensor_id: Option<SensorId>,
}

impl ButtonBox {
    /// Build a box from its buttons.
    ///
    /// # Panics
    /// Panics if `buttons` is empty; a box always has at least one button.
    pub fn new(buttons: Vec<Button>, size: BoxSize) -> Self {
        assert!(!buttons.is_empty(), "a {} box needs at least one button", size.as_str());
        Self {
            buttons,
            size,
            correct_sensor_id: None,
        }
    }

    /// Build a box from sensor wiring and asset tables.
    ///
    /// Button `i` gets `symbols[symbol_map[i]]` and `colors[color_map[i]]`.
    /// Missing map entries or out-of-range indices fall back to the first asset.
    pub fn from_tables(
        sensors: &[SensorId],
        symbols: &[String],
        colors: &[String],
        symbol_map: &[usize],
        color_map: &[usize],
        size: BoxSize,
    ) -> Self {
        let pick = |table: &[String], map: &[usize], i: usize| -> String {
            let idx = map.get(i).copied().unwrap_or(0);
            table
                .get(idx)
                .or_else(|| table.first())
                .cloned()
                .unwrap_or_default()
        };

        let buttons = sensors
            .iter()
            .enumerate()
            .map(|(i, &sensor)| {
                Button::new(sensor, pick(symbols, symbol_map, i), pick(colors, color_map, i))
            })
            .collect();
        Self::new(buttons, size)
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn size(&self) -> BoxSize {
        self.size
    }

    pub fn correct_sensor_id(&self) -> Option<SensorId> {
        self.correct_sensor_id
    }

    pub fn set_correct_sensor_id(&mut self, sensor_id: Option<SensorId>) {
        self.correct_sensor_id = sensor_id;
    }

    /// True when the box has no active target
    pub fn is_solved(&self) -> bool {
        self.correct_sensor_id.is_none()
    }

    /// Does this box own the sensor?
    pub fn contains(&self, sensor_id: SensorId) -> bool {
        self.buttons.iter().any(|b| b.sensor_id == sensor_id)
    }

    /// Button wired to `sensor_id`, or the first button when no button matches
    pub fn button_by_sensor(&self, sensor_id: SensorId) -> &Button {
        match self.buttons.iter().find(|b| b.sensor_id == sensor_id) {
            Some(button) => button,
            None => &self.buttons[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str) -> Vec<String> {
        (0..5).map(|i| format!("{prefix}{i}.png")).collect()
    }

    fn large_box() -> ButtonBox {
        ButtonBox::from_tables(
            &[6, 7, 8, 9, 10],
            &names("sym"),
            &names("col"),
            &[1, 2, 3, 4, 0],
            &[0, 1, 2, 3, 4],
            BoxSize::Large,
        )
    }

    #[test]
    fn test_from_tables_maps_assets() {
        let b = large_box();
        assert_eq!(b.buttons().len(), 5);
        assert_eq!(b.button_by_sensor(6).symbol_image, "sym1.png");
        assert_eq!(b.button_by_sensor(10).symbol_image, "sym0.png");
        assert_eq!(b.button_by_sensor(8).color_image, "col2.png");
        assert_eq!(b.size(), BoxSize::Large);
    }

    #[test]
    fn test_lookup_falls_back_to_first_button() {
        let b = large_box();
        assert_eq!(b.button_by_sensor(42).sensor_id, 6);
        assert_eq!(b.button_by_sensor(-1).sensor_id, 6);
    }

    #[test]
    fn test_bad_map_index_uses_first_asset() {
        let b = ButtonBox::from_tables(
            &[1, 2],
            &names("sym"),
            &names("col"),
            &[9],
            &[],
            BoxSize::Small,
        );
        assert_eq!(b.button_by_sensor(1).symbol_image, "sym0.png");
        assert_eq!(b.button_by_sensor(2).symbol_image, "sym0.png");
        assert_eq!(b.button_by_sensor(2).color_image, "col0.png");
    }

    #[test]
    fn test_target_starts_empty() {
        let mut b = large_box();
        assert!(b.is_solved());
        b.set_correct_sensor_id(Some(7));
        assert_eq!(b.correct_sensor_id(), Some(7));
        assert!(!b.is_solved());
        assert!(b.contains(7));
        assert!(!b.contains(1));
    }

    #[test]
    fn test_cardinality_is_not_fixed() {
        let b = ButtonBox::from_tables(
            &[1, 2, 3],
            &names("s"),
            &names("c"),
            &[0, 1, 2],
            &[0, 1, 2],
            BoxSize::Small,
        );
        assert_eq!(b.buttons().len(), 3);
    }
}
