//! Configuration menu

use super::controller::InputEvent;
use crate::config::{Config, TEMP_STEP, VOLTAGE_MIN_CEIL_DV, VOLTAGE_MIN_FLOOR_DV};
use crate::display::{Readout, BATT, DEF, END, RST};
use crate::traits::Celsius;

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// `dEF`: setpoint used at boot and by "reset to default"
    DefaultTemp,
    /// `rSt`: target while resting in the stand
    RestTemp,
    /// `bAt`: low-battery threshold
    BatteryThreshold,
    /// `End`: leave the menu
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [
        MenuItem::DefaultTemp,
        MenuItem::RestTemp,
        MenuItem::BatteryThreshold,
        MenuItem::Exit,
    ];

    fn index(self) -> usize {
        match self {
            MenuItem::DefaultTemp => 0,
            MenuItem::RestTemp => 1,
            MenuItem::BatteryThreshold => 2,
            MenuItem::Exit => 3,
        }
    }

    /// Following entry, wrapping to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding entry, wrapping to the last
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label shown while navigating
    pub fn label(self) -> Readout {
        Readout::Word(match self {
            MenuItem::DefaultTemp => DEF,
            MenuItem::RestTemp => RST,
            MenuItem::BatteryThreshold => BATT,
            MenuItem::Exit => END,
        })
    }
}

/// Result of feeding one event to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuOutcome {
    Stay,
    /// Back/confirm: the caller rebinds the normal handlers
    Exit,
}

/// Menu navigation state
///
/// Edits go to a draft copy of the configuration. Every edit keeps the
/// draft valid, so committing never needs a second validation pass.
#[derive(Debug, Clone)]
pub struct Menu {
    draft: Config,
    original: Config,
    item: MenuItem,
    editing: bool,
}

impl Menu {
    /// Open the menu on the first entry
    pub fn new(config: &Config) -> Self {
        Self {
            draft: *config,
            original: *config,
            item: MenuItem::DefaultTemp,
            editing: false,
        }
    }

    /// Handle one input event
    pub fn handle(&mut self, event: InputEvent) -> MenuOutcome {
        match (event, self.editing) {
            (InputEvent::Menu, _) => return MenuOutcome::Exit,
            (InputEvent::Select, _) if self.item == MenuItem::Exit => return MenuOutcome::Exit,
            (InputEvent::Select, editing) => self.editing = !editing,
            (InputEvent::Up, false) => self.item = self.item.next(),
            (InputEvent::Down, false) => self.item = self.item.prev(),
            (InputEvent::Up, true) => self.adjust(1),
            (InputEvent::Down, true) => self.adjust(-1),
        }
        MenuOutcome::Stay
    }

    fn adjust(&mut self, direction: i8) {
        let draft = &mut self.draft;
        match self.item {
            MenuItem::DefaultTemp => {
                draft.default_temp = step_temp(draft.default_temp, direction, draft);
            }
            MenuItem::RestTemp => {
                draft.rest_temp = step_temp(draft.rest_temp, direction, draft);
            }
            MenuItem::BatteryThreshold => {
                let dv = if direction > 0 {
                    draft.voltage_min_dv.saturating_add(1)
                } else {
                    draft.voltage_min_dv.saturating_sub(1)
                };
                draft.voltage_min_dv = dv.clamp(VOLTAGE_MIN_FLOOR_DV, VOLTAGE_MIN_CEIL_DV);
            }
            MenuItem::Exit => {}
        }
    }

    /// What the display should show for the current menu position
    pub fn readout(&self) -> Readout {
        if !self.editing {
            return self.item.label();
        }
        match self.item {
            MenuItem::DefaultTemp => Readout::Temperature(self.draft.default_temp),
            MenuItem::RestTemp => Readout::Temperature(self.draft.rest_temp),
            MenuItem::BatteryThreshold => Readout::Battery(self.draft.voltage_min_dv),
            MenuItem::Exit => self.item.label(),
        }
    }

    /// Edited configuration if it differs from the one the menu opened with
    pub fn changed(&self) -> Option<Config> {
        (self.draft != self.original).then_some(self.draft)
    }

    /// Current entry
    pub fn item(&self) -> MenuItem {
        self.item
    }

    /// Check if the current entry's value is being edited
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Working copy of the configuration
    pub fn draft(&self) -> &Config {
        &self.draft
    }
}

fn step_temp(value: Celsius, direction: i8, config: &Config) -> Celsius {
    let stepped = if direction > 0 {
        value.saturating_add(TEMP_STEP)
    } else {
        value.saturating_sub(TEMP_STEP)
    };
    config.clamp_temp(stepped)
}
