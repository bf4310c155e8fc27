//! Normal/Menu handler set

use super::menu::{Menu, MenuOutcome};
use crate::config::{Config, TEMP_STEP};
use crate::traits::Celsius;

/// Active operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    Normal,
    Menu,
}

/// Input events produced by the buttons and the rotary encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Increase / next
    Up,
    /// Decrease / previous
    Down,
    /// Reset to default / edit
    Select,
    /// Enter or leave the menu
    Menu,
}

/// What a dispatched event asks the control loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Event had no effect
    Ignored,
    /// New user setpoint
    Setpoint(Celsius),
    /// Menu handlers are now bound
    EnteredMenu,
    /// Menu position or draft changed
    MenuUpdated,
    /// Normal handlers are bound again, with the edited config if any
    ExitedMenu(Option<Config>),
}

/// Handler set bound to the input layer
#[derive(Debug, Clone)]
enum HandlerSet {
    Normal,
    Menu(Menu),
}

/// Routes input events to the active handler set
///
/// The set is only swapped inside `enter_menu`/`exit_menu`, which run on
/// the loop context between events, so an event always reaches the set that
/// was active when it was dispatched.
#[derive(Debug, Clone)]
pub struct ModeController {
    handlers: HandlerSet,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    /// Start with the normal handlers bound
    pub fn new() -> Self {
        Self {
            handlers: HandlerSet::Normal,
        }
    }

    /// Currently active mode
    pub fn mode(&self) -> OperatingMode {
        match self.handlers {
            HandlerSet::Normal => OperatingMode::Normal,
            HandlerSet::Menu(_) => OperatingMode::Menu,
        }
    }

    /// Feed one event to the active handler set
    pub fn dispatch(&mut self, event: InputEvent, setpoint: Celsius, config: &Config) -> Dispatch {
        if let HandlerSet::Menu(menu) = &mut self.handlers {
            return match menu.handle(event) {
                MenuOutcome::Stay => Dispatch::MenuUpdated,
                MenuOutcome::Exit => Dispatch::ExitedMenu(self.exit_menu()),
            };
        }

        match event {
            InputEvent::Up => step_up(setpoint, config).map_or(Dispatch::Ignored, Dispatch::Setpoint),
            InputEvent::Down => {
                step_down(setpoint, config).map_or(Dispatch::Ignored, Dispatch::Setpoint)
            }
            InputEvent::Select => Dispatch::Setpoint(config.default_temp),
            InputEvent::Menu => {
                self.enter_menu(config);
                Dispatch::EnteredMenu
            }
        }
    }

    /// Bind the menu handlers over a copy of `config`
    pub fn enter_menu(&mut self, config: &Config) {
        self.handlers = HandlerSet::Menu(Menu::new(config));
    }

    /// Bind the normal handlers again
    ///
    /// Returns the edited configuration when the menu changed it.
    pub fn exit_menu(&mut self) -> Option<Config> {
        match core::mem::replace(&mut self.handlers, HandlerSet::Normal) {
            HandlerSet::Menu(menu) => menu.changed(),
            HandlerSet::Normal => None,
        }
    }

    /// Menu state while in menu mode
    pub fn menu(&self) -> Option<&Menu> {
        match &self.handlers {
            HandlerSet::Menu(menu) => Some(menu),
            HandlerSet::Normal => None,
        }
    }
}

/// Setpoint one step up, or `None` if that would pass the maximum
pub fn step_up(setpoint: Celsius, config: &Config) -> Option<Celsius> {
    let next = setpoint.checked_add(TEMP_STEP)?;
    (next <= config.max_temp).then_some(next)
}

/// Setpoint one step down, or `None` if that would pass the minimum
pub fn step_down(setpoint: Celsius, config: &Config) -> Option<Celsius> {
    let next = setpoint.checked_sub(TEMP_STEP)?;
    (next >= config.min_temp).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::MenuItem;
    use proptest::prelude::*;

    #[test]
    fn test_normal_adjustments() {
        let config = Config::default();
        let mut modes = ModeController::new();

        assert_eq!(modes.dispatch(InputEvent::Up, 300, &config), Dispatch::Setpoint(310));
        assert_eq!(modes.dispatch(InputEvent::Down, 300, &config), Dispatch::Setpoint(290));
        assert_eq!(modes.dispatch(InputEvent::Select, 370, &config), Dispatch::Setpoint(300));
        assert_eq!(modes.mode(), OperatingMode::Normal);
    }

    #[test]
    fn test_increase_at_max_is_noop() {
        let config = Config::default();
        let mut modes = ModeController::new();
        assert_eq!(modes.dispatch(InputEvent::Up, 450, &config), Dispatch::Ignored);
        assert_eq!(modes.dispatch(InputEvent::Down, 50, &config), Dispatch::Ignored);
    }

    #[test]
    fn test_twenty_increases_stop_at_max() {
        let config = Config::default();
        let mut setpoint = 300;
        for _ in 0..20 {
            if let Some(next) = step_up(setpoint, &config) {
                setpoint = next;
            }
        }
        assert_eq!(setpoint, 450);
    }

    #[test]
    fn test_menu_round_trip() {
        let config = Config::default();
        let mut modes = ModeController::new();

        assert_eq!(modes.dispatch(InputEvent::Menu, 300, &config), Dispatch::EnteredMenu);
        assert_eq!(modes.mode(), OperatingMode::Menu);

        // Events now reach the menu, not the setpoint handlers
        assert_eq!(modes.dispatch(InputEvent::Up, 300, &config), Dispatch::MenuUpdated);
        assert_eq!(modes.menu().map(|m| m.item()), Some(MenuItem::RestTemp));

        assert_eq!(modes.dispatch(InputEvent::Menu, 300, &config), Dispatch::ExitedMenu(None));
        assert_eq!(modes.mode(), OperatingMode::Normal);
        assert!(modes.menu().is_none());
    }

    #[test]
    fn test_menu_commit_reports_change() {
        let config = Config::default();
        let mut modes = ModeController::new();
        modes.enter_menu(&config);

        modes.dispatch(InputEvent::Select, 300, &config);
        modes.dispatch(InputEvent::Down, 300, &config);
        let Dispatch::ExitedMenu(Some(changed)) = modes.dispatch(InputEvent::Menu, 300, &config) else {
            panic!("expected a committed config");
        };
        assert_eq!(changed.default_temp, 290);
    }

    #[test]
    fn test_exit_without_menu() {
        let mut modes = ModeController::new();
        assert_eq!(modes.exit_menu(), None);
        assert_eq!(modes.mode(), OperatingMode::Normal);
    }

    proptest! {
        #[test]
        fn prop_adjustments_stay_in_window(start in 50i16..=450, ups in proptest::collection::vec(any::<bool>(), 0..100)) {
            let config = Config::default();
            let mut setpoint = start;
            for up in ups {
                let next = if up { step_up(setpoint, &config) } else { step_down(setpoint, &config) };
                if let Some(next) = next {
                    setpoint = next;
                }
                prop_assert!(config.in_range(setpoint));
            }
        }
    }
}
