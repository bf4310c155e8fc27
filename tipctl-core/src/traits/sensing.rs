//! Battery and grip sensing trait

/// Environmental inputs evaluated by the safety interlock every tick
pub trait Sensing {
    /// Battery voltage in decivolts (71 = 7.1 V)
    fn read_battery_dv(&mut self) -> u8;

    /// Grip sensor state
    ///
    /// `true` when nothing is connected to the grip contact, which means the
    /// iron is in the hand. `false` means the contact is closed by the stand.
    fn read_grip_open(&mut self) -> bool;
}
