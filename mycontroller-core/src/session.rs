//! Handler view of one dispatch cycle
//!
//! A [`Session`] is built by the controller for every handler call. It
//! exposes the command being dispatched, read access to the pressed keys,
//! the toggle counters and the outbound links. All handlers in a cycle see
//! the same command.

use mycontroller_protocol::keys::{joystick_key, CLEAR_ALL};
use mycontroller_protocol::{
    split_settings, ButtonColor, ButtonLabel, ButtonVisibility, ConfigLine, EncodeError,
    JoystickAxis, OrientationAxis, Side,
};

use crate::config::ButtonSpec;
use crate::link::{ConnectionState, Outbound};
use crate::store::{CurrentCommand, PressedKeys, StoreError, ToggleStore};

/// State available to a handler during one dispatch cycle
pub struct Session<'a> {
    command: &'a CurrentCommand,
    pressed: &'a PressedKeys,
    toggles: &'a mut ToggleStore,
    out: &'a mut dyn Outbound,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        command: &'a CurrentCommand,
        pressed: &'a PressedKeys,
        toggles: &'a mut ToggleStore,
        out: &'a mut dyn Outbound,
    ) -> Self {
        Self {
            command,
            pressed,
            toggles,
            out,
        }
    }

    /// Key of the current command
    pub fn key(&self) -> &str {
        self.command.key()
    }

    /// Value of the current command
    ///
    /// 1 for a press, 0 for a release or clear-all, NaN for a payload that
    /// is not a number.
    pub fn value(&self) -> f64 {
        self.command.value()
    }

    /// Check if the current command is for `key`
    pub fn is_key(&self, key: &str) -> bool {
        self.command.key() == key
    }

    /// The current command is a press of `code`
    pub fn button_was_pressed(&self, code: &str) -> bool {
        self.is_key(code) && self.pressed.is_pressed(code)
    }

    /// The current command is a release of `code`
    pub fn button_was_released(&self, code: &str) -> bool {
        self.is_key(code) && !self.pressed.is_pressed(code)
    }

    /// Check if `code` is held down
    pub fn is_button_pressed(&self, code: &str) -> bool {
        self.pressed.is_pressed(code)
    }

    /// No key is held down
    pub fn no_button_pressed(&self) -> bool {
        self.pressed.count() == 0
    }

    /// The current command is the clear-all event
    pub fn all_buttons_released(&self) -> bool {
        self.is_key(CLEAR_ALL)
    }

    /// Number of keys held down
    pub fn pressed_count(&self) -> usize {
        self.pressed.count()
    }

    /// Flip the toggle of the current key, true if it is now on
    ///
    /// Fails with [`StoreError::Full`] when too many keys are on at once.
    pub fn toggle_button(&mut self) -> Result<bool, StoreError> {
        self.toggles.toggle(self.command.key())
    }

    /// Advance the counter of the current key, wrapping to 0 after `max`
    pub fn next_button_toggle(&mut self, max: u8) -> Result<u8, StoreError> {
        self.toggles.increment_bounded(self.command.key(), max)
    }

    /// Counter value of any key, 0 if it was never touched
    pub fn toggle_state(&self, key: &str) -> u8 {
        self.toggles.get(key)
    }

    /// The current command moved the slider on `side`
    pub fn slider_changed(&self, side: Side) -> bool {
        self.is_key(side.slider_key())
    }

    /// The current command moved the left slider (`sl`)
    pub fn left_slider_changed(&self) -> bool {
        self.slider_changed(Side::Left)
    }

    /// The current command moved the right slider (`sr`)
    pub fn right_slider_changed(&self) -> bool {
        self.slider_changed(Side::Right)
    }

    /// The current command moved one joystick axis (`jlx` .. `jry`)
    pub fn joystick_changed(&self, side: Side, axis: JoystickAxis) -> bool {
        self.is_key(joystick_key(side, axis))
    }

    /// The current command is a phone orientation update (`ox`, `oy`, `oz`, `oc`)
    pub fn orientation_changed(&self, axis: OrientationAxis) -> bool {
        self.is_key(axis.key())
    }

    /// Which links are active
    pub fn connection(&self) -> ConnectionState {
        self.out.connection()
    }

    /// Encode and send a configuration line
    pub fn send(&mut self, line: &ConfigLine<'_>) -> Result<(), EncodeError> {
        send_config(self.out, line)
    }

    /// Define or update a button in the app
    pub fn set_button(
        &mut self,
        code: &str,
        visibility: ButtonVisibility,
        color: Option<ButtonColor>,
        label: Option<ButtonLabel<'_>>,
    ) -> Result<(), EncodeError> {
        self.send(&ConfigLine::Button {
            code,
            visibility,
            color,
            label,
        })
    }

    /// Send every button of a layout
    ///
    /// Stops at the first button that cannot be encoded; earlier buttons
    /// have already been sent.
    pub fn apply_layout(&mut self, buttons: &[ButtonSpec]) -> Result<(), EncodeError> {
        for button in buttons {
            self.send(&button.to_line())?;
        }
        Ok(())
    }

    /// Reset the app layout
    pub fn restore_defaults(&mut self) {
        // Fixed line, always encodes
        let _ = self.send(&ConfigLine::Init);
    }

    /// Send an exported settings string, one line at a time
    pub fn apply_settings(&mut self, data: &str) {
        send_settings(self.out, data);
    }

    /// Send a raw line
    pub fn send_data(&mut self, line: &str) {
        self.out.send_line(line);
    }
}

pub(crate) fn send_config(out: &mut dyn Outbound, line: &ConfigLine<'_>) -> Result<(), EncodeError> {
    match line.encode() {
        Ok(encoded) => {
            out.send_line(&encoded);
            Ok(())
        }
        Err(e) => {
            warn!("Failed to encode config line: {:?}", e);
            Err(e)
        }
    }
}

pub(crate) fn send_settings(out: &mut dyn Outbound, data: &str) {
    let mut count = 0usize;
    for line in split_settings(data) {
        out.send_line(line);
        count += 1;
    }
    debug!("Sent {} settings lines", count);
}
