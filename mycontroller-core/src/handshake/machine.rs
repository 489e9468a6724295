//! Handshake state machine
//!
//! The confirmation mode only gates the `-v` probe. `getSettings` applies
//! immediately in either mode and from either state.

use super::events::SetupEvent;
use crate::config::ConfirmationMode;

/// Handshake states
///
/// `AwaitingApply` only records that settings were advertised and not yet
/// requested. No transition or outbound line depends on it: `getSettings`
/// applies from either state, so a confirmed `-v` behaves as if the
/// handshake stayed idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupState {
    /// Nothing in progress
    #[default]
    Idle,
    /// Settings advertised, waiting for the app to request them
    AwaitingApply,
}

/// What the controller must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupAction {
    /// Send `vc;hasSettings;1;`
    Advertise,
    /// Send `vc;loader;1;`, run the setup callback, send `vc;loader;0;`
    Apply,
    /// Mark the serial link active and release every key
    AttachSerial,
}

impl SetupState {
    /// Check if settings were advertised and not yet requested
    pub fn is_awaiting_apply(&self) -> bool {
        matches!(self, SetupState::AwaitingApply)
    }

    /// Process an event and return the next state with the action to run
    pub fn transition(self, event: SetupEvent, mode: ConfirmationMode) -> (Self, SetupAction) {
        use SetupEvent::*;

        match (event, mode) {
            (VersionProbe, ConfirmationMode::Require) => {
                (SetupState::AwaitingApply, SetupAction::Advertise)
            }
            (VersionProbe, ConfirmationMode::NoRequire) => (SetupState::Idle, SetupAction::Apply),

            (SettingsRequested, _) => (SetupState::Idle, SetupAction::Apply),

            // A second link attaching does not affect the layout exchange
            (SerialAttached, _) => (self, SetupAction::AttachSerial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_with_confirmation_advertises() {
        let (state, action) =
            SetupState::Idle.transition(SetupEvent::VersionProbe, ConfirmationMode::Require);
        assert_eq!(state, SetupState::AwaitingApply);
        assert_eq!(action, SetupAction::Advertise);
    }

    #[test]
    fn test_repeated_probe_advertises_again() {
        let (state, action) = SetupState::AwaitingApply
            .transition(SetupEvent::VersionProbe, ConfirmationMode::Require);
        assert_eq!(state, SetupState::AwaitingApply);
        assert_eq!(action, SetupAction::Advertise);
    }

    #[test]
    fn test_probe_without_confirmation_applies() {
        let (state, action) =
            SetupState::Idle.transition(SetupEvent::VersionProbe, ConfirmationMode::NoRequire);
        assert_eq!(state, SetupState::Idle);
        assert_eq!(action, SetupAction::Apply);
    }

    #[test]
    fn test_settings_request_always_applies() {
        let states = [SetupState::Idle, SetupState::AwaitingApply];
        let modes = [ConfirmationMode::Require, ConfirmationMode::NoRequire];

        for state in states {
            for mode in modes {
                let (next, action) = state.transition(SetupEvent::SettingsRequested, mode);
                assert_eq!(next, SetupState::Idle);
                assert_eq!(action, SetupAction::Apply);
            }
        }
    }

    #[test]
    fn test_full_confirmed_flow() {
        let mode = ConfirmationMode::Require;
        let (state, _) = SetupState::Idle.transition(SetupEvent::VersionProbe, mode);
        assert!(state.is_awaiting_apply());

        let (state, action) = state.transition(SetupEvent::SettingsRequested, mode);
        assert_eq!(state, SetupState::Idle);
        assert_eq!(action, SetupAction::Apply);
    }

    #[test]
    fn test_serial_attach_keeps_state() {
        for state in [SetupState::Idle, SetupState::AwaitingApply] {
            let (next, action) =
                state.transition(SetupEvent::SerialAttached, ConfirmationMode::Require);
            assert_eq!(next, state);
            assert_eq!(action, SetupAction::AttachSerial);
        }
    }
}
