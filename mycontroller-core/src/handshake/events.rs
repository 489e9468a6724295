//! Events that drive the setup handshake

use mycontroller_protocol::ReservedKey;

/// Events that can trigger handshake transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupEvent {
    /// App connected and probed the version (`-v`)
    VersionProbe,
    /// App asked for the device settings (`getSettings`)
    SettingsRequested,
    /// Serial link announced itself (`usbOn`)
    SerialAttached,
}

impl SetupEvent {
    /// Map a dispatched command key to a handshake event
    ///
    /// Returns `None` for every key that is not reserved.
    pub fn from_key(key: &str) -> Option<Self> {
        ReservedKey::from_key(key).map(|reserved| match reserved {
            ReservedKey::VersionProbe => SetupEvent::VersionProbe,
            ReservedKey::GetSettings => SetupEvent::SettingsRequested,
            ReservedKey::UsbOn => SetupEvent::SerialAttached,
        })
    }

    /// Check if handling this event needs a registered setup callback
    pub fn needs_setup(&self) -> bool {
        matches!(self, SetupEvent::VersionProbe | SetupEvent::SettingsRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys() {
        assert_eq!(SetupEvent::from_key("-v"), Some(SetupEvent::VersionProbe));
        assert_eq!(
            SetupEvent::from_key("getSettings"),
            Some(SetupEvent::SettingsRequested)
        );
        assert_eq!(SetupEvent::from_key("usbOn"), Some(SetupEvent::SerialAttached));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(SetupEvent::from_key("a"), None);
        assert_eq!(SetupEvent::from_key("none"), None);
        assert_eq!(SetupEvent::from_key("v"), None);
    }

    #[test]
    fn test_needs_setup() {
        assert!(SetupEvent::VersionProbe.needs_setup());
        assert!(SetupEvent::SettingsRequested.needs_setup());
        assert!(!SetupEvent::SerialAttached.needs_setup());
    }
}
