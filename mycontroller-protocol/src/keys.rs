//! Command keys with a fixed meaning
//!
//! Reserved keys drive the setup handshake; the rest name the app's
//! built-in inputs (sliders, joysticks, orientation, arrow pad).

/// Sentinel line meaning every key was released
pub const CLEAR_ALL: &str = "none";

// Reserved control keys
pub const KEY_VERSION_PROBE: &str = "-v";
pub const KEY_GET_SETTINGS: &str = "getSettings";
pub const KEY_USB_ON: &str = "usbOn";

// Sliders
pub const KEY_SLIDER_LEFT: &str = "sl";
pub const KEY_SLIDER_RIGHT: &str = "sr";

/// Control keys consumed by the setup handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReservedKey {
    /// App connected and asked for the device's protocol version
    VersionProbe,
    /// App asks the device to push its settings
    GetSettings,
    /// Serial link came up
    UsbOn,
}

impl ReservedKey {
    /// Look up a reserved key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            KEY_VERSION_PROBE => Some(ReservedKey::VersionProbe),
            KEY_GET_SETTINGS => Some(ReservedKey::GetSettings),
            KEY_USB_ON => Some(ReservedKey::UsbOn),
            _ => None,
        }
    }

    /// Wire form of this key
    pub fn as_str(self) -> &'static str {
        match self {
            ReservedKey::VersionProbe => KEY_VERSION_PROBE,
            ReservedKey::GetSettings => KEY_GET_SETTINGS,
            ReservedKey::UsbOn => KEY_USB_ON,
        }
    }
}

/// Built-in buttons of the app's arrow pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonName {
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    Enter,
    Space,
}

impl ButtonName {
    /// Key the app sends for this button
    pub fn code(self) -> &'static str {
        match self {
            ButtonName::ArrowUp => "up",
            ButtonName::ArrowDown => "down",
            ButtonName::ArrowRight => "right",
            ButtonName::ArrowLeft => "left",
            ButtonName::Enter => "enter",
            ButtonName::Space => "space",
        }
    }
}

/// Left or right control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Key of the slider on this side
    pub fn slider_key(self) -> &'static str {
        match self {
            Side::Left => KEY_SLIDER_LEFT,
            Side::Right => KEY_SLIDER_RIGHT,
        }
    }
}

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoystickAxis {
    X,
    Y,
}

/// Key of a joystick axis (`jlx`, `jly`, `jrx`, `jry`)
pub fn joystick_key(side: Side, axis: JoystickAxis) -> &'static str {
    match (side, axis) {
        (Side::Left, JoystickAxis::X) => "jlx",
        (Side::Left, JoystickAxis::Y) => "jly",
        (Side::Right, JoystickAxis::X) => "jrx",
        (Side::Right, JoystickAxis::Y) => "jry",
    }
}

/// Phone orientation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationAxis {
    X,
    Y,
    Z,
    Compass,
}

impl OrientationAxis {
    /// Key the app sends for this axis
    pub fn key(self) -> &'static str {
        match self {
            OrientationAxis::X => "ox",
            OrientationAxis::Y => "oy",
            OrientationAxis::Z => "oz",
            OrientationAxis::Compass => "oc",
        }
    }
}
