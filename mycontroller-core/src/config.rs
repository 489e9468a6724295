//! Configuration types
//!
//! Handshake mode and declarative button layouts. With the `serde` feature
//! these can be loaded from a board crate's own configuration.

use heapless::String;
use mycontroller_protocol::{ButtonColor, ButtonLabel, ButtonVisibility, ConfigLine};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::Key;

/// Maximum button label length
pub const MAX_LABEL_LEN: usize = 48;

/// Whether the app asks the user before applying pushed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfirmationMode {
    /// Advertise settings on connect and wait for the app to request them
    #[default]
    Require,
    /// Push settings as soon as the app connects
    NoRequire,
}

/// One button of a layout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonSpec {
    /// Button code (the key the app sends when it is pressed)
    pub code: Key,
    /// Shown or hidden
    pub visibility: ButtonVisibility,
    /// Color (app default if unset)
    pub color: Option<ButtonColor>,
    /// Label (app default if unset)
    pub label: Option<String<MAX_LABEL_LEN>>,
}

impl ButtonSpec {
    /// Configuration line defining this button
    pub fn to_line(&self) -> ConfigLine<'_> {
        ConfigLine::Button {
            code: self.code.as_str(),
            visibility: self.visibility,
            color: self.color,
            label: self.label.as_deref().map(ButtonLabel::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_requires_confirmation() {
        assert_eq!(ConfirmationMode::default(), ConfirmationMode::Require);
    }

    #[test]
    fn test_button_spec_line() {
        let mut spec = ButtonSpec::default();
        spec.code.push_str("3").unwrap();
        spec.color = Some(ButtonColor::Yellow);
        let mut label = String::new();
        label.push_str("Go").unwrap();
        spec.label = Some(label);

        assert_eq!(spec.to_line().encode().unwrap(), "vc;b;3;1;3;Go");
    }
}
