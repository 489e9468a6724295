//! Outbound configuration lines
//!
//! Lines the device sends to reconfigure the app. Fields are joined with
//! `;` and the app applies each line on its own, so there is no batching
//! or acknowledgement.

use core::fmt::{self, Write};

use heapless::String;

/// Maximum encoded line length
pub const MAX_LINE_LEN: usize = 128;

/// An encoded outbound line, without delimiter
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while encoding a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Encoded line does not fit in [`MAX_LINE_LEN`]
    LineTooLong,
    /// A field contains a line break
    InvalidField,
}

/// Button colors understood by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonColor {
    #[default]
    Black,
    Green,
    Blue,
    Yellow,
    Red,
}

impl ButtonColor {
    /// Wire value
    pub fn to_wire(self) -> u8 {
        match self {
            ButtonColor::Black => 0,
            ButtonColor::Green => 1,
            ButtonColor::Blue => 2,
            ButtonColor::Yellow => 3,
            ButtonColor::Red => 4,
        }
    }
}

/// Whether a button is shown in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonVisibility {
    #[default]
    Visible,
    Hidden,
}

impl ButtonVisibility {
    /// Wire value
    pub fn to_wire(self) -> u8 {
        match self {
            ButtonVisibility::Visible => 1,
            ButtonVisibility::Hidden => 0,
        }
    }
}

/// Text shown on a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLabel<'a> {
    Text(&'a str),
    Number(i32),
}

impl fmt::Display for ButtonLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonLabel::Text(text) => f.write_str(text),
            ButtonLabel::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Configuration lines sent from the device to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigLine<'a> {
    /// Reset the app layout to its defaults
    Init,
    /// Define or update a button
    ///
    /// A missing color or label is sent as an empty field.
    Button {
        code: &'a str,
        visibility: ButtonVisibility,
        color: Option<ButtonColor>,
        label: Option<ButtonLabel<'a>>,
    },
    /// Tell the app this device has settings to push
    HasSettings,
    /// Start (`true`) or end (`false`) of a settings push
    Loader(bool),
}

impl ConfigLine<'_> {
    /// Encode this line
    pub fn encode(&self) -> Result<Line, EncodeError> {
        let mut line = Line::new();
        self.write_to(&mut line)?;
        Ok(line)
    }

    fn write_to(&self, out: &mut Line) -> Result<(), EncodeError> {
        match self {
            ConfigLine::Init => push(out, format_args!("vc;init;")),
            ConfigLine::Button {
                code,
                visibility,
                color,
                label,
            } => {
                check_field(code)?;
                if let Some(ButtonLabel::Text(text)) = label {
                    check_field(text)?;
                }
                push(out, format_args!("vc;b;{};{};", code, visibility.to_wire()))?;
                if let Some(color) = color {
                    push(out, format_args!("{}", color.to_wire()))?;
                }
                push(out, format_args!(";"))?;
                if let Some(label) = label {
                    push(out, format_args!("{}", label))?;
                }
                Ok(())
            }
            ConfigLine::HasSettings => push(out, format_args!("vc;hasSettings;1;")),
            ConfigLine::Loader(active) => {
                push(out, format_args!("vc;loader;{};", u8::from(*active)))
            }
        }
    }
}

fn push(out: &mut Line, args: fmt::Arguments<'_>) -> Result<(), EncodeError> {
    out.write_fmt(args).map_err(|_| EncodeError::LineTooLong)
}

fn check_field(field: &str) -> Result<(), EncodeError> {
    if field.contains(|c: char| c == '\n' || c == '\r') {
        return Err(EncodeError::InvalidField);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lines() {
        assert_eq!(ConfigLine::Init.encode().unwrap(), "vc;init;");
        assert_eq!(ConfigLine::HasSettings.encode().unwrap(), "vc;hasSettings;1;");
        assert_eq!(ConfigLine::Loader(true).encode().unwrap(), "vc;loader;1;");
        assert_eq!(ConfigLine::Loader(false).encode().unwrap(), "vc;loader;0;");
    }

    #[test]
    fn test_button_full() {
        let line = ConfigLine::Button {
            code: "2",
            visibility: ButtonVisibility::Visible,
            color: Some(ButtonColor::Black),
            label: Some(ButtonLabel::Text("0")),
        };
        assert_eq!(line.encode().unwrap(), "vc;b;2;1;0;0");
    }

    #[test]
    fn test_button_numeric_label() {
        let line = ConfigLine::Button {
            code: "a",
            visibility: ButtonVisibility::Hidden,
            color: Some(ButtonColor::Red),
            label: Some(ButtonLabel::Number(3)),
        };
        assert_eq!(line.encode().unwrap(), "vc;b;a;0;4;3");
    }

    #[test]
    fn test_button_optional_fields_empty() {
        let line = ConfigLine::Button {
            code: "1",
            visibility: ButtonVisibility::Visible,
            color: None,
            label: None,
        };
        assert_eq!(line.encode().unwrap(), "vc;b;1;1;;");
    }

    #[test]
    fn test_button_rejects_line_break() {
        let line = ConfigLine::Button {
            code: "1",
            visibility: ButtonVisibility::Visible,
            color: None,
            label: Some(ButtonLabel::Text("two\nlines")),
        };
        assert_eq!(line.encode(), Err(EncodeError::InvalidField));
    }

    #[test]
    fn test_button_label_too_long() {
        let label = [b'x'; MAX_LINE_LEN];
        let label = core::str::from_utf8(&label).unwrap();
        let line = ConfigLine::Button {
            code: "1",
            visibility: ButtonVisibility::Visible,
            color: Some(ButtonColor::Green),
            label: Some(ButtonLabel::Text(label)),
        };
        assert_eq!(line.encode(), Err(EncodeError::LineTooLong));
    }

    #[test]
    fn test_color_wire_values() {
        assert_eq!(ButtonColor::Black.to_wire(), 0);
        assert_eq!(ButtonColor::Green.to_wire(), 1);
        assert_eq!(ButtonColor::Blue.to_wire(), 2);
        assert_eq!(ButtonColor::Yellow.to_wire(), 3);
        assert_eq!(ButtonColor::Red.to_wire(), 4);
    }
}
