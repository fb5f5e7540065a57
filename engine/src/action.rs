use std::fmt::{self, Display, Formatter};

/// Controller input applied directly to the simulator, bypassing the arcade action table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub button1: bool,
    pub button2: bool,
}

impl Input {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_noop() {
            return write!(f, "noop");
        }

        let pressed = [
            (self.left, "left"),
            (self.right, "right"),
            (self.up, "up"),
            (self.down, "down"),
            (self.button1, "button1"),
            (self.button2, "button2"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>();

        write!(f, "{}", pressed.join("+"))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Arcade Learning Environment action id.
    Ale(i32),
    Input(Input),
}

impl From<i32> for Action {
    fn from(action: i32) -> Self {
        Action::Ale(action)
    }
}

impl From<Input> for Action {
    fn from(input: Input) -> Self {
        Action::Input(input)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Action::Ale(action) => write!(f, "ale:{}", action),
            Action::Input(input) => write!(f, "input:{}", input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_int_is_ale() {
        assert_eq!(Action::from(3), Action::Ale(3));
    }

    #[test]
    fn test_action_display() {
        let input = Input {
            left: true,
            button1: true,
            ..Input::default()
        };

        assert_eq!(Action::Ale(4).to_string(), "ale:4");
        assert_eq!(Action::from(input).to_string(), "input:left+button1");
        assert_eq!(Action::from(Input::default()).to_string(), "input:noop");
    }

    #[test]
    fn test_input_is_noop() {
        assert!(Input::default().is_noop());
        assert!(!Input {
            right: true,
            ..Input::default()
        }
        .is_noop());
    }
}
