use anyhow::Result;

use super::action::Input;

/// An externally stepped game whose state can be read back after every action.
pub trait Simulator {
    type State;

    fn reset(&mut self) -> Result<()>;
    fn apply_ale_action(&mut self, action: i32) -> Result<()>;
    fn apply_input(&mut self, input: &Input) -> Result<()>;
    fn state(&self) -> Result<Self::State>;
    fn score(&self) -> i32;
    fn lives(&self) -> i32;
    fn game_over(&self) -> bool;
}
