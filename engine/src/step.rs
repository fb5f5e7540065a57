use anyhow::{Context, Result};
use log::{debug, info};

use super::action::Action;
use super::features::FeatureExtractor;
use super::simulator::Simulator;

/// Score seen at the end of the previous step. Owned by the caller driving the loop.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScoreContext {
    pub score: i32,
}

impl ScoreContext {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepInfo<S> {
    pub lives: i32,
    pub score: i32,
    /// Final simulator state, only captured when the game ended on this step.
    pub cached_state: Option<S>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepResult<F, S> {
    pub observation: F,
    pub reward: i32,
    pub done: bool,
    pub info: StepInfo<S>,
}

pub fn observe<S, E>(simulator: &S, extractor: &E) -> Result<E::Features>
where
    S: Simulator,
    E: FeatureExtractor<State = S::State>,
{
    let state = simulator
        .state()
        .context("Failed to read simulator state")?;

    Ok(extractor.extract(&state))
}

pub fn reset<S, E>(simulator: &mut S, extractor: &E, ctx: &mut ScoreContext) -> Result<E::Features>
where
    S: Simulator,
    E: FeatureExtractor<State = S::State>,
{
    simulator.reset().context("Failed to reset simulator")?;
    ctx.score = 0;

    observe(simulator, extractor)
}

pub fn step<S, E>(
    simulator: &mut S,
    extractor: &E,
    ctx: &mut ScoreContext,
    action: &Action,
) -> Result<StepResult<E::Features, S::State>>
where
    S: Simulator,
    E: FeatureExtractor<State = S::State>,
{
    let applied = match action {
        Action::Ale(action) => simulator.apply_ale_action(*action),
        Action::Input(input) => simulator.apply_input(input),
    };
    applied.with_context(|| format!("Failed to apply action {}", action))?;

    let state = simulator
        .state()
        .context("Failed to read simulator state")?;
    let observation = extractor.extract(&state);

    let score = simulator.score();
    let reward = (score - ctx.score).max(0);
    ctx.score = score;

    let done = simulator.game_over();
    let cached_state = if done {
        info!("Game over. Score: {}", score);
        Some(state)
    } else {
        None
    };

    debug!("Step {}: reward {}, score {}, done {}", action, reward, score, done);

    Ok(StepResult {
        observation,
        reward,
        done,
        info: StepInfo {
            lives: simulator.lives(),
            score: if done { 0 } else { ctx.score },
            cached_state,
        },
    })
}
