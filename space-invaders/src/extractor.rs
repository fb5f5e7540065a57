use engine::features::{FeatureExtractor, ObservationSpace};
use log::trace;

use super::constants::{FEATURE_COUNT, SCREEN_WIDTH};
use super::feature::{Feature, FeatureVector};
use super::geometry::*;
use super::snapshot::Snapshot;

pub fn ship_x(state: &Snapshot) -> i32 {
    state.ship.x
}

pub fn ship_laser_mid_air(state: &Snapshot) -> bool {
    state.ship_laser.is_some()
}

pub fn num_enemies(state: &Snapshot) -> i32 {
    state.enemies.iter().filter(|enemy| enemy.alive).count() as i32
}

/// Vertical gap between the ship and the lowest living enemy.
///
/// Dead enemies count as height 0, so with nobody alive this is the ship's own `y`.
pub fn lowest_enemy_height(state: &Snapshot) -> i32 {
    let lowest = state
        .enemies
        .iter()
        .map(|enemy| if enemy.alive { enemy.y } else { 0 })
        .max()
        .unwrap_or(0);

    state.ship.y.saturating_sub(lowest)
}

/// Whether an enemy laser is falling somewhere over the ship.
pub fn in_danger(state: &Snapshot) -> bool {
    let ship = ship_xrange(state);
    state.enemy_lasers.iter().any(|laser| ship.contains(i64::from(laser.x)))
}

pub fn ufo_on_screen(state: &Snapshot) -> bool {
    0 < state.ufo.x && state.ufo.x < SCREEN_WIDTH
}

/// Positive when the ufo is to the right of the ship. Saturates at the `i32` bounds.
pub fn ufo_sign_distance(state: &Snapshot) -> i32 {
    state.ufo.x.saturating_sub(state.ship.x)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SpaceInvadersExtractor {}

impl SpaceInvadersExtractor {
    pub fn new() -> Self {
        Self {}
    }
}

impl FeatureExtractor for SpaceInvadersExtractor {
    type State = Snapshot;
    type Features = FeatureVector;

    fn extract(&self, state: &Snapshot) -> FeatureVector {
        let mut features = FeatureVector::default();

        features.set(Feature::ShipX, ship_x(state));
        features.set(Feature::ShipLaserMidAir, ship_laser_mid_air(state) as i32);
        features.set(Feature::NumEnemies, num_enemies(state));
        features.set(Feature::LowestEnemyHeight, lowest_enemy_height(state));
        features.set(Feature::InDanger, in_danger(state) as i32);
        features.set(Feature::UfoOnScreen, ufo_on_screen(state) as i32);
        features.set(Feature::UfoSignDistance, ufo_sign_distance(state));
        features.set(
            Feature::PartiallyUnderShield,
            partially_under_shield(state, 0) as i32,
        );
        features.set(
            Feature::CompletelyUnderShield,
            completely_under_shield(state) as i32,
        );
        features.set(
            Feature::SignDistanceClosestShieldPartial,
            sign_distance_closest_shield_partial(state),
        );
        features.set(
            Feature::SignDistanceClosestShieldComplete,
            sign_distance_closest_shield_complete(state),
        );
        features.set(
            Feature::SignDistanceClosestUnShieldComplete,
            sign_distance_closest_un_shield_complete(state),
        );

        trace!("Extracted features {:?}", features.values());

        features
    }

    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::unbounded(FEATURE_COUNT)
    }
}
