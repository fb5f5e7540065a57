use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::{self, Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use anyhow::anyhow;

use super::constants::FEATURE_COUNT;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Feature {
    ShipX = 0,
    ShipLaserMidAir = 1,
    NumEnemies = 2,
    LowestEnemyHeight = 3,
    InDanger = 4,
    UfoOnScreen = 5,
    UfoSignDistance = 6,
    PartiallyUnderShield = 7,
    CompletelyUnderShield = 8,
    SignDistanceClosestShieldPartial = 9,
    SignDistanceClosestShieldComplete = 10,
    SignDistanceClosestUnShieldComplete = 11,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::ShipX,
        Feature::ShipLaserMidAir,
        Feature::NumEnemies,
        Feature::LowestEnemyHeight,
        Feature::InDanger,
        Feature::UfoOnScreen,
        Feature::UfoSignDistance,
        Feature::PartiallyUnderShield,
        Feature::CompletelyUnderShield,
        Feature::SignDistanceClosestShieldPartial,
        Feature::SignDistanceClosestShieldComplete,
        Feature::SignDistanceClosestUnShieldComplete,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::ShipX => "ship_x",
            Feature::ShipLaserMidAir => "ship_laser_mid_air",
            Feature::NumEnemies => "num_enemies",
            Feature::LowestEnemyHeight => "lowest_enemy_height",
            Feature::InDanger => "in_danger",
            Feature::UfoOnScreen => "ufo_on_screen",
            Feature::UfoSignDistance => "ufo_sign_distance",
            Feature::PartiallyUnderShield => "partially_under_shield",
            Feature::CompletelyUnderShield => "completely_under_shield",
            Feature::SignDistanceClosestShieldPartial => "sign_distance_closest_shield_partial",
            Feature::SignDistanceClosestShieldComplete => "sign_distance_closest_shield_complete",
            Feature::SignDistanceClosestUnShieldComplete => {
                "sign_distance_closest_UN_shield_complete"
            }
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Feature {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .find(|feature| feature.name() == s)
            .copied()
            .ok_or_else(|| anyhow!("Unknown feature: {}", s))
    }
}

/// The twelve Space Invaders features in `Feature` order. Booleans are stored as 0 or 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeatureVector(pub [i32; FEATURE_COUNT]);

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> i32 {
        self.0[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: i32) {
        self.0[feature.index()] = value;
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, i32)> + '_ {
        Feature::ALL.iter().map(move |&feature| (feature, self.get(feature)))
    }

    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.0.iter().map(|&v| v as f32).collect()
    }
}

impl Index<Feature> for FeatureVector {
    type Output = i32;

    fn index(&self, feature: Feature) -> &Self::Output {
        &self.0[feature.index()]
    }
}

impl Display for FeatureVector {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (feature, value) in self.iter() {
            writeln!(f, "{:>42}: {}", feature.name(), value)?;
        }

        Ok(())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_feature_indices_follow_declaration_order() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_feature_name_round_trips() {
        for feature in Feature::ALL {
            assert_eq!(feature.name().parse::<Feature>().unwrap(), feature);
        }

        assert!("shield_count".parse::<Feature>().is_err());
    }

    #[test]
    fn test_feature_vector_index_and_set() {
        let mut features = FeatureVector::default();
        features.set(Feature::UfoSignDistance, -70);

        assert_eq!(features[Feature::UfoSignDistance], -70);
        assert_eq!(features.values()[6], -70);
        assert_eq!(features.to_f32_vec()[6], -70.0);
    }

    #[test]
    fn test_feature_vector_ser_json() {
        let mut features = FeatureVector::default();
        features.set(Feature::ShipX, 77);
        features.set(Feature::SignDistanceClosestUnShieldComplete, 8);

        let value = json!(features);

        assert_eq!(value["ship_x"], 77);
        assert_eq!(value["sign_distance_closest_UN_shield_complete"], 8);
        assert_eq!(value.as_object().unwrap().len(), FEATURE_COUNT);
    }
}
