/// Shape and bounds of the observation produced by a `FeatureExtractor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservationSpace {
    pub low: f32,
    pub high: f32,
    pub shape: usize,
}

impl ObservationSpace {
    pub fn unbounded(shape: usize) -> Self {
        Self {
            low: f32::NEG_INFINITY,
            high: f32::INFINITY,
            shape,
        }
    }
}

pub trait FeatureExtractor {
    type State;
    type Features;

    fn extract(&self, state: &Self::State) -> Self::Features;
    fn observation_space(&self) -> ObservationSpace;
}
