use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// One frame of Space Invaders state as dumped by the simulator.
///
/// Only the fields read by the feature extractor are modelled; anything else in the
/// simulator's dump is ignored when parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ship: Ship,
    /// Present while the ship's own projectile is in flight.
    #[serde(default)]
    pub ship_laser: Option<Laser>,
    pub enemies: Vec<Enemy>,
    pub enemy_lasers: Vec<Laser>,
    pub ufo: Ufo,
    pub shields: Vec<Shield>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid snapshot")
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("invalid snapshot")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Leftmost pixel column of the ship.
    pub x: i32,
    pub y: i32,
    pub w: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laser {
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ufo {
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shield {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "data")]
    pub pixel_mask: PixelMask,
}

impl Shield {
    pub fn width(&self) -> i32 {
        self.pixel_mask.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.pixel_mask.height() as i32
    }
}

/// Rectangular grid of shield pixels, row major. Every row has the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PixelMask(pub(crate) Vec<Vec<bool>>);

impl PixelMask {
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        if let Some((row, len, expected)) = find_ragged_row(&rows) {
            return Err(anyhow!(
                "Pixel mask row {} has {} columns, expected {}",
                row,
                len,
                expected
            ));
        }

        Ok(Self(rows))
    }

    pub fn solid(width: usize, height: usize) -> Self {
        Self(vec![vec![true; width]; height])
    }

    pub fn width(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.0
    }
}

fn find_ragged_row(rows: &[Vec<bool>]) -> Option<(usize, usize, usize)> {
    let expected = rows.first()?.len();
    rows.iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
        .map(|(i, row)| (i, row.len(), expected))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn snapshot_json() -> serde_json::Value {
        json!({
            "ship": { "x": 77, "y": 185, "w": 16, "h": 9 },
            "ship_laser": null,
            "enemies": [
                { "x": 44, "y": 33, "alive": true, "id": 0 },
                { "x": 60, "y": 33, "alive": false, "id": 1 }
            ],
            "enemy_lasers": [
                { "x": 150, "y": 113, "w": 2, "h": 11, "movement": "Down" }
            ],
            "ufo": { "x": 7, "y": 12 },
            "shields": [
                { "x": 93, "y": 157, "data": [[1, 0, 1], [1, 1, 1]] }
            ],
            "score": 0,
            "lives": 3
        })
    }

    #[test]
    fn test_from_value_reads_consumed_fields() {
        let snapshot = Snapshot::from_value(snapshot_json()).unwrap();

        assert_eq!(snapshot.ship, Ship { x: 77, y: 185, w: 16 });
        assert_eq!(snapshot.ship_laser, None);
        assert_eq!(snapshot.enemies.len(), 2);
        assert!(!snapshot.enemies[1].alive);
        assert_eq!(snapshot.enemy_lasers, vec![Laser { x: 150, y: 113 }]);
        assert_eq!(snapshot.ufo, Ufo { x: 7, y: 12 });
        assert_eq!(snapshot.shields[0].width(), 3);
        assert_eq!(snapshot.shields[0].height(), 2);
        assert_eq!(
            snapshot.shields[0].pixel_mask.rows(),
            &[vec![true, false, true], vec![true, true, true]]
        );
    }

    #[test]
    fn test_missing_ship_laser_is_none() {
        let mut value = snapshot_json();
        value.as_object_mut().unwrap().remove("ship_laser");

        assert_eq!(Snapshot::from_value(value).unwrap().ship_laser, None);
    }

    #[test]
    fn test_ship_laser_present() {
        let mut value = snapshot_json();
        value["ship_laser"] = json!({ "x": 84, "y": 170 });

        let snapshot = Snapshot::from_value(value).unwrap();

        assert_eq!(snapshot.ship_laser, Some(Laser { x: 84, y: 170 }));
    }

    #[test]
    fn test_boolean_pixel_mask() {
        let mut value = snapshot_json();
        value["shields"][0]["data"] = json!([[true, false], [false, false]]);

        let snapshot = Snapshot::from_value(value).unwrap();

        assert_eq!(snapshot.shields[0].width(), 2);
    }

    #[test]
    fn test_missing_field_is_invalid_snapshot() {
        let mut value = snapshot_json();
        value.as_object_mut().unwrap().remove("ufo");

        let err = Snapshot::from_value(value).unwrap_err();

        assert_eq!(err.to_string(), "invalid snapshot");
        assert!(format!("{:#}", err).contains("ufo"));
    }

    #[test]
    fn test_wrong_type_is_invalid_snapshot() {
        let mut value = snapshot_json();
        value["ship"]["x"] = json!("left");

        let err = Snapshot::from_value(value).unwrap_err();

        assert_eq!(err.to_string(), "invalid snapshot");
    }

    #[test]
    fn test_ragged_pixel_mask_is_invalid_snapshot() {
        let mut value = snapshot_json();
        value["shields"][0]["data"] = json!([[1, 1, 1], [1, 1]]);

        let err = Snapshot::from_value(value).unwrap_err();

        assert_eq!(err.to_string(), "invalid snapshot");
        assert!(format!("{:#}", err).contains("row 1 has 2 columns, expected 3"));
    }

    #[test]
    fn test_from_json_round_trip() {
        let snapshot = Snapshot::from_value(snapshot_json()).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();

        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_pixel_mask_new_rejects_ragged_rows() {
        assert!(PixelMask::new(vec![vec![true; 4], vec![true; 4]]).is_ok());
        assert!(PixelMask::new(vec![vec![true; 4], vec![true; 3]]).is_err());
    }

    #[test]
    fn test_empty_pixel_mask_has_no_width() {
        let mask = PixelMask::new(vec![]).unwrap();

        assert_eq!(mask.width(), 0);
        assert_eq!(mask.height(), 0);
    }
}
