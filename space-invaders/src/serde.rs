use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use std::fmt;

use super::snapshot::PixelMask;

/// A single mask pixel. The simulator dumps either booleans or 0/1 integers.
struct MaskCell(bool);

struct MaskCellVisitor {}

impl<'de> Visitor<'de> for MaskCellVisitor {
    type Value = MaskCell;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean or an integer pixel value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(MaskCell(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(MaskCell(v != 0))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(MaskCell(v != 0))
    }
}

impl<'de> Deserialize<'de> for MaskCell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MaskCellVisitor {})
    }
}

struct PixelMaskVisitor {}

impl<'de> Visitor<'de> for PixelMaskVisitor {
    type Value = PixelMask;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a rectangular array of pixel rows")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut rows = Vec::with_capacity(seq.size_hint().unwrap_or(0));

        while let Some(row) = seq.next_element::<Vec<MaskCell>>()? {
            rows.push(row.into_iter().map(|cell| cell.0).collect::<Vec<_>>());
        }

        PixelMask::new(rows).map_err(A::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PixelMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(PixelMaskVisitor {})
    }
}
