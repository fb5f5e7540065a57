//! Horizontal interval predicates between the ship and the shields.
//!
//! All ranges are inclusive at both ends and measured in screen pixels. Every shield
//! predicate answers with a sentinel rather than failing when there are no shields.

use super::constants::{NO_SHIELD_DISTANCE, SCREEN_WIDTH};
use super::snapshot::Snapshot;

/// Screen columns are `i64` so that edges computed from any `i32` coordinate and width fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XRange {
    pub left: i64,
    pub right: i64,
}

impl XRange {
    pub fn new(left: i64, right: i64) -> Self {
        Self { left, right }
    }

    pub fn contains(&self, x: i64) -> bool {
        self.left <= x && x <= self.right
    }

    pub fn shift(&self, offset: i64) -> Self {
        Self::new(self.left + offset, self.right + offset)
    }

    pub fn columns(&self) -> impl Iterator<Item = i64> {
        self.left..=self.right
    }

    fn is_on_screen(&self) -> bool {
        self.left >= 0 && self.right <= i64::from(SCREEN_WIDTH)
    }
}

/// The ship's position is its leftmost pixel.
pub fn ship_xrange(state: &Snapshot) -> XRange {
    let ship = &state.ship;
    let left = i64::from(ship.x);
    XRange::new(left, left + i64::from(ship.w))
}

/// Width comes from the shield's pixel mask rather than a stored width.
pub fn shield_xrange(state: &Snapshot, idx: usize) -> Option<XRange> {
    state.shields.get(idx).map(|shield| {
        let left = i64::from(shield.x);
        XRange::new(left, left + i64::from(shield.width()))
    })
}

/// Top and bottom of the shield at `idx`, with y growing downwards.
pub fn shield_yrange(state: &Snapshot, idx: usize) -> Option<(i32, i32)> {
    state
        .shields
        .get(idx)
        .map(|shield| (shield.y, shield.y.saturating_add(shield.height())))
}

pub fn shield_position(state: &Snapshot, idx: usize) -> Option<(i32, i32)> {
    state.shields.get(idx).map(|shield| (shield.x, shield.y))
}

pub fn all_shield_xranges(state: &Snapshot) -> Vec<XRange> {
    (0..state.shields.len())
        .filter_map(|idx| shield_xrange(state, idx))
        .collect()
}

fn is_covered(x: i64, shields: &[XRange]) -> bool {
    shields.iter().any(|shield| shield.contains(x))
}

/// Whether any column of the ship, moved by `offset`, lies under a shield.
///
/// A moved ship that would leave the screen is never under anything.
pub fn partially_under_shield(state: &Snapshot, offset: i32) -> bool {
    is_under_shield_at(state, i64::from(offset))
}

fn is_under_shield_at(state: &Snapshot, offset: i64) -> bool {
    if state.shields.is_empty() {
        return false;
    }

    let ship = ship_xrange(state).shift(offset);
    if !ship.is_on_screen() {
        return false;
    }

    let shields = all_shield_xranges(state);
    ship.columns().any(|x| is_covered(x, &shields))
}

pub fn completely_under_shield(state: &Snapshot) -> bool {
    if state.shields.is_empty() {
        return false;
    }

    let shields = all_shield_xranges(state);
    ship_xrange(state).columns().all(|x| is_covered(x, &shields))
}

/// Keeps the first candidate with the smallest magnitude. Later candidates only win on a
/// strictly smaller magnitude.
struct ClosestOffset(i64);

impl ClosestOffset {
    fn new() -> Self {
        Self(i64::from(NO_SHIELD_DISTANCE))
    }

    fn offer(&mut self, offset: i64) {
        self.offer_if(offset, offset, || true)
    }

    /// `gap` decides whether the candidate beats the current best; `offset` is what gets
    /// stored. `accept` is only evaluated once the gap is known to be smaller.
    fn offer_if(&mut self, gap: i64, offset: i64, accept: impl FnOnce() -> bool) {
        if gap.abs() < self.0.abs() && accept() {
            self.0 = offset;
        }
    }

    /// Kept offsets are at most one past the sentinel's magnitude, so they fit an `i32`.
    fn distance(&self) -> i32 {
        self.0 as i32
    }
}

/// Signed distance to the nearest point where the ship would touch a shield.
///
/// Both edges of the ship are matched against both edges of every shield.
pub fn sign_distance_closest_shield_partial(state: &Snapshot) -> i32 {
    if state.shields.is_empty() {
        return NO_SHIELD_DISTANCE;
    }

    if partially_under_shield(state, 0) {
        return 0;
    }

    let ship = ship_xrange(state);
    let mut closest = ClosestOffset::new();
    for shield in all_shield_xranges(state) {
        closest.offer(shield.left - ship.left);
        closest.offer(shield.right - ship.left);
        closest.offer(shield.left - ship.right);
        closest.offer(shield.right - ship.right);
    }

    closest.distance()
}

/// Signed distance to line up the ship's left or right edge with the same edge of a shield.
pub fn sign_distance_closest_shield_complete(state: &Snapshot) -> i32 {
    if state.shields.is_empty() {
        return NO_SHIELD_DISTANCE;
    }

    if completely_under_shield(state) {
        return 0;
    }

    let ship = ship_xrange(state);
    let mut closest = ClosestOffset::new();
    for shield in all_shield_xranges(state) {
        closest.offer(shield.left - ship.left);
        closest.offer(shield.right - ship.right);
    }

    closest.distance()
}

/// Smallest signed move that leaves the ship clear of every shield.
///
/// Candidates step the ship one pixel past a shield edge; a candidate is only kept when the
/// moved ship would not be under any other shield either.
pub fn sign_distance_closest_un_shield_complete(state: &Snapshot) -> i32 {
    if state.shields.is_empty() {
        return 0;
    }

    if !partially_under_shield(state, 0) {
        return 0;
    }

    let ship = ship_xrange(state);
    let mut closest = ClosestOffset::new();
    for shield in all_shield_xranges(state) {
        let left_gap = shield.left - ship.right;
        let past_left = left_gap - 1;
        closest.offer_if(left_gap, past_left, || {
            !is_under_shield_at(state, past_left)
        });

        let right_gap = shield.right - ship.left;
        let past_right = right_gap + 1;
        closest.offer_if(right_gap, past_right, || {
            !is_under_shield_at(state, past_right)
        });
    }

    closest.distance()
}
