//! Selection priority for overlapping actors under the cursor

use bevy_brush_core::{EditorActorPreview, PixelPos};
use serde::{Deserialize, Serialize};

/// Which actor wins when several are the same pixel distance from the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthTieBreak {
    /// The highest actor (largest z) is on top
    #[default]
    HighestFirst,
    /// The lowest actor (smallest z) is on top
    LowestFirst,
}

impl DepthTieBreak {
    /// Rank a depth so that smaller ranks win
    fn rank(self, z: i32) -> i64 {
        match self {
            DepthTieBreak::HighestFirst => -(z as i64),
            DepthTieBreak::LowestFirst => z as i64,
        }
    }
}

/// Ordering key of an actor for a cursor position: pixel distance first, then depth.
///
/// Distance is compared squared so equal distances compare exactly.
pub fn selection_priority(
    actor: &EditorActorPreview,
    world_px: PixelPos,
    tie_break: DepthTieBreak,
) -> (i64, i64) {
    let distance = actor.bounds.center().distance_squared(world_px);
    (distance, tie_break.rank(actor.center_position.z))
}

/// The topmost actor among `candidates`. Full ties keep the earliest candidate.
pub fn actor_under_cursor<'a>(
    world_px: PixelPos,
    candidates: &[&'a EditorActorPreview],
    tie_break: DepthTieBreak,
) -> Option<&'a EditorActorPreview> {
    candidates
        .iter()
        .copied()
        .min_by_key(|actor| selection_priority(actor, world_px, tie_break))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_brush_core::{CellPos, PixelRect, PlayerReference, WorldPos};
    use uuid::Uuid;

    fn actor(name: &str, bounds: PixelRect, z: i32) -> EditorActorPreview {
        EditorActorPreview {
            id: Uuid::new_v4(),
            template: name.to_string(),
            owner: PlayerReference::neutral(),
            location: CellPos::ZERO,
            sub_cell: None,
            facing: None,
            center_position: WorldPos::new(0, 0, z),
            bounds,
            occupied: vec![CellPos::ZERO],
            shares_cell: false,
        }
    }

    #[test]
    fn test_empty_candidates() {
        assert!(actor_under_cursor(PixelPos::ZERO, &[], DepthTieBreak::default()).is_none());
    }

    #[test]
    fn test_nearest_center_wins() {
        let near = actor("near", PixelRect::new(0, 0, 20, 20), 0);
        let far = actor("far", PixelRect::new(8, 8, 20, 20), 0);
        let cursor = PixelPos::new(9, 9);

        let picked = actor_under_cursor(cursor, &[&far, &near], DepthTieBreak::HighestFirst);
        assert_eq!(picked.unwrap().template, "near");
    }

    #[test]
    fn test_distance_beats_depth() {
        let near_low = actor("near_low", PixelRect::new(0, 0, 20, 20), 0);
        let far_high = actor("far_high", PixelRect::new(4, 4, 20, 20), 2048);
        let cursor = PixelPos::new(10, 10);

        let picked = actor_under_cursor(cursor, &[&far_high, &near_low], DepthTieBreak::HighestFirst);
        assert_eq!(picked.unwrap().template, "near_low");
    }

    #[test]
    fn test_tie_break_direction() {
        let ground = actor("ground", PixelRect::new(0, 0, 20, 20), 0);
        let air = actor("air", PixelRect::new(0, 0, 20, 20), 512);
        let cursor = PixelPos::new(3, 3);
        let candidates = [&ground, &air];

        let highest = actor_under_cursor(cursor, &candidates, DepthTieBreak::HighestFirst);
        assert_eq!(highest.unwrap().template, "air");

        let lowest = actor_under_cursor(cursor, &candidates, DepthTieBreak::LowestFirst);
        assert_eq!(lowest.unwrap().template, "ground");
    }

    #[test]
    fn test_full_tie_is_deterministic() {
        let a = actor("a", PixelRect::new(0, 0, 10, 10), 0);
        let b = actor("b", PixelRect::new(0, 0, 10, 10), 0);
        let cursor = PixelPos::new(2, 2);

        for _ in 0..10 {
            let picked = actor_under_cursor(cursor, &[&a, &b], DepthTieBreak::HighestFirst);
            assert_eq!(picked.unwrap().id, a.id);
        }
    }
}
