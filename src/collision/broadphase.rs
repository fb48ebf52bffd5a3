//! Broad-phase candidate pair culling.
//!
//! Every collider is paired with every other and pairs whose bounding
//! boxes overlap survive for narrow-phase inspection. Quadratic in the
//! number of colliders, which is fine at the scene sizes this targets;
//! there is no spatial partitioning here.

use super::collider::Collider;

use itertools::Itertools;

/// Index pairs of colliders whose cached bounding boxes overlap.
///
/// Pairs are returned with the lower index first, each unordered pair at
/// most once. Boxes that merely touch don't count as overlapping, per
/// [`AABB::overlap`][super::AABB::overlap].
pub fn aabb_pairs(colliders: &[Collider]) -> Vec<[usize; 2]> {
    let mut pairs = Vec::new();
    for ((i, a), (j, b)) in colliders.iter().enumerate().tuple_combinations() {
        if a.aabb().overlap(b.aabb()) {
            pairs.push([i, j]);
        }
    }
    log::trace!(
        "broad phase kept {} of {} pairs",
        pairs.len(),
        colliders.len() * colliders.len().saturating_sub(1) / 2
    );
    pairs
}
