//! R-tree broad phase for large groups.
//!
//! Enumerating every pair is O(N²) closest-approach evaluations.  For big
//! formations most pairs are far apart, so each path's straight segment is
//! boxed (inflated by the conflict margin), the boxes are bulk-loaded into an
//! `rstar` R-tree, and only pairs whose boxes overlap are handed to the
//! narrow phase.  Two segments within `margin` of each other always have
//! overlapping inflated boxes, so no conflict is lost.  Each box is grown by
//! the full margin, which over-approximates slightly and keeps boundary cases
//! clear of rounding.

use rstar::{AABB, RTree, RTreeObject};

use fp_core::{DVec3, PlannedPath};

/// A path's inflated bounding box, tagged with its index in the path slice.
struct SegmentBox {
    index: usize,
    lower: [f64; 3],
    upper: [f64; 3],
}

impl RTreeObject for SegmentBox {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.lower, self.upper)
    }
}

fn inflated_box(index: usize, start: DVec3, end: DVec3, margin: f64, planar: bool) -> SegmentBox {
    // Planar tests ignore altitude, so the boxes are flattened onto z = 0.
    let (z_lo, z_hi) = if planar {
        (0.0, 0.0)
    } else {
        (start.z.min(end.z) - margin, start.z.max(end.z) + margin)
    };
    SegmentBox {
        index,
        lower: [start.x.min(end.x) - margin, start.y.min(end.y) - margin, z_lo],
        upper: [start.x.max(end.x) + margin, start.y.max(end.y) + margin, z_hi],
    }
}

/// Index pairs `(i, j)`, `i < j`, whose straight segments may lie within
/// `margin` of each other.
///
/// With `planar = true` altitude is ignored, matching the x/y crossing test.
/// The result is sorted lexicographically and free of duplicates.
pub fn candidate_pairs(paths: &[PlannedPath], margin: f64, planar: bool) -> Vec<(usize, usize)> {
    let boxes: Vec<SegmentBox> = paths
        .iter()
        .enumerate()
        .map(|(index, p)| inflated_box(index, p.start, p.end, margin, planar))
        .collect();
    let tree = RTree::bulk_load(boxes);

    // Self-join: yields each overlapping pair in both orders plus (i, i).
    let mut pairs: Vec<(usize, usize)> = tree
        .intersection_candidates_with_other_tree(&tree)
        .filter(|(a, b)| a.index < b.index)
        .map(|(a, b)| (a.index, b.index))
        .collect();

    pairs.sort_unstable();
    pairs.dedup();
    pairs
}
