//! Kuhn–Munkres (Hungarian) assignment solver.
//!
//! # Algorithm
//!
//! Rows are added one at a time.  For each new row a shortest augmenting
//! path is grown over the columns using reduced costs
//! `cost(i, j) - u[i] - v[j]`; the dual potentials `u`/`v` are then shifted
//! so every matched edge stays tight.  O(N³) time, O(N²) for the matrix plus
//! O(N) working arrays.
//!
//! All working arrays (`u`, `v`, `p`, `way`, `minv`, `used`) live on the
//! stack frame of one call, so concurrent solves never share state.
//!
//! # Tie-breaking
//!
//! Columns are scanned left to right and only a strictly smaller reduced
//! cost replaces the current minimum, so among equal candidates the lowest
//! column index wins.  The result is deterministic for a given input order;
//! which of several equally optimal matchings comes out is not otherwise
//! specified.

use fp_core::DVec3;

use crate::{AssignError, AssignResult, CostMatrix};

// ── Public entry points ───────────────────────────────────────────────────────

/// Minimum-total-distance matching of `sources` onto `targets`.
///
/// Returns `assignment` with `assignment[i] = j` meaning source `i` goes to
/// target `j`.  Never fails: on mismatched lengths or non-finite input the
/// condition is logged and the identity permutation over `sources` is
/// returned, which is **not** an optimal assignment.
pub fn solve(sources: &[DVec3], targets: &[DVec3]) -> Vec<usize> {
    match try_solve(sources, targets) {
        Ok(assignment) => assignment,
        Err(err) => {
            log::warn!("assignment fallback to identity: {err}");
            identity(sources.len())
        }
    }
}

/// Strict variant of [`solve`].
///
/// # Errors
///
/// - [`AssignError::ArgumentMismatch`] if the slices differ in length.
/// - [`AssignError::NonFiniteCost`] if any distance is NaN or infinite.
pub fn try_solve(sources: &[DVec3], targets: &[DVec3]) -> AssignResult<Vec<usize>> {
    if sources.len() != targets.len() {
        return Err(AssignError::ArgumentMismatch {
            sources: sources.len(),
            targets: targets.len(),
        });
    }
    try_solve_matrix(&CostMatrix::euclidean(sources, targets))
}

/// Solve an arbitrary square cost matrix, falling back to the identity on
/// non-finite costs.
pub fn solve_matrix(cost: &CostMatrix) -> Vec<usize> {
    match try_solve_matrix(cost) {
        Ok(assignment) => assignment,
        Err(err) => {
            log::warn!("assignment fallback to identity: {err}");
            identity(cost.size())
        }
    }
}

/// Solve an arbitrary square cost matrix.
///
/// # Errors
///
/// [`AssignError::NonFiniteCost`] if any cell is NaN or infinite; the search
/// would not terminate on such input.
pub fn try_solve_matrix(cost: &CostMatrix) -> AssignResult<Vec<usize>> {
    if let Some((row, col)) = cost.first_non_finite() {
        return Err(AssignError::NonFiniteCost { row, col });
    }
    Ok(kuhn_munkres(cost))
}

/// `[0, 1, …, n-1]`.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `true` if `assignment` is a bijection over `0..assignment.len()`.
pub fn is_permutation(assignment: &[usize]) -> bool {
    let mut seen = vec![false; assignment.len()];
    for &j in assignment {
        if j >= seen.len() || seen[j] {
            return false;
        }
        seen[j] = true;
    }
    true
}

// ── Kuhn–Munkres internals ────────────────────────────────────────────────────

/// Core solver.  Arrays are 1-based; index 0 is the virtual column used as
/// the root of each augmenting path.  All costs must be finite.
fn kuhn_munkres(cost: &CostMatrix) -> Vec<usize> {
    let n = cost.size();
    if n == 0 {
        return Vec::new();
    }

    // u[i], v[j]: row and column potentials.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    // p[j] = row matched to column j (0 = unmatched).
    let mut p = vec![0usize; n + 1];
    // way[j] = previous column on the augmenting path to j.
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        p[0] = row;
        let mut j0 = 0usize;
        // minv[j] = smallest reduced cost reaching column j this round.
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = cost.get(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < minv[j] {
                    minv[j] = reduced;
                    way[j] = j0;
                }
                // Strict `<`: the first (lowest) column wins ties.
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path back to the root.
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=n {
        assignment[p[j] - 1] = j - 1;
    }
    assignment
}
