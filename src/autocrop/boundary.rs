//! Boundary search over one energy projection.
//!
//! A projection sample qualifies as content when its energy, relative to the
//! peak energy of the projection, reaches the threshold (`>=`). Everything
//! before the first and after the last qualifying sample is trimmed, with the
//! safety margin stepping past the detected edge sample itself.

use std::ops::Range;

/// Number of samples removed from each end of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trim {
    /// Samples removed from the start
    pub leading: usize,
    /// Samples removed from the end
    pub trailing: usize,
}

impl Trim {
    /// No samples removed
    pub const NONE: Self = Self {
        leading: 0,
        trailing: 0,
    };

    /// Number of samples kept out of a projection of length `len`.
    pub const fn retained(&self, len: usize) -> usize {
        len.saturating_sub(self.leading + self.trailing)
    }
}

/// Returns the largest energy of the projection, or `0.0` when it is empty.
pub fn find_max_energy(energies: &[f32]) -> f32 {
    energies.iter().copied().fold(0.0, f32::max)
}

/// Finds how many samples can be trimmed from each end of `energies`.
///
/// `threshold` is the fraction of the peak energy a sample must reach to be
/// kept. `margin` is the number of extra samples removed past the first and
/// last qualifying samples, including samples at the ends of the projection.
///
/// # Degenerate inputs
///
/// Projections with at most one sample, a zero peak energy, and thresholds
/// that are not positive all produce [`Trim::NONE`].
///
/// # Monotonicity
///
/// For fixed `energies` and `margin`, raising `threshold` never keeps more
/// samples. When the margins would leave nothing, the result collapses to a
/// single sample at the peak of the last non-empty window reached at a lower
/// threshold, so that window keeps containing every result above it. A
/// threshold no sample reaches collapses the same way, trimming `len - 1`
/// samples in total.
///
/// # Examples
///
/// ```
/// use imageops_autocrop::{find_trim, Trim};
///
/// let energies = [0.0, 0.0, 9.0, 4.0, 4.0, 9.0, 0.0, 0.0];
/// let trim = find_trim(&energies, 0.5, 1);
/// assert_eq!(trim, Trim { leading: 3, trailing: 3 });
/// ```
pub fn find_trim(energies: &[f32], threshold: f32, margin: usize) -> Trim {
    // NaN fails the comparison as well
    if energies.len() <= 1 || !(threshold > 0.0) {
        return Trim::NONE;
    }

    let max_energy = find_max_energy(energies);
    if max_energy <= 0.0 {
        return Trim::NONE;
    }

    let window = retained_window(energies, max_energy, threshold, margin)
        .unwrap_or_else(|| collapsed_window(energies, max_energy, threshold, margin));

    Trim {
        leading: window.start,
        trailing: energies.len() - window.end,
    }
}

/// Samples kept at `threshold`, or `None` when nothing qualifies or the
/// margins leave an empty window.
fn retained_window(
    energies: &[f32],
    max_energy: f32,
    threshold: f32,
    margin: usize,
) -> Option<Range<usize>> {
    let exceeds = |energy: &f32| *energy / max_energy >= threshold;
    let first = energies.iter().position(exceeds)?;
    let last = energies.iter().rposition(exceeds)?;

    let start = first + margin;
    let end = (last + 1).saturating_sub(margin);

    (start < end).then_some(start..end)
}

fn collapsed_window(
    energies: &[f32],
    max_energy: f32,
    threshold: f32,
    margin: usize,
) -> Range<usize> {
    // Windows only change where the threshold crosses a sample's ratio, so
    // the candidate thresholds are the ratios below the requested one.
    let mut ratios: Vec<f32> = energies
        .iter()
        .map(|energy| energy / max_energy)
        .filter(|&ratio| ratio < threshold)
        .collect();
    ratios.sort_by(f32::total_cmp);
    ratios.dedup();

    // Windows shrink as the threshold grows, so the non-empty ones form a prefix.
    let settled = ratios
        .partition_point(|&ratio| retained_window(energies, max_energy, ratio, margin).is_some());
    let anchor = settled
        .checked_sub(1)
        .and_then(|index| retained_window(energies, max_energy, ratios[index], margin))
        .unwrap_or(0..energies.len());

    let peak = anchor.clone().fold(anchor.start, |best, index| {
        if energies[index] > energies[best] {
            index
        } else {
            best
        }
    });

    peak..peak + 1
}
