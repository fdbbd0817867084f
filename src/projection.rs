//! Reverse projection: a dry-fire setup scaled back up to the equivalent
//! real-world target size at a catalog of standard range distances.
use crate::angular::angular_size_moa;
use crate::units::{to_inches, Length, Unit};

/// A standard range distance the projection table reports against
#[derive(Debug, Clone, Copy)]
pub struct ReferenceDistance {
    pub value: f64,
    pub unit: Unit,
    pub label: &'static str,
}

/// Standard distances for the equivalent-size table, nearest first
pub const REFERENCE_DISTANCES: &[ReferenceDistance] = &[
    ReferenceDistance { value: 7.0, unit: Unit::Yards, label: "7 yds" },
    ReferenceDistance { value: 10.0, unit: Unit::Yards, label: "10 yds" },
    ReferenceDistance { value: 15.0, unit: Unit::Yards, label: "15 yds" },
    ReferenceDistance { value: 25.0, unit: Unit::Yards, label: "25 yds" },
    ReferenceDistance { value: 50.0, unit: Unit::Yards, label: "50 yds" },
    ReferenceDistance { value: 100.0, unit: Unit::Yards, label: "100 yds" },
    ReferenceDistance { value: 200.0, unit: Unit::Yards, label: "200 yds" },
    ReferenceDistance { value: 300.0, unit: Unit::Yards, label: "300 yds" },
];

/// Inputs for a scale-up calculation
#[derive(Debug, Clone)]
pub struct ProjectionInput {
    /// Dry-fire target width
    pub target_width: Length,
    /// Dry-fire target height
    pub target_height: Length,
    /// Distance from shooter to the dry-fire target
    pub sim_distance: Length,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        // 1x1" target practiced at 10 ft
        Self {
            target_width: Length::new(1.0, Unit::Inches),
            target_height: Length::new(1.0, Unit::Inches),
            sim_distance: Length::new(10.0, Unit::Feet),
        }
    }
}

/// Equivalent real-world size at one reference distance, in inches
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSize {
    pub label: &'static str,
    pub width_in: f64,
    pub height_in: f64,
}

/// Result of a scale-up calculation
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// Angular size of the dry-fire setup itself
    pub moa: f64,
    /// One entry per reference distance, catalog order preserved
    pub projections: Vec<ProjectedSize>,
}

/// Project a dry-fire setup out to the equivalent real-world target sizes.
///
/// Algebraic inverse of the forward scaling law: for each reference
/// distance d, equivalent = dry_fire_size * d / sim_distance (in inches).
/// Every entry subtends the same angle at its distance as the dry-fire
/// target does at the simulated distance. A simulated distance of zero
/// yields MOA 0 and an empty table.
pub fn scale_up(input: &ProjectionInput, distances: &[ReferenceDistance]) -> ProjectionResult {
    let sim_dist_in = input.sim_distance.to_inches();
    let width_in = input.target_width.to_inches();
    let height_in = input.target_height.to_inches();

    if sim_dist_in == 0.0 {
        return ProjectionResult {
            moa: 0.0,
            projections: Vec::new(),
        };
    }

    let moa = angular_size_moa(width_in, sim_dist_in);

    let projections = distances
        .iter()
        .map(|d| {
            let dist_in = to_inches(d.value, d.unit);
            ProjectedSize {
                label: d.label,
                width_in: width_in * dist_in / sim_dist_in,
                height_in: height_in * dist_in / sim_dist_in,
            }
        })
        .collect();

    ProjectionResult { moa, projections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUMERICAL_TOLERANCE;

    #[test]
    fn test_one_inch_at_ten_feet() {
        // 1" at 120"; at 25 yd (900") the equivalent is 900/120 = 7.5"
        let result = scale_up(&ProjectionInput::default(), REFERENCE_DISTANCES);

        let at_25 = result
            .projections
            .iter()
            .find(|p| p.label == "25 yds")
            .unwrap();
        assert!((at_25.width_in - 7.5).abs() < NUMERICAL_TOLERANCE);
        assert!((at_25.height_in - 7.5).abs() < NUMERICAL_TOLERANCE);
    }

    #[test]
    fn test_table_matches_catalog_order_and_length() {
        let result = scale_up(&ProjectionInput::default(), REFERENCE_DISTANCES);

        assert_eq!(result.projections.len(), REFERENCE_DISTANCES.len());
        for (entry, reference) in result.projections.iter().zip(REFERENCE_DISTANCES) {
            assert_eq!(entry.label, reference.label);
        }
    }

    #[test]
    fn test_zero_sim_distance_is_degenerate() {
        let input = ProjectionInput {
            sim_distance: Length::new(0.0, Unit::Feet),
            ..Default::default()
        };
        let result = scale_up(&input, REFERENCE_DISTANCES);

        assert_eq!(result.moa, 0.0);
        assert!(result.projections.is_empty());
    }

    #[test]
    fn test_each_entry_preserves_moa() {
        let input = ProjectionInput {
            target_width: Length::new(2.0, Unit::Inches),
            target_height: Length::new(3.0, Unit::Inches),
            sim_distance: Length::new(12.0, Unit::Feet),
        };
        let result = scale_up(&input, REFERENCE_DISTANCES);

        for (entry, reference) in result.projections.iter().zip(REFERENCE_DISTANCES) {
            let dist_in = to_inches(reference.value, reference.unit);
            let entry_moa = angular_size_moa(entry.width_in, dist_in);
            assert!(
                (entry_moa - result.moa).abs() / result.moa < NUMERICAL_TOLERANCE,
                "{}: {entry_moa} vs {}",
                reference.label,
                result.moa
            );
        }
    }

    #[test]
    fn test_empty_catalog_gives_empty_table() {
        let result = scale_up(&ProjectionInput::default(), &[]);
        assert!(result.projections.is_empty());
        assert!(result.moa > 0.0);
    }
}
