//! Truck fit evaluation
//!
//! Decides whether an item can ride a truck at all (physical fit), whether
//! it can ride without a permit (legal fit), and how desirable the pairing
//! is (score).

use serde::{Deserialize, Serialize};

use crate::constants::regulations::{LEGAL_HEIGHT_FT, LEGAL_WIDTH_FT};
use crate::model::{CargoItem, TruckSpec};

/// Score given to trucks that cannot carry the item
pub const NO_FIT_SCORE: f64 = -1.0;

const BASE_SCORE: f64 = 50.0;
const LENGTH_UTILIZATION_WEIGHT: f64 = 20.0;
const WEIGHT_UTILIZATION_WEIGHT: f64 = 15.0;
const LEGAL_BONUS: f64 = 15.0;

/// Fit judgment for one (item, truck) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckFit {
    pub truck_id: String,
    pub fits: bool,
    pub is_legal: bool,
    pub score: f64,
}

/// Item fits on the deck and within the truck's capacity
pub fn fits_physically(item: &CargoItem, truck: &TruckSpec) -> bool {
    item.length <= truck.deck_length
        && item.width <= truck.deck_width
        && item.total_weight() <= truck.max_cargo_weight
}

/// Item fits physically and stays within the federal height/width baseline
pub fn fits_legally(item: &CargoItem, truck: &TruckSpec) -> bool {
    fits_physically(item, truck)
        && item.height + truck.deck_height <= LEGAL_HEIGHT_FT
        && item.width <= LEGAL_WIDTH_FT
}

pub(crate) fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole
    } else {
        0.0
    }
}

/// Evaluate one pairing
pub fn evaluate_fit(item: &CargoItem, truck: &TruckSpec) -> TruckFit {
    let fits = fits_physically(item, truck);
    let is_legal = fits && fits_legally(item, truck);

    let score = if fits {
        let mut score = BASE_SCORE;
        score += LENGTH_UTILIZATION_WEIGHT * ratio(item.length, truck.deck_length);
        score += WEIGHT_UTILIZATION_WEIGHT * ratio(item.total_weight(), truck.max_cargo_weight);
        if is_legal {
            score += LEGAL_BONUS;
        }
        score
    } else {
        NO_FIT_SCORE
    };

    TruckFit {
        truck_id: truck.id.clone(),
        fits,
        is_legal,
        score,
    }
}

/// Evaluate every truck in catalog order
pub fn rank_trucks(item: &CargoItem, trucks: &[TruckSpec]) -> Vec<TruckFit> {
    trucks.iter().map(|t| evaluate_fit(item, t)).collect()
}

/// Index of the highest-scoring fitting truck. Ties go to the earlier
/// catalog entry.
pub fn best_fit_index(item: &CargoItem, trucks: &[TruckSpec]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, truck) in trucks.iter().enumerate() {
        let fit = evaluate_fit(item, truck);
        if !fit.fits {
            continue;
        }
        match best {
            Some((_, score)) if fit.score <= score => {}
            _ => best = Some((idx, fit.score)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LoadingMethod, TruckCategory};

    fn truck(id: &str, deck_length: f64, deck_height: f64, max_cargo_weight: f64) -> TruckSpec {
        TruckSpec {
            id: id.to_string(),
            name: id.to_string(),
            category: TruckCategory::Flatbed,
            loading_method: LoadingMethod::Forklift,
            deck_length,
            deck_width: 8.5,
            deck_height,
            well_length: None,
            well_height: None,
            max_cargo_weight,
            tare_weight: None,
            max_legal_cargo_height: None,
            max_legal_cargo_width: None,
        }
    }

    // ==========================================
    // Physical and legal fit
    // ==========================================

    #[test]
    fn test_physical_fit() {
        let t = truck("fb", 48.0, 5.0, 48_000.0);
        assert!(fits_physically(&CargoItem::new("a", 48.0, 8.5, 4.5, 40_000.0), &t));
        assert!(!fits_physically(&CargoItem::new("long", 49.0, 8.0, 4.0, 1_000.0), &t));
        assert!(!fits_physically(&CargoItem::new("wide", 20.0, 9.0, 4.0, 1_000.0), &t));
        assert!(!fits_physically(&CargoItem::new("heavy", 20.0, 8.0, 4.0, 48_001.0), &t));
    }

    #[test]
    fn test_legal_fit_height_baseline() {
        let t = truck("fb", 48.0, 5.0, 48_000.0);
        assert!(fits_legally(&CargoItem::new("ok", 20.0, 8.0, 8.5, 1_000.0), &t));
        assert!(!fits_legally(&CargoItem::new("tall", 20.0, 8.0, 8.6, 1_000.0), &t));
    }

    #[test]
    fn test_legal_fit_requires_physical_fit() {
        let t = truck("short", 20.0, 2.0, 48_000.0);
        assert!(!fits_legally(&CargoItem::new("a", 30.0, 8.0, 4.0, 1_000.0), &t));
    }

    // ==========================================
    // Scoring
    // ==========================================

    #[test]
    fn test_score_formula() {
        let t = truck("fb", 48.0, 5.0, 48_000.0);
        let item = CargoItem::new("a", 24.0, 8.0, 4.0, 24_000.0);
        let fit = evaluate_fit(&item, &t);
        // 50 + 20*0.5 + 15*0.5 + 15
        assert!((fit.score - 82.5).abs() < 1e-9);
        assert!(fit.is_legal);
    }

    #[test]
    fn test_score_without_legal_bonus() {
        let t = truck("fb", 48.0, 5.0, 48_000.0);
        let item = CargoItem::new("tall", 24.0, 8.0, 10.0, 24_000.0);
        let fit = evaluate_fit(&item, &t);
        assert!(fit.fits);
        assert!(!fit.is_legal);
        assert!((fit.score - 67.5).abs() < 1e-9);
    }

    #[test]
    fn test_non_fitting_truck_scores_negative() {
        let t = truck("small", 10.0, 5.0, 5_000.0);
        let fit = evaluate_fit(&CargoItem::new("a", 20.0, 8.0, 4.0, 1_000.0), &t);
        assert!(!fit.fits);
        assert!((fit.score - NO_FIT_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tighter_truck_wins() {
        let trucks = vec![truck("big", 53.0, 5.0, 48_000.0), truck("snug", 30.0, 5.0, 48_000.0)];
        let item = CargoItem::new("a", 28.0, 8.0, 4.0, 10_000.0);
        assert_eq!(best_fit_index(&item, &trucks), Some(1));
    }

    #[test]
    fn test_tie_goes_to_first_catalog_entry() {
        let trucks = vec![
            truck("first", 48.0, 5.0, 48_000.0),
            truck("second", 48.0, 5.0, 48_000.0),
        ];
        let item = CargoItem::new("a", 20.0, 8.0, 4.0, 10_000.0);
        assert_eq!(best_fit_index(&item, &trucks), Some(0));
    }

    #[test]
    fn test_no_fit_returns_none() {
        let trucks = vec![truck("small", 10.0, 5.0, 5_000.0)];
        let item = CargoItem::new("a", 20.0, 8.0, 4.0, 1_000.0);
        assert_eq!(best_fit_index(&item, &trucks), None);
        assert_eq!(rank_trucks(&item, &trucks).len(), 1);
    }
}
