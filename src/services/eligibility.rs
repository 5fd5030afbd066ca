use crate::database::models::{Eligibility, Farmer};

/// Decide whether a farmer satisfies a scheme's eligibility criteria.
///
/// Pure and total: every present constraint must pass (conjunction, first
/// failure wins), and a constraint that is absent or empty is simply not
/// evaluated. Comparisons are case-sensitive throughout.
///
/// A farmer profile field that is itself absent passes the numeric range
/// checks but fails the membership checks: a scheme constrained to certain
/// states can never match a farmer with no recorded state, while an income
/// bound says nothing about a farmer with no recorded income.
pub fn is_eligible(farmer: &Farmer, eligibility: &Eligibility) -> bool {
    if !eligibility.states.is_empty() {
        match &farmer.location.state {
            Some(state) if eligibility.states.contains(state) => {}
            _ => return false,
        }
    }

    if !eligibility.crops.is_empty()
        && !farmer.crops.iter().any(|crop| eligibility.crops.contains(crop))
    {
        return false;
    }

    if let (Some(min), Some(income)) = (eligibility.min_income, farmer.annual_income) {
        if income < min {
            return false;
        }
    }

    if let (Some(max), Some(income)) = (eligibility.max_income, farmer.annual_income) {
        if income > max {
            return false;
        }
    }

    if let (Some(min), Some(land)) = (eligibility.min_land_size, farmer.land_size) {
        if land < min {
            return false;
        }
    }

    if let Some(category) = eligibility.category.as_deref() {
        if !category.is_empty() && farmer.category.as_deref() != Some(category) {
            return false;
        }
    }

    true
}
