use log::warn;
use nutripi_model::profile::{ProfilePatch, UserProfile};

use crate::{history, targets};

/// Merges `patch` into `profile`.
///
/// `bmi` is derived, so any value carried by the patch is ignored and it is
/// recomputed from the merged weight and height.
pub fn apply_patch(mut profile: UserProfile, patch: &ProfilePatch) -> UserProfile {
    if let Some(height) = patch.height {
        profile.height = height;
    }
    if let Some(weight_kg) = patch.weight_kg {
        profile.weight_kg = weight_kg;
    }
    if let Some(activity_level) = patch.activity_level {
        profile.activity_level = Some(activity_level);
    }
    if let Some(daily_recommendation) = patch.daily_recommendation {
        profile.daily_recommendation = daily_recommendation;
    }
    if let Some(logged_weights) = &patch.logged_weights {
        profile.logged_weights = logged_weights.clone();
    }

    refresh(profile)
}

/// Restores the derived fields and history invariants of a profile received
/// from elsewhere.
pub fn refresh(mut profile: UserProfile) -> UserProfile {
    let entries = profile.logged_weights.len();
    profile.logged_weights = history::normalize_history(&profile.logged_weights);
    if profile.logged_weights.len() != entries {
        warn!(
            "Dropped {} duplicate weight entries",
            entries - profile.logged_weights.len()
        );
    }

    profile.bmi = targets::bmi(profile.weight_kg, profile.height).ok();
    profile
}
