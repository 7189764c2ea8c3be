pub mod config;

use chrono::NaiveDate;
use log::{debug, error, info};
use nutripi_client::AccountStore;
use nutripi_engine::{
    history, input, profile,
    targets::{self, Recommendation},
};
use nutripi_model::{
    nutrient::{Macro, Nutrient, WeightUnit},
    profile::{DailyRecommendation, LoggedWeight, ProfilePatch, UserProfile},
};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("profile not loaded")]
    NotLoaded,
    #[error(transparent)]
    Engine(#[from] nutripi_engine::Error),
    #[error(transparent)]
    Store(#[from] nutripi_client::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;

/// Edit flows behind the profile screens.
///
/// Holds the last profile confirmed by the account store. A save builds a
/// local draft from that snapshot, sends the patch and then adopts whatever
/// the store returns. A failed save leaves the snapshot as it was.
pub struct ProfileEditor {
    store: Box<dyn AccountStore>,
    profile: Option<UserProfile>,
}

impl ProfileEditor {
    pub fn new(store: Box<dyn AccountStore>) -> Self {
        Self {
            store,
            profile: None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub async fn load(&mut self) -> Result<&UserProfile> {
        info!("Fetching profile");
        let fetched = self.store.get_profile().await?;
        Ok(&*self.profile.insert(profile::refresh(fetched)))
    }

    pub fn recommendation(&self) -> Result<Recommendation> {
        Ok(targets::recommend(self.current()?)?)
    }

    /// Progress against the stored daily calorie target.
    pub fn progress(&self, nutrient: Nutrient, consumed: f64) -> Result<f64> {
        let target = self.current()?.daily_recommendation.calories as f64;
        Ok(targets::nutrient_progress(nutrient, consumed, target))
    }

    /// The profile as it would look after `patch`, without saving anything.
    pub fn preview(&self, patch: &ProfilePatch) -> Result<UserProfile> {
        Ok(profile::apply_patch(self.current()?.clone(), patch))
    }

    pub async fn save_calories(&mut self, raw: &str) -> Result<&UserProfile> {
        let calories = input::parse_target(raw)?;
        let daily_recommendation = DailyRecommendation {
            calories,
            ..self.current()?.daily_recommendation
        };
        self.save_daily_recommendation(daily_recommendation).await
    }

    pub async fn save_macro(&mut self, nutrient: Macro, raw: &str) -> Result<&UserProfile> {
        let grams = input::parse_target(raw)?;
        let mut daily_recommendation = self.current()?.daily_recommendation;
        match nutrient {
            Macro::Protein => daily_recommendation.protein = grams,
            Macro::Carbs => daily_recommendation.carbs = grams,
            Macro::Fat => daily_recommendation.fat = grams,
        }
        self.save_daily_recommendation(daily_recommendation).await
    }

    /// Replaces any overrides with the computed defaults.
    pub async fn reset_targets(&mut self) -> Result<&UserProfile> {
        let daily_recommendation = self.recommendation()?.daily_recommendation();
        self.save_daily_recommendation(daily_recommendation).await
    }

    pub async fn save_weight(&mut self, raw: &str, unit: WeightUnit) -> Result<&UserProfile> {
        let weight_kg = input::parse_weight(raw, unit)?;
        self.save(ProfilePatch {
            weight_kg: Some(weight_kg),
            ..Default::default()
        })
        .await
    }

    /// Records the weight for `date` and makes it the current weight.
    pub async fn log_weight(
        &mut self,
        date: NaiveDate,
        raw: &str,
        unit: WeightUnit,
    ) -> Result<&UserProfile> {
        let weight_kg = input::parse_weight(raw, unit)?;
        let logged_weights =
            history::upsert_logged_weight(&self.current()?.logged_weights, date, weight_kg);
        self.save(ProfilePatch {
            weight_kg: Some(weight_kg),
            logged_weights: Some(logged_weights),
            ..Default::default()
        })
        .await
    }

    /// Upserts a batch of kilogram entries; the latest day becomes the current weight.
    pub async fn import_weights(&mut self, entries: &[LoggedWeight]) -> Result<&UserProfile> {
        let logged_weights = entries
            .iter()
            .fold(self.current()?.logged_weights.clone(), |acc, entry| {
                history::upsert_logged_weight(&acc, entry.date, entry.value)
            });
        debug!(
            "Importing {} entries, history grows to {}",
            entries.len(),
            logged_weights.len()
        );

        self.save(ProfilePatch {
            weight_kg: history::latest_weight(&logged_weights).map(|entry| entry.value),
            logged_weights: Some(logged_weights),
            ..Default::default()
        })
        .await
    }

    pub async fn save_height(&mut self, feet: &str, inches: &str) -> Result<&UserProfile> {
        let height = input::parse_height(feet, inches)?;
        self.save(ProfilePatch {
            height: Some(height),
            ..Default::default()
        })
        .await
    }

    pub async fn save_activity_level(&mut self, raw: &str) -> Result<&UserProfile> {
        let activity_level = input::parse_activity_level(raw)?;
        self.save(ProfilePatch {
            activity_level: Some(activity_level),
            ..Default::default()
        })
        .await
    }

    async fn save_daily_recommendation(
        &mut self,
        daily_recommendation: DailyRecommendation,
    ) -> Result<&UserProfile> {
        self.save(ProfilePatch {
            daily_recommendation: Some(daily_recommendation),
            ..Default::default()
        })
        .await
    }

    async fn save(&mut self, mut patch: ProfilePatch) -> Result<&UserProfile> {
        let draft = self.preview(&patch)?;
        patch.bmi = draft.bmi;
        debug!("Draft profile: {:?}", draft);

        info!("Saving profile");
        let stored = match self.store.patch_profile(&patch).await {
            Ok(stored) => stored,
            Err(e) => {
                error!("Failed to save profile, keeping last confirmed values. {}", e);
                return Err(e.into());
            }
        };

        info!("Profile saved");
        Ok(&*self.profile.insert(profile::refresh(stored)))
    }

    fn current(&self) -> Result<&UserProfile> {
        self.profile.as_ref().ok_or(EditorError::NotLoaded)
    }
}
