use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 1, max = 255, message = "Please enter a name for your playlist."))]
    pub name: String,
    #[validate(length(min = 1, message = "Please add at least one song to your playlist."))]
    pub song_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub song_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CreatePlaylistRequest {
    /// Validates the draft and turns it into a playlist with a fresh id.
    /// Duplicate song ids keep their first position.
    pub fn into_playlist(mut self) -> crate::error::Result<Playlist> {
        self.name = self.name.trim().to_string();
        self.validate()
            .map_err(|e| AppError::Validation(first_message(&e, &["name", "song_ids"])))?;

        let mut song_ids: Vec<String> = Vec::with_capacity(self.song_ids.len());
        for id in self.song_ids {
            if !song_ids.contains(&id) {
                song_ids.push(id);
            }
        }

        Ok(Playlist {
            id: Uuid::new_v4(),
            name: self.name,
            song_ids,
            created_at: Utc::now(),
        })
    }
}

/// First validation message by field order, matching the order a form
/// reports its errors.
pub(crate) fn first_message(errors: &ValidationErrors, order: &[&'static str]) -> String {
    let field_errors = errors.field_errors();
    order
        .iter()
        .filter_map(|field| field_errors.get(field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
