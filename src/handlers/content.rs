use tracing::debug;

use crate::{content, error::AppResult, handlers::JsonBody};

pub async fn api_info() -> AppResult<JsonBody> {
    JsonBody::encode(&content::API_INFO)
}

pub async fn list_features() -> AppResult<JsonBody> {
    debug!(count = content::FEATURES.len(), "Serving features");
    JsonBody::encode(&content::FEATURES)
}

pub async fn list_connection_steps() -> AppResult<JsonBody> {
    debug!(count = content::CONNECTION_STEPS.len(), "Serving connection steps");
    JsonBody::encode(&content::CONNECTION_STEPS)
}

pub async fn get_game_rules() -> AppResult<JsonBody> {
    debug!(
        can_do = content::GAME_RULES.can_do.len(),
        cannot_do = content::GAME_RULES.cannot_do.len(),
        "Serving game rules"
    );
    JsonBody::encode(&content::GAME_RULES)
}

pub async fn list_roadmap() -> AppResult<JsonBody> {
    debug!(count = content::ROADMAP.len(), "Serving roadmap");
    JsonBody::encode(&content::ROADMAP)
}

pub async fn get_stats() -> AppResult<JsonBody> {
    JsonBody::encode(&content::STATS)
}
