// Copyright 2025 Cowboy AI, LLC.

//! Campaign fold

use super::payloads::{CampaignCreated, CampaignRenamed, SystemBound};
use super::state::CampaignState;
use super::types;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;

/// Event types this fold handles
pub fn handled_types() -> &'static [&'static str] {
    &[types::CREATED, types::RENAMED, types::SYSTEM_BOUND]
}

/// Fold one campaign event into the campaign slice
pub fn fold(state: &mut CampaignState, event: &EventEnvelope) -> Result<(), FoldError> {
    match event.event_type.as_str() {
        types::CREATED => {
            let payload: CampaignCreated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.created = true;
            state.campaign_id = event.campaign_id.clone();
            state.name = payload.name;
            state.gm_mode = payload.gm_mode;
            state.status = payload.status;
        }
        types::RENAMED => {
            let payload: CampaignRenamed = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.name = payload.name;
        }
        types::SYSTEM_BOUND => {
            let payload: SystemBound = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.system_id = payload.system_id;
            state.system_version = payload.system_version;
        }
        other => {
            return Err(FoldError::UnhandledEventType {
                event_type: other.to_string(),
            })
        }
    }
    Ok(())
}
