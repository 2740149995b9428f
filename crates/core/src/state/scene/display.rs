//! Display helper functions for the workspace object list

use shared::TubeEntity;

/// Get display name for a tube
pub fn tube_display_name(tube: &TubeEntity) -> String {
    format!("{} ({})", tube.name, short_id(&tube.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}
