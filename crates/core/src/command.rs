//! JSON command protocol.
//!
//! Headless entry point for frontends and scripts: a tagged command enum
//! mirroring the [`crate::state::TubeWorkspace`] surface, executed against a
//! workspace, with a uniform response shape.

use serde::{Deserialize, Serialize};
use shared::{Axis, TubeParams};

use crate::state::TubeWorkspace;

/// A command the frontend can issue.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WorkspaceCommand {
    /// Create a new tube from form parameters.
    AddTube { params: TubeParams },
    /// Select a tube by ID.
    Select { id: String },
    /// Clear the selection.
    Deselect,
    /// Delete the selected tube.
    DeleteSelected,
    /// Nudge the selected tube along an axis.
    Move { axis: Axis, delta: f64 },
    /// Rotate the selected tube around an axis, in degrees.
    Rotate { axis: Axis, degrees: f64 },
    /// Commit a finished gizmo drag (absolute transform).
    ApplyDrag {
        id: String,
        position: [f64; 3],
        rotation: [f64; 3],
    },
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Inspect the scene: list all tubes.
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the workspace.
pub fn execute_command(ws: &mut TubeWorkspace, cmd: WorkspaceCommand) -> CommandResponse {
    match cmd {
        WorkspaceCommand::AddTube { params } => match ws.add_tube(params) {
            Ok(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        WorkspaceCommand::Select { id } => {
            ws.select_entity(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": ws.selected_id() }))
        }

        WorkspaceCommand::Deselect => {
            ws.deselect();
            CommandResponse::ok()
        }

        WorkspaceCommand::DeleteSelected => {
            let deleted = ws.delete_selected();
            CommandResponse::ok_with_data(serde_json::json!({ "deleted": deleted }))
        }

        WorkspaceCommand::Move { axis, delta } => {
            let moved = ws.move_selected(axis, delta);
            CommandResponse::ok_with_data(serde_json::json!({ "moved": moved }))
        }

        WorkspaceCommand::Rotate { axis, degrees } => {
            let rotated = ws.rotate_selected(axis, degrees);
            CommandResponse::ok_with_data(serde_json::json!({ "rotated": rotated }))
        }

        WorkspaceCommand::ApplyDrag {
            id,
            position,
            rotation,
        } => {
            let applied = ws.apply_drag(&id, position, rotation);
            CommandResponse::ok_with_data(serde_json::json!({ "applied": applied }))
        }

        WorkspaceCommand::Undo => {
            let undone = ws.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": undone }))
        }

        WorkspaceCommand::Redo => {
            let redone = ws.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": redone }))
        }

        WorkspaceCommand::Inspect => {
            let tubes: Vec<serde_json::Value> = ws
                .entities()
                .iter()
                .map(|tube| {
                    serde_json::json!({
                        "id": tube.id,
                        "name": tube.name,
                        "selected": ws.selection.is_selected(&tube.id),
                        "position": tube.position,
                        "rotation": tube.rotation,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "tube_count": tubes.len(),
                "tubes": tubes,
                "highlight_count": ws.highlights().len(),
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(ws: &mut TubeWorkspace, json: &str) -> Result<CommandResponse, String> {
    let cmd: WorkspaceCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(ws, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    ws: &mut TubeWorkspace,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<WorkspaceCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(ws, cmd))
        .collect())
}
