//! Scene, geometry, and joint-detection core for the TubeJoint editor.
//!
//! The frontend (window, camera, gizmo, form widgets) is a thin collaborator:
//! it forwards user gestures into the command surface exposed by
//! [`state::TubeWorkspace`] and renders the wall geometry and joint
//! highlights the core derives. All scene mutation flows through here.

pub mod build;
pub mod command;
pub mod fixtures;
pub mod joints;
pub mod state;
pub mod validation;
