//! Kinematic model and interaction engine for 2D articulated figures.
//!
//! A figure is a tree of rigid bones hanging off a single root. Each bone
//! stores only its length and an angle relative to its ancestors; the world
//! positions of its two endpoints are derived by a forward-kinematics pass
//! that runs once per tick. Pointer input drives two kinds of handles: a
//! gimbal on every bone tip that rotates the bone, and a translation handle on
//! the root that moves the whole figure. Poses can be captured into per-bone
//! history at any time.
//!
//! The host owns the window and the event loop. It feeds pointer events into
//! [`engine::Engine::tick`] and paints the returned [`render::DrawCmd`] list.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Per-tick orchestrator and owner of the active-handle slot |
//! | [`figure`] | Bone tree ownership, hit dispatch, frame capture |
//! | [`bone`] | Bone entity, shape kinds, colors |
//! | [`kinematics`] | Propagated angles and the forward-kinematics pass |
//! | [`handle`] | Gimbal and root-handle hit regions and drag math |
//! | [`input`] | Pointer events and the gesture state |
//! | [`render`] | Draw list consumed by the host surface |
//! | [`definition`] | Figure-definition records and loading |
//! | [`geom`] | Points and vector arithmetic |
//! | [`consts`] | Shared numeric and palette constants |

pub mod bone;
pub mod consts;
pub mod definition;
pub mod engine;
pub mod figure;
pub mod geom;
pub mod handle;
pub mod input;
pub mod kinematics;
pub mod render;
