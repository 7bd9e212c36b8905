//! Read-only render snapshots of the body collection.
//!
//! Two consumers, two formats (the transfer-buffer pattern for the hot
//! path, JSON for debugging and low-rate consumers):
//! - a flat `f64` buffer with one fixed-stride record per body, read from
//!   JS via pointer + length over the wasm memory
//! - a serde JSON payload

use serde::Serialize;

use crate::domain::body::Shape;
use crate::domain::palette;

use super::WorldCore;

/// f64 slots per body record in the transfer buffer:
/// kind, x, y, rotation, size0, size1, color.
/// Circles: kind 0, size0 = radius, size1 = 0. Boxes: kind 1, size0/1 = w/h.
pub const BODY_STRIDE: usize = 7;

pub const KIND_CIRCLE: f64 = 0.0;
pub const KIND_BOX: f64 = 1.0;

/// One body as seen by the renderer. Positions are centers; `rotation`
/// is radians (always 0 for circles).
#[derive(Serialize, Debug, Clone)]
pub struct BodySnapshot {
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub size0: f64,
    pub size1: f64,
    pub color: String,
}

pub(super) fn fill_body_buffer(world: &mut WorldCore) -> usize {
    world.body_transfer_buffer.clear();
    world
        .body_transfer_buffer
        .reserve(world.bodies.len() * BODY_STRIDE);

    for body in world.bodies.iter() {
        let (kind, rotation, size0, size1) = match body.shape {
            Shape::Circle { radius } => (KIND_CIRCLE, 0.0, radius, 0.0),
            Shape::Box {
                width,
                height,
                rotation,
                ..
            } => (KIND_BOX, rotation, width, height),
        };
        world.body_transfer_buffer.extend_from_slice(&[
            kind,
            body.pos.x,
            body.pos.y,
            rotation,
            size0,
            size1,
            body.color as f64,
        ]);
    }

    world.bodies.len()
}

pub(super) fn bodies_ptr(world: &WorldCore) -> *const f64 {
    world.body_transfer_buffer.as_ptr()
}

pub(super) fn bodies_len(world: &WorldCore) -> usize {
    world.body_transfer_buffer.len()
}

pub(super) fn snapshots(world: &WorldCore) -> Vec<BodySnapshot> {
    world
        .bodies
        .iter()
        .map(|body| {
            let (kind, rotation, size0, size1) = match body.shape {
                Shape::Circle { radius } => ("circle", 0.0, radius, 0.0),
                Shape::Box {
                    width,
                    height,
                    rotation,
                    ..
                } => ("box", rotation, width, height),
            };
            BodySnapshot {
                kind,
                x: body.pos.x,
                y: body.pos.y,
                rotation,
                size0,
                size1,
                color: palette::css_hex(body.color),
            }
        })
        .collect()
}

pub(super) fn bodies_json(world: &WorldCore) -> String {
    // BodySnapshot has no map keys or non-string fields that can fail to
    // serialize, so this is total.
    serde_json::to_string(&snapshots(world)).unwrap_or_else(|_| "[]".to_string())
}
