//! Standalone physics formulas exported to JS.
//!
//! Stateless scalar helpers, independent of the simulation loop: the host
//! page uses them for its calculator panels. Pure functions live here and
//! are unit-tested natively; the `#[wasm_bindgen]` wrappers serialize
//! structured results as JSON strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, Clone, Copy)]
pub struct OrbitParams {
    pub velocity: f64,
    pub period: f64,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct Trajectory {
    pub initial_vx: f64,
    pub initial_vy: f64,
    pub points: Vec<TrajectoryPoint>,
    pub range: f64,
    pub max_height: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct FluidFlow {
    pub velocities: Vec<Vec<f64>>,
    pub max_value: f64,
    pub min_value: f64,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct DragResult {
    pub drag_force: f64,
    pub adjusted_drag_coefficient: f64,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct WavePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct WaveData {
    pub wave_data: Vec<WavePoint>,
    pub time_step: f64,
}

/// Newtonian gravity between two point masses: `G·m1·m2 / d²`.
pub fn gravitational_force(mass1: f64, mass2: f64, distance: f64, g: f64) -> f64 {
    g * mass1 * mass2 / (distance * distance)
}

/// Circular orbital velocity `√(G·M/d)` and period `2πd/v`.
pub fn orbit_params(central_mass: f64, distance: f64, g: f64) -> OrbitParams {
    let velocity = (g * central_mass / distance).sqrt();
    let period = 2.0 * std::f64::consts::PI * distance / velocity;
    OrbitParams { velocity, period }
}

/// Sample a ballistic trajectory until ground impact or `duration`.
/// `angle_deg` is in degrees; the range reported is the horizontal
/// distance at the last evaluated sample.
pub fn projectile_trajectory(
    initial_velocity: f64,
    angle_deg: f64,
    gravity: f64,
    time_step: f64,
    duration: f64,
) -> Trajectory {
    let angle = angle_deg.to_radians();
    let vx = initial_velocity * angle.cos();
    let vy = initial_velocity * angle.sin();

    let mut points = Vec::new();
    let mut x = 0.0;
    let mut t = 0.0;
    while t <= duration {
        x = vx * t;
        let y = vy * t - 0.5 * gravity * t * t;
        if y < 0.0 {
            break;
        }
        points.push(TrajectoryPoint { x, y, t });
        t += time_step;
    }

    Trajectory {
        initial_vx: vx,
        initial_vy: vy,
        points,
        range: x,
        max_height: (vy * vy) / (2.0 * gravity),
    }
}

/// One explicit step of 8-neighbor average diffusion over a square grid,
/// blended by `viscosity · dt` and scaled by `density`.
pub fn fluid_flow(density: f64, viscosity: f64, forces: &[Vec<f64>], dt: f64) -> FluidFlow {
    let grid_size = forces.len();
    let mut velocities = Vec::with_capacity(grid_size);
    let mut max_value = f64::MIN;
    let mut min_value = f64::MAX;

    for i in 0..grid_size {
        let mut row = Vec::with_capacity(grid_size);
        for j in 0..grid_size {
            let mut diffusion = 0.0;
            let mut count = 0u32;
            for ni in i.saturating_sub(1)..(i + 2).min(grid_size) {
                for nj in j.saturating_sub(1)..(j + 2).min(grid_size) {
                    if ni == i && nj == j {
                        continue;
                    }
                    diffusion += forces[ni].get(nj).copied().unwrap_or(0.0);
                    count += 1;
                }
            }
            if count > 0 {
                diffusion /= count as f64;
            }

            let cell = forces[i].get(j).copied().unwrap_or(0.0);
            let value = (cell + (diffusion - cell) * viscosity * dt) * density;
            max_value = max_value.max(value);
            min_value = min_value.min(value);
            row.push(value);
        }
        velocities.push(row);
    }

    FluidFlow {
        velocities,
        max_value,
        min_value,
    }
}

/// Drag equation `½·ρ·v²·C_d·A`, with the coefficient pre-scaled by the
/// object shape.
pub fn drag_force(
    fluid_density: f64,
    velocity: f64,
    drag_coefficient: f64,
    area: f64,
    shape: &str,
) -> DragResult {
    let adjusted = drag_coefficient
        * match shape {
            "sphere" => 0.47,
            "cube" => 1.05,
            "cylinder" => 0.82,
            "streamlined" => 0.04,
            _ => 1.0,
        };

    DragResult {
        drag_force: 0.5 * fluid_density * velocity * velocity * adjusted * area,
        adjusted_drag_coefficient: adjusted,
    }
}

/// `resolution` samples of a damped sine wave over `x ∈ [0, 2π)`.
/// Damping peaks away from the center `x = π`.
pub fn wave_samples(
    amplitude: f64,
    frequency: f64,
    damping: f64,
    resolution: usize,
    time: f64,
) -> WaveData {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut wave_data = Vec::with_capacity(resolution);

    for i in 0..resolution {
        let x = i as f64 / resolution as f64 * two_pi;
        let distance = (x - std::f64::consts::PI).abs();
        let damping_factor = (-damping * distance).exp();
        let y = amplitude * (frequency * x + time).sin() * damping_factor;
        wave_data.push(WavePoint { x, y });
    }

    WaveData {
        wave_data,
        time_step: time,
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = calculateGravitationalForce)]
pub fn calculate_gravitational_force(mass1: f64, mass2: f64, distance: f64, g: f64) -> f64 {
    gravitational_force(mass1, mass2, distance, g)
}

#[wasm_bindgen(js_name = calculateOrbit)]
pub fn calculate_orbit(central_mass: f64, distance: f64, g: f64) -> Result<String, JsValue> {
    to_json(&orbit_params(central_mass, distance, g))
}

#[wasm_bindgen(js_name = calculateProjectileTrajectory)]
pub fn calculate_projectile_trajectory(
    initial_velocity: f64,
    angle_deg: f64,
    gravity: f64,
    time_step: f64,
    duration: f64,
) -> Result<String, JsValue> {
    to_json(&projectile_trajectory(
        initial_velocity,
        angle_deg,
        gravity,
        time_step,
        duration,
    ))
}

/// `forces_json` is a square 2D JSON array of numbers.
#[wasm_bindgen(js_name = calculateFluidFlow)]
pub fn calculate_fluid_flow(
    density: f64,
    viscosity: f64,
    forces_json: String,
    dt: f64,
) -> Result<String, JsValue> {
    let forces: Vec<Vec<f64>> =
        serde_json::from_str(&forces_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&fluid_flow(density, viscosity, &forces, dt))
}

#[wasm_bindgen(js_name = calculateDrag)]
pub fn calculate_drag(
    fluid_density: f64,
    velocity: f64,
    drag_coefficient: f64,
    area: f64,
    shape: String,
) -> Result<String, JsValue> {
    to_json(&drag_force(
        fluid_density,
        velocity,
        drag_coefficient,
        area,
        &shape,
    ))
}

#[wasm_bindgen(js_name = simulateWave)]
pub fn simulate_wave(
    amplitude: f64,
    frequency: f64,
    damping: f64,
    resolution: usize,
    time: f64,
) -> Result<String, JsValue> {
    to_json(&wave_samples(amplitude, frequency, damping, resolution, time))
}
