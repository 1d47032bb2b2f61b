//! Background animator.
//!
//! Turns the static scene topology into per-frame transforms from elapsed
//! time and pointer state.
//! - Group rotation: constant drift about Y plus a slow X tilt, offset by
//!   the pointer and eased toward that target every frame
//! - Node spin: extra slow turn of the network about Y
//! - Data rings: constant spin about Z
//! - Orbs: sine bob, phase-shifted by each orb's X position
//!
//! Every function here is pure except `Animator`, which only carries the
//! eased rotation from one frame to the next.

use crate::config::BackgroundConfig;
use crate::input::PointerState;
use crate::render::camera::Euler;
use crate::render::scene::{SceneTopology, Star};

/// Animation constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimParams {
    /// Y drift, rad/s
    pub drift_speed: f32,
    /// Blend toward target per 60 Hz frame
    pub smoothing: f32,
    /// Rotation at full pointer deflection, rad
    pub pointer_influence: f32,
    /// X tilt amplitude, rad
    pub tilt_amplitude: f32,
    /// X tilt angular frequency, rad/s
    pub tilt_speed: f32,
    pub node_spin_speed: f32,
    pub ring_spin_speed: f32,
    /// Vertical bob amplitude of the orbs, world units
    pub orb_bob: f32,
    /// Orb displacement at full pointer deflection, world units
    pub orb_pointer_shift: f32,
}

impl Default for AnimParams {
    fn default() -> Self {
        AnimParams::from(&BackgroundConfig::default())
    }
}

impl From<&BackgroundConfig> for AnimParams {
    fn from(cfg: &BackgroundConfig) -> Self {
        Self {
            drift_speed: cfg.drift_speed,
            smoothing: cfg.smoothing,
            pointer_influence: cfg.pointer_influence,
            tilt_amplitude: 0.1,
            tilt_speed: 0.05,
            node_spin_speed: 0.02,
            ring_spin_speed: 0.1,
            orb_bob: 0.5,
            orb_pointer_shift: 0.5,
        }
    }
}

/// Inputs of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Seconds since mount
    pub elapsed: f32,
    pub pointer: PointerState,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTransform {
    pub elapsed: f32,
    /// Eased rotation of the whole node group
    pub group_rotation: Euler,
    /// Extra rotation of nodes and edges inside the group
    pub node_spin: Euler,
    /// Rotation of the data rings about Z
    pub ring_rotation: f32,
    /// Animated orb centers, same order as `SceneTopology::orbs`
    pub orb_positions: Vec<[f32; 3]>,
    /// Self-rotation of the orbs, rad
    pub orb_spin: f32,
}

/// Longest step accepted, so a stalled frame doesn't snap the rotation.
const MAX_DT: f32 = 0.1;

/// Rotation the group eases toward at `elapsed` with `pointer`.
pub fn target_rotation(params: &AnimParams, elapsed: f32, pointer: PointerState) -> Euler {
    Euler::new(
        (elapsed * params.tilt_speed).sin() * params.tilt_amplitude
            - pointer.y * params.pointer_influence * 0.5,
        elapsed * params.drift_speed + pointer.x * params.pointer_influence,
        0.0,
    )
}

/// Frame-rate independent blend factor: `smoothing` per 1/60 s.
pub fn blend_factor(smoothing: f32, dt: f32) -> f32 {
    let frames = dt.clamp(0.0, MAX_DT) * 60.0;
    1.0 - (1.0 - smoothing.clamp(0.0, 1.0)).powf(frames)
}

/// Ease `current` toward the target for this frame.
pub fn ease_rotation(params: &AnimParams, current: Euler, input: &FrameInput) -> Euler {
    let target = target_rotation(params, input.elapsed, input.pointer);
    let k = blend_factor(params.smoothing, input.dt);
    Euler::new(
        current.x + (target.x - current.x) * k,
        current.y + (target.y - current.y) * k,
        current.z + (target.z - current.z) * k,
    )
}

/// Animated center of an orb whose rest position is `base`.
pub fn orb_position(params: &AnimParams, base: [f32; 3], elapsed: f32, pointer: PointerState) -> [f32; 3] {
    [
        base[0] + pointer.x * params.orb_pointer_shift,
        base[1] + (elapsed + base[0]).sin() * params.orb_bob + pointer.y * params.orb_pointer_shift * 0.6,
        base[2],
    ]
}

/// Star opacity at `elapsed`, in [0.1, 1].
pub fn star_opacity(star: &Star, elapsed: f32) -> f32 {
    0.55 + 0.45 * (elapsed * 1.3 + star.phase).sin()
}

/// Compute the transform for one frame given the eased group rotation.
pub fn frame_transform(
    params: &AnimParams,
    topology: &SceneTopology,
    group_rotation: Euler,
    input: &FrameInput,
) -> FrameTransform {
    let t = input.elapsed;
    FrameTransform {
        elapsed: t,
        group_rotation,
        node_spin: Euler::new(0.0, t * params.node_spin_speed, 0.0),
        ring_rotation: t * params.ring_spin_speed,
        orb_positions: topology
            .orbs
            .iter()
            .map(|orb| orb_position(params, orb.position, t, input.pointer))
            .collect(),
        orb_spin: t * 0.5,
    }
}

/// Carries the eased rotation between frames.
#[derive(Debug, Clone)]
pub struct Animator {
    params: AnimParams,
    rotation: Euler,
    frames: u64,
}

impl Animator {
    pub fn new(params: AnimParams) -> Self {
        Self {
            params,
            rotation: Euler::default(),
            frames: 0,
        }
    }

    pub fn params(&self) -> &AnimParams {
        &self.params
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame.
    pub fn update(&mut self, topology: &SceneTopology, input: FrameInput) -> FrameTransform {
        self.rotation = ease_rotation(&self.params, self.rotation, &input);
        self.frames += 1;
        frame_transform(&self.params, topology, self.rotation, &input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scene::{generate, SceneParams};

    fn scene() -> SceneTopology {
        generate(&SceneParams {
            seed: Some(1),
            ..SceneParams::default()
        })
    }

    fn frame(i: u32, pointer: PointerState) -> FrameInput {
        FrameInput {
            dt: 1.0 / 60.0,
            elapsed: i as f32 / 60.0,
            pointer,
        }
    }

    #[test]
    fn test_blend_factor_at_60hz() {
        let k = blend_factor(0.02, 1.0 / 60.0);
        assert!((k - 0.02).abs() < 1e-5, "k = {}", k);
        assert_eq!(blend_factor(0.02, 0.0), 0.0);
        // Two half-frames equal one full frame
        let half = blend_factor(0.02, 1.0 / 120.0);
        assert!((1.0 - (1.0 - half) * (1.0 - half) - k).abs() < 1e-5);
    }

    #[test]
    fn test_easing_moves_partway_not_snapping() {
        let params = AnimParams {
            drift_speed: 0.0,
            tilt_amplitude: 0.0,
            ..AnimParams::default()
        };
        let input = frame(1, PointerState { x: 1.0, y: 0.0 });
        let next = ease_rotation(&params, Euler::default(), &input);
        let target = params.pointer_influence;
        assert!((next.y - target * 0.02).abs() < 1e-5, "y = {}", next.y);
    }

    #[test]
    fn test_easing_converges_to_target() {
        let params = AnimParams {
            drift_speed: 0.0,
            tilt_amplitude: 0.0,
            ..AnimParams::default()
        };
        let pointer = PointerState { x: -1.0, y: 1.0 };
        let mut rot = Euler::default();
        for i in 0..2000 {
            rot = ease_rotation(&params, rot, &frame(i, pointer));
        }
        let target = target_rotation(&params, 0.0, pointer);
        assert!((rot.x - target.x).abs() < 1e-3 && (rot.y - target.y).abs() < 1e-3);
    }

    #[test]
    fn test_stable_without_pointer_events() {
        let topology = scene();
        let mut a = Animator::new(AnimParams::default());
        let mut b = Animator::new(AnimParams::default());
        let mut last_y = 0.0;
        for i in 1..600 {
            let ta = a.update(&topology, frame(i, PointerState::CENTER));
            let tb = b.update(&topology, frame(i, PointerState::CENTER));
            assert_eq!(ta, tb);
            assert!(ta.group_rotation.x.is_finite() && ta.group_rotation.y.is_finite());
            assert!(ta.group_rotation.y >= last_y, "drift must not reverse");
            last_y = ta.group_rotation.y;
        }
        assert!(last_y > 0.0, "time alone keeps the scene moving");
        assert_eq!(a.frames(), 599);
    }

    #[test]
    fn test_orbs_out_of_phase() {
        let params = AnimParams::default();
        let t = 1.234;
        let a = orb_position(&params, [-6.0, 2.0, -3.0], t, PointerState::CENTER);
        let b = orb_position(&params, [7.0, 2.0, -3.0], t, PointerState::CENTER);
        assert!((a[1] - b[1]).abs() > 1e-3, "orbs at different x bob in phase");
        assert!((a[1] - 2.0).abs() <= params.orb_bob + 1e-6);
    }

    #[test]
    fn test_orbs_follow_pointer() {
        let params = AnimParams::default();
        let rest = orb_position(&params, [0.0, 0.0, 0.0], 0.0, PointerState::CENTER);
        let moved = orb_position(&params, [0.0, 0.0, 0.0], 0.0, PointerState { x: 1.0, y: 0.0 });
        assert!((moved[0] - rest[0] - params.orb_pointer_shift).abs() < 1e-6);
    }

    #[test]
    fn test_frame_transform_covers_all_orbs() {
        let topology = scene();
        let mut animator = Animator::new(AnimParams::default());
        let t = animator.update(&topology, frame(30, PointerState::CENTER));
        assert_eq!(t.orb_positions.len(), topology.orbs.len());
        assert!((t.ring_rotation - 0.5 * 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_star_opacity_range() {
        let star = Star { position: [0.0, 0.0, 0.0], phase: 0.3 };
        for i in 0..100 {
            let o = star_opacity(&star, i as f32 * 0.37);
            assert!((0.1 - 1e-6..=1.0 + 1e-6).contains(&o), "opacity {}", o);
        }
    }
}
