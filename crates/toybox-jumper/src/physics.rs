//! Actor physics: instant horizontal speed, single jump, gravity and a flat
//! ground the actor snaps onto.

use toybox_engine::coords::{Rect, Vec2};

/// Default gravity, in pixels per second².
pub const DEFAULT_GRAVITY: f32 = 980.0;

/// Default jump velocity; negative is up.
pub const DEFAULT_JUMP_SPEED: f32 = -400.0;

/// Default horizontal speed while an arrow key is held.
pub const DEFAULT_MOVE_SPEED: f32 = 200.0;

/// Tunables for [`Actor::step`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_speed: f32,
    pub move_speed: f32,
    /// The actor is kept inside `[0, world_width]` horizontally.
    pub world_width: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_speed: DEFAULT_JUMP_SPEED,
            move_speed: DEFAULT_MOVE_SPEED,
            world_width: 800.0,
        }
    }
}

/// Input flags sampled once per frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Immovable floor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ground {
    pub rect: Rect,
}

impl Ground {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.top()
    }
}

/// The player-controlled square.
///
/// Invariant: `grounded` is true exactly when `vel.y == 0` and the bottom
/// edge sits on the ground's top edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Actor {
    /// Top-left corner.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::zero(),
            size,
            grounded: false,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }

    /// Advances the actor by `dt` seconds and returns the new state.
    ///
    /// Order: horizontal velocity from input, jump, gravity, Euler
    /// integration, ground snap, horizontal clamp. Gravity applies even when
    /// grounded; the snap in the same step puts the actor back flush. The
    /// snap is a discrete post-hoc correction, not a swept collision.
    pub fn step(
        &self,
        input: MoveInput,
        dt: f32,
        ground: &Ground,
        physics: &PhysicsConfig,
    ) -> Actor {
        let mut next = *self;

        next.vel.x = if input.left {
            -physics.move_speed
        } else if input.right {
            physics.move_speed
        } else {
            0.0
        };

        if input.jump && next.grounded {
            next.vel.y = physics.jump_speed;
            next.grounded = false;
        }

        next.vel.y += physics.gravity * dt;
        next.pos += next.vel * dt;

        let ground_top = ground.top();
        if next.bottom() >= ground_top {
            next.pos.y = ground_top - next.size.y;
            next.vel.y = 0.0;
            next.grounded = true;
        }

        let max_x = (physics.world_width - next.size.x).max(0.0);
        next.pos.x = next.pos.x.clamp(0.0, max_x);

        next
    }
}
