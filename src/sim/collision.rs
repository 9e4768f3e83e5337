//! Collision detection and response
//!
//! Balls are circles, everything else is an axis-aligned box. Detection finds
//! the box point closest to the circle center; response depends on which box
//! face that point lies on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Entity, Paddle};
use crate::consts::{PADDLE_STEER_BASE, PADDLE_STEER_STRENGTH};

/// Compass direction of the separation vector.
///
/// Screen y grows downward, so `Up` is the +y compass vector: the closest box
/// point lies below the ball's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Classification order; earlier entries win ties
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn compass(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Result of a circle-vs-box check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    Miss,
    Hit {
        direction: Direction,
        /// Closest box point minus circle center
        separation: Vec2,
    },
}

impl Collision {
    pub fn is_hit(&self) -> bool {
        matches!(self, Collision::Hit { .. })
    }
}

/// Compass direction best aligned with `v` (a zero vector reports `Up`)
pub fn vector_direction(v: Vec2) -> Direction {
    let n = v.normalize_or_zero();
    let mut best = Direction::Up;
    let mut best_dot = f32::NEG_INFINITY;
    for dir in Direction::ALL {
        let dot = n.dot(dir.compass());
        if dot > best_dot {
            best_dot = dot;
            best = dir;
        }
    }
    best
}

/// Circle vs axis-aligned box
pub fn circle_aabb(center: Vec2, radius: f32, box_pos: Vec2, box_size: Vec2) -> Collision {
    let half_extents = box_size / 2.0;
    let box_center = box_pos + half_extents;

    let clamped = (center - box_center).clamp(-half_extents, half_extents);
    let closest = box_center + clamped;
    let separation = closest - center;

    if separation.length() < radius {
        Collision::Hit {
            direction: vector_direction(separation),
            separation,
        }
    } else {
        Collision::Miss
    }
}

/// Check a ball against any box-shaped entity
pub fn ball_collision(ball: &Ball, target: &Entity) -> Collision {
    circle_aabb(ball.collision_center(), ball.radius, target.pos, target.size)
}

/// Bounce a ball off a brick face and push it back out by the penetration
pub fn resolve_brick_hit(ball: &mut Ball, direction: Direction, separation: Vec2) {
    let body = &mut ball.body;
    if direction.is_horizontal() {
        body.vel.x = -body.vel.x;
        let penetration = ball.radius - separation.x.abs();
        match direction {
            Direction::Left => body.pos.x += penetration,
            _ => body.pos.x -= penetration,
        }
    } else {
        body.vel.y = -body.vel.y;
        let penetration = ball.radius - separation.y.abs();
        match direction {
            Direction::Up => body.pos.y -= penetration,
            _ => body.pos.y += penetration,
        }
    }
}

/// Steer a ball off the paddle.
///
/// The further from the paddle center the hit lands, the more horizontal the
/// bounce. Speed is preserved and the ball always leaves upward.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle) {
    let half_width = paddle.body.size.x / 2.0;
    let paddle_center = paddle.body.pos.x + half_width;
    let offset = (ball.body.pos.x + ball.radius - paddle_center) / half_width;

    let vel = &mut ball.body.vel;
    let speed = vel.length();
    vel.x = PADDLE_STEER_BASE * offset * PADDLE_STEER_STRENGTH;
    *vel = vel.normalize_or_zero() * speed;
    vel.y = -vel.y.abs();
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn launched_ball() -> Ball {
        let window = Vec2::new(800.0, 600.0);
        let paddle = Paddle::new(window);
        let mut ball = Ball::new(&paddle, window);
        ball.hold(&paddle);
        ball.launch(&paddle);
        ball.radius = 8.0;
        ball.body.size = Vec2::splat(16.0);
        ball
    }

    #[test]
    fn test_direction_axes() {
        assert_eq!(vector_direction(Vec2::new(0.0, 1.0)), Direction::Up);
        assert_eq!(vector_direction(Vec2::new(1.0, 0.0)), Direction::Right);
        assert_eq!(vector_direction(Vec2::new(0.0, -3.0)), Direction::Down);
        assert_eq!(vector_direction(Vec2::new(-0.5, 0.0)), Direction::Left);
    }

    #[test]
    fn test_direction_ties_go_to_first() {
        assert_eq!(vector_direction(Vec2::new(1.0, 1.0)), Direction::Up);
        assert_eq!(vector_direction(Vec2::new(1.0, -1.0)), Direction::Right);
        assert_eq!(vector_direction(Vec2::new(-1.0, -1.0)), Direction::Down);
        assert_eq!(vector_direction(Vec2::ZERO), Direction::Up);
    }

    #[test]
    fn test_center_inside_box_hits() {
        let result = circle_aabb(Vec2::new(50.0, 50.0), 1.0, Vec2::ZERO, Vec2::splat(100.0));
        assert_eq!(
            result,
            Collision::Hit {
                direction: Direction::Up,
                separation: Vec2::ZERO
            }
        );
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        // Exactly radius away: strict comparison
        let result = circle_aabb(Vec2::new(108.0, 50.0), 8.0, Vec2::ZERO, Vec2::splat(100.0));
        assert_eq!(result, Collision::Miss);
        assert!(!result.is_hit());
    }

    #[test]
    fn test_corner_miss() {
        // 6,6 from the corner is ~8.49 away
        let result = circle_aabb(Vec2::new(106.0, 106.0), 8.0, Vec2::ZERO, Vec2::splat(100.0));
        assert_eq!(result, Collision::Miss);
    }

    #[test]
    fn test_ball_collision_uses_radius_offset() {
        let mut ball = launched_ball();
        let brick = Entity::new(Vec2::new(0.0, 100.0), Vec2::new(100.0, 20.0), Vec3::ZERO);
        // Center at (50, 95)
        ball.body.pos = Vec2::new(42.0, 87.0);
        match ball_collision(&ball, &brick) {
            Collision::Hit { direction, separation } => {
                assert_eq!(direction, Direction::Up);
                assert_eq!(separation, Vec2::new(0.0, 5.0));
            }
            Collision::Miss => panic!("expected a hit"),
        }
    }

    #[test]
    fn test_resolve_top_face() {
        let mut ball = launched_ball();
        ball.body.pos = Vec2::new(42.0, 87.0);
        ball.body.vel = Vec2::new(30.0, 200.0);

        resolve_brick_hit(&mut ball, Direction::Up, Vec2::new(0.0, 5.0));

        assert_eq!(ball.body.vel, Vec2::new(30.0, -200.0));
        // Pushed up by radius - 5, leaving the center exactly radius above the face
        assert_eq!(ball.body.pos.y, 84.0);
        assert_eq!(ball.collision_center().y, 92.0);
    }

    #[test]
    fn test_resolve_right_face_of_brick() {
        let mut ball = launched_ball();
        let brick = Entity::new(Vec2::ZERO, Vec2::new(100.0, 20.0), Vec3::ZERO);
        // Center at (105, 10), moving left into the brick
        ball.body.pos = Vec2::new(97.0, 2.0);
        ball.body.vel = Vec2::new(-100.0, 50.0);

        let Collision::Hit { direction, separation } = ball_collision(&ball, &brick) else {
            panic!("expected a hit");
        };
        assert_eq!(direction, Direction::Left);

        resolve_brick_hit(&mut ball, direction, separation);
        assert_eq!(ball.body.vel, Vec2::new(100.0, 50.0));
        assert_eq!(ball.body.pos.x, 100.0);
        assert_eq!(ball_collision(&ball, &brick), Collision::Miss);
    }

    #[test]
    fn test_resolve_bottom_face() {
        let mut ball = launched_ball();
        ball.body.pos = Vec2::new(10.0, 14.0);
        ball.body.vel = Vec2::new(0.0, -100.0);

        resolve_brick_hit(&mut ball, Direction::Down, Vec2::new(0.0, -2.0));
        assert_eq!(ball.body.vel, Vec2::new(0.0, 100.0));
        assert_eq!(ball.body.pos.y, 20.0);
    }

    #[test]
    fn test_paddle_steering_preserves_speed() {
        let window = Vec2::new(800.0, 600.0);
        let paddle = Paddle::new(window);
        let mut ball = launched_ball();
        // Hit halfway between center and right edge
        ball.body.pos.x = paddle.body.center().x + 25.0 - ball.radius;
        ball.body.vel = Vec2::new(0.0, 350.0);

        resolve_paddle_hit(&mut ball, &paddle);

        assert!((ball.body.vel.length() - 350.0).abs() < 0.01);
        assert!(ball.body.vel.x > 0.0);
        assert!(ball.body.vel.y < 0.0);
        let expected = Vec2::new(100.0, 350.0).normalize() * 350.0;
        assert!((ball.body.vel.x - expected.x).abs() < 0.01);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let window = Vec2::new(800.0, 600.0);
        let paddle = Paddle::new(window);
        let mut ball = launched_ball();
        ball.body.pos.x = paddle.body.center().x - ball.radius;
        ball.body.vel = Vec2::new(-120.0, 160.0);

        resolve_paddle_hit(&mut ball, &paddle);
        assert!(ball.body.vel.x.abs() < 0.001);
        assert!((ball.body.vel.y + 200.0).abs() < 0.01);
    }

    #[test]
    fn test_paddle_edge_hit_is_unclamped() {
        let window = Vec2::new(800.0, 600.0);
        let paddle = Paddle::new(window);
        let mut ball = launched_ball();
        // Center 10 past the left edge: offset = -1.2
        ball.body.pos.x = paddle.body.pos.x - 10.0 - ball.radius;
        ball.body.vel = Vec2::new(0.0, 100.0);

        resolve_paddle_hit(&mut ball, &paddle);
        let expected = Vec2::new(-240.0, 100.0).normalize() * 100.0;
        assert!((ball.body.vel - Vec2::new(expected.x, -expected.y.abs())).length() < 0.01);
    }

    proptest! {
        #[test]
        fn prop_center_of_box_always_hits(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.5f32..300.0,
            h in 0.5f32..300.0,
            radius in 0.01f32..50.0,
        ) {
            let pos = Vec2::new(x, y);
            let size = Vec2::new(w, h);
            let center = pos + size / 2.0;
            prop_assert!(circle_aabb(center, radius, pos, size).is_hit());
        }

        #[test]
        fn prop_outside_by_more_than_radius_misses(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.5f32..300.0,
            h in 0.5f32..300.0,
            radius in 0.5f32..50.0,
            eps in 0.05f32..20.0,
            along in 0.0f32..1.0,
            side in 0usize..4,
        ) {
            let pos = Vec2::new(x, y);
            let size = Vec2::new(w, h);
            let gap = radius + eps;
            let center = match side {
                0 => Vec2::new(pos.x - gap, pos.y + h * along),
                1 => Vec2::new(pos.x + w + gap, pos.y + h * along),
                2 => Vec2::new(pos.x + w * along, pos.y - gap),
                _ => Vec2::new(pos.x + w * along, pos.y + h + gap),
            };
            prop_assert_eq!(circle_aabb(center, radius, pos, size), Collision::Miss);
        }

        #[test]
        fn prop_hit_direction_faces_the_box(
            cx in -50.0f32..150.0,
            cy in -50.0f32..150.0,
            radius in 1.0f32..40.0,
        ) {
            let pos = Vec2::ZERO;
            let size = Vec2::splat(100.0);
            if let Collision::Hit { direction, separation } =
                circle_aabb(Vec2::new(cx, cy), radius, pos, size)
            {
                prop_assert!(separation.length() < radius);
                if separation.length() > 1e-3 {
                    prop_assert!(separation.normalize().dot(direction.compass()) > 0.0);
                }
            }
        }
    }
}
