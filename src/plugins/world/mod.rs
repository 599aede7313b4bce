//! World plugin: static arena geometry.
//!
//! The arena is a single immutable `Arena` resource. Nothing mutates it after
//! insertion; every component that needs geometry borrows it (`Res<Arena>`).
//!
//! ```text
//!            z = -50  (north wall)
//!   +-------------------------------+
//!   |  T    T    T    T    T        |   T = obstacle, 5 x 4 grid,
//!   |  T    T    T    T    T        |       15 units apart from (-30, -30)
//!   |  T    T    T    T    T        |
//!   |  T    T    T    T    T        |
//!   |                   P           |   P = player start (0, 0, 4)
//!   +-------------------------------+
//!            z = +50  (south wall)
//! ```

use bevy::prelude::*;

pub const OBSTACLE_COUNT: usize = 20;

pub fn plugin(app: &mut App) {
    app.insert_resource(Arena::default());
}

/// Project onto the ground plane: `(x, z)`.
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Axis-aligned box used for projectile collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Closest-point test. Touching counts as intersecting.
    #[inline]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        closest.distance_squared(center) <= radius * radius
    }
}

/// Which part of an obstacle was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstaclePart {
    Trunk,
    Foliage,
}

#[derive(Resource, Debug, Clone)]
pub struct Arena {
    /// Walls are centred on `±half_extent`.
    pub half_extent: f32,
    pub wall_thickness: f32,
    pub wall_height: f32,

    pub grid_columns: usize,
    pub grid_spacing: f32,
    pub grid_origin: Vec2,
    pub trunk_width: f32,
    pub trunk_base_height: f32,
    pub foliage_size: f32,

    /// Player feet at level start.
    pub player_start: Vec3,
    pub spawn_clearance_player: f32,
    pub spawn_clearance_obstacle: f32,
    /// Spawns must satisfy `|x| <= spawn_margin` and `|z| <= spawn_margin`.
    pub spawn_margin: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            half_extent: 50.0,
            wall_thickness: 2.0,
            wall_height: 1.0,
            grid_columns: 5,
            grid_spacing: 15.0,
            grid_origin: Vec2::new(-30.0, -30.0),
            trunk_width: 1.0,
            trunk_base_height: 2.0,
            foliage_size: 3.0,
            player_start: Vec3::new(0.0, 0.0, 4.0),
            spawn_clearance_player: 15.0,
            spawn_clearance_obstacle: 4.0,
            spawn_margin: 45.0,
        }
    }
}

impl Arena {
    /// Obstacle centre on the ground plane, `index in [0, OBSTACLE_COUNT)`.
    #[inline]
    pub fn obstacle_position(&self, index: usize) -> Vec2 {
        let col = (index % self.grid_columns) as f32;
        let row = (index / self.grid_columns) as f32;
        self.grid_origin + Vec2::new(col, row) * self.grid_spacing
    }

    #[inline]
    pub fn obstacle_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..OBSTACLE_COUNT).map(|i| self.obstacle_position(i))
    }

    /// Trunk height cycles 2, 3, 4.
    #[inline]
    pub fn trunk_height(&self, index: usize) -> f32 {
        self.trunk_base_height + (index % 3) as f32
    }

    pub fn obstacle_trunk(&self, index: usize) -> Aabb {
        let c = self.obstacle_position(index);
        let h = self.trunk_width * 0.5;
        Aabb::new(
            Vec3::new(c.x - h, 0.0, c.y - h),
            Vec3::new(c.x + h, self.trunk_height(index), c.y + h),
        )
    }

    /// Foliage cube sitting on top of the trunk.
    pub fn obstacle_foliage(&self, index: usize) -> Aabb {
        let c = self.obstacle_position(index);
        let h = self.foliage_size * 0.5;
        let base = self.trunk_height(index);
        Aabb::new(
            Vec3::new(c.x - h, base, c.y - h),
            Vec3::new(c.x + h, base + self.foliage_size, c.y + h),
        )
    }

    /// North, south, east, west.
    pub fn walls(&self) -> [Aabb; 4] {
        let e = self.half_extent;
        let t = self.wall_thickness * 0.5;
        let y = self.wall_height;
        [
            Aabb::new(Vec3::new(-e, 0.0, -e - t), Vec3::new(e, y, -e + t)),
            Aabb::new(Vec3::new(-e, 0.0, e - t), Vec3::new(e, y, e + t)),
            Aabb::new(Vec3::new(e - t, 0.0, -e), Vec3::new(e + t, y, e)),
            Aabb::new(Vec3::new(-e - t, 0.0, -e), Vec3::new(-e + t, y, e)),
        ]
    }

    /// First obstacle part the sphere touches, trunk before foliage, in grid order.
    pub fn obstacle_hit(&self, center: Vec3, radius: f32) -> Option<(usize, ObstaclePart)> {
        (0..OBSTACLE_COUNT).find_map(|i| {
            if self.obstacle_trunk(i).intersects_sphere(center, radius) {
                Some((i, ObstaclePart::Trunk))
            } else if self.obstacle_foliage(i).intersects_sphere(center, radius) {
                Some((i, ObstaclePart::Foliage))
            } else {
                None
            }
        })
    }

    #[inline]
    pub fn wall_hit(&self, center: Vec3, radius: f32) -> bool {
        self.walls().iter().any(|w| w.intersects_sphere(center, radius))
    }

    /// Spawn placement rule, evaluated on the ground plane.
    pub fn is_spawn_valid(&self, pos: Vec3, player_start: Vec3) -> bool {
        let p = planar(pos);

        if p.distance(planar(player_start)) < self.spawn_clearance_player {
            return false;
        }

        let m = self.spawn_margin;
        if p.x < -m || p.x > m || p.y < -m || p.y > m {
            return false;
        }

        self.obstacle_positions()
            .all(|o| p.distance(o) >= self.spawn_clearance_obstacle)
    }
}
