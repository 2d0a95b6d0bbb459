//! FlyCamera component and systems: WASD + drag-to-look, with a fuel-limited
//! jetpack boost on Shift.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

const PITCH_LIMIT: f32 = 1.54;

/// Jetpack boost state. Fuel drains while boosting and refills while idle;
/// an exhausted tank must recover past `min_reactivate` before boosting again.
#[derive(Clone, Debug)]
pub struct Jetpack {
    pub fuel: f32,
    pub max_fuel: f32,
    pub drain_per_sec: f32,
    pub refill_per_sec: f32,
    pub min_reactivate: f32,
    pub boost: f32,
    pub active: bool,
}

impl Default for Jetpack {
    fn default() -> Self {
        Self {
            fuel: 250.0,
            max_fuel: 250.0,
            drain_per_sec: 72.0,
            refill_per_sec: 48.0,
            min_reactivate: 25.0,
            boost: 2.5,
            active: false,
        }
    }
}

impl Jetpack {
    /// Advances fuel state for one frame and returns the speed multiplier.
    pub fn tick(&mut self, boost_requested: bool, dt: f32) -> f32 {
        if boost_requested && self.fuel > 0.0 && (self.active || self.fuel > self.min_reactivate) {
            self.active = true;
            self.fuel = (self.fuel - self.drain_per_sec * dt).max(0.0);
            if self.fuel == 0.0 {
                self.active = false;
            }
        } else {
            self.active = false;
            self.fuel = (self.fuel + self.refill_per_sec * dt).min(self.max_fuel);
        }

        if self.active {
            self.boost
        } else {
            1.0
        }
    }
}

#[derive(Component)]
pub struct FlyCamera {
    pub speed: f32,
    pub look_sensitivity: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub jetpack: Jetpack,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            speed: 120.0,
            look_sensitivity: 0.0032,
            yaw: 0.0,
            pitch: 0.0,
            jetpack: Jetpack::default(),
        }
    }
}

pub fn fly_camera_plugin(app: &mut App) {
    app.add_systems(Update, (attach_fly_camera, fly_camera_system).chain());
}

/// Adopts the main camera on first sight, seeding yaw/pitch from its spawn
/// transform so the first drag doesn't snap the view.
fn attach_fly_camera(
    mut commands: Commands,
    cameras: Query<(Entity, &Transform), (With<Camera3d>, Without<FlyCamera>)>,
) {
    for (entity, transform) in &cameras {
        let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        commands.entity(entity).insert(FlyCamera {
            yaw,
            pitch,
            ..default()
        });
    }
}

fn fly_camera_system(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut query: Query<(&mut Transform, &mut FlyCamera), With<Camera3d>>,
) {
    let mut look = Vec2::ZERO;
    for ev in motion.read() {
        look += ev.delta;
    }

    let Ok((mut transform, mut fly)) = query.get_single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    if buttons.pressed(MouseButton::Left) && look != Vec2::ZERO {
        fly.yaw -= look.x * fly.look_sensitivity;
        fly.pitch = (fly.pitch - look.y * fly.look_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        transform.rotation = Quat::from_euler(EulerRot::YXZ, fly.yaw, fly.pitch, 0.0);
    }

    let boost_requested = keys.pressed(KeyCode::ShiftLeft);
    let multiplier = fly.jetpack.tick(boost_requested, dt);
    let speed = fly.speed * multiplier;

    let mut wish = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        wish += *transform.forward();
    }
    if keys.pressed(KeyCode::KeyS) {
        wish -= *transform.forward();
    }
    if keys.pressed(KeyCode::KeyA) {
        wish -= *transform.right();
    }
    if keys.pressed(KeyCode::KeyD) {
        wish += *transform.right();
    }
    if keys.pressed(KeyCode::Space) {
        wish += Vec3::Y;
    }
    if keys.pressed(KeyCode::ControlLeft) {
        wish -= Vec3::Y;
    }

    if wish != Vec3::ZERO {
        transform.translation += wish.normalize() * speed * dt;
    }
}
