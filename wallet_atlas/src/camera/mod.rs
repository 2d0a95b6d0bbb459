mod fly;

pub use fly::{fly_camera_plugin, FlyCamera, Jetpack};
