pub mod camera;
pub mod directional_light;
pub mod light;
pub mod point_light;
pub mod scene;
pub mod spotlight;
pub mod surface;
