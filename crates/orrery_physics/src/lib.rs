pub mod collision;
pub mod forces;
pub mod integrator;
pub mod spawn;

pub use collision::merge_collisions;
pub use forces::accumulate_gravity;
pub use integrator::step_body;
pub use spawn::{fling_body, pick_primary, spawn_body};
