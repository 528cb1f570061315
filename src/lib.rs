pub mod bodies;
pub mod constants;
pub mod kepler;
pub mod orbit_errors;
pub mod orbit_type;
pub mod scene;
pub mod trajectory;
