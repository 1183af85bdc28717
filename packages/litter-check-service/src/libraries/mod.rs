pub mod geofence;
pub mod model_output;
