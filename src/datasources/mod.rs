pub mod observation_file;

pub use observation_file::{load_observations, read_observations};
