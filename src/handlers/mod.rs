pub mod find_path;
pub mod locations;

pub use find_path::find_path_handler;
pub use locations::locations_handler;
