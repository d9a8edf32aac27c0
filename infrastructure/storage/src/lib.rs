mod local;

pub use local::LocalFileStorage;
