mod id;
mod manager;

pub use id::ObjectId;
pub use manager::ObjectStore;
