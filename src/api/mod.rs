// HTTP route groups

pub mod infer;
pub mod resource;
