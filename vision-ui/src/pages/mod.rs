mod home;

pub use home::{generate_vision, GenerateVisionFn, HomePage, VisionFormVm};
