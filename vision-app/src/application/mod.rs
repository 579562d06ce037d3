mod generate_vision;

pub use generate_vision::GenerateVision;
