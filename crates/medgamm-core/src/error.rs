use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedGammError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid gamma {gamma}: must be a finite value greater than zero")]
    InvalidParameter { gamma: f32 },

    #[error("Invalid input image: {0}")]
    InvalidInput(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, MedGammError>;
