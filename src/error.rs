use crate::loader::LoaderError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// sectors are processed in pairs, so the split must be even
    #[error("divisions must be even and non zero, got {0}")]
    InvalidDivisions(usize),

    #[error("failed to acquire a {width}x{height} drawing surface")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("template error")]
    Template(#[from] askama::Error),

    #[error("failed to load outline")]
    Loader(#[from] LoaderError),
}

pub type Result<T> = std::result::Result<T, Error>;
