//! Error type shared by mesh loading, frame export and the demo window.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A triangle was built from a vertex list that did not hold exactly three vertices.
    MalformedTriangle { vertices: usize },
    /// The OBJ file could not be read or parsed.
    Obj(tobj::LoadError),
    /// Encoding or writing an image failed.
    Image(image::ImageError),
    /// The presentation surface reported an error.
    Display(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedTriangle { vertices } => {
                write!(f, "triangle needs exactly 3 vertices, got {vertices}")
            }
            Error::Obj(e) => write!(f, "failed to load OBJ: {e}"),
            Error::Image(e) => write!(f, "failed to write image: {e}"),
            Error::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Obj(e) => Some(e),
            Error::Image(e) => Some(e),
            Error::MalformedTriangle { .. } | Error::Display(_) => None,
        }
    }
}

impl From<tobj::LoadError> for Error {
    fn from(e: tobj::LoadError) -> Self {
        Error::Obj(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

// sdl2 reports failures as plain strings
impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Display(msg)
    }
}
