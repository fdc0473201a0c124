mod map;
mod ser;

pub use map::Map;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    KeyNotFound,
    DuplicateKey,
    IndexOutOfRange(usize),
    LengthMismatch { keys: usize, values: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound => f.write_str("key does not exist"),
            Self::DuplicateKey => f.write_str("key already exists"),
            Self::IndexOutOfRange(i) => {
                f.write_fmt(format_args!("no entry at index {}", i))
            }
            Self::LengthMismatch { keys, values } => f.write_fmt(format_args!(
                "length of keys ({}) and values ({}) does not match",
                keys, values
            )),
        }
    }
}

impl std::error::Error for Error {}
