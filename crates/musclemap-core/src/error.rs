pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown muscle: {name}")]
    UnknownMuscle { name: String },

    #[error("unknown body slug: {name}")]
    UnknownSlug { name: String },

    #[error("unknown body gender: {name} (expected `male` or `female`)")]
    UnknownGender { name: String },

    #[error("unknown body side: {name} (expected `front` or `back`)")]
    UnknownSide { name: String },

    #[error("invalid color `{value}`: expected `#rgb`, `#rrggbb` or `#rrggbbaa`")]
    InvalidColor { value: String },

    #[error("invalid path data for `{slug}`: {message}")]
    InvalidPath { slug: String, message: String },
}
