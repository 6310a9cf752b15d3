use std::fmt::{Display, Formatter};

mod flags;
mod hint_group;
mod preview;
mod render;
mod selection;
mod type_group;
mod util;

pub use flags::{WindowFlags, WindowHint, WindowType, WINDOW_HINTS, WINDOW_TYPES};
pub use hint_group::{HintGroup, HintGroupState};
pub use preview::{Preview, PreviewState};
pub use render::render_flags;
pub use selection::FlagSelection;
pub use type_group::{TypeGroup, TypeGroupState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The type sub-range of a flag value matches none of the
    /// cataloged window types. Carries the offending type bits.
    UnrecognizedType(u32),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnrecognizedType(bits) => {
                write!(f, "unrecognized window type {:#010x}", bits)
            }
        }
    }
}

impl std::error::Error for Error {}
