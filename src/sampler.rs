//! Texture sampling properties.

use crate::gl;

/// Texture filtering mode.
///
/// Applied to both minification and magnification. `Nearest` keeps pixel
/// art crisp, `Linear` smooths it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Filter {
    /// Nearest texel.
    #[default]
    Nearest,

    /// Linear filter.
    Linear,
}

impl Filter {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Filter::Nearest => gl::NEAREST,
            Filter::Linear => gl::LINEAR,
        }
    }
}

impl From<bool> for Filter {
    /// `true` turns anti-aliasing on.
    fn from(anti_aliasing: bool) -> Self {
        if anti_aliasing {
            Filter::Linear
        } else {
            Filter::Nearest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anti_aliasing_toggle() {
        assert_eq!(Filter::Linear, Filter::from(true));
        assert_eq!(Filter::Nearest, Filter::from(false));
        assert_eq!(gl::NEAREST, Filter::default().as_gl_enum());
        assert_eq!(gl::LINEAR, Filter::Linear.as_gl_enum());
    }
}
