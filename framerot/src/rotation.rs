use crate::error::RotationError;

/// Rotation amount, clockwise, restricted to 90-degree increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    /// All four elements, indexed by quarter turns clockwise.
    const ALL: [Self; 4] = [
        Self::None,
        Self::Clockwise90,
        Self::Clockwise180,
        Self::Clockwise270,
    ];

    /// Map the host framework's rotation constant: `0` = no rotation, `1` =
    /// 90 degrees clockwise, `2` = 180, `3` = 270 clockwise (90
    /// counter-clockwise). Anything else is a contract violation.
    pub fn from_constant(constant: u8) -> Result<Self, RotationError> {
        match constant {
            0 => Ok(Self::None),
            1 => Ok(Self::Clockwise90),
            2 => Ok(Self::Clockwise180),
            3 => Ok(Self::Clockwise270),
            other => Err(RotationError::InvalidArgument(other)),
        }
    }

    pub fn to_constant(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Clockwise90 => 1,
            Self::Clockwise180 => 2,
            Self::Clockwise270 => 3,
        }
    }

    pub fn degrees(self) -> u32 {
        self.to_constant() as u32 * 90
    }

    /// Whether this rotation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Clockwise90 | Self::Clockwise270)
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Clockwise90 => Self::Clockwise270,
            Self::Clockwise180 => Self::Clockwise180,
            Self::Clockwise270 => Self::Clockwise90,
        }
    }

    /// Apply `self` first, then `other`.
    pub fn compose(self, other: Self) -> Self {
        Self::ALL[((self.to_constant() + other.to_constant()) & 3) as usize]
    }

    pub fn next(self) -> Self {
        self.compose(Self::Clockwise90)
    }

    pub fn prev(self) -> Self {
        self.compose(Self::Clockwise270)
    }

    /// Output dimensions for rotating a `width` x `height` frame.
    pub fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }
}
