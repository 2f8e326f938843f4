// Copyright (C) 2025 Marcus L. Hanestad <marlhan@proton.me>
//
// This file is part of Framerot.
//
// Framerot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Framerot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Framerot.  If not, see <https://www.gnu.org/licenses/>.

//! 90-degree video frame rotation for live capture pipelines

pub mod error;
pub mod frame;
pub mod rotation;
mod rotator;

pub use error::RotationError;
pub use frame::{PixelFormat, Plane, Pts, VideoFrameBuffer};
pub use rotation::Rotation;
pub use rotator::{rotate, rotate_by_constant};
