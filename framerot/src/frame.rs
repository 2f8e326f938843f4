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

use crate::error::RotationError;

/// Presentation timestamp
pub type Pts = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGBx,
    XBGR,
    BGRx,
    BGRA,
    RGBA,
    GRAY8,
    /// YUV 4:2:0 planar (Y, U, V separate planes).
    I420,
    /// YUV 4:2:0 semi-planar (Y plane + interleaved UV pairs).
    NV12,
    /// Packed YUV 4:2:2 (2-pixel macropixels). Capture devices emit it, but
    /// it cannot be rotated sample-exactly without chroma resampling.
    YUYV,
}

impl PixelFormat {
    pub fn plane_count(&self) -> usize {
        match self {
            PixelFormat::I420 => 3,
            PixelFormat::NV12 => 2,
            _ => 1,
        }
    }

    /// Whether a plane-rotation rule is defined for this format.
    pub fn is_rotatable(&self) -> bool {
        !matches!(self, PixelFormat::YUYV)
    }

    /// Bytes per rotation sample in the given plane. A sample is the unit
    /// that moves as a whole: a packed pixel, a luma byte, or a UV pair.
    pub fn sample_size(&self, plane: usize) -> usize {
        match self {
            PixelFormat::RGBx
            | PixelFormat::XBGR
            | PixelFormat::BGRx
            | PixelFormat::BGRA
            | PixelFormat::RGBA => 4,
            PixelFormat::GRAY8 | PixelFormat::I420 => 1,
            PixelFormat::NV12 => {
                if plane == 0 {
                    1
                } else {
                    2
                }
            }
            PixelFormat::YUYV => 4,
        }
    }

    /// Dimensions of the given plane in samples, for a frame of
    /// `width` x `height` pixels. Subsampled planes round up on odd sizes.
    pub fn plane_dimensions(&self, plane: usize, width: u32, height: u32) -> (u32, u32) {
        match self {
            PixelFormat::I420 | PixelFormat::NV12 if plane > 0 => {
                (width.div_ceil(2), height.div_ceil(2))
            }
            PixelFormat::YUYV => (width.div_ceil(2), height),
            _ => (width, height),
        }
    }
}

/// A single pixel plane: contiguous sample rows separated by `stride` bytes.
/// `stride` may exceed the row's sample bytes due to padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    pub data: Vec<u8>,
    pub stride: usize,
}

impl Plane {
    /// Allocate a zeroed plane with a tight stride.
    fn alloc(width_samples: u32, height: u32, sample: usize) -> Result<Self, RotationError> {
        let stride = width_samples as usize * sample;
        let len = stride * height as usize;
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0);
        Ok(Self { data, stride })
    }
}

/// A raw video frame: one or more pixel planes plus format and timing
/// metadata. The input side of a transform borrows it; the output side is a
/// freshly allocated buffer owned by whoever the transform returns it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrameBuffer {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    pub planes: Vec<Plane>,
    pub pts: Pts,
    /// Display duration in the same unit as `pts`.
    pub duration: u64,
}

impl VideoFrameBuffer {
    /// Allocate a zeroed frame with one tight-stride plane per plane of
    /// `format`. Fails with [`RotationError::ResourceExhausted`] if backing
    /// storage cannot be reserved; planes already built are dropped.
    pub fn alloc(
        format: PixelFormat,
        width: u32,
        height: u32,
        pts: Pts,
        duration: u64,
    ) -> Result<Self, RotationError> {
        let mut planes = Vec::new();
        planes.try_reserve_exact(format.plane_count())?;
        for plane in 0..format.plane_count() {
            let (w, h) = format.plane_dimensions(plane, width, height);
            planes.push(Plane::alloc(w, h, format.sample_size(plane))?);
        }

        Ok(Self {
            format,
            width,
            height,
            planes,
            pts,
            duration,
        })
    }

    /// Build a frame from caller-supplied planes. No validation happens here;
    /// [`validate`](Self::validate) runs at the start of every transform.
    pub fn from_planes(
        format: PixelFormat,
        width: u32,
        height: u32,
        planes: Vec<Plane>,
        pts: Pts,
        duration: u64,
    ) -> Self {
        Self {
            format,
            width,
            height,
            planes,
            pts,
            duration,
        }
    }

    /// Dimensions of plane `plane` in samples.
    pub fn plane_dimensions(&self, plane: usize) -> (u32, u32) {
        self.format.plane_dimensions(plane, self.width, self.height)
    }

    /// Check the frame against the plane geometry invariants: correct plane
    /// count for the format, non-zero dimensions, and for every plane
    /// `stride >= row bytes` and `data.len() >= stride * plane height`.
    pub fn validate(&self) -> Result<(), RotationError> {
        if self.planes.is_empty() {
            return Err(RotationError::InvalidInput("frame has no pixel planes"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(RotationError::InvalidInput("frame has a zero dimension"));
        }
        if self.planes.len() != self.format.plane_count() {
            return Err(RotationError::InvalidInput(
                "plane count does not match the pixel format",
            ));
        }

        for (idx, plane) in self.planes.iter().enumerate() {
            let (w, h) = self.plane_dimensions(idx);
            let row_bytes = w as usize * self.format.sample_size(idx);
            if plane.stride < row_bytes {
                return Err(RotationError::InvalidInput(
                    "plane stride is smaller than its row",
                ));
            }
            if plane.data.len() < plane.stride * h as usize {
                return Err(RotationError::InvalidInput(
                    "plane is shorter than stride x height",
                ));
            }
        }

        Ok(())
    }
}
