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

mod kernel;

use log::trace;

use crate::error::RotationError;
use crate::frame::VideoFrameBuffer;
use crate::rotation::Rotation;

/// Rotate `input` clockwise by `rotation`, producing a newly allocated frame.
///
/// The input is only read; the output owns fresh backing storage with tight
/// strides, carries the input's format, and keeps `pts`/`duration` untouched.
/// For quarter turns the output dimensions are the input's swapped. Each
/// plane rotates independently with its own subsampled geometry, so planar
/// and semi-planar YUV stay geometrically consistent.
pub fn rotate(input: &VideoFrameBuffer, rotation: Rotation) -> Result<VideoFrameBuffer, RotationError> {
    input.validate()?;

    if !input.format.is_rotatable() {
        return Err(RotationError::UnsupportedFormat(input.format));
    }

    let (out_width, out_height) = rotation.output_dimensions(input.width, input.height);

    trace!(
        "rotating {}x{} {:?} frame by {} degrees into {}x{}",
        input.width,
        input.height,
        input.format,
        rotation.degrees(),
        out_width,
        out_height
    );

    let mut output =
        VideoFrameBuffer::alloc(input.format, out_width, out_height, input.pts, input.duration)?;

    for (idx, (src, dst)) in input.planes.iter().zip(output.planes.iter_mut()).enumerate() {
        let (src_w, src_h) = input.format.plane_dimensions(idx, input.width, input.height);
        kernel::rotate_plane(
            &src.data,
            src.stride,
            &mut dst.data,
            dst.stride,
            src_w as usize,
            src_h as usize,
            input.format.sample_size(idx),
            rotation,
        );
    }

    Ok(output)
}

/// Rotate using the host framework's unsigned rotation constant (0-3 for
/// 0/90/180/270 degrees clockwise). Constants outside that set fail with
/// [`RotationError::InvalidArgument`] before the input is even looked at.
pub fn rotate_by_constant(
    input: &VideoFrameBuffer,
    constant: u8,
) -> Result<VideoFrameBuffer, RotationError> {
    rotate(input, Rotation::from_constant(constant)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{PixelFormat, Plane};

    const ALL_ROTATIONS: [Rotation; 4] = [
        Rotation::None,
        Rotation::Clockwise90,
        Rotation::Clockwise180,
        Rotation::Clockwise270,
    ];

    /// 4x2 GRAY8 frame with rows [0,1,2,3], [4,5,6,7].
    fn gray_4x2() -> VideoFrameBuffer {
        VideoFrameBuffer::from_planes(
            PixelFormat::GRAY8,
            4,
            2,
            vec![Plane {
                data: vec![0, 1, 2, 3, 4, 5, 6, 7],
                stride: 4,
            }],
            1_000,
            40_000,
        )
    }

    /// Deterministic gradient so every sample is distinguishable.
    fn gradient(format: PixelFormat, width: u32, height: u32) -> VideoFrameBuffer {
        let mut frame = VideoFrameBuffer::alloc(format, width, height, 7_777, 33_333).unwrap();
        for (idx, plane) in frame.planes.iter_mut().enumerate() {
            for (i, byte) in plane.data.iter_mut().enumerate() {
                *byte = (i as u8).wrapping_mul(31).wrapping_add(idx as u8);
            }
        }
        frame
    }

    #[test]
    fn quarter_turn_clockwise_4x2() {
        let out = rotate(&gray_4x2(), Rotation::Clockwise90).unwrap();
        assert_eq!((out.width, out.height), (2, 4));
        assert_eq!(out.planes[0].data, vec![4, 0, 5, 1, 6, 2, 7, 3]);
    }

    #[test]
    fn half_turn_4x2() {
        let out = rotate(&gray_4x2(), Rotation::Clockwise180).unwrap();
        assert_eq!((out.width, out.height), (4, 2));
        assert_eq!(out.planes[0].data, vec![7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn dimension_law() {
        let frame = gradient(PixelFormat::BGRA, 6, 4);
        for rotation in ALL_ROTATIONS {
            let out = rotate(&frame, rotation).unwrap();
            assert_eq!(
                (out.width, out.height),
                rotation.output_dimensions(frame.width, frame.height)
            );
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for format in [PixelFormat::GRAY8, PixelFormat::RGBA, PixelFormat::I420, PixelFormat::NV12]
        {
            let frame = gradient(format, 5, 3);
            let mut out = rotate(&frame, Rotation::Clockwise90).unwrap();
            for _ in 0..3 {
                out = rotate(&out, Rotation::Clockwise90).unwrap();
            }
            assert_eq!(out, frame, "{format:?}");
        }
    }

    #[test]
    fn half_turn_is_an_involution() {
        let frame = gradient(PixelFormat::I420, 5, 3);
        let out = rotate(&rotate(&frame, Rotation::Clockwise180).unwrap(), Rotation::Clockwise180)
            .unwrap();
        assert_eq!(out, frame);
    }

    #[test]
    fn quarter_turns_are_mutual_inverses_through_half_turn() {
        let frame = gradient(PixelFormat::RGBA, 4, 6);
        let cw = rotate(&frame, Rotation::Clockwise90).unwrap();
        let ccw_then_half =
            rotate(&rotate(&frame, Rotation::Clockwise270).unwrap(), Rotation::Clockwise180)
                .unwrap();
        assert_eq!(cw, ccw_then_half);
    }

    #[test]
    fn timing_is_preserved() {
        let frame = gray_4x2();
        for rotation in ALL_ROTATIONS {
            let out = rotate(&frame, rotation).unwrap();
            assert_eq!(out.pts, frame.pts);
            assert_eq!(out.duration, frame.duration);
        }
    }

    #[test]
    fn input_is_never_mutated() {
        let frame = gradient(PixelFormat::NV12, 6, 4);
        let before = frame.clone();
        for rotation in ALL_ROTATIONS {
            rotate(&frame, rotation).unwrap();
            assert_eq!(frame, before);
        }
        assert!(rotate_by_constant(&frame, 45).is_err());
        assert_eq!(frame, before);
    }

    #[test]
    fn no_rotation_yields_an_independent_copy() {
        let frame = gray_4x2();
        let mut out = rotate(&frame, Rotation::None).unwrap();
        assert_eq!(out.planes[0].data, frame.planes[0].data);
        out.planes[0].data[0] = 0xee;
        assert_eq!(frame.planes[0].data[0], 0);
    }

    #[test]
    fn padded_input_stride_is_honored() {
        let frame = VideoFrameBuffer::from_planes(
            PixelFormat::GRAY8,
            4,
            2,
            vec![Plane {
                data: vec![0, 1, 2, 3, 0xaa, 0xaa, 4, 5, 6, 7, 0xaa, 0xaa],
                stride: 6,
            }],
            0,
            0,
        );
        let out = rotate(&frame, Rotation::Clockwise90).unwrap();
        assert_eq!(out.planes[0].stride, 2);
        assert_eq!(out.planes[0].data, vec![4, 0, 5, 1, 6, 2, 7, 3]);
    }

    #[test]
    fn odd_i420_chroma_geometry_swaps() {
        let frame = gradient(PixelFormat::I420, 5, 3);
        let out = rotate(&frame, Rotation::Clockwise90).unwrap();
        assert_eq!((out.width, out.height), (3, 5));
        assert_eq!(out.plane_dimensions(0), (3, 5));
        assert_eq!(out.plane_dimensions(1), (2, 3));
        assert_eq!(out.planes[1].data.len(), 6);
    }

    #[test]
    fn nv12_chroma_pairs_stay_interleaved() {
        // 4x2 NV12: Y plane as in the gray scenario, one chroma row of two
        // UV pairs.
        let frame = VideoFrameBuffer::from_planes(
            PixelFormat::NV12,
            4,
            2,
            vec![
                Plane {
                    data: vec![0, 1, 2, 3, 4, 5, 6, 7],
                    stride: 4,
                },
                Plane {
                    data: vec![0x10, 0x20, 0x11, 0x21],
                    stride: 4,
                },
            ],
            0,
            0,
        );
        let out = rotate(&frame, Rotation::Clockwise90).unwrap();
        assert_eq!(out.planes[0].data, vec![4, 0, 5, 1, 6, 2, 7, 3]);
        // Chroma plane is 2x1 pairs; rotated it is 1x2 with pair order kept.
        assert_eq!(out.planes[1].data, vec![0x10, 0x20, 0x11, 0x21]);
        assert_eq!(out.planes[1].stride, 2);
    }

    #[test]
    fn rejected_constant_produces_no_output() {
        let err = rotate_by_constant(&gray_4x2(), 45).unwrap_err();
        assert!(matches!(err, RotationError::InvalidArgument(45)));
    }

    #[test]
    fn zero_plane_frame_is_invalid() {
        let frame = VideoFrameBuffer::from_planes(PixelFormat::BGRA, 4, 2, vec![], 0, 0);
        assert!(matches!(
            rotate(&frame, Rotation::Clockwise90),
            Err(RotationError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_dimension_frame_is_invalid() {
        let frame = VideoFrameBuffer::from_planes(
            PixelFormat::GRAY8,
            0,
            2,
            vec![Plane {
                data: vec![],
                stride: 0,
            }],
            0,
            0,
        );
        assert!(matches!(
            rotate(&frame, Rotation::None),
            Err(RotationError::InvalidInput(_))
        ));
    }

    #[test]
    fn yuyv_has_no_rotation_rule() {
        let frame = gradient(PixelFormat::YUYV, 4, 2);
        assert!(matches!(
            rotate(&frame, Rotation::Clockwise90),
            Err(RotationError::UnsupportedFormat(PixelFormat::YUYV))
        ));
    }
}
