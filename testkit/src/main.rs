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

//! Manual verification harness: synthesizes frames in every rotatable
//! format, runs all four rotations, and checks the transform laws hold.

use anyhow::{ensure, Result};
use log::{debug, info};

use framerot::{rotate, rotate_by_constant, PixelFormat, Rotation, VideoFrameBuffer};

const FORMATS: [PixelFormat; 9] = [
    PixelFormat::RGBx,
    PixelFormat::XBGR,
    PixelFormat::BGRx,
    PixelFormat::BGRA,
    PixelFormat::RGBA,
    PixelFormat::GRAY8,
    PixelFormat::I420,
    PixelFormat::NV12,
    PixelFormat::YUYV,
];

const ALL_ROTATIONS: [Rotation; 4] = [
    Rotation::None,
    Rotation::Clockwise90,
    Rotation::Clockwise180,
    Rotation::Clockwise270,
];

fn synth_frame(format: PixelFormat, width: u32, height: u32) -> Result<VideoFrameBuffer> {
    let mut frame = VideoFrameBuffer::alloc(format, width, height, 90_000, 33_333)?;
    for (idx, plane) in frame.planes.iter_mut().enumerate() {
        for (i, byte) in plane.data.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(97).wrapping_add(idx as u8);
        }
    }
    Ok(frame)
}

fn check_format(format: PixelFormat, width: u32, height: u32) -> Result<()> {
    let frame = synth_frame(format, width, height)?;

    if !format.is_rotatable() {
        ensure!(
            rotate(&frame, Rotation::Clockwise90).is_err(),
            "{format:?} must be refused"
        );
        info!("{format:?}: refused as expected");
        return Ok(());
    }

    for rotation in ALL_ROTATIONS {
        let out = rotate(&frame, rotation)?;
        let expect = rotation.output_dimensions(width, height);
        ensure!(
            (out.width, out.height) == expect,
            "{format:?} {rotation:?}: got {}x{}, expected {}x{}",
            out.width,
            out.height,
            expect.0,
            expect.1
        );
        ensure!(out.pts == frame.pts && out.duration == frame.duration);
        debug!(
            "{format:?}: {} degrees -> {}x{}",
            rotation.degrees(),
            out.width,
            out.height
        );
    }

    // Four quarter turns compose to the identity.
    let mut out = rotate(&frame, Rotation::Clockwise90)?;
    for _ in 0..3 {
        out = rotate(&out, Rotation::Clockwise90)?;
    }
    ensure!(out == frame, "{format:?}: four quarter turns drifted");

    // The constant-driven surface agrees with the typed one.
    let by_constant = rotate_by_constant(&frame, 2)?;
    ensure!(by_constant == rotate(&frame, Rotation::Clockwise180)?);
    ensure!(rotate_by_constant(&frame, 45).is_err());

    info!("{format:?}: all rotations verified at {width}x{height}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("testkit", log::LevelFilter::Debug)
        .filter_module("framerot", log::LevelFilter::Trace)
        .init();

    for format in FORMATS {
        check_format(format, 64, 48)?;
        check_format(format, 5, 3)?;
    }

    info!("all formats passed");

    Ok(())
}
