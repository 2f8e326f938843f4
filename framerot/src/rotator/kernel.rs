use crate::rotation::Rotation;

/// Rotate one pixel plane. `width` and `height` are the source plane's
/// dimensions in samples of `sample` bytes; `src`/`dst` hold at least
/// `stride x height` bytes for their respective geometry. The destination
/// plane has the rotated dimensions (swapped for quarter turns).
///
/// Index contract, with `W`/`H` the source dimensions:
/// - 0 degrees:   `dst[i][j] = src[i][j]`
/// - 180 degrees: `dst[i][j] = src[H-1-i][W-1-j]`
/// - 90 cw:       `dst[i][j] = src[H-1-j][i]` (destination is `H` x `W`)
/// - 270 cw:      `dst[i][j] = src[j][W-1-i]`
pub(crate) fn rotate_plane(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    height: usize,
    sample: usize,
    rotation: Rotation,
) {
    match rotation {
        Rotation::None => {
            let row_bytes = width * sample;
            for i in 0..height {
                let s = i * src_stride;
                let d = i * dst_stride;
                dst[d..d + row_bytes].copy_from_slice(&src[s..s + row_bytes]);
            }
        }
        Rotation::Clockwise180 => {
            for i in 0..height {
                let s = (height - 1 - i) * src_stride;
                let d = i * dst_stride;
                for j in 0..width {
                    let sj = s + (width - 1 - j) * sample;
                    let dj = d + j * sample;
                    dst[dj..dj + sample].copy_from_slice(&src[sj..sj + sample]);
                }
            }
        }
        Rotation::Clockwise90 => {
            for i in 0..width {
                let d = i * dst_stride;
                for j in 0..height {
                    let s = (height - 1 - j) * src_stride + i * sample;
                    let dj = d + j * sample;
                    dst[dj..dj + sample].copy_from_slice(&src[s..s + sample]);
                }
            }
        }
        Rotation::Clockwise270 => {
            for i in 0..width {
                let d = i * dst_stride;
                for j in 0..height {
                    let s = j * src_stride + (width - 1 - i) * sample;
                    let dj = d + j * sample;
                    dst[dj..dj + sample].copy_from_slice(&src[s..s + sample]);
                }
            }
        }
    }
}
