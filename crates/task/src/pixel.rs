//! Pixel buffer conversion from a [`Frame`].
//!
//! Always available (no feature gate) so texture uploads that want RGBA can
//! share it with the PNG path.

use rdm_core::Frame;

/// Expands an RGB frame into an RGBA8 buffer with opaque alpha.
///
/// Keeps the frame's row-major order. The length is `width * height * 4`.
pub fn frame_to_rgba(frame: &Frame) -> Vec<u8> {
    frame
        .data()
        .chunks_exact(3)
        .flat_map(|px| [px[0], px[1], px[2], 255u8])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdm_core::glam::DVec2;
    use rdm_core::{FrameCanvas, Rgb};

    fn frame(size: usize) -> Frame {
        let mut canvas = FrameCanvas::new(size, Rgb::new(0, 0, 64)).unwrap();
        canvas.draw_square(DVec2::new(1.5, 0.5), 1, Rgb::new(255, 128, 0));
        canvas.extract_frame()
    }

    #[test]
    fn frame_to_rgba_correct_length() {
        let buf = frame_to_rgba(&frame(8));
        assert_eq!(buf.len(), 8 * 8 * 4);
    }

    #[test]
    fn frame_to_rgba_alpha_always_255() {
        let buf = frame_to_rgba(&frame(4));
        for (i, px) in buf.chunks_exact(4).enumerate() {
            assert_eq!(px[3], 255, "alpha at pixel {i} should be 255");
        }
    }

    #[test]
    fn frame_to_rgba_keeps_row_major_order() {
        let buf = frame_to_rgba(&frame(4));
        // pixel (x=1, y=0) is the second RGBA quad
        assert_eq!(&buf[4..8], &[255, 128, 0, 255]);
        assert_eq!(&buf[0..4], &[0, 0, 64, 255]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_channels_survive(size in 1_usize..24) {
                let f = frame(size);
                let rgba = frame_to_rgba(&f);
                for (rgb, quad) in f.data().chunks_exact(3).zip(rgba.chunks_exact(4)) {
                    prop_assert_eq!(rgb, &quad[..3]);
                }
            }
        }
    }
}
