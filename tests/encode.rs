//! Page packing: sizes, bit order, options and failure modes.

use enough::{Stop, StopReason, Unstoppable};
use zensprite::*;

fn gray(w: usize, h: usize, f: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            pixels[y * w + x] = f(x, y);
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

fn encode_gray(pixels: &[u8], w: u32, h: u32) -> EncodedSprite {
    let source = RawPixels::new(pixels, w, h, PixelLayout::Gray8).unwrap();
    encode(&source, w as i32, h as i32, Unstoppable).unwrap()
}

struct Stopped;

impl Stop for Stopped {
    fn check(&self) -> Result<(), StopReason> {
        Err(StopReason::Cancelled)
    }
}

#[test]
fn byte_count_is_pages_times_width() {
    for (w, h) in [(1, 1), (3, 5), (8, 8), (16, 12), (7, 9), (16, 16), (128, 64), (5, 17)] {
        let pixels = noise_pattern(w, h, 1);
        let sprite = encode_gray(&pixels, w as u32, h as u32);
        assert_eq!(sprite.bytes().len(), h.div_ceil(8) * w, "{w}x{h}");
        assert_eq!(sprite.pages() as usize, h.div_ceil(8));
    }
}

#[test]
fn encoding_is_deterministic() {
    let pixels = noise_pattern(24, 40, 3);
    let source = RawPixels::new(&pixels, 24, 40, PixelLayout::Rgb8).unwrap();
    let a = encode(&source, 24, 40, Unstoppable).unwrap();
    let b = encode(&source, 24, 40, Unstoppable).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.annotate("noise").unwrap(), b.annotate("noise").unwrap());
}

#[test]
fn top_row_is_bit_zero() {
    let pixels = gray(12, 16, |_, y| if y == 0 { 255 } else { 0 });
    let sprite = encode_gray(&pixels, 12, 16);
    assert_eq!(sprite.page(0).unwrap(), &[0x01; 12]);
    assert_eq!(sprite.page(1).unwrap(), &[0x00; 12]);
    assert!(sprite.page(2).is_none());
}

#[test]
fn all_white_16x16() {
    let pixels = vec![255u8; 16 * 16];
    let sprite = encode_gray(&pixels, 16, 16);
    assert_eq!(sprite.pages(), 2);
    assert_eq!(sprite.bytes(), &[0xff; 32]);
}

#[test]
fn row_checkerboard_8x8() {
    let even = gray(8, 8, |_, y| if y % 2 == 0 { 255 } else { 0 });
    assert_eq!(encode_gray(&even, 8, 8).bytes(), &[0x55; 8]);

    let odd = gray(8, 8, |_, y| if y % 2 == 1 { 255 } else { 0 });
    assert_eq!(encode_gray(&odd, 8, 8).bytes(), &[0xaa; 8]);
}

#[test]
fn columns_are_independent() {
    // Diagonal: column x has only row x lit
    let pixels = gray(8, 8, |x, y| if x == y { 255 } else { 0 });
    let sprite = encode_gray(&pixels, 8, 8);
    assert_eq!(
        sprite.bytes(),
        &[0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80]
    );
}

#[test]
fn dim_colors_use_any_channel() {
    // 0.2 * 255 = 51 is not lit, 52 is
    let pixels = [
        51u8, 51, 51, 255, // gray at threshold
        0, 0, 52, 255, // faint blue
        0, 0, 0, 255, // black
        255, 0, 0, 0, // transparent red, alpha ignored
    ];
    let source = RawPixels::new(&pixels, 4, 1, PixelLayout::Rgba8).unwrap();
    let sprite = encode(&source, 4, 1, Unstoppable).unwrap();
    assert_eq!(sprite.bytes(), &[0x00, 0x01, 0x00, 0x01]);
}

#[test]
fn custom_threshold() {
    let pixels = vec![128u8; 8];
    let source = RawPixels::new(&pixels, 1, 8, PixelLayout::Gray8).unwrap();
    let low = EncodeRequest::new(1, 8).encode(&source, Unstoppable).unwrap();
    let high = EncodeRequest::new(1, 8)
        .with_threshold(Threshold(0.9))
        .encode(&source, Unstoppable)
        .unwrap();
    assert_eq!(low.bytes(), &[0xff]);
    assert_eq!(high.bytes(), &[0x00]);
}

#[test]
fn bottom_up_origin() {
    // Source row 0 is the bottom of the image
    let pixels = gray(2, 16, |_, y| if y == 0 { 255 } else { 0 });
    let source = RawPixels::new(&pixels, 2, 16, PixelLayout::Gray8).unwrap();
    let sprite = EncodeRequest::new(2, 16)
        .with_origin(RowOrigin::BottomUp)
        .encode(&source, Unstoppable)
        .unwrap();
    assert_eq!(sprite.bytes(), &[0x00, 0x00, 0x80, 0x80]);
}

#[test]
fn unaligned_height_pads_unlit_by_default() {
    let pixels = vec![255u8; 3 * 12];
    let sprite = encode_gray(&pixels, 3, 12);
    assert_eq!(sprite.bytes(), &[0xff, 0xff, 0xff, 0x0f, 0x0f, 0x0f]);
}

#[test]
fn unaligned_height_rejected_on_request() {
    let pixels = vec![255u8; 3 * 12];
    let source = RawPixels::new(&pixels, 3, 12, PixelLayout::Gray8).unwrap();
    let result = EncodeRequest::new(3, 12)
        .with_padding(PagePadding::Reject)
        .encode(&source, Unstoppable);
    match result {
        Err(SpriteError::UnalignedHeight { height: 12 }) => {}
        other => panic!("expected UnalignedHeight, got {other:?}"),
    }

    let aligned = vec![0u8; 3 * 16];
    let source = RawPixels::new(&aligned, 3, 16, PixelLayout::Gray8).unwrap();
    assert!(
        EncodeRequest::new(3, 16)
            .with_padding(PagePadding::Reject)
            .encode(&source, Unstoppable)
            .is_ok()
    );
}

#[test]
fn empty_source_is_invalid() {
    let source = RawPixels::new(&[], 0, 0, PixelLayout::Gray8).unwrap();
    match encode(&source, 8, 8, Unstoppable) {
        Err(SpriteError::InvalidDimension {
            width: 0,
            height: 0,
        }) => {}
        other => panic!("expected InvalidDimension, got {other:?}"),
    }
}

#[test]
fn declared_size_must_be_positive() {
    let pixels = vec![0u8; 64];
    let source = RawPixels::new(&pixels, 8, 8, PixelLayout::Gray8).unwrap();
    for (w, h) in [(0, 8), (8, 0), (-1, 8), (8, -16)] {
        match encode(&source, w, h, Unstoppable) {
            Err(SpriteError::InvalidDeclaredSize { width, height }) => {
                assert_eq!((width, height), (w, h));
            }
            other => panic!("expected InvalidDeclaredSize, got {other:?}"),
        }
    }
}

#[test]
fn declared_size_is_not_checked_against_source() {
    let pixels = vec![255u8; 16 * 64];
    let source = RawPixels::new(&pixels, 16, 64, PixelLayout::Gray8).unwrap();
    let sprite = encode(&source, 16, 16, Unstoppable).unwrap();
    assert_eq!(sprite.header(), SpriteHeader::new(16, 16));
    assert_eq!(sprite.bytes().len(), 128);
}

#[test]
fn firmware_bytes_start_with_header() {
    let pixels = vec![255u8; 8 * 8];
    let sprite = encode_gray(&pixels, 8, 8);
    let fw = sprite.to_firmware_bytes().unwrap();
    assert_eq!(&fw[..2], &[8, 8]);
    assert_eq!(&fw[2..], sprite.bytes());
}

#[test]
fn firmware_header_must_fit_a_byte() {
    let pixels = vec![255u8; 8 * 8];
    let source = RawPixels::new(&pixels, 8, 8, PixelLayout::Gray8).unwrap();

    let max = encode(&source, 255, 255, Unstoppable).unwrap();
    assert_eq!(&max.to_firmware_bytes().unwrap()[..2], &[255, 255]);

    for (w, h) in [(300, 264), (256, 8), (8, 256)] {
        let sprite = encode(&source, w, h, Unstoppable).unwrap();
        match sprite.to_firmware_bytes() {
            Err(SpriteError::InvalidDeclaredSize { width, height }) => {
                assert_eq!((width, height), (w, h));
            }
            other => panic!("expected InvalidDeclaredSize, got {other:?}"),
        }
    }
}

#[test]
fn accessors_describe_the_packed_data() {
    for (w, h, dw, dh) in [(16, 16, 16, 16), (5, 13, 5, 13), (16, 64, 16, 16), (1, 1, 8, 8)] {
        let pixels = noise_pattern(w as usize, h as usize, 1);
        let source = RawPixels::new(&pixels, w, h, PixelLayout::Gray8).unwrap();
        let sprite = encode(&source, dw, dh, Unstoppable).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (w, h));
        assert_eq!(sprite.pages(), page_count(h));
        assert_eq!(sprite.bytes().len(), (sprite.pages() * sprite.width()) as usize);
        assert_eq!(sprite.header(), SpriteHeader::new(dw, dh));

        // Every packed byte is rendered, one line per page
        let text = sprite.annotate("frame").unwrap();
        assert_eq!(text.matches("0x").count(), sprite.bytes().len());
        let page_lines = text.lines().filter(|l| l.starts_with("0x")).count();
        assert_eq!(page_lines, sprite.pages() as usize);
        assert!(text.contains(&format!("\n{dw}, {dh},\n")));
    }
}

#[test]
fn limits_reject_large() {
    let pixels = vec![0u8; 16 * 16];
    let source = RawPixels::new(&pixels, 16, 16, PixelLayout::Gray8).unwrap();
    let limits = Limits {
        max_pixels: Some(100),
        ..Default::default()
    };
    let result = EncodeRequest::new(16, 16)
        .with_limits(&limits)
        .encode(&source, Unstoppable);
    match result.unwrap_err() {
        SpriteError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_output_bytes: Some(31),
        ..Default::default()
    };
    assert!(
        EncodeRequest::new(16, 16)
            .with_limits(&limits)
            .encode(&source, Unstoppable)
            .is_err()
    );
}

#[test]
fn limits_allow_sizes_at_the_cap() {
    let pixels = vec![0u8; 16 * 16];
    let source = RawPixels::new(&pixels, 16, 16, PixelLayout::Gray8).unwrap();
    let limits = Limits {
        max_width: Some(16),
        max_height: Some(16),
        max_pixels: Some(256),
        max_output_bytes: Some(32),
    };
    let sprite = EncodeRequest::new(16, 16)
        .with_limits(&limits)
        .encode(&source, Unstoppable)
        .unwrap();
    assert_eq!(sprite.bytes().len(), 32);
}

#[test]
fn limits_on_width_and_height() {
    let pixels = vec![0u8; 16 * 16];
    let source = RawPixels::new(&pixels, 16, 16, PixelLayout::Gray8).unwrap();
    let narrow = Limits {
        max_width: Some(15),
        ..Default::default()
    };
    let short = Limits {
        max_height: Some(15),
        ..Default::default()
    };
    for limits in [&narrow, &short] {
        match EncodeRequest::new(16, 16)
            .with_limits(limits)
            .encode(&source, Unstoppable)
        {
            Err(SpriteError::LimitExceeded(_)) => {}
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }
}

#[test]
fn cancellation() {
    let pixels = vec![0u8; 64];
    let source = RawPixels::new(&pixels, 8, 8, PixelLayout::Gray8).unwrap();
    match EncodeRequest::new(8, 8).encode(&source, Stopped) {
        Err(SpriteError::Cancelled(_)) => {}
        other => panic!("expected Cancelled, got {other:?}"),
    }
}

#[test]
fn bgr_and_rgb_agree() {
    let rgb = noise_pattern(9, 11, 3);
    let bgr: Vec<u8> = rgb
        .chunks_exact(3)
        .flat_map(|p| [p[2], p[1], p[0]])
        .collect();
    let a = RawPixels::new(&rgb, 9, 11, PixelLayout::Rgb8).unwrap();
    let b = RawPixels::new(&bgr, 9, 11, PixelLayout::Bgr8).unwrap();
    assert_eq!(
        encode(&a, 9, 11, Unstoppable).unwrap(),
        encode(&b, 9, 11, Unstoppable).unwrap()
    );
}
