#![no_main]
use libfuzzer_sys::fuzz_target;
use zensprite::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the size, the rest is grayscale pixels
    let [w, h, pixels @ ..] = data else {
        return;
    };
    let (w, h) = (u32::from(*w), u32::from(*h));
    let Ok(source) = RawPixels::new(pixels, w, h, PixelLayout::Gray8) else {
        return;
    };

    let Ok(sprite) = encode(&source, 8, 8, enough::Unstoppable) else {
        assert!(w == 0 || h == 0, "only empty sources may fail");
        return;
    };
    assert_eq!(sprite.bytes().len(), page_count(h) as usize * w as usize);

    // Rendering must never panic and must list every byte
    let text = sprite.annotate("fuzz").unwrap();
    assert_eq!(text.matches("0x").count(), sprite.bytes().len());
});
