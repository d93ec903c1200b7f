use crate::memory::Image;
use std::io::Cursor;

#[test]
fn window_clamps_to_image_end() {
    let image = Image::new(0x1000, vec![0x60, 1, 2, 3, 4]);

    assert_eq!(image.window(0x1000, 9), &[0x60u8, 1, 2, 3, 4]);
    assert_eq!(image.window(0x1003, 9), &[3u8, 4]);
    assert_eq!(image.window(0x1001, 2), &[1u8, 2]);
}

#[test]
fn window_outside_image_is_empty() {
    let image = Image::new(0x1000, vec![0x4E; 4]);

    assert!(image.window(0x0FFF, 9).is_empty());
    assert!(image.window(0x1004, 9).is_empty());
    assert!(!image.contains(0x1004));
    assert!(image.contains(0x1003));
}

#[test]
fn retrieve_is_all_or_nothing() {
    let image = Image::new(0, vec![1, 2, 3]);

    assert_eq!(image.retrieve(1, 2), Some(&[2u8, 3][..]));
    assert_eq!(image.retrieve(1, 3), None);
    assert_eq!(image.retrieve(3, 1), None);
}

#[test]
fn read_bytes_keeps_base() {
    let mut file = Cursor::new(vec![0xB3, 0x4E]);
    let image = Image::read_bytes(&mut file, 0x400).unwrap();

    assert_eq!(image.base(), 0x400);
    assert_eq!(image.end(), 0x402);
    assert_eq!(image.len(), 2);
}
