use std::path::Path;

use image::{ImageError, Rgb, RgbImage};

pub const WIDTH: u32 = 320;
pub const HEIGHT: u32 = 180;

const BACKGROUND: Rgb<u8> = Rgb([73, 109, 137]);
const TEXT: Rgb<u8> = Rgb([255, 255, 255]);
const LABEL: &str = "WEAD VIDEO";
const SCALE: u32 = 2;

/// Writes the fixed placeholder thumbnail. No frame is extracted from
/// the video; the image is a solid fill with a static label.
pub fn generate(path: &Path) -> Result<(), ImageError> {
    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    draw_label(&mut image, LABEL, 10, 10);
    image.save(path)
}

fn draw_label(image: &mut RgbImage, label: &str, x: u32, y: u32) {
    let mut cursor = x;
    for character in label.chars() {
        draw_glyph(image, character, cursor, y);
        cursor += 6 * SCALE;
    }
}

fn draw_glyph(image: &mut RgbImage, character: char, x: u32, y: u32) {
    for (row, bits) in glyph(character).iter().enumerate() {
        for column in 0..5u32 {
            if bits & (0b10000 >> column) == 0 {
                continue;
            }
            for dy in 0..SCALE {
                for dx in 0..SCALE {
                    let px = x + column * SCALE + dx;
                    let py = y + row as u32 * SCALE + dy;
                    if px < WIDTH && py < HEIGHT {
                        image.put_pixel(px, py, TEXT);
                    }
                }
            }
        }
    }
}

// 5x7 bitmap rows for the characters the label uses.
fn glyph(character: char) -> [u8; 7] {
    match character {
        'A' => [
            0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ],
        'D' => [
            0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110,
        ],
        'E' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111,
        ],
        'I' => [
            0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111,
        ],
        'O' => [
            0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        'V' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100,
        ],
        'W' => [
            0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010,
        ],
        _ => [0; 7],
    }
}
