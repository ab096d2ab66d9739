//! Uncompressed 24-bit bitmap export.
//!
//! Layout (little-endian): a 14-byte file header, a 40-byte
//! `BITMAPINFOHEADER`, then pixel rows bottom row first, each row in
//! (blue, green, red) order and zero-padded to a multiple of 4 bytes.

use crate::{DisplayBuffer, RenderError, RenderResult};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Byte offset of the pixel data (file header + info header).
pub const PIXEL_DATA_OFFSET: u32 = 54;

const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Header fields that identify a bitmap's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub width: u32,
    pub height: u32,
    pub image_size: u32,
}

/// Bytes per stored row, including padding.
pub fn row_stride(width: u32) -> u32 {
    (3 * width + 3) & !3
}

/// Total file size for an image of the given size.
pub fn file_size(width: u32, height: u32) -> u32 {
    PIXEL_DATA_OFFSET + row_stride(width) * height
}

fn header_bytes(width: u32, height: u32) -> [u8; PIXEL_DATA_OFFSET as usize] {
    let image_size = row_stride(width) * height;
    let mut header = [0u8; PIXEL_DATA_OFFSET as usize];
    header[0..2].copy_from_slice(b"BM");
    header[2..6].copy_from_slice(&(PIXEL_DATA_OFFSET + image_size).to_le_bytes());
    header[10..14].copy_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());
    header[14..18].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    header[18..22].copy_from_slice(&width.to_le_bytes());
    header[22..26].copy_from_slice(&height.to_le_bytes());
    header[26..28].copy_from_slice(&1u16.to_le_bytes());
    header[28..30].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    header[34..38].copy_from_slice(&image_size.to_le_bytes());
    header
}

/// Serialize a display buffer as a bitmap.
pub fn write_bmp<W: Write>(writer: &mut W, buffer: &DisplayBuffer) -> RenderResult<()> {
    let (width, height) = (buffer.width(), buffer.height());
    writer.write_all(&header_bytes(width, height))?;

    let padding = [0u8; 3];
    let pad = (row_stride(width) - 3 * width) as usize;
    for row in buffer.pixels().chunks(width.max(1) as usize) {
        for [r, g, b] in row {
            writer.write_all(&[*b, *g, *r])?;
        }
        writer.write_all(&padding[..pad])?;
    }
    Ok(())
}

/// Write a display buffer to a `.bmp` file.
pub fn save_bmp(path: impl AsRef<Path>, buffer: &DisplayBuffer) -> RenderResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_bmp(&mut writer, buffer)?;
    writer.flush()?;
    log::info!(
        "Wrote bitmap {:?} ({} bytes)",
        path,
        file_size(buffer.width(), buffer.height())
    );
    Ok(())
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

/// Read and check the 54-byte header of a 24-bit bitmap.
pub fn read_bmp_header<R: Read>(reader: &mut R) -> RenderResult<BmpHeader> {
    let mut bytes = [0u8; PIXEL_DATA_OFFSET as usize];
    reader.read_exact(&mut bytes)?;

    if &bytes[0..2] != b"BM" {
        return Err(RenderError::InvalidBitmap("missing BM magic".to_string()));
    }
    if read_u32(&bytes, 10) != PIXEL_DATA_OFFSET || read_u32(&bytes, 14) != INFO_HEADER_SIZE {
        return Err(RenderError::InvalidBitmap(
            "unsupported header layout".to_string(),
        ));
    }
    let bits = read_u16(&bytes, 28);
    if bits != BITS_PER_PIXEL {
        return Err(RenderError::InvalidBitmap(format!(
            "expected 24 bits per pixel, found {}",
            bits
        )));
    }

    Ok(BmpHeader {
        file_size: read_u32(&bytes, 2),
        width: read_u32(&bytes, 18),
        height: read_u32(&bytes, 22),
        image_size: read_u32(&bytes, 34),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_buffer(width: u32, height: u32) -> DisplayBuffer {
        let mut buffer = DisplayBuffer::new(width, height);
        buffer.for_each_index(|x, y, p| *p = [x as u8, y as u8, 200]);
        buffer
    }

    #[test]
    fn test_row_stride_padding() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(2), 8);
        assert_eq!(row_stride(3), 12);
        assert_eq!(row_stride(4), 12);
        assert_eq!(row_stride(5), 16);
    }

    #[test]
    fn test_header_round_trip() {
        for (w, h) in [(1, 1), (3, 2), (4, 4), (7, 5)] {
            let mut bytes = Vec::new();
            write_bmp(&mut bytes, &sample_buffer(w, h)).unwrap();

            let header = read_bmp_header(&mut Cursor::new(&bytes)).unwrap();
            assert_eq!(header.width, w);
            assert_eq!(header.height, h);
            let expected = 54 + h * ((3 * w + 3) / 4 * 4);
            assert_eq!(header.file_size, expected);
            assert_eq!(bytes.len() as u32, expected);
            assert_eq!(header.image_size, expected - 54);
        }
    }

    #[test]
    fn test_fixed_header_fields() {
        let mut bytes = Vec::new();
        write_bmp(&mut bytes, &sample_buffer(2, 2)).unwrap();
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(&bytes[6..10], &[0, 0, 0, 0]);
        assert_eq!(read_u32(&bytes, 10), 54);
        assert_eq!(read_u32(&bytes, 14), 40);
        assert_eq!(read_u16(&bytes, 26), 1);
        assert_eq!(read_u16(&bytes, 28), 24);
        assert_eq!(read_u32(&bytes, 30), 0);
        assert!(bytes[38..54].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_pixel_order_bgr_bottom_row_first() {
        let mut bytes = Vec::new();
        write_bmp(&mut bytes, &sample_buffer(1, 2)).unwrap();
        // Row y = 0: (r, g, b) = (0, 0, 200), stored as b, g, r plus one pad byte.
        assert_eq!(&bytes[54..58], &[200, 0, 0, 0]);
        // Row y = 1: (0, 1, 200).
        assert_eq!(&bytes[58..62], &[200, 1, 0, 0]);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let bytes = [0u8; 54];
        assert!(matches!(
            read_bmp_header(&mut Cursor::new(&bytes[..])),
            Err(RenderError::InvalidBitmap(_))
        ));
    }

    #[test]
    fn test_short_input_is_io_error() {
        let bytes = [b'B', b'M', 0, 0];
        assert!(matches!(
            read_bmp_header(&mut Cursor::new(&bytes[..])),
            Err(RenderError::Io(_))
        ));
    }
}
