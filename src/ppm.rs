//! Getting the finished pixels onto disk.
//!
//! The native format is binary PPM: a short ASCII header followed by
//! raw RGB triples, row-major, with nothing after the last pixel.  It
//! is written by hand because the header must be byte-exact:
//! `P6\n<width> <height>\n255\n`.  Any other extension is handed to the `image`
//! crate.

use image;
use image::ColorType;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use error::RenderError;
use planes::rgb_len;

/// The P6 header for an image of the given size.
pub fn header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n255\n", width, height)
}

/// Length in bytes of the P6 header.
pub fn header_len(width: usize, height: usize) -> usize {
    header(width, height).len()
}

/// Length in bytes of a complete P6 file.
pub fn file_len(width: usize, height: usize) -> usize {
    header_len(width, height) + width * height * 3
}

/// Write the P6 header.
pub fn write_header<W: Write>(out: &mut W, width: usize, height: usize) -> io::Result<()> {
    out.write_all(header(width, height).as_bytes())
}

/// Write a complete P6 image to `out`.
pub fn encode<W: Write>(out: &mut W, width: usize, height: usize, pixels: &[u8]) -> io::Result<()> {
    if rgb_len(width, height) != Some(pixels.len()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} bytes do not make a {}x{} RGB image",
                pixels.len(),
                width,
                height
            ),
        ));
    }
    write_header(out, width, height)?;
    out.write_all(pixels)
}

/// Open `path` for writing, buffered.
pub fn create<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Write a complete P6 file in one go.
pub fn write_ppm<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    pixels: &[u8],
) -> Result<(), RenderError> {
    let mut output = create(path)?;
    encode(&mut output, width, height, pixels)?;
    output.flush()?;
    Ok(())
}

/// True when `path` should be written as PPM: a `.ppm` extension, or
/// none at all.
pub fn is_ppm<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().extension().and_then(|e| e.to_str()) {
        None => true,
        Some(ext) => ext.eq_ignore_ascii_case("ppm"),
    }
}

/// Save an RGB buffer, choosing the format from the file extension.
pub fn save<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    pixels: &[u8],
) -> Result<(), RenderError> {
    if is_ppm(&path) {
        return write_ppm(path, width, height, pixels);
    }
    let limit = u32::max_value() as u64;
    if width as u64 > limit || height as u64 > limit {
        return Err(RenderError::TooLarge(width, height));
    }
    image::save_buffer(
        path,
        pixels,
        width as u32,
        height as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}
