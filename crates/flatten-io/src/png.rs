//! PNG reading and writing.
//!
//! Decoding accepts every PNG color type and bit depth: palettes and tRNS
//! chunks are expanded, 16-bit samples are stripped to 8 bits, and gray or
//! RGB data is widened to RGBA. Encoding always writes 8-bit RGBA.
//!
//! # Example
//!
//! ```rust,ignore
//! use flatten_io::png;
//!
//! let image = png::read("input.png")?;
//! png::save("output.png", &image)?;
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use flatten_core::ImageU8;
use tracing::debug;

use crate::{IoError, IoResult};

/// The eight bytes every PNG file starts with.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Reads a PNG file as 8-bit RGBA.
///
/// # Errors
///
/// - [`IoError::Open`] if the file cannot be opened
/// - [`IoError::NotPng`] if it lacks the PNG signature
/// - [`IoError::Decode`] if the stream is corrupt
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageU8> {
    let path = path.as_ref();
    let open_err = |source| IoError::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(open_err)?);

    let mut sig = [0u8; 8];
    if reader.read_exact(&mut sig).is_err() || sig != SIGNATURE {
        return Err(IoError::NotPng {
            path: path.to_path_buf(),
        });
    }
    reader.rewind().map_err(open_err)?;

    let image = decode(reader, path)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "png decoded"
    );
    Ok(image)
}

/// Decodes a PNG stream; `path` is only used in error messages.
pub fn decode<R: BufRead + Seek>(reader: R, path: &Path) -> IoResult<ImageU8> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::decode(path, e))?;
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::decode(path, "cannot determine output buffer size"))?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(buf_size)
        .map_err(|e| flatten_core::Error::allocation_failed(buf_size, e.to_string()))?;
    buf.resize(buf_size, 0u8);

    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::decode(path, e))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::decode(
            path,
            format!("unexpected bit depth {:?} after expansion", info.bit_depth),
        ));
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 0xff])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 0xff]).collect(),
        png::ColorType::Indexed => {
            return Err(IoError::decode(path, "palette was not expanded"));
        }
    };

    Ok(ImageU8::from_raw(info.width, info.height, rgba)?)
}

/// Encodes `image` as 8-bit RGBA, non-interlaced, default compression.
pub fn write<W: Write>(writer: W, image: &ImageU8) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(e.to_string()))?;
    png_writer
        .write_image_data(image.data())
        .map_err(|e| IoError::Encode(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(())
}

/// Writes `image` to a new file at `path`.
pub fn save<P: AsRef<Path>>(path: P, image: &ImageU8) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write(&mut out, image)?;
    out.flush()
        .map_err(|e| IoError::Encode(format!("{}: {e}", path.display())))
}
