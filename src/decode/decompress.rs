//! Stage 1 of the pipeline: reversing the storage compression.
//!
//! Each algorithm accepts the framing its writers actually produce.
//! Snappy payloads are raw blocks with a framed fallback; LZ4 payloads
//! are frames with a size-prepended-block fallback (older writers used
//! block mode). A zero-length payload is a valid empty result for every
//! algorithm.

use std::{
    borrow::Cow,
    io::{self, Read},
};

use flate2::read::GzDecoder;

use crate::{error::DecodeError, format::Compression};

/// Decompresses `payload` according to `algorithm`.
///
/// Uncompressed payloads are passed through without copying. A corrupt
/// stream yields [`DecodeError::Decompression`]; the pipeline then falls
/// back to treating the payload as already-decompressed bytes.
pub fn decompress(algorithm: Compression, payload: &[u8]) -> Result<Cow<'_, [u8]>, DecodeError> {
    if payload.is_empty() {
        return Ok(Cow::Borrowed(payload));
    }

    let inflated = match algorithm {
        Compression::None => return Ok(Cow::Borrowed(payload)),
        Compression::Gzip => gzip(payload),
        Compression::Snappy => snappy(payload),
        Compression::Lz4 => lz4(payload),
    };

    inflated
        .map(Cow::Owned)
        .map_err(|err| DecodeError::Decompression {
            algorithm,
            reason: err.to_string(),
        })
}

fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

fn snappy(data: &[u8]) -> io::Result<Vec<u8>> {
    match snap::raw::Decoder::new().decompress_vec(data) {
        Ok(out) => Ok(out),
        Err(raw_err) => {
            let mut out = Vec::new();
            match snap::read::FrameDecoder::new(data).read_to_end(&mut out) {
                Ok(_) => Ok(out),
                // The raw error names the real problem for block writers.
                Err(_) => Err(io::Error::new(io::ErrorKind::InvalidData, raw_err)),
            }
        }
    }
}

fn lz4(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match lz4_flex::frame::FrameDecoder::new(data).read_to_end(&mut out) {
        Ok(_) => Ok(out),
        Err(frame_err) if block_size_is_plausible(data) => {
            lz4_flex::block::decompress_size_prepended(data)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, frame_err))
        }
        Err(frame_err) => Err(frame_err),
    }
}

/// The block fallback trusts a size header from the payload; a corrupt
/// header must not turn into a multi-gigabyte allocation. LZ4 cannot
/// expand beyond 255x, so anything past that is garbage.
fn block_size_is_plausible(data: &[u8]) -> bool {
    match data.first_chunk::<4>() {
        Some(prefix) => {
            let declared = u32::from_le_bytes(*prefix) as usize;
            declared <= data.len().saturating_mul(255)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression as GzLevel};

    use super::*;

    #[test]
    fn none_is_borrowed_passthrough() {
        let payload = b"plain bytes";
        let out = decompress(Compression::None, payload).expect("passthrough");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_ref(), payload);
    }

    #[test]
    fn empty_payload_is_valid_for_every_algorithm() {
        for algorithm in [
            Compression::None,
            Compression::Gzip,
            Compression::Snappy,
            Compression::Lz4,
        ] {
            let out = decompress(algorithm, &[]).expect("empty payload");
            assert!(out.is_empty());
        }
    }

    #[test]
    fn gzip_roundtrip() {
        let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
        encoder.write_all(b"hello gzip").expect("write");
        let compressed = encoder.finish().expect("finish");

        let out = decompress(Compression::Gzip, &compressed).expect("inflate");
        assert_eq!(out.as_ref(), b"hello gzip");
    }

    #[test]
    fn corrupt_gzip_reports_decompression_error() {
        let err = decompress(Compression::Gzip, b"not gzip at all").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Decompression {
                algorithm: Compression::Gzip,
                ..
            }
        ));
    }

    #[test]
    fn snappy_raw_block_roundtrip() {
        let compressed = snap::raw::Encoder::new()
            .compress_vec(b"hello snappy")
            .expect("compress");
        let out = decompress(Compression::Snappy, &compressed).expect("inflate");
        assert_eq!(out.as_ref(), b"hello snappy");
    }

    #[test]
    fn snappy_framed_fallback() {
        let mut encoder = snap::write::FrameEncoder::new(Vec::new());
        encoder.write_all(b"framed snappy").expect("write");
        let compressed = encoder.into_inner().expect("finish");

        let out = decompress(Compression::Snappy, &compressed).expect("inflate");
        assert_eq!(out.as_ref(), b"framed snappy");
    }

    #[test]
    fn lz4_frame_roundtrip() {
        let mut encoder = lz4_flex::frame::FrameEncoder::new(Vec::new());
        encoder.write_all(b"hello lz4").expect("write");
        let compressed = encoder.finish().expect("finish");

        let out = decompress(Compression::Lz4, &compressed).expect("inflate");
        assert_eq!(out.as_ref(), b"hello lz4");
    }

    #[test]
    fn lz4_size_prepended_block_fallback() {
        let compressed = lz4_flex::block::compress_prepend_size(b"block lz4");
        let out = decompress(Compression::Lz4, &compressed).expect("inflate");
        assert_eq!(out.as_ref(), b"block lz4");
    }

    #[test]
    fn corrupt_lz4_reports_decompression_error() {
        let err = decompress(Compression::Lz4, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap_err();
        assert!(matches!(err, DecodeError::Decompression { .. }));
    }
}
