//! container readers for WAV and AIFF input
//!
//! Both readers produce mono float [`SourceAudio`]: integer samples are
//! scaled by their full-scale magnitude (8-bit input is unsigned with a 128
//! offset), multi-channel frames are downmixed by arithmetic mean.

use crate::core::{
    i16_to_f32, i24_to_f32, i32_to_f32, u8_to_f32, SourceAudio,
};
use crate::error::{PackError, PackResult};
use std::path::Path;

/// Sample widths accepted by both container readers, in bits.
pub const SUPPORTED_WIDTHS: [u16; 4] = [8, 16, 24, 32];

/// Read and parse a WAV file from disk.
pub fn read_wav_file(path: &Path) -> PackResult<SourceAudio> {
    let bytes = std::fs::read(path)?;
    read_wav(&bytes)
}

/// Read and parse an AIFF file from disk.
pub fn read_aiff_file(path: &Path) -> PackResult<SourceAudio> {
    let bytes = std::fs::read(path)?;
    read_aiff(&bytes)
}

/// Parse a RIFF/WAVE file into mono float samples.
///
/// Handles PCM (format 1) at 8/16/24/32 bits and IEEE float (format 3)
/// at 32 bits, little-endian throughout.
pub fn read_wav(data: &[u8]) -> PackResult<SourceAudio> {
    let mut cursor = Cursor::new(data);

    if cursor.take(4)? != b"RIFF" {
        return Err(PackError::decode("not a RIFF file"));
    }
    cursor.skip(4); // riff size, unreliable in the wild
    if cursor.take(4)? != b"WAVE" {
        return Err(PackError::decode("RIFF file is not WAVE"));
    }

    let mut fmt: Option<WavFmt> = None;
    let mut payload: Option<&[u8]> = None;

    // chunk walk; chunks are word-aligned
    while cursor.remaining() >= 8 {
        let id: [u8; 4] = cursor.take(4)?.try_into().unwrap();
        let size = cursor.read_u32_le()? as usize;
        match &id {
            b"fmt " => {
                let chunk = cursor.take(size)?;
                fmt = Some(WavFmt::parse(chunk)?);
            }
            b"data" => {
                payload = Some(cursor.take(size)?);
            }
            _ => cursor.skip(size),
        }
        if size % 2 == 1 {
            cursor.skip(1);
        }
    }

    let fmt = fmt.ok_or_else(|| PackError::decode("missing fmt chunk"))?;
    let payload = payload.ok_or_else(|| PackError::decode("missing data chunk"))?;

    let width_bytes = fmt.bits_per_sample as usize / 8;
    let frame_bytes = width_bytes * fmt.channels as usize;
    if payload.len() % frame_bytes != 0 {
        return Err(PackError::decode(format!(
            "data chunk length {} is not a multiple of the {}-byte frame",
            payload.len(),
            frame_bytes
        )));
    }

    let interleaved = if fmt.audio_format == WAVE_FORMAT_IEEE_FLOAT {
        decode_f32_le(payload)
    } else {
        decode_pcm(payload, width_bytes, ByteOrder::Little)
    };

    let mono = downmix(&interleaved, fmt.channels as usize)?;
    SourceAudio::new(mono, fmt.sample_rate)
}

/// Parse an AIFF (or uncompressed AIFF-C) file into mono float samples.
///
/// Integer PCM at 8/16/24/32 bits, big-endian. The sample rate comes from
/// the COMM chunk's 80-bit extended float.
pub fn read_aiff(data: &[u8]) -> PackResult<SourceAudio> {
    let mut cursor = Cursor::new(data);

    if cursor.take(4)? != b"FORM" {
        return Err(PackError::decode("not a FORM file"));
    }
    cursor.skip(4);
    let form_type: [u8; 4] = cursor.take(4)?.try_into().unwrap();
    let is_aifc = match &form_type {
        b"AIFF" => false,
        b"AIFC" => true,
        _ => return Err(PackError::decode("FORM file is not AIFF")),
    };

    let mut comm: Option<AiffComm> = None;
    let mut payload: Option<&[u8]> = None;

    while cursor.remaining() >= 8 {
        let id: [u8; 4] = cursor.take(4)?.try_into().unwrap();
        let size = cursor.read_u32_be()? as usize;
        match &id {
            b"COMM" => {
                let chunk = cursor.take(size)?;
                comm = Some(AiffComm::parse(chunk, is_aifc)?);
            }
            b"SSND" => {
                let chunk = cursor.take(size)?;
                if chunk.len() < 8 {
                    return Err(PackError::decode("SSND chunk too short"));
                }
                let offset = u32::from_be_bytes(chunk[0..4].try_into().unwrap()) as usize;
                // bytes 4..8 are the block size, unused for unblocked data
                if 8 + offset > chunk.len() {
                    return Err(PackError::decode("SSND offset past end of chunk"));
                }
                payload = Some(&chunk[8 + offset..]);
            }
            _ => cursor.skip(size),
        }
        if size % 2 == 1 {
            cursor.skip(1);
        }
    }

    let comm = comm.ok_or_else(|| PackError::decode("missing COMM chunk"))?;
    let payload = payload.ok_or_else(|| PackError::decode("missing SSND chunk"))?;

    let width_bytes = comm.sample_size as usize / 8;
    let needed = comm.num_frames as usize * comm.channels as usize * width_bytes;
    if payload.len() < needed {
        return Err(PackError::decode(format!(
            "SSND holds {} bytes but COMM declares {} frames ({} bytes)",
            payload.len(),
            comm.num_frames,
            needed
        )));
    }

    let interleaved = decode_pcm(&payload[..needed], width_bytes, ByteOrder::Big);
    let mono = downmix(&interleaved, comm.channels as usize)?;
    SourceAudio::new(mono, comm.sample_rate)
}

/// Downmix interleaved samples to mono by arithmetic mean across channels.
///
/// A trailing partial frame is dropped. Also used by decoders that hand
/// back interleaved output (the symphonia path in the converter).
pub fn downmix(samples: &[f32], channels: usize) -> PackResult<Vec<f32>> {
    if channels == 0 {
        return Err(PackError::decode("channel count is zero"));
    }
    if channels == 1 {
        return Ok(samples.to_vec());
    }
    let scale = 1.0 / channels as f32;
    Ok(samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect())
}

// wav fmt chunk

const WAVE_FORMAT_PCM: u16 = 1;
const WAVE_FORMAT_IEEE_FLOAT: u16 = 3;

struct WavFmt {
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl WavFmt {
    fn parse(chunk: &[u8]) -> PackResult<Self> {
        let mut cursor = Cursor::new(chunk);
        let audio_format = cursor.read_u16_le()?;
        let channels = cursor.read_u16_le()?;
        let sample_rate = cursor.read_u32_le()?;
        cursor.skip(6); // byte rate + block align
        let bits_per_sample = cursor.read_u16_le()?;

        match audio_format {
            WAVE_FORMAT_PCM => {
                if !SUPPORTED_WIDTHS.contains(&bits_per_sample) {
                    return Err(PackError::decode(format!(
                        "unsupported WAV sample width: {} bits",
                        bits_per_sample
                    )));
                }
            }
            WAVE_FORMAT_IEEE_FLOAT => {
                if bits_per_sample != 32 {
                    return Err(PackError::decode(format!(
                        "unsupported float WAV sample width: {} bits",
                        bits_per_sample
                    )));
                }
            }
            other => {
                return Err(PackError::decode(format!(
                    "unsupported WAV format code: {}",
                    other
                )));
            }
        }
        if channels == 0 {
            return Err(PackError::decode("WAV declares zero channels"));
        }
        if sample_rate == 0 {
            return Err(PackError::decode("WAV declares zero sample rate"));
        }

        Ok(WavFmt {
            audio_format,
            channels,
            sample_rate,
            bits_per_sample,
        })
    }
}

// aiff comm chunk

struct AiffComm {
    channels: u16,
    num_frames: u32,
    sample_size: u16,
    sample_rate: u32,
}

impl AiffComm {
    fn parse(chunk: &[u8], is_aifc: bool) -> PackResult<Self> {
        let mut cursor = Cursor::new(chunk);
        let channels = cursor.read_u16_be()?;
        let num_frames = cursor.read_u32_be()?;
        let sample_size = cursor.read_u16_be()?;
        let rate_bytes: [u8; 10] = cursor.take(10)?.try_into().unwrap();
        let sample_rate = extended_to_rate(rate_bytes)?;

        if is_aifc {
            let compression: [u8; 4] = cursor.take(4)?.try_into().unwrap();
            if &compression != b"NONE" {
                return Err(PackError::decode(format!(
                    "unsupported AIFF-C compression: {}",
                    String::from_utf8_lossy(&compression)
                )));
            }
        }

        if !SUPPORTED_WIDTHS.contains(&sample_size) {
            return Err(PackError::decode(format!(
                "unsupported AIFF sample width: {} bits",
                sample_size
            )));
        }
        if channels == 0 {
            return Err(PackError::decode("AIFF declares zero channels"));
        }

        Ok(AiffComm {
            channels,
            num_frames,
            sample_size,
            sample_rate,
        })
    }
}

/// Convert the COMM chunk's 80-bit extended float to an integer rate.
fn extended_to_rate(bytes: [u8; 10]) -> PackResult<u32> {
    let sign_exp = u16::from_be_bytes([bytes[0], bytes[1]]);
    let exponent = (sign_exp & 0x7fff) as i32;
    let mantissa = u64::from_be_bytes(bytes[2..10].try_into().unwrap());

    if sign_exp & 0x8000 != 0 {
        return Err(PackError::decode("negative AIFF sample rate"));
    }
    if exponent == 0 && mantissa == 0 {
        return Err(PackError::decode("AIFF declares zero sample rate"));
    }
    if exponent == 0x7fff {
        return Err(PackError::decode("non-finite AIFF sample rate"));
    }

    // value = mantissa * 2^(exponent - 16383 - 63)
    let value = mantissa as f64 * ((exponent - 16383 - 63) as f64).exp2();
    if !(1.0..=u32::MAX as f64).contains(&value) {
        return Err(PackError::decode(format!(
            "AIFF sample rate out of range: {}",
            value
        )));
    }
    Ok(value.round() as u32)
}

// sample decoding

enum ByteOrder {
    Little,
    Big,
}

fn decode_pcm(payload: &[u8], width_bytes: usize, order: ByteOrder) -> Vec<f32> {
    match (width_bytes, order) {
        (1, _) => payload.iter().map(|&b| u8_to_f32(b)).collect(),
        (2, ByteOrder::Little) => payload
            .chunks_exact(2)
            .map(|b| i16_to_f32(i16::from_le_bytes([b[0], b[1]])))
            .collect(),
        (2, ByteOrder::Big) => payload
            .chunks_exact(2)
            .map(|b| i16_to_f32(i16::from_be_bytes([b[0], b[1]])))
            .collect(),
        (3, ByteOrder::Little) => payload
            .chunks_exact(3)
            .map(|b| i24_to_f32(sign_extend_24(b[0] as i32 | (b[1] as i32) << 8 | (b[2] as i32) << 16)))
            .collect(),
        (3, ByteOrder::Big) => payload
            .chunks_exact(3)
            .map(|b| i24_to_f32(sign_extend_24((b[0] as i32) << 16 | (b[1] as i32) << 8 | b[2] as i32)))
            .collect(),
        (4, ByteOrder::Little) => payload
            .chunks_exact(4)
            .map(|b| i32_to_f32(i32::from_le_bytes([b[0], b[1], b[2], b[3]])))
            .collect(),
        (4, ByteOrder::Big) => payload
            .chunks_exact(4)
            .map(|b| i32_to_f32(i32::from_be_bytes([b[0], b[1], b[2], b[3]])))
            .collect(),
        _ => unreachable!("widths are validated at chunk parse"),
    }
}

/// Sign-extend a 24-bit value held in the low bits of an i32 (bit 23 is the sign).
#[inline]
fn sign_extend_24(value: i32) -> i32 {
    if value & 0x0080_0000 != 0 {
        value - (1 << 24)
    } else {
        value
    }
}

fn decode_f32_le(payload: &[u8]) -> Vec<f32> {
    payload
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

// cursor helper

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, count: usize) -> PackResult<&'a [u8]> {
        if self.pos + count > self.data.len() {
            return Err(PackError::decode("unexpected end of file"));
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    fn skip(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.data.len());
    }

    fn read_u16_le(&mut self) -> PackResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u16_be(&mut self) -> PackResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32_le(&mut self) -> PackResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u32_be(&mut self) -> PackResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
