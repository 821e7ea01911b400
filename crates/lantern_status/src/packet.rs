//! Reading the status response packet body.
//!
//! A status response packet carries a single string: a [`VarInt`] byte length
//! followed by that many bytes of UTF-8 JSON. The packet length prefix and
//! packet ID come before the body and are left to the transport.

use std::io::{Read, Write};

use byteorder::ReadBytesExt;
use thiserror::Error;

use crate::{decode, DecodeError, StatusResponse};

/// The maximum number of characters in the JSON of a status response.
pub const MAX_STATUS_JSON_CHARS: usize = 32767;

/// The maximum number of bytes [`MAX_STATUS_JSON_CHARS`] characters take up.
const MAX_STATUS_JSON_BYTES: usize = MAX_STATUS_JSON_CHARS * 4;

/// The body of the clientbound status response packet.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StatusResponsePacket<'a> {
    pub json: &'a str,
}

#[derive(Debug, Error)]
pub enum PacketError {
    #[error("malformed string length: {0}")]
    VarInt(#[from] VarIntDecodeError),
    #[error("status JSON length of {0} bytes is out of bounds")]
    Length(i32),
    #[error("not enough data remaining to read a string of {expected} bytes (got {remaining})")]
    Truncated { expected: usize, remaining: usize },
    #[error("status JSON is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error(
        "char count of status JSON exceeds maximum (expected <= {max}, got {0})",
        max = MAX_STATUS_JSON_CHARS
    )]
    TooManyChars(usize),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl<'a> StatusResponsePacket<'a> {
    /// The packet ID in the status state.
    pub const ID: i32 = 0x00;

    /// Reads the packet body from the front of `r`, shrinking it. `r` is left
    /// untouched on error.
    pub fn read(r: &mut &'a [u8]) -> Result<Self, PacketError> {
        let mut rest = *r;

        let len = VarInt::decode_partial(&mut rest)?;
        if len < 0 || len as usize > MAX_STATUS_JSON_BYTES {
            return Err(PacketError::Length(len));
        }

        let len = len as usize;
        if len > rest.len() {
            return Err(PacketError::Truncated {
                expected: len,
                remaining: rest.len(),
            });
        }

        let (json, remaining) = rest.split_at(len);
        let json = std::str::from_utf8(json)?;

        let char_count = json.chars().count();
        if char_count > MAX_STATUS_JSON_CHARS {
            return Err(PacketError::TooManyChars(char_count));
        }

        *r = remaining;

        Ok(Self { json })
    }

    /// Reads the packet body and decodes the status response it carries.
    pub fn decode_body(r: &mut &'a [u8]) -> Result<StatusResponse, PacketError> {
        Ok(Self::read(r)?.decode()?)
    }

    pub fn decode(&self) -> Result<StatusResponse, DecodeError> {
        decode(self.json)
    }

    /// Writes the packet body to `w`.
    pub fn write<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        VarInt(self.json.len() as i32).encode(&mut w)?;
        w.write_all(self.json.as_bytes())
    }
}

/// An `i32` encoded with variable length.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct VarInt(pub i32);

#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum VarIntDecodeError {
    #[error("incomplete VarInt decode")]
    Incomplete,
    #[error("VarInt is too large")]
    TooLarge,
}

impl VarInt {
    /// The maximum number of bytes a `VarInt` can occupy.
    pub const MAX_SIZE: usize = 5;

    /// The number of bytes [`VarInt::encode`] writes.
    pub fn written_size(self) -> usize {
        match self.0 {
            0 => 1,
            n => (31 - n.leading_zeros() as usize) / 7 + 1,
        }
    }

    pub fn decode_partial<R: Read>(mut r: R) -> Result<i32, VarIntDecodeError> {
        let mut val = 0;
        for i in 0..Self::MAX_SIZE {
            let byte = r.read_u8().map_err(|_| VarIntDecodeError::Incomplete)?;
            val |= (i32::from(byte) & 0b0111_1111) << (i * 7);
            if byte & 0b1000_0000 == 0 {
                return Ok(val);
            }
        }

        Err(VarIntDecodeError::TooLarge)
    }

    pub fn encode<W: Write>(self, mut w: W) -> std::io::Result<()> {
        let mut val = self.0 as u32;
        loop {
            let byte = (val & 0b0111_1111) as u8;
            val >>= 7;
            if val == 0 {
                return w.write_all(&[byte]);
            }
            w.write_all(&[byte | 0b1000_0000])?;
        }
    }
}
