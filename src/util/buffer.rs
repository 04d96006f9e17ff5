//! Binary form of the value types: raw little-endian `f32` fields in declared order, with no
//! header and no length prefix.
use crate::core::prelude::*;

use bincode::config::{Configuration, standard};

fn config() -> Configuration {
    standard()
}

/// Implemented for every value type. The default methods are the whole implementation.
///
/// # Examples
/// ```
/// use gg_affine::core::prelude::*;
///
/// let v = Vector2::new(1.0, -2.0);
/// let bytes = v.to_bytes().unwrap();
/// assert_eq!(bytes.len(), 8);
/// assert_eq!(Vector2::from_bytes(&bytes).unwrap(), v);
/// ```
pub trait BinaryFormat: bincode::Encode + bincode::Decode<()> {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::encode_to_vec(self, config())?)
    }

    /// Appends the encoded value to `buffer`.
    fn write_bytes(&self, buffer: &mut Vec<u8>) -> Result<()> {
        bincode::encode_into_std_write(self, buffer, config())?;
        Ok(())
    }

    /// Decodes a value that must span all of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (value, read) = bincode::decode_from_slice(bytes, config())?;
        if read != bytes.len() {
            bail!(
                "{} trailing bytes after decoding {}",
                bytes.len() - read,
                std::any::type_name::<Self>()
            );
        }
        Ok(value)
    }

    /// Decodes a value from the front of `bytes` and advances past it.
    fn read_bytes(bytes: &mut &[u8]) -> Result<Self> {
        let rest: &[u8] = *bytes;
        let (value, read) = bincode::decode_from_slice(rest, config())
            .with_context(|| format!("reading {}", std::any::type_name::<Self>()))?;
        *bytes = &rest[read..];
        Ok(value)
    }
}
