use bincode::{Decode, Encode, config, decode_from_slice, encode_into_std_write};
use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use glam::Vec2;

use super::LevelError;
use crate::world::{Level, Rgb, Wall};

/// File magic of the binary format.
pub const MAGIC: &[u8; 4] = b"WALL";

/// Bytes per wall record (3 colour bytes + 4 × f32).
pub const RECORD_SIZE: usize = 3 + 4 * 4;

/// On-disk wall record.
#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode)]
struct RawWall {
    rgb: [u8; 3],
    a: [f32; 2],
    b: [f32; 2],
}

impl From<RawWall> for Wall {
    fn from(r: RawWall) -> Self {
        Wall::new(
            Rgb::new(r.rgb[0], r.rgb[1], r.rgb[2]),
            Vec2::from_array(r.a),
            Vec2::from_array(r.b),
        )
    }
}

impl From<&Wall> for RawWall {
    fn from(w: &Wall) -> Self {
        RawWall {
            rgb: [w.color.r, w.color.g, w.color.b],
            a: w.a.to_array(),
            b: w.b.to_array(),
        }
    }
}

/// Decode a binary level held entirely in memory.
pub fn decode_binary(name: impl Into<String>, bytes: &[u8]) -> Result<Level, LevelError> {
    /*----------- 1. header ------------------------------------------*/
    if !bytes.starts_with(MAGIC) {
        return Err(LevelError::BadMagic);
    }
    let mut cursor = &bytes[MAGIC.len()..];
    let count = cursor.read_u32::<LE>().map_err(|_| LevelError::Truncated {
        count: 0,
        available: cursor.len(),
    })?;

    /*----------- 2. bounds ------------------------------------------*/
    if cursor.len() < count as usize * RECORD_SIZE {
        return Err(LevelError::Truncated {
            count,
            available: cursor.len(),
        });
    }

    /*----------- 3. records -----------------------------------------*/
    let mut walls = Vec::with_capacity(count as usize);
    for index in 0..count as usize {
        let (raw, used): (RawWall, usize) = decode_from_slice(cursor, config::legacy())
            .map_err(|source| LevelError::BadRecord { index, source })?;
        cursor = &cursor[used..];
        if !raw.a.iter().chain(&raw.b).all(|v| v.is_finite()) {
            return Err(LevelError::NonFinite { index });
        }
        walls.push(Wall::from(raw));
    }

    Ok(Level::new(name, walls))
}

/// Serialise `level` into the binary format.
pub fn encode_binary(level: &Level) -> Result<Vec<u8>, LevelError> {
    let mut out = Vec::with_capacity(MAGIC.len() + 4 + level.len() * RECORD_SIZE);
    out.extend_from_slice(MAGIC);
    out.write_u32::<LE>(level.len() as u32)?;
    for w in level.walls() {
        encode_into_std_write(RawWall::from(w), &mut out, config::legacy())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_layout_is_fixed() {
        let lvl = Level::new(
            "t",
            [Wall::new(
                Rgb::new(1, 2, 3),
                Vec2::new(1.0, -2.0),
                Vec2::new(0.5, 4.0),
            )],
        );
        let bytes = encode_binary(&lvl).unwrap();
        assert_eq!(bytes.len(), 8 + RECORD_SIZE);
        assert_eq!(&bytes[..4], MAGIC);
        assert_eq!(&bytes[4..8], &1u32.to_le_bytes());
        assert_eq!(&bytes[8..11], &[1, 2, 3]);
        assert_eq!(&bytes[11..15], &1.0f32.to_le_bytes());
        assert_eq!(decode_binary("t", &bytes).unwrap().walls(), lvl.walls());
    }

    #[test]
    fn demo_level_survives_encoding() {
        let demo = Level::demo();
        let back = decode_binary("demo", &encode_binary(&demo).unwrap()).unwrap();
        assert_eq!(back.walls(), demo.walls());
    }

    #[test]
    fn bad_magic() {
        let err = decode_binary("t", b"IWAD\0\0\0\0").unwrap_err();
        assert!(matches!(err, LevelError::BadMagic));
    }

    #[test]
    fn truncated_records() {
        let mut bytes = encode_binary(&Level::demo()).unwrap();
        bytes.truncate(bytes.len() - 1);
        let err = decode_binary("t", &bytes).unwrap_err();
        assert!(matches!(err, LevelError::Truncated { count: 6, .. }));

        let err = decode_binary("t", b"WALL\x01").unwrap_err();
        assert!(matches!(err, LevelError::Truncated { .. }));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut bytes = encode_binary(&Level::demo()).unwrap();
        // second record, x of its `b` end point
        let at = 8 + RECORD_SIZE + 3 + 2 * 4;
        bytes[at..at + 4].copy_from_slice(&f32::NAN.to_le_bytes());
        let err = decode_binary("t", &bytes).unwrap_err();
        assert!(matches!(err, LevelError::NonFinite { index: 1 }));

        bytes[at..at + 4].copy_from_slice(&f32::INFINITY.to_le_bytes());
        assert!(matches!(
            decode_binary("t", &bytes),
            Err(LevelError::NonFinite { index: 1 })
        ));
    }
}
