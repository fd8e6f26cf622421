//! Length-prefixed framing shared by the row and table-metadata encodings.

use {
    byteorder::{ReadBytesExt, WriteBytesExt, BE},
    snafu::prelude::*,
    std::{
        io::{self, Cursor, Read},
        string::FromUtf8Error,
    },
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("truncated data"))]
    Truncated,

    #[snafu(display("invalid value tag {}", tag))]
    InvalidTag { tag: u8 },

    Io { source: io::Error },

    Utf8Encoding { source: FromUtf8Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Appends an 8-byte big-endian length followed by the chunk itself.
pub(crate) fn write_chunk(buf: &mut Vec<u8>, chunk: &[u8]) -> Result<()> {
    buf.write_u64::<BE>(chunk.len() as u64).context(IoSnafu)?;
    buf.extend_from_slice(chunk);
    Ok(())
}

pub(crate) fn read_chunk(cursor: &mut Cursor<&[u8]>) -> Result<Vec<u8>> {
    let len = cursor
        .read_u64::<BE>()
        .map_err(|_| TruncatedSnafu.build())? as usize;

    let mut chunk = vec![0u8; len];
    cursor
        .read_exact(&mut chunk)
        .map_err(|_| TruncatedSnafu.build())?;

    Ok(chunk)
}

pub(crate) fn has_remaining(cursor: &Cursor<&[u8]>) -> bool {
    (cursor.position() as usize) < cursor.get_ref().len()
}
