use {
    crate::codec::{self, InvalidTagSnafu, IoSnafu, TruncatedSnafu, Utf8EncodingSnafu},
    byteorder::{ReadBytesExt, WriteBytesExt, LE},
    snafu::prelude::*,
    std::{fmt, io::Cursor},
};

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_STRING: u8 = 2;
const TAG_INTEGER: u8 = 3;

/// A runtime SQL value. The wire encoding is one tag byte followed by the
/// variant payload; integers are 8-byte little-endian two's-complement.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    String(String),
    Integer(i64),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::String(s) => !s.is_empty(),
            Self::Integer(i) => *i != 0,
        }
    }

    /// Best-effort integer view: strings that fail to parse become 0.
    pub fn as_int(&self) -> i64 {
        match self {
            Self::Null => 0,
            Self::Bool(b) => i64::from(*b),
            Self::String(s) => s.parse().unwrap_or(0),
            Self::Integer(i) => *i,
        }
    }

    pub fn encode(&self) -> codec::Result<Vec<u8>> {
        let mut buf = Vec::new();

        match self {
            Self::Null => buf.push(TAG_NULL),
            Self::Bool(b) => {
                buf.push(TAG_BOOL);
                buf.push(u8::from(*b));
            }
            Self::String(s) => {
                buf.push(TAG_STRING);
                buf.extend_from_slice(s.as_bytes());
            }
            Self::Integer(i) => {
                buf.push(TAG_INTEGER);
                buf.write_i64::<LE>(*i).context(IoSnafu)?;
            }
        }

        Ok(buf)
    }

    pub fn decode(data: &[u8]) -> codec::Result<Self> {
        let (&tag, payload) = data.split_first().context(TruncatedSnafu)?;

        match tag {
            TAG_NULL => Ok(Self::Null),
            TAG_BOOL => {
                let &b = payload.first().context(TruncatedSnafu)?;
                Ok(Self::Bool(b == 1))
            }
            TAG_STRING => {
                let s = String::from_utf8(payload.to_vec()).context(Utf8EncodingSnafu)?;
                Ok(Self::String(s))
            }
            TAG_INTEGER => {
                let i = Cursor::new(payload)
                    .read_i64::<LE>()
                    .map_err(|_| TruncatedSnafu.build())?;
                Ok(Self::Integer(i))
            }
            tag => InvalidTagSnafu { tag }.fail(),
        }
    }
}

/// The canonical textual form: `true`/`false`, decimal digits, the raw
/// string, and nothing at all for null.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let values = [
            Value::Null,
            Value::Bool(true),
            Value::Bool(false),
            Value::String("test".to_string()),
            Value::Integer(12345),
            Value::Integer(-1),
        ];

        for value in values {
            let encoded = value.encode().unwrap();
            assert_eq!(Value::decode(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(Value::decode(&[]), Err(codec::Error::Truncated)));
        assert!(matches!(Value::decode(&[1]), Err(codec::Error::Truncated)));
        assert!(matches!(
            Value::decode(&[9, 0]),
            Err(codec::Error::InvalidTag { tag: 9 })
        ));
    }

    #[test]
    fn conversions() {
        assert!(!Value::Null.as_bool());
        assert!(Value::Integer(2).as_bool());
        assert!(!Value::Integer(0).as_bool());
        assert!(Value::String("x".to_string()).as_bool());
        assert!(!Value::String(String::new()).as_bool());

        assert_eq!(Value::Null.as_int(), 0);
        assert_eq!(Value::Bool(true).as_int(), 1);
        assert_eq!(Value::String("42".to_string()).as_int(), 42);
        assert_eq!(Value::String("nope".to_string()).as_int(), 0);

        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
    }
}
