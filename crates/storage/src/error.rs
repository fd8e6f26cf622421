use {def::codec, snafu::prelude::*, std::io};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("no table '{}'", name))]
    UnknownTable { name: String },

    #[snafu(display("corrupt record"))]
    Codec { source: codec::Error },

    Io { source: io::Error },
}
