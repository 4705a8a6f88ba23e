use mdf_derive::mdf_error;

#[mdf_error]
pub enum ParseError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
