use mdf_derive::mdf_error;

#[mdf_error]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
