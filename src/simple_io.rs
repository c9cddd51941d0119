use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub enum Error {
    UnexpectedEof { expected: &'static str },
    Malformed { expected: &'static str, token: String },
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            Error::Malformed { expected, token } => {
                write!(f, "malformed {}: {:?}", expected, token)
            }
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub struct InputAtOnce<'a> {
    iter: std::str::SplitAsciiWhitespace<'a>,
}

impl<'a> InputAtOnce<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self {
            iter: buf.split_ascii_whitespace(),
        }
    }

    pub fn token(&mut self) -> Option<&'a str> {
        self.iter.next()
    }

    pub fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, Error> {
        let token = self.token().ok_or(Error::UnexpectedEof { expected })?;
        token.parse().map_err(|_| Error::Malformed {
            expected,
            token: token.to_owned(),
        })
    }
}

// The buffer lives for the rest of the process.
pub fn stdin() -> Result<InputAtOnce<'static>, Error> {
    let buf = std::io::read_to_string(std::io::stdin())?;
    let buf: &'static str = Box::leak(buf.into_boxed_str());
    Ok(InputAtOnce::new(buf))
}

pub fn stdout() -> std::io::BufWriter<std::io::Stdout> {
    std::io::BufWriter::new(std::io::stdout())
}
