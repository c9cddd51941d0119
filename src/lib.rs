pub mod simple_io;
pub mod vowels;

use std::io::Write;

use simple_io::{Error, InputAtOnce};

/// Reads the test case count, then answers one line per `n`.
/// Lines for cases read before a failure have already been written to `output`.
pub fn solve<W: Write>(input: &mut InputAtOnce, output: &mut W) -> Result<(), Error> {
    let t: usize = input.value("test case count")?;

    let mut line = vec![];
    for i in 0..t {
        let n: usize = input.value("n")?;
        let counts = vowels::distribute(n);
        if cfg!(debug_assertions) {
            eprintln!("case #{}: n={} counts={:?}", i + 1, n, counts);
        }

        line.clear();
        vowels::render_into(&counts, &mut line);
        line.push(b'\n');
        output.write_all(&line)?;
    }
    Ok(())
}
