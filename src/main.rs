use std::io::Write;

use vowel_spread::simple_io;

fn main() {
    let res = simple_io::stdin().and_then(|mut input| {
        let mut output = simple_io::stdout();
        let res = vowel_spread::solve(&mut input, &mut output);
        output.flush()?;
        res
    });

    if let Err(e) = res {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
