pub const VOWELS: [u8; 5] = *b"aeiou";

/// Spreads `n` over the five vowel slots: every slot gets `n / 5`, and the
/// first `n % 5` slots (starting from 'a') get one more.
pub fn distribute(n: usize) -> [usize; 5] {
    let (base, extra) = (n / 5, n % 5);
    let mut counts = [base; 5];
    for c in &mut counts[..extra] {
        *c += 1;
    }
    counts
}

pub fn render_into(counts: &[usize; 5], buf: &mut Vec<u8>) {
    buf.reserve(counts.iter().sum());
    for (&v, &c) in VOWELS.iter().zip(counts) {
        buf.extend(std::iter::repeat(v).take(c));
    }
}

pub fn render(counts: &[usize; 5]) -> String {
    let mut buf = vec![];
    render_into(counts, &mut buf);
    // ascii only
    String::from_utf8(buf).unwrap_or_default()
}
