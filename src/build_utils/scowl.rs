// A frequency line carries its counts first and the word last.
const FREQUENCY_MIN_TOKENS: usize = 5;

pub fn frequency_token(line: &str) -> Option<&str> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() >= FREQUENCY_MIN_TOKENS {
        tokens.last().copied()
    } else {
        None
    }
}

pub fn plain_token(line: &str) -> Option<&str> {
    let line = line.trim();
    (!line.is_empty()).then_some(line)
}
