pub fn synonym_tokens(line: &str) -> Vec<&str> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        vec![line]
    }
}
