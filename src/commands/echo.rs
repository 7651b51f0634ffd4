//! echo: print the joined words.

pub fn echo(text: &str) -> Vec<u8> {
    format!("{}\n", text).into_bytes()
}
