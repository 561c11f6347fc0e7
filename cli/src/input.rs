use std::io::{self, Read};

use crate::error::Result;

/// Read all of stdin, dropping the single trailing newline shells append
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(strip_trailing_newline(buffer))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("rate limit\n".to_string()), "rate limit");
        assert_eq!(strip_trailing_newline("rate limit\r\n".to_string()), "rate limit");
        assert_eq!(strip_trailing_newline("two\n\n".to_string()), "two\n");
        assert_eq!(strip_trailing_newline("  padded  ".to_string()), "  padded  ");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }
}
