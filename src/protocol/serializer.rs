//! Command serializer
//!
//! Renders a command and its arguments as a RESP array of bulk strings, the
//! form every Redis server accepts for requests.

use std::io::{self, Write};
use super::args::Arg;

/// Serialize a command to a writer
pub fn write_command<W: Write>(command: &str, args: &[Arg], writer: &mut W) -> io::Result<()> {
    writer.write_all(b"*")?;
    writer.write_all((args.len() + 1).to_string().as_bytes())?;
    writer.write_all(b"\r\n")?;

    write_bulk(command.as_bytes(), writer)?;
    for arg in args {
        write_bulk(&arg.to_bytes(), writer)?;
    }

    Ok(())
}

/// Serialize a command to a byte vector
pub fn encode_command(command: &str, args: &[Arg]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + command.len());
    // Writing into a Vec cannot fail
    let _ = write_command(command, args, &mut buf);
    buf
}

fn write_bulk<W: Write>(bytes: &[u8], writer: &mut W) -> io::Result<()> {
    writer.write_all(b"$")?;
    writer.write_all(bytes.len().to_string().as_bytes())?;
    writer.write_all(b"\r\n")?;
    writer.write_all(bytes)?;
    writer.write_all(b"\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_without_args() {
        assert_eq!(encode_command("PING", &[]), b"*1\r\n$4\r\nPING\r\n");
    }

    #[test]
    fn test_encode_preserves_order() {
        let args = vec![
            Arg::from("key"),
            Arg::from("value"),
            Arg::from("EX"),
            Arg::from(100),
        ];
        let result = encode_command("SET", &args);
        assert_eq!(
            result,
            b"*5\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n$2\r\nEX\r\n$3\r\n100\r\n"
        );
    }

    #[test]
    fn test_encode_binary_argument() {
        let args = vec![Arg::from(vec![b'a', b'\r', b'\n'])];
        let result = encode_command("GET", &args);
        assert_eq!(result, b"*2\r\n$3\r\nGET\r\n$3\r\na\r\n\r\n");
    }

    #[test]
    fn test_write_command_to_writer() {
        let mut out = Vec::new();
        write_command("EXISTS", &[Arg::from("a"), Arg::from("b")], &mut out).unwrap();
        assert_eq!(out, b"*3\r\n$6\r\nEXISTS\r\n$1\r\na\r\n$1\r\nb\r\n");
    }
}
