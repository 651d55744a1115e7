//! Common utilities shared across CLI commands.

/// Output format for command results.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print an error and exit with status 1.
pub fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Take the value following the flag at `args[*i]`, advancing `i`.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize) -> &'a str {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => value.as_str(),
        None => fail(&format!("{} needs a value", flag)),
    }
}

/// Parse a number, exiting with a message naming `what` when it is not one.
pub fn parse_number(value: &str, what: &str) -> f64 {
    match value.parse::<f64>() {
        Ok(v) => v,
        Err(_) => fail(&format!("invalid {}: '{}'", what, value)),
    }
}

/// Parse a canvas size written as `WIDTHxHEIGHT` or a single edge `N`.
pub fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = match value.split_once(['x', 'X']) {
        Some((w, h)) => (w.trim().parse().ok()?, h.trim().parse().ok()?),
        None => {
            let n = value.trim().parse().ok()?;
            (n, n)
        }
    };
    (w > 0 && h > 0).then_some((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(parse_size("640x480"), Some((640, 480)));
        assert_eq!(parse_size("32X16"), Some((32, 16)));
        assert_eq!(parse_size("500"), Some((500, 500)));
        assert_eq!(parse_size("0x10"), None);
        assert_eq!(parse_size("wide"), None);
        assert_eq!(parse_size("10x"), None);
    }
}
