// crates/locode-cli/src/menu.rs
use std::io::{self, BufRead, Write};

/// What a menu entry does once picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stage,
    Load,
    Close,
}

/// A numbered console menu.
pub struct Menu {
    title: String,
    options: Vec<(String, Action)>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, label: impl Into<String>, action: Action) -> Self {
        self.options.push((label.into(), action));
        self
    }

    /// Shows the menu until a valid choice is made. End of input closes it.
    pub fn choose<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<Action> {
        loop {
            writeln!(out, "\n{}", self.title)?;
            writeln!(out, "{}", "=".repeat(self.title.chars().count()))?;
            for (i, (label, _)) in self.options.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, label)?;
            }
            write!(out, ">> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(Action::Close);
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=self.options.len()).contains(&n) => return Ok(self.options[n - 1].1),
                _ => writeln!(out, "Invalid choice: {}", line.trim())?,
            }
        }
    }
}

/// Asks for a file path on the console. Blank input or end of input gives `None`.
pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    what: &str,
) -> io::Result<Option<String>> {
    write!(out, "Enter path to {what} (blank to exit): ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = line.trim();
    Ok((!path.is_empty()).then(|| path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new("UN/LOCODE Data Processing Menu")
            .option("Stage", Action::Stage)
            .option("Load", Action::Load)
            .option("Exit", Action::Close)
    }

    #[test]
    fn retries_until_valid() {
        let mut input = "9\nabc\n2\n".as_bytes();
        let mut out = Vec::new();
        assert_eq!(menu().choose(&mut input, &mut out).unwrap(), Action::Load);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid choice: 9"));
        assert!(shown.contains("Invalid choice: abc"));
        assert!(shown.contains("3. Exit"));
    }

    #[test]
    fn eof_closes() {
        let mut input = "".as_bytes();
        assert_eq!(menu().choose(&mut input, &mut Vec::new()).unwrap(), Action::Close);
    }

    #[test]
    fn blank_path_is_none() {
        let mut input = "  \n".as_bytes();
        assert_eq!(prompt_path(&mut input, &mut Vec::new(), "config").unwrap(), None);
        let mut input = "cfg.yaml\n".as_bytes();
        assert_eq!(
            prompt_path(&mut input, &mut Vec::new(), "config").unwrap().as_deref(),
            Some("cfg.yaml")
        );
    }
}
