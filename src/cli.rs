/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query text changed
    Input(String),
    /// Pick a suggestion, 1-based as printed
    Select(usize),
    /// Request recommendations for the current query text
    Submit,
    Quit,
    /// A `:` command that was not understood
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        let Some(command) = line.trim_start().strip_prefix(':') else {
            return Command::Input(line.to_string());
        };

        match command.trim() {
            "go" => Command::Submit,
            "q" | "quit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Command::Select(n),
                _ => Command::Unknown(other.to_string()),
            },
        }
    }
}

pub const HELP: &str = "Type a title to see suggestions, :<n> to pick one, :go to get recommendations, :q to quit.";
