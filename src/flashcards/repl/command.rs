use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    AddMany,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

/// Keyword table, in menu order.
const COMMANDS: &[(&str, Command)] = &[
    ("add", Command::Add),
    ("add many", Command::AddMany),
    ("remove", Command::Remove),
    ("import", Command::Import),
    ("export", Command::Export),
    ("ask", Command::Ask),
    ("exit", Command::Exit),
    ("log", Command::Log),
    ("hardest card", Command::HardestCard),
    ("reset stats", Command::ResetStats),
];

impl Command {
    /// Exact keyword lookup. Anything not in the table is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(keyword, _)| *keyword == input)
            .map(|(_, command)| *command)
    }

    pub fn keyword(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(keyword, _)| *keyword)
            .unwrap_or_default()
    }

    pub fn all() -> impl Iterator<Item = Command> {
        COMMANDS.iter().map(|(_, command)| *command)
    }

    /// The prompt shown before each command is read.
    pub fn menu() -> String {
        let keywords: Vec<&str> = COMMANDS.iter().map(|(keyword, _)| *keyword).collect();
        format!("Input the action ({}):", keywords.join(", "))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
