/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Unrecognized or empty input; does nothing.
    Null,
    Exit,
    Clear,
    NewGen,
    Select(String),
    NextGen,
    PrintGen,
    Set { name: String, value: String },
    Print(String),
    Redo,
    Help(Option<String>),
}

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    ClearScreen,
    Exit,
}

impl Reply {
    /// Text to show, empty for the non-text replies.
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) => text,
            Reply::ClearScreen | Reply::Exit => "",
        }
    }
}
