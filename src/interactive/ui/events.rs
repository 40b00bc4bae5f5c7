#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Transcript navigation
    SelectUp,
    SelectDown,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // Terminal events
    Quit,
}
