use crate::quotes::Topic;

/// Side-effecting work requested by the handler and run by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchQuote { topic: Topic },
    CopyQuote,
    OpenShareLink,
    SaveQuote,
    Quit,
}
