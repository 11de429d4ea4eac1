use crate::domain::booking::PassengerId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Select,
    Baggage,
    Insurance,
    Trip,
    Return,
    Confirm,
}

/// One user action read from the command stream.
///
/// `passenger`, `delta` and `value` only carry data for the ops that
/// use them; the other columns stay empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: CommandKind,
    pub passenger: Option<PassengerId>,
    pub delta: Option<i64>,
    pub value: Option<String>,
}
