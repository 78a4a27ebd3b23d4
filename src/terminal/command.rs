use thiserror::Error;

use crate::model::record_id::RecordId;
use crate::panel::{Entity, EntityField};

/// One line of user input, parsed against the panel's entity.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<E: Entity> {
    New,
    Edit(RecordId),
    Delete(RecordId),
    Set(E::Field, String),
    Save,
    Cancel,
    Filter(Option<E::Filter>),
    Search(String),
    Clear,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{0}` is not a record code")]
    InvalidId(String),
    #[error("unknown field `{given}`, expected one of: {expected}")]
    UnknownField { given: String, expected: String },
}

impl<E: Entity> Command<E> {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "new" => Self::New,
            "edit" => Self::Edit(parse_id("edit", rest)?),
            "delete" => Self::Delete(parse_id("delete", rest)?),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        argument: "a field name",
                    });
                }
                Self::Set(parse_field::<E::Field>(field)?, value.trim().to_owned())
            }
            "save" => Self::Save,
            "cancel" => Self::Cancel,
            "filter" if rest.is_empty() => Self::Filter(None),
            "filter" => Self::Filter(Some(parse_field::<E::Filter>(rest)?)),
            "search" => Self::Search(rest.to_owned()),
            "clear" => Self::Clear,
            "refresh" | "list" => Self::Refresh,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<RecordId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a record code",
        });
    }
    raw.parse::<i64>()
        .map(RecordId)
        .map_err(|_| CommandError::InvalidId(raw.to_owned()))
}

fn parse_field<F: EntityField>(raw: &str) -> Result<F, CommandError> {
    raw.parse::<F>().map_err(|_| CommandError::UnknownField {
        given: raw.to_owned(),
        expected: F::wire_names().join(", "),
    })
}

pub fn help<E: Entity>() -> String {
    format!(
        "Commands:\n\
         \x20 new                     open an empty form\n\
         \x20 edit <code>             open the form for a listed record\n\
         \x20 delete <code>           delete a listed record (asks first)\n\
         \x20 set <field> <value>     change a form field ({fields})\n\
         \x20 save                    submit the form\n\
         \x20 cancel                  close the form and discard it\n\
         \x20 filter [<field>]        choose the search field ({filters})\n\
         \x20 search <text>           search with the chosen field\n\
         \x20 clear                   clear the search\n\
         \x20 refresh                 reload the list\n\
         \x20 quit                    leave",
        fields = E::Field::wire_names().join(", "),
        filters = E::Filter::wire_names().join(", "),
    )
}
