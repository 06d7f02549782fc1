//! Console command parsing

use std::str::FromStr;

use shared::ProductId;
use thiserror::Error;

use crate::catalog::view::{PAGE_SIZE_OPTIONS, SortField};

pub const HELP_TEXT: &str = "\
Commands:
  search <text>      filter titles (empty text clears)
  sort title|price   sort by column; again to flip direction
  size 5|10|20|50    items per page
  page <n>           jump to page
  next | prev        move one page
  show <id>          product details
  edit <id>          edit title, price, description
  new                create a product
  export             write the visible page to CSV
  reload             fetch the catalog again
  help               this text
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Sort(SortField),
    Size(usize),
    Page(usize),
    Next,
    Prev,
    Show(ProductId),
    Edit(ProductId),
    New,
    Export,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid argument for `{command}`: {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "sort" => match SortField::parse(required("sort", rest)?) {
                Some(field @ (SortField::Title | SortField::Price)) => Ok(Self::Sort(field)),
                _ => Err(invalid("sort", rest)),
            },
            "size" => {
                let size = number::<usize>("size", rest)?;
                if PAGE_SIZE_OPTIONS.contains(&size) {
                    Ok(Self::Size(size))
                } else {
                    Err(invalid("size", rest))
                }
            }
            "page" => match number::<usize>("page", rest)? {
                0 => Err(invalid("page", rest)),
                page => Ok(Self::Page(page)),
            },
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Prev),
            "show" => Ok(Self::Show(number("show", rest)?)),
            "edit" | "e" => Ok(Self::Edit(number("edit", rest)?)),
            "new" => Ok(Self::New),
            "export" => Ok(Self::Export),
            "reload" | "r" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(command: &'static str, arg: &'a str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

fn number<T: FromStr>(command: &'static str, arg: &str) -> Result<T, CommandError> {
    required(command, arg)?
        .parse()
        .map_err(|_| invalid(command, arg))
}

fn invalid(command: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}
