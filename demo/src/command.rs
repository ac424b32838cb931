use std::str::FromStr;

use patterns_idioms::{BasketError, CarError};
use patterns_observer::ObserverError;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  add                          add a checkbox observing the control checkbox
  remove <id>                  stop checkbox <id> observing the control checkbox
  toggle | check | uncheck     change the control checkbox and notify its observers
  click <id>                   click checkbox <id> directly
  list                         show every checkbox
  car <model> <year> <price>   describe a car
  basket add <name> <price>    put an item in the basket
  basket count | basket total  inspect the basket
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Remove(usize),
    Toggle,
    Set(bool),
    Click(usize),
    List,
    Car { model: String, year: String, price: String },
    BasketAdd { name: String, price: f64 },
    BasketCount,
    BasketTotal,
    Help,
    Quit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command {0:?}, try \"help\"")]
    Unknown(String),
    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("Invalid <{name}> {value:?}")]
    InvalidArgument { name: &'static str, value: String },
    #[error("Unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error("No checkbox with id {0}")]
    NoSuchCheckbox(usize),
    #[error(transparent)]
    Observer(#[from] ObserverError),
    #[error(transparent)]
    Car(#[from] CarError),
    #[error(transparent)]
    Basket(#[from] BasketError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" => no_args(args, Command::Add),
            "remove" => Ok(Command::Remove(single_id(args)?)),
            "toggle" => no_args(args, Command::Toggle),
            "check" => no_args(args, Command::Set(true)),
            "uncheck" => no_args(args, Command::Set(false)),
            "click" => Ok(Command::Click(single_id(args)?)),
            "list" => no_args(args, Command::List),
            // the model may contain spaces, so year and price are taken from the end
            "car" => match args {
                [] => Err(CommandError::MissingArgument("model")),
                [_] => Err(CommandError::MissingArgument("year")),
                [_, _] => Err(CommandError::MissingArgument("price")),
                [model @ .., year, price] => Ok(Command::Car { model: model.join(" "), year: year.to_string(), price: price.to_string() }),
            },
            "basket" => match args {
                ["add", rest @ ..] => match rest {
                    [] => Err(CommandError::MissingArgument("name")),
                    [_] => Err(CommandError::MissingArgument("price")),
                    [name @ .., price] => {
                        let price =
                            price.parse::<f64>().map_err(|_| CommandError::InvalidArgument { name: "price", value: price.to_string() })?;
                        Ok(Command::BasketAdd { name: name.join(" "), price })
                    }
                },
                ["count"] => Ok(Command::BasketCount),
                ["total"] => Ok(Command::BasketTotal),
                [] => Err(CommandError::MissingArgument("add|count|total")),
                [other, ..] => Err(CommandError::Unknown(format!("basket {other}"))),
            },
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn no_args(args: &[&str], command: Command) -> Result<Command, CommandError> {
    match args.first() {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
        None => Ok(command),
    }
}

fn single_id(args: &[&str]) -> Result<usize, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument("id")),
        [id] => id.parse().map_err(|_| CommandError::InvalidArgument { name: "id", value: id.to_string() }),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
    }
}
