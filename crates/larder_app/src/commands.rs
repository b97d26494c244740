use larder_core::{Field, Msg};

/// One parsed line of terminal input. Each command maps onto the form and
/// card actions the update function understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages to feed through the update function, in order.
    Dispatch(Vec<Msg>),
    ShowList,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  add <name> | <ingredients> | <steps> | <image-url>
  edit <id>           load a recipe into the form
  set <field> <text>  change one form field (name, ingredients, steps, image)
  submit              save the form (creates, or updates when editing)
  cancel              clear the form
  delete <id>
  list
  help
  quit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Dispatch(Vec::new());
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "add" => parse_add(rest),
        "edit" => parse_id(rest).map_or_else(unknown_id, |id| {
            Command::Dispatch(vec![Msg::EditClicked { id }])
        }),
        "set" => parse_set(rest),
        "submit" => Command::Dispatch(vec![Msg::SubmitClicked]),
        "cancel" => Command::Dispatch(vec![Msg::CancelClicked]),
        "delete" => parse_id(rest).map_or_else(unknown_id, |id| {
            Command::Dispatch(vec![Msg::DeleteClicked { id }])
        }),
        "list" => Command::ShowList,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(format!("Unknown command '{other}'; try 'help'.")),
    }
}

/// `add` fills all four fields then submits. Missing segments stay empty;
/// no field is validated.
fn parse_add(rest: &str) -> Command {
    let mut segments = rest.split('|').map(str::trim);
    let mut field_msgs: Vec<Msg> = [
        Field::Name,
        Field::Ingredients,
        Field::Steps,
        Field::ImageUrl,
    ]
    .into_iter()
    .map(|field| Msg::FieldChanged {
        field,
        value: segments.next().unwrap_or("").to_string(),
    })
    .collect();
    field_msgs.push(Msg::SubmitClicked);
    Command::Dispatch(field_msgs)
}

fn parse_set(rest: &str) -> Command {
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };
    let field = match name {
        "name" => Field::Name,
        "ingredients" => Field::Ingredients,
        "steps" => Field::Steps,
        "image" => Field::ImageUrl,
        other => {
            return Command::Unknown(format!(
                "Unknown field '{other}'; expected name, ingredients, steps or image."
            ))
        }
    };
    Command::Dispatch(vec![Msg::FieldChanged {
        field,
        value: value.to_string(),
    }])
}

fn parse_id(rest: &str) -> Option<u64> {
    rest.parse().ok()
}

fn unknown_id() -> Command {
    Command::Unknown("Expected a numeric recipe id.".to_string())
}
