//! Line-oriented command language used to drive a headless session.
//!
//! Each non-empty line names one player action. Indices typed by the user are
//! 1-based, matching the `C1`..`C5` camera labels and the slot numbering on
//! screen.

use std::time::Duration;

use hallways_core::{Command, LevelId, Operand, Room, SlotIndex, TransitionId};
use hallways_presentation::{parse_cell, parse_operand_scalar, parse_scalar};

/// Action requested by one script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    /// Submit a command to the world.
    Command(Command),
    /// Print a snapshot of the session.
    Show,
    /// List the level progression.
    Levels,
    /// Stop reading input.
    Quit,
}

/// Failures while reading a script line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ScriptError {
    /// The first word is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(String),
    /// A required argument was not provided.
    #[error("`{command}` expects {argument}")]
    MissingArgument {
        /// Command that was typed.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },
    /// An argument could not be interpreted.
    #[error("`{command}` cannot use `{text}`")]
    InvalidArgument {
        /// Command that was typed.
        command: &'static str,
        /// Offending argument.
        text: String,
    },
}

/// Parses a single line; blank lines and `#` comments yield `None`.
pub(crate) fn parse_line(line: &str) -> Result<Option<Directive>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "level" => Command::ChangeLevel {
            level: LevelId::new(number(&mut words, "level", "a level number")?),
        },
        "reset" => Command::ResetLevel,
        "next" => Command::AdvanceLevel,
        "pause" => Command::Pause,
        "resume" => Command::Resume,
        "toggle" => Command::TogglePause,
        "tick" => Command::Tick {
            dt: Duration::from_millis(number(&mut words, "tick", "milliseconds")?),
        },
        "edge" => Command::TraverseEdge {
            transition: camera(&mut words, "edge")?,
        },
        "cell" => {
            let transition = camera(&mut words, "cell")?;
            Command::EditCell {
                transition,
                value: parse_cell(words.next().unwrap_or_default()),
            }
        }
        "scalar" => Command::SetScalar {
            value: parse_scalar(words.next().unwrap_or_default()),
        },
        "delta" => {
            let text = required(&mut words, "delta", "a room letter")?;
            let room = Room::from_letter(text).ok_or_else(|| ScriptError::InvalidArgument {
                command: "delta",
                text: text.to_owned(),
            })?;
            Command::EditDeltaCell {
                room,
                value: parse_cell(words.next().unwrap_or_default()),
            }
        }
        "operand" => Command::SelectOperand {
            operand: operand(&mut words, "operand")?,
        },
        "operand-scalar" => {
            let operand = operand(&mut words, "operand-scalar")?;
            Command::SetOperandScalar {
                operand,
                value: parse_operand_scalar(words.next().unwrap_or_default()),
            }
        }
        "save" => Command::ArmSave,
        "slot" => {
            let index: usize = number(&mut words, "slot", "a slot number")?;
            let slot = index
                .checked_sub(1)
                .and_then(SlotIndex::new)
                .ok_or_else(|| ScriptError::InvalidArgument {
                    command: "slot",
                    text: index.to_string(),
                })?;
            Command::ClickSlot { slot }
        }
        "animate" => Command::StartReplay,
        "arrive" => Command::WalkerArrived,
        "show" => return Ok(Some(Directive::Show)),
        "levels" => return Ok(Some(Directive::Levels)),
        "quit" | "exit" => return Ok(Some(Directive::Quit)),
        other => return Err(ScriptError::Unknown(other.to_owned())),
    };

    Ok(Some(Directive::Command(command)))
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ScriptError> {
    words
        .next()
        .ok_or(ScriptError::MissingArgument { command, argument })
}

fn number<'a, T: std::str::FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, ScriptError> {
    let text = required(words, command, argument)?;
    text.parse().map_err(|_| ScriptError::InvalidArgument {
        command,
        text: text.to_owned(),
    })
}

fn camera<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<TransitionId, ScriptError> {
    let index: usize = number(words, command, "a camera number")?;
    index
        .checked_sub(1)
        .and_then(TransitionId::from_index)
        .ok_or_else(|| ScriptError::InvalidArgument {
            command,
            text: index.to_string(),
        })
}

fn operand<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<Operand, ScriptError> {
    match required(words, command, "`left` or `right`")? {
        "left" | "a" => Ok(Operand::Left),
        "right" | "b" => Ok(Operand::Right),
        other => Err(ScriptError::InvalidArgument {
            command,
            text: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{parse_line, Directive, ScriptError};
    use hallways_core::{Command, LevelId, Operand, Room, SlotIndex, TransitionId};

    fn command(line: &str) -> Command {
        match parse_line(line) {
            Ok(Some(Directive::Command(command))) => command,
            other => panic!("expected a command from `{line}`, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# walk the loop"), Ok(None));
    }

    #[test]
    fn indices_are_one_based() {
        assert_eq!(
            command("edge 1"),
            Command::TraverseEdge {
                transition: TransitionId::A_TO_B
            }
        );
        assert_eq!(
            command("slot 4"),
            Command::ClickSlot {
                slot: SlotIndex::new(3).expect("slot exists")
            }
        );
        assert!(matches!(
            parse_line("edge 0"),
            Err(ScriptError::InvalidArgument { command: "edge", .. })
        ));
        assert!(matches!(
            parse_line("slot 5"),
            Err(ScriptError::InvalidArgument { command: "slot", .. })
        ));
    }

    #[test]
    fn cell_text_is_sanitized_like_the_display() {
        assert_eq!(
            command("cell 5 oops"),
            Command::EditCell {
                transition: TransitionId::D_TO_A,
                value: 0
            }
        );
        assert_eq!(command("scalar 0"), Command::SetScalar { value: 1 });
        assert_eq!(
            command("operand-scalar right"),
            Command::SetOperandScalar {
                operand: Operand::Right,
                value: 1
            }
        );
        assert_eq!(
            command("delta c -6"),
            Command::EditDeltaCell {
                room: Room::C,
                value: -6
            }
        );
    }

    #[test]
    fn session_commands_map_directly() {
        assert_eq!(
            command("level 7"),
            Command::ChangeLevel {
                level: LevelId::new(7)
            }
        );
        assert_eq!(
            command("tick 250"),
            Command::Tick {
                dt: Duration::from_millis(250)
            }
        );
        assert_eq!(command("next"), Command::AdvanceLevel);
        assert_eq!(command("animate"), Command::StartReplay);
        assert_eq!(parse_line("show"), Ok(Some(Directive::Show)));
        assert_eq!(parse_line("levels"), Ok(Some(Directive::Levels)));
        assert_eq!(parse_line("quit"), Ok(Some(Directive::Quit)));
    }

    #[test]
    fn malformed_lines_are_reported() {
        assert_eq!(
            parse_line("jump"),
            Err(ScriptError::Unknown("jump".to_owned()))
        );
        assert_eq!(
            parse_line("level"),
            Err(ScriptError::MissingArgument {
                command: "level",
                argument: "a level number"
            })
        );
        assert!(matches!(
            parse_line("operand middle"),
            Err(ScriptError::InvalidArgument { command: "operand", .. })
        ));
    }
}
