//! Command line parser
//!
//! Splits a line on whitespace, matches the first word against the verbs the
//! selected structure accepts and converts the remaining words into typed
//! arguments. Verbs are case-insensitive; keys, values and vertex ids keep
//! their case.

use super::{Command, StructureKind};
use crate::engine::errors::CommandError;
use crate::structures::Number;

/// Parse `line` as a command for `kind`
pub fn parse_command(kind: StructureKind, line: &str) -> Result<Command, CommandError> {
    let mut words = Words::new(line);
    let verb = words.verb().ok_or(CommandError::Empty)?;

    let command = match (kind, verb.as_str()) {
        (_, "clear" | "reset") => Command::Clear,

        (StructureKind::LinkedList, "head" | "prepend") => Command::InsertHead(words.number(&verb)?),
        (StructureKind::LinkedList, "tail" | "append") => Command::InsertTail(words.number(&verb)?),
        (StructureKind::LinkedList, "insert") => {
            let value = words.number(&verb)?;
            match words.next() {
                None => Command::InsertTail(value),
                Some(word) if word.eq_ignore_ascii_case("at") => {
                    let position = words.number(&verb)?;
                    // Negative positions clamp to the head
                    Command::InsertAt {
                        value,
                        position: usize::try_from(position.max(0)).unwrap_or(usize::MAX),
                    }
                }
                Some(word) => return Err(CommandError::TrailingArgument(word.to_string())),
            }
        }
        (StructureKind::LinkedList | StructureKind::Tree, "delete" | "remove" | "del") => {
            Command::Delete(words.number(&verb)?)
        }
        (StructureKind::LinkedList | StructureKind::Tree, "search" | "find") => {
            Command::Search(words.number(&verb)?)
        }

        (StructureKind::Stack, "push") => Command::Push(words.number(&verb)?),
        (StructureKind::Stack, "pop") => Command::Pop,
        (StructureKind::Queue, "enqueue" | "push") => Command::Enqueue(words.number(&verb)?),
        (StructureKind::Queue, "dequeue" | "pop") => Command::Dequeue,
        (StructureKind::Stack | StructureKind::Queue, "peek") => Command::Peek,

        (StructureKind::Tree, "insert" | "add") => Command::Insert(words.number(&verb)?),
        (StructureKind::Tree, "inorder" | "in-order") => Command::InOrder,
        (StructureKind::Tree, "preorder" | "pre-order") => Command::PreOrder,
        (StructureKind::Tree, "postorder" | "post-order") => Command::PostOrder,

        (StructureKind::HashTable, "put" | "insert" | "set") => {
            let key = words.word(&verb, "a key and a value")?;
            let value = words.rest();
            if value.is_empty() {
                return Err(CommandError::MissingArgument {
                    verb: verb.clone(),
                    expected: "a key and a value",
                });
            }
            return Ok(Command::Put { key, value });
        }
        (StructureKind::HashTable, "get" | "search" | "find") => {
            Command::Get(words.word(&verb, "a key")?)
        }
        (StructureKind::HashTable, "has" | "contains") => Command::Has(words.word(&verb, "a key")?),
        (StructureKind::HashTable, "delete" | "remove" | "del") => {
            Command::Remove(words.word(&verb, "a key")?)
        }

        (StructureKind::Graph, "vertex" | "add-vertex") => {
            Command::AddVertex(words.word(&verb, "a vertex id")?)
        }
        (StructureKind::Graph, "edge" | "add-edge") => {
            let a = words.word(&verb, "two vertex ids")?;
            let b = words.word(&verb, "two vertex ids")?;
            Command::AddEdge(a, b)
        }
        (StructureKind::Graph, "unvertex" | "remove-vertex") => {
            Command::RemoveVertex(words.word(&verb, "a vertex id")?)
        }
        (StructureKind::Graph, "unedge" | "remove-edge") => {
            let a = words.word(&verb, "two vertex ids")?;
            let b = words.word(&verb, "two vertex ids")?;
            Command::RemoveEdge(a, b)
        }
        (StructureKind::Graph, "dfs") => Command::DepthFirst(words.word(&verb, "a start vertex")?),
        (StructureKind::Graph, "bfs") => {
            Command::BreadthFirst(words.word(&verb, "a start vertex")?)
        }

        (kind, verb) if is_known_verb(verb) => {
            return Err(CommandError::Unsupported {
                verb: verb.to_string(),
                structure: kind.name(),
            })
        }
        (_, verb) => return Err(CommandError::UnknownVerb(verb.to_string())),
    };

    match words.next() {
        None => Ok(command),
        Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
    }
}

fn is_known_verb(verb: &str) -> bool {
    const VERBS: &[&str] = &[
        "head", "prepend", "tail", "append", "insert", "add", "delete", "remove", "del", "search",
        "find", "push", "pop", "enqueue", "dequeue", "peek", "inorder", "in-order", "preorder",
        "pre-order", "postorder", "post-order", "put", "set", "get", "has", "contains", "vertex",
        "add-vertex", "edge", "add-edge", "unvertex", "remove-vertex", "unedge", "remove-edge",
        "dfs", "bfs",
    ];
    VERBS.contains(&verb)
}

/// Whitespace tokenizer over one command line
struct Words<'a> {
    rest: &'a str,
}

impl<'a> Words<'a> {
    fn new(line: &'a str) -> Self {
        Words { rest: line.trim() }
    }

    fn next(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (word, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(word)
    }

    fn verb(&mut self) -> Option<String> {
        self.next().map(str::to_ascii_lowercase)
    }

    fn word(&mut self, verb: &str, expected: &'static str) -> Result<String, CommandError> {
        self.next()
            .map(str::to_string)
            .ok_or_else(|| CommandError::MissingArgument {
                verb: verb.to_string(),
                expected,
            })
    }

    fn number(&mut self, verb: &str) -> Result<Number, CommandError> {
        let word = self.word(verb, "a number")?;
        word.parse::<Number>()
            .map_err(|_| CommandError::InvalidNumber(word))
    }

    /// Everything left on the line, trimmed
    fn rest(&mut self) -> String {
        let rest = self.rest.trim().to_string();
        self.rest = "";
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_insert_variants() {
        let kind = StructureKind::LinkedList;
        assert_eq!(parse_command(kind, "head 5"), Ok(Command::InsertHead(5)));
        assert_eq!(parse_command(kind, "tail -3"), Ok(Command::InsertTail(-3)));
        assert_eq!(parse_command(kind, "insert 9"), Ok(Command::InsertTail(9)));
        assert_eq!(
            parse_command(kind, "INSERT 9 at 2"),
            Ok(Command::InsertAt {
                value: 9,
                position: 2
            })
        );
        assert_eq!(
            parse_command(kind, "insert 9 at -4"),
            Ok(Command::InsertAt {
                value: 9,
                position: 0
            })
        );
    }

    #[test]
    fn test_hash_put_keeps_spaces_in_value() {
        assert_eq!(
            parse_command(StructureKind::HashTable, "put apple red fruit"),
            Ok(Command::Put {
                key: "apple".to_string(),
                value: "red fruit".to_string()
            })
        );
        assert!(matches!(
            parse_command(StructureKind::HashTable, "put apple"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_graph_commands() {
        let kind = StructureKind::Graph;
        assert_eq!(
            parse_command(kind, "edge A B"),
            Ok(Command::AddEdge("A".to_string(), "B".to_string()))
        );
        assert_eq!(
            parse_command(kind, "bfs A"),
            Ok(Command::BreadthFirst("A".to_string()))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_command(StructureKind::Stack, "   "),
            Err(CommandError::Empty)
        );
        assert_eq!(
            parse_command(StructureKind::Stack, "push x"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            parse_command(StructureKind::Stack, "pop 3"),
            Err(CommandError::TrailingArgument("3".to_string()))
        );
        assert_eq!(
            parse_command(StructureKind::Stack, "dfs A"),
            Err(CommandError::Unsupported {
                verb: "dfs".to_string(),
                structure: "stack"
            })
        );
        assert_eq!(
            parse_command(StructureKind::Queue, "jump"),
            Err(CommandError::UnknownVerb("jump".to_string()))
        );
    }

    #[test]
    fn test_structure_kind_names() {
        assert_eq!("bst".parse::<StructureKind>(), Ok(StructureKind::Tree));
        assert_eq!("Hash".parse::<StructureKind>(), Ok(StructureKind::HashTable));
        assert!("heap".parse::<StructureKind>().is_err());
        assert_eq!(StructureKind::Graph.next(), StructureKind::LinkedList);
        assert_eq!(StructureKind::LinkedList.prev(), StructureKind::Graph);
    }
}
